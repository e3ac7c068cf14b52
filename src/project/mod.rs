pub mod normalize;
pub mod project_model;
