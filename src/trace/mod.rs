#[allow(clippy::module_inception)]
pub mod trace;
pub mod logger;
