pub mod harness;
pub mod java;
pub mod options;
pub mod page_class;
pub mod suite;
pub mod support;
