use crate::{
    compiler::{error::GenerationError, interpreter::compile},
    emit::{
        options::EmitterConfig,
        suite::{GeneratedSuite, render_suite},
    },
    project::project_model::Project,
};

pub mod cli;
pub mod compiler;
pub mod emit;
pub mod page;
pub mod project;
pub mod script;
pub mod trace;

/// Compile a recorded project into its generated sources.
///
/// Pure and deterministic: the same project and config always yield the same
/// files, byte for byte. Any integrity or data-shape error aborts the run
/// without output.
pub fn generate(project: &Project, config: &EmitterConfig) -> Result<GeneratedSuite, GenerationError> {
    let compiled = compile(project, config)?;
    Ok(render_suite(&compiled, project, config))
}
