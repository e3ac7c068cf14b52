use thiserror::Error;

/// Fatal errors of a generation run.
///
/// Generated files reference each other (shared base class, page imports),
/// so any of these aborts the whole run and no file is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// A script line names a step id absent from the step table
    #[error("test '{test}' references unknown step '{step_id}'")]
    MissingStep { test: String, step_id: String },

    /// A step names an element id absent from the element table
    #[error("step '{step_id}' references unknown element '{elem_id}'")]
    MissingElement { step_id: String, elem_id: String },

    /// An element was recorded without any candidate selector
    #[error("element '{elem_id}' has no selectors")]
    EmptySelectors { elem_id: String },

    /// Two tests define the same key with different contents
    #[error("{table} entry '{key}' differs between tests '{first}' and '{second}'")]
    ConflictingDefinition {
        table: &'static str,
        key: String,
        first: String,
        second: String,
    },

    /// A data value has the wrong shape for the action using it
    #[error("step '{step_id}' expects a {expected} for variable '{var_name}', found a {found}")]
    DataShape {
        step_id: String,
        var_name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Two tests starting on the same page share a name
    #[error("module '{module}' is already defined on page '{page}'")]
    DuplicateModule { module: String, page: String },
}
