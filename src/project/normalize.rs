use indexmap::IndexMap;
use tracing::debug;

use crate::compiler::error::GenerationError;
use crate::project::project_model::{DataValue, ElementInfo, Project, StepInfo};

// ============================================================================
// Project normalization
// ============================================================================

/// One test script selected for interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptEntry {
    pub test_id: String,
    pub name: String,
    pub start_url: String,
    pub script: String,
}

/// Project-level view of all recorded tests.
///
/// Scripts keep their recorded order; the side tables of every test are
/// merged into single tables shared by the whole run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedProject {
    pub scripts: Vec<ScriptEntry>,
    pub data: IndexMap<String, DataValue>,
    pub steps: IndexMap<String, StepInfo>,
    pub elements: IndexMap<String, ElementInfo>,
    pub url_page_map: IndexMap<String, String>,
}

/// Merge the tests of a project into one normalized view.
///
/// Tests with a blank script are skipped. A key defined by two tests must
/// carry the same value in both, otherwise the project is inconsistent and a
/// `ConflictingDefinition` error names the table, the key and both tests.
pub fn normalize(project: &Project) -> Result<NormalizedProject, GenerationError> {
    let mut normalized = NormalizedProject {
        url_page_map: project.page_map.clone(),
        ..Default::default()
    };

    let mut data_owners = IndexMap::new();
    let mut step_owners = IndexMap::new();
    let mut element_owners = IndexMap::new();

    for test in &project.tests {
        if test.script.trim().is_empty() {
            debug!(test = %test.id, "skipping test with empty script");
            continue;
        }

        normalized.scripts.push(ScriptEntry {
            test_id: test.id.clone(),
            name: test.name.clone(),
            start_url: test.start_url.clone(),
            script: test.script.clone(),
        });

        merge_table("data", &test.id, &test.data, &mut normalized.data, &mut data_owners)?;
        merge_table("step", &test.id, &test.steps, &mut normalized.steps, &mut step_owners)?;
        merge_table(
            "element",
            &test.id,
            &test.elements,
            &mut normalized.elements,
            &mut element_owners,
        )?;
    }

    Ok(normalized)
}

fn merge_table<V: Clone + PartialEq>(
    table: &'static str,
    test_id: &str,
    source: &IndexMap<String, V>,
    merged: &mut IndexMap<String, V>,
    owners: &mut IndexMap<String, String>,
) -> Result<(), GenerationError> {
    for (key, value) in source {
        match merged.get(key) {
            Some(existing) if existing != value => {
                return Err(GenerationError::ConflictingDefinition {
                    table,
                    key: key.clone(),
                    first: owners.get(key).cloned().unwrap_or_default(),
                    second: test_id.to_string(),
                });
            }
            Some(_) => {}
            None => {
                merged.insert(key.clone(), value.clone());
                owners.insert(key.clone(), test_id.to_string());
            }
        }
    }
    Ok(())
}
