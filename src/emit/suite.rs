use indexmap::IndexMap;
use serde::Serialize;
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::compiler::context::CompiledProject;
use crate::emit::harness::{render_harness, TESTS};
use crate::emit::options::EmitterConfig;
use crate::emit::page_class::render_page;
use crate::emit::support::{render_base_page, render_exception, BASE_PAGE, CUSTOM_EXCEPTION};
use crate::project::project_model::Project;

/// The generated sources of one run: logical file name → Java text.
///
/// Files are ordered: page classes in page order, then the base class, the
/// exception type and the test harness last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSuite {
    pub files: IndexMap<String, String>,
}

impl GeneratedSuite {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// SHA-1 of every file, in file order.
    pub fn fingerprints(&self) -> IndexMap<String, String> {
        self.files
            .iter()
            .map(|(name, text)| (name.clone(), fingerprint(text)))
            .collect()
    }
}

/// Hex SHA-1 of a generated file.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Serialize every page of a compiled project plus the fixed auxiliary files.
pub fn render_suite(
    compiled: &CompiledProject,
    project: &Project,
    config: &EmitterConfig,
) -> GeneratedSuite {
    let mut files = IndexMap::new();

    for (name, page) in &compiled.pages {
        debug!(page = %name, selectors = page.selectors.len(), "rendering page class");
        files.insert(name.clone(), render_page(page, project, config));
    }

    files.insert(BASE_PAGE.to_string(), render_base_page(project, config));
    files.insert(CUSTOM_EXCEPTION.to_string(), render_exception(project, config));
    files.insert(
        TESTS.to_string(),
        render_harness(&compiled.pages, project, config),
    );

    GeneratedSuite { files }
}
