use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::page::identity::MethodSignature;

// ============================================================================
// Page-class intermediate model
// ============================================================================

/// A declared selector constant of a page class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorDecl {
    pub var_name: String,

    /// Raw selector value, as recorded
    pub value: String,
}

/// Argument passed to a generated method, already rendered as Java source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DataLiteral {
    /// A quoted string literal, e.g. `"alice"`
    Text(String),

    /// Field → quoted literal, materialized as a `HashMap<String, String>`
    Fields(IndexMap<String, String>),
}

/// A step's reference to the action method implementing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodRef {
    pub signature: MethodSignature,
    pub method_name: String,
    pub data: Option<DataLiteral>,
}

/// One call in a module's chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleStep {
    /// Recorded step name
    pub original_name: String,

    /// Generated method the step resolves to
    pub method_name: String,

    pub data: Option<DataLiteral>,
}

/// A recorded test attached to the page it starts on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleModel {
    /// Name of the composite method on the start page
    pub method_name: String,

    /// Chained calls, in execution order
    pub steps: Vec<ModuleStep>,

    /// Exposed as one composite method on the page
    pub is_module: bool,

    pub start_url: String,
}

/// Accumulator for one generated page class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub name: String,

    /// Dedup key → declaration, in declaration order
    pub selectors: IndexMap<String, SelectorDecl>,

    /// Recorded step name → method reference
    pub methods: IndexMap<String, MethodRef>,

    /// Module name → module, in registration order
    pub modules: IndexMap<String, ModuleModel>,

    /// Other pages this class returns instances of
    pub custom_imports: IndexSet<String>,

    /// Generated method text following the constructor
    pub body: String,

    method_names: IndexSet<String>,
}

impl PageModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selectors: IndexMap::new(),
            methods: IndexMap::new(),
            modules: IndexMap::new(),
            custom_imports: IndexSet::new(),
            body: String::new(),
            method_names: IndexSet::new(),
        }
    }

    /// Variable declared for a selector dedup key, if any.
    pub fn selector_var(&self, key: &str) -> Option<&str> {
        self.selectors.get(key).map(|d| d.var_name.as_str())
    }

    pub fn declare_selector(&mut self, key: String, var_name: String, value: String) {
        self.selectors.insert(key, SelectorDecl { var_name, value });
    }

    /// Import another page class. Self-imports are ignored.
    pub fn add_import(&mut self, page_name: &str) {
        if page_name != self.name {
            self.custom_imports.insert(page_name.to_string());
        }
    }

    /// Append a rendered method to the class body.
    pub fn append_method(&mut self, text: &str) {
        self.body.push('\n');
        self.body.push_str(text);
    }

    /// Claim a method name unique within this page: `base`, then `base2`,
    /// `base3`, …
    pub fn claim_method_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 2;
        while self.method_names.contains(&candidate) {
            candidate = format!("{}{}", base, n);
            n += 1;
        }
        self.method_names.insert(candidate.clone());
        candidate
    }

    /// Register a module. Returns `false` if the name is already taken.
    #[must_use]
    pub fn register_module(&mut self, name: &str, module: ModuleModel) -> bool {
        if self.modules.contains_key(name) {
            return false;
        }
        self.modules.insert(name.to_string(), module);
        true
    }

    /// Number of action methods generated for this page.
    pub fn method_count(&self) -> usize {
        self.methods
            .values()
            .map(|m| &m.signature)
            .collect::<IndexSet<_>>()
            .len()
    }
}
