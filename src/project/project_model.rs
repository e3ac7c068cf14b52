use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Recorded project input
// ============================================================================

/// A recorded project: every test plus the project-wide settings the
/// generated suite is built from.
///
/// Loaded wholesale by the CLI from JSON or YAML and never mutated during a
/// generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name, embedded in the debugging hint of the base class
    pub name: String,

    /// Java package of the generated classes
    pub package: String,

    /// Author line for the generated class docs
    #[serde(default)]
    pub author: String,

    /// Seed URL pattern → page name mapping, in priority order
    #[serde(default)]
    pub page_map: IndexMap<String, String>,

    /// Recorded tests, in generation order
    #[serde(default)]
    pub tests: Vec<Test>,
}

/// One recorded test with its script and side tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: String,

    /// Display name; becomes the module / test method name
    pub name: String,

    /// URL the recording started from
    pub start_url: String,

    /// Raw script text, one command per line
    #[serde(default)]
    pub script: String,

    /// Per-test data dictionary (variable name → value)
    #[serde(default)]
    pub data: IndexMap<String, DataValue>,

    /// Step metadata keyed by step id
    #[serde(default)]
    pub steps: IndexMap<String, StepInfo>,

    /// Element metadata keyed by element id
    #[serde(default)]
    pub elements: IndexMap<String, ElementInfo>,
}

/// A value in a data dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    /// Field → expected value, used by verify steps
    Fields(IndexMap<String, Scalar>),
}

/// A single recorded value: checkbox states and option indexes are recorded
/// as booleans and numbers, everything else as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    /// Text form the generated code compares against.
    pub fn render(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Flag(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl DataValue {
    /// Scalar rendering of the value, `None` for field maps.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            DataValue::Text(s) => Some(s.clone()),
            DataValue::Number(n) => Some(n.to_string()),
            DataValue::Flag(b) => Some(b.to_string()),
            DataValue::Fields(_) => None,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            DataValue::Fields(_) => "field map",
            _ => "scalar",
        }
    }
}

// ============================================================================
// Step and element side tables
// ============================================================================

/// Recorded action keyword of a step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Click,
    Type,
    Change,
    Verify,
    VerifyNot,
    Submit,
    Select,
    /// Any other recorded keyword, kept verbatim
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Click => "click",
            ActionKind::Type => "type",
            ActionKind::Change => "change",
            ActionKind::Verify => "verify",
            ActionKind::VerifyNot => "verifyNot",
            ActionKind::Submit => "submit",
            ActionKind::Select => "select",
            ActionKind::Other(s) => s,
        }
    }

    /// Whether the generated method takes a field map instead of a string.
    pub fn takes_fields(&self) -> bool {
        matches!(self, ActionKind::Verify)
    }

    /// Whether the generated method takes a `String data` parameter.
    pub fn takes_text(&self) -> bool {
        matches!(
            self,
            ActionKind::Type | ActionKind::Change | ActionKind::Select | ActionKind::VerifyNot
        )
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "click" => ActionKind::Click,
            "type" => ActionKind::Type,
            "change" => ActionKind::Change,
            "verify" => ActionKind::Verify,
            "verifyNot" => ActionKind::VerifyNot,
            "submit" => ActionKind::Submit,
            "select" => ActionKind::Select,
            _ => ActionKind::Other(s),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one recorded step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub action: ActionKind,

    /// Element the step acted on
    pub elem_id: String,

    /// Data dictionary variable holding the step's input, if any
    #[serde(default)]
    pub var_name: Option<String>,

    /// Recorded step name; the generated method name derives from it
    pub step_name: String,

    #[serde(default = "default_tag_name")]
    pub tag_name: String,
}

fn default_tag_name() -> String {
    "element".to_string()
}

/// Metadata for one recorded element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Candidate XPath selectors, the first one is authoritative
    pub selectors: Vec<String>,

    #[serde(default)]
    pub descriptor: ElementDescriptor,
}

impl ElementInfo {
    pub fn primary_selector(&self) -> Option<&str> {
        self.selectors.first().map(String::as_str)
    }
}

/// Recorded description of an element, used to build verification maps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementDescriptor {
    #[serde(default)]
    pub tag_name: String,

    #[serde(default)]
    pub element_text: Option<DescriptorValue>,

    #[serde(default)]
    pub attributes: IndexMap<String, DescriptorValue>,
}

/// A recorded attribute value and whether verification should check it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptorValue {
    pub value: Scalar,

    #[serde(default)]
    pub verify: bool,
}

impl ElementDescriptor {
    /// Fields flagged for verification: element text first (as
    /// `elementText`), then attributes in recorded order.
    pub fn fields_to_verify(&self) -> IndexMap<String, Scalar> {
        let mut fields = IndexMap::new();
        if let Some(text) = self.element_text.as_ref().filter(|t| t.verify) {
            fields.insert("elementText".to_string(), text.value.clone());
        }
        for (name, attr) in &self.attributes {
            if attr.verify {
                fields.insert(name.clone(), attr.value.clone());
            }
        }
        fields
    }
}
