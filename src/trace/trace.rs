use serde::Serialize;

/// What happened at a point of the generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// A page model was created (seed map or minted by routing)
    PageRegistered,
    /// Interpretation moved to another page after a redirect
    PageSwitched,
    SelectorDeclared,
    MethodSynthesized,
    /// A step reused an existing method with the same signature
    MethodReused,
    ModuleRecorded,
}

/// One generation trace record.
///
/// Events are numbered in emission order rather than timestamped so that two
/// runs over the same project produce identical traces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    pub seq: u64,
    pub kind: TraceKind,
    pub page: String,

    pub test: Option<String>,
    pub step_id: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn new(seq: u64, kind: TraceKind, page: &str) -> Self {
        Self {
            seq,
            kind,
            page: page.to_string(),
            test: None,
            step_id: None,
            detail: None,
        }
    }

    pub fn with_test(mut self, test: impl ToString) -> Self {
        self.test = Some(test.to_string());
        self
    }

    pub fn with_step(mut self, step_id: impl ToString) -> Self {
        self.step_id = Some(step_id.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
