use serde::Serialize;

use crate::project::project_model::ActionKind;

/// Identity of a generated action method within a page.
///
/// Two steps doing the same action on the same selector variable share one
/// method. Selector variables are numbered across the whole run, so equal
/// signatures can only come from the same page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodSignature {
    pub action: ActionKind,
    pub selector_var: String,
}

impl MethodSignature {
    pub fn new(action: ActionKind, selector_var: impl Into<String>) -> Self {
        Self {
            action,
            selector_var: selector_var.into(),
        }
    }

    /// Stable textual id, e.g. `click:selector0`.
    pub fn id(&self) -> String {
        format!("{}:{}", self.action, self.selector_var)
    }
}

/// Strip every non-word character (anything outside `[A-Za-z0-9_]`).
pub fn strip_non_word(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Dedup key of a selector value. Selectors differing only in punctuation
/// share a key and therefore one declaration.
pub fn selector_key(selector: &str) -> String {
    strip_non_word(selector)
}

/// Name of the `n`-th selector variable of the run.
pub fn selector_var(index: usize) -> String {
    format!("selector{}", index)
}

/// Capitalize a label after stripping non-word characters. Labels that end up
/// empty or longer than `limit` are dropped.
pub fn capitalize_label(raw: &str, limit: usize) -> String {
    let stripped = strip_non_word(raw);
    if stripped.is_empty() || stripped.len() > limit {
        return String::new();
    }
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower camel case Java identifier for a recorded step or test name.
///
/// `Click-Login button` → `clickLoginButton`. Names starting with a digit get
/// a `step` prefix, empty names become `step`.
pub fn method_name(name: &str) -> String {
    let mut out = String::new();
    for (i, word) in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }

    if out.is_empty() {
        return "step".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "step");
    }
    out
}
