// ============================================================================
// Recorded script lexer
// ============================================================================
//
// A recorded script is plain text, one command per line:
//
//   click(getElem("step-1"));
//   type(getElem("step-2"), ContentMap["user"]);
//   redirectTo("http://www.example.com/home");
//
// Lines carrying a `getElem("<step id>")` marker are steps, lines starting
// with `redirectTo(` are navigations, everything else is ignored.

/// Keyword that starts a navigation line.
pub const REDIRECT_TO: &str = "redirectTo";

const STEP_MARKER: &str = "getElem(";

/// A single lexed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    /// A recorded action on an element
    Step { keyword: String, step_id: String },

    /// The browser moved to a new URL
    Redirect { url: String },

    Other,
}

/// A script lexed once, ready for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScript {
    pub lines: Vec<ScriptLine>,

    /// The script is tagged `@type module` and becomes a composite method
    pub is_module: bool,
}

impl ParsedScript {
    pub fn parse(script: &str) -> Self {
        Self {
            lines: script.lines().map(parse_line).collect(),
            is_module: is_module(script),
        }
    }

    pub fn step_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, ScriptLine::Step { .. }))
            .count()
    }
}

/// Lex one script line.
pub fn parse_line(line: &str) -> ScriptLine {
    let trimmed = line.trim();

    if let Some(step_id) = step_id(trimmed) {
        let keyword = trimmed.split('(').next().unwrap_or("").trim().to_string();
        return ScriptLine::Step { keyword, step_id };
    }

    if let Some(rest) = trimmed.strip_prefix(REDIRECT_TO) {
        if rest.trim_start().starts_with('(') {
            if let Some(url) = first_quoted(rest) {
                return ScriptLine::Redirect { url: url.to_string() };
            }
        }
    }

    ScriptLine::Other
}

/// Whether the script declares itself a module.
pub fn is_module(script: &str) -> bool {
    script.contains("@type module") || script.contains("@type Module")
}

/// Step id inside the `getElem("...")` marker, if present and non-empty.
fn step_id(line: &str) -> Option<String> {
    let start = line.find(STEP_MARKER)? + STEP_MARKER.len();
    first_quoted(&line[start..])
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Content of the first single- or double-quoted string in `s`.
fn first_quoted(s: &str) -> Option<&str> {
    let open = s.find(['"', '\''])?;
    let quote = s[open..].chars().next()?;
    let body = &s[open + 1..];
    let close = body.find(quote)?;
    Some(&body[..close])
}

// ============================================================================
// Redirect lookahead
// ============================================================================

/// For each line index, the index of the last redirect found after it and
/// before the next step (or the end of the script).
///
/// One backward pass: walking from the end, the first redirect seen after a
/// step boundary is the last redirect of that segment.
pub fn redirect_lookahead(lines: &[ScriptLine]) -> Vec<Option<usize>> {
    let mut table = vec![None; lines.len()];
    let mut pending = None;

    for (i, line) in lines.iter().enumerate().rev() {
        table[i] = pending;
        match line {
            ScriptLine::Step { .. } => pending = None,
            ScriptLine::Redirect { .. } => {
                if pending.is_none() {
                    pending = Some(i);
                }
            }
            ScriptLine::Other => {}
        }
    }

    table
}
