use crate::emit::options::EmitterConfig;
use crate::project::project_model::Project;

// ============================================================================
// Java source helpers
// ============================================================================

/// WebDriver imports shared by the base class and every page class.
pub const PAGE_IMPORTS: &[&str] = &[
    "import com.google.common.base.Function;",
    "import org.openqa.selenium.By;",
    "import org.openqa.selenium.WebDriver;",
    "import org.openqa.selenium.WebElement;",
    "import org.openqa.selenium.support.ui.WebDriverWait;",
    "import java.lang.Exception;",
    "import java.lang.StackTraceElement;",
    "import java.lang.Thread;",
    "import java.util.HashMap;",
    "import java.util.List;",
    "import java.util.concurrent.TimeUnit;",
    "import java.util.logging.Level;",
    "import java.util.logging.Logger;",
];

/// Escape a value for use inside a Java string literal.
pub fn escape_java(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Java string literal for `s`, quotes included.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_java(s))
}

/// Prefix every non-empty line with `num` spaces.
pub fn indent<S: AsRef<str>>(num: usize, lines: &[S]) -> Vec<String> {
    let pad = " ".repeat(num);
    lines
        .iter()
        .map(|l| {
            let l = l.as_ref();
            if l.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, l)
            }
        })
        .collect()
}

/// Javadoc block for the given content lines.
pub fn java_doc<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut doc = vec!["/**".to_string()];
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            doc.push(" *".to_string());
        } else {
            doc.push(format!(" * {}", line));
        }
    }
    doc.push(" */".to_string());
    doc
}

/// Class doc with the project author.
pub fn class_doc(description: &str, author: &str) -> Vec<String> {
    if author.is_empty() {
        return java_doc(&[description]);
    }
    java_doc(&[description, "", &format!("@author {}", author)])
}

/// Copyright line and package declaration.
pub fn header(project: &Project, config: &EmitterConfig, package: &str) -> Vec<String> {
    let holder = config
        .copyright_holder
        .as_deref()
        .filter(|h| !h.is_empty())
        .or(Some(project.author.as_str()).filter(|a| !a.is_empty()))
        .unwrap_or(project.name.as_str());
    vec![
        format!("// Copyright {}. All Rights Reserved.", holder),
        String::new(),
        format!("package {};", package),
        String::new(),
    ]
}

pub fn class_sig(name: &str, extends: Option<&str>) -> String {
    match extends {
        Some(parent) => format!("public class {} extends {} {{", name, parent),
        None => format!("public class {} {{", name),
    }
}

/// Static logger field of a class.
pub fn logger_decl(class_name: &str) -> Vec<String> {
    vec![
        "private static final Logger logger =".to_string(),
        format!("    Logger.getLogger({}.class.getName());", class_name),
    ]
}

/// Join lines into file text ending with a newline.
pub fn to_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
