use crate::emit::java::{
    class_doc, class_sig, escape_java, header, indent, java_doc, logger_decl, to_text,
    PAGE_IMPORTS,
};
use crate::emit::options::EmitterConfig;
use crate::page::page_model::{DataLiteral, ModuleStep, PageModel};
use crate::project::project_model::{ActionKind, Project};

// ============================================================================
// Action methods
// ============================================================================

/// Everything needed to render one action method.
#[derive(Debug, Clone)]
pub struct ActionMethod<'a> {
    pub step_id: &'a str,
    pub method_name: &'a str,
    pub action: &'a ActionKind,
    pub tag_name: &'a str,
    pub selector_var: &'a str,
    pub return_page: &'a str,
    pub settle_delay_ms: u64,
}

/// Parameter declaration of an action method, if it takes one.
pub fn data_param(action: &ActionKind) -> Option<&'static str> {
    if action.takes_fields() {
        Some("HashMap<String, String> data")
    } else if action.takes_text() {
        Some("String data")
    } else {
        None
    }
}

/// Element lookup block. `verifyNot` inverts it: finding the element is the
/// failure.
fn lookup_block(selector_var: &str, action: &ActionKind) -> Vec<String> {
    let wait = vec![
        "element = wait.until(".to_string(),
        format!("    waitAndGetElement(By.xpath({})));", selector_var),
    ];
    if *action != ActionKind::VerifyNot {
        return wait;
    }

    let mut block = vec!["Boolean isThrow = true;".to_string(), "try {".to_string()];
    block.extend(indent(2, &wait));
    block.extend(
        [
            "} catch (Exception e) {",
            "  isThrow = false;",
            "}",
            "if (isThrow) {",
            "  throw new CustomException(\"Element exists error.\");",
            "}",
        ]
        .map(String::from),
    );
    block
}

fn command_block(action: &ActionKind) -> Vec<&'static str> {
    match action {
        ActionKind::Click => vec!["element.click();"],
        ActionKind::Type | ActionKind::Change => vec!["element.clear();", "element.sendKeys(data);"],
        ActionKind::Verify => vec!["verifyElement(element, data);"],
        ActionKind::Submit => vec!["element.submit();"],
        ActionKind::Select => vec!["selectOption(element, data);"],
        ActionKind::VerifyNot | ActionKind::Other(_) => vec![],
    }
}

/// Render an action method, indented for a class body.
pub fn render_action_method(method: &ActionMethod<'_>) -> String {
    let mut lines = java_doc(&[
        format!(
            "Performs a {} on a {} element.",
            method.action, method.tag_name
        ),
        String::new(),
        format!("@return Instance of {}", method.return_page),
    ]);
    lines.push(format!(
        "public {} {}({}) {{",
        method.return_page,
        method.method_name,
        data_param(method.action).unwrap_or("")
    ));

    let mut body = vec![
        format!(
            "logger.log(Level.INFO, \"{} started.\");",
            method.method_name
        ),
        format!("logDebugInfo(\"{}\");", escape_java(method.step_id)),
        format!("sleep({});", method.settle_delay_ms),
    ];
    body.extend(lookup_block(method.selector_var, method.action));
    body.extend(command_block(method.action).into_iter().map(String::from));
    body.push(format!("return new {}(driver);", method.return_page));

    lines.extend(indent(2, &body));
    lines.push("}".to_string());
    to_text(&indent(2, &lines))
}

// ============================================================================
// Module methods
// ============================================================================

/// Render the composite method of a module: one parameter per step carrying
/// data, and a chain of the step methods in recorded order.
pub fn render_module_method(module_name: &str, steps: &[ModuleStep], return_page: &str) -> String {
    let mut params = Vec::new();
    let mut chain = Vec::new();
    let mut index = 0;

    for (i, step) in steps.iter().enumerate() {
        let arg = match &step.data {
            Some(data) => {
                let var = format!("data{}", index);
                index += 1;
                let ty = match data {
                    DataLiteral::Text(_) => "String",
                    DataLiteral::Fields(_) => "HashMap<String, String>",
                };
                params.push(format!("{} {}", ty, var));
                var
            }
            None => String::new(),
        };
        let prefix = if i == 0 { "return this" } else { "    " };
        chain.push(format!("{}.{}({})", prefix, step.method_name, arg));
    }

    match chain.last_mut() {
        Some(last) => last.push(';'),
        None => chain.push("return this;".to_string()),
    }

    let mut lines = java_doc(&[
        format!("Performs a sequence of actions for {}.", module_name),
        String::new(),
        format!("@return Instance of {}", return_page),
    ]);
    lines.push(format!(
        "public {} {}({}) {{",
        return_page,
        module_name,
        params.join(", ")
    ));
    let mut body = vec![format!(
        "logger.log(Level.INFO, \"{} started.\");",
        module_name
    )];
    body.extend(chain);
    lines.extend(indent(2, &body));
    lines.push("}".to_string());
    to_text(&indent(2, &lines))
}

// ============================================================================
// Page classes
// ============================================================================

/// Render the complete source of a page class.
pub fn render_page(page: &PageModel, project: &Project, config: &EmitterConfig) -> String {
    let mut lines = header(project, config, &project.package);
    lines.extend(PAGE_IMPORTS.iter().map(|s| s.to_string()));
    lines.push(String::new());

    lines.push(format!("import {}.BasePage;", project.package));
    for import in &page.custom_imports {
        lines.push(format!("import {}.{};", project.package, import));
    }
    lines.push(String::new());

    lines.extend(class_doc(
        &format!(
            "The {} class which contains its locators and actions.",
            page.name
        ),
        &project.author,
    ));
    lines.push(class_sig(&page.name, Some("BasePage")));
    lines.extend(indent(2, &logger_decl(&page.name)));
    lines.push(String::new());

    if !page.selectors.is_empty() {
        for decl in page.selectors.values() {
            lines.extend(indent(
                2,
                &[
                    format!("private static final String {} =", decl.var_name),
                    format!("    \"{}\";", escape_java(&decl.value)),
                ],
            ));
        }
        lines.push(String::new());
    }

    lines.extend(indent(
        2,
        &[
            format!("public {}(WebDriver driver) {{", page.name),
            "  super(driver);".to_string(),
            "}".to_string(),
        ],
    ));

    let mut text = to_text(&lines);
    text.push_str(&page.body);
    text.push_str("}\n");
    text
}
