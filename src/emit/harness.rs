use indexmap::{IndexMap, IndexSet};

use crate::emit::java::{class_doc, class_sig, header, indent, logger_decl, quote, to_text};
use crate::emit::options::EmitterConfig;
use crate::page::page_model::{DataLiteral, ModuleModel, PageModel};
use crate::project::project_model::Project;

/// File name of the generated test harness.
pub const TESTS: &str = "Tests";

const HARNESS_IMPORTS: &[&str] = &[
    "import com.google.testing.util.Tag;",
    "",
    "import junit.framework.TestCase;",
    "",
    "import org.openqa.selenium.WebDriver;",
    "import org.openqa.selenium.remote.DesiredCapabilities;",
    "import org.openqa.selenium.remote.RemoteWebDriver;",
    "",
    "import java.net.URL;",
    "import java.util.HashMap;",
    "import java.util.logging.Logger;",
];

/// Render the test harness: one test method per module of every page.
pub fn render_harness(
    pages: &IndexMap<String, PageModel>,
    project: &Project,
    config: &EmitterConfig,
) -> String {
    let package = config
        .test_package
        .as_deref()
        .unwrap_or(project.package.as_str());

    let mut lines = header(project, config, package);
    lines.extend(HARNESS_IMPORTS.iter().map(|s| s.to_string()));
    lines.push(String::new());
    for page in pages.keys() {
        lines.push(format!("import {}.{};", project.package, page));
    }
    lines.push(String::new());

    lines.extend(class_doc("The test file.", &project.author));
    lines.push(class_sig(TESTS, Some("TestCase")));

    let mut members = logger_decl(TESTS);
    members.push("protected WebDriver driver;".to_string());
    members.push(String::new());
    members.extend(
        [
            "@Override",
            "public void setUp() throws Exception {",
            "  super.setUp();",
        ]
        .map(String::from),
    );
    members.push(format!(
        "  driver = new RemoteWebDriver(new URL({}),",
        quote(&config.remote_driver_url)
    ));
    members.extend(
        [
            "      DesiredCapabilities.chrome());",
            "}",
            "",
            "@Override",
            "public void tearDown() throws Exception {",
            "  driver.quit();",
            "  super.tearDown();",
            "}",
        ]
        .map(String::from),
    );

    let mut test_names = IndexSet::new();
    for (page_name, page) in pages {
        for (module_name, module) in &page.modules {
            let test_name = claim_test_name(&mut test_names, module_name);
            members.push(String::new());
            members.extend(render_test_method(
                &test_name, page_name, module, &config.test_tag,
            ));
        }
    }

    lines.extend(indent(2, &members));
    lines.push("}".to_string());
    to_text(&lines)
}

fn claim_test_name(taken: &mut IndexSet<String>, base: &str) -> String {
    let mut candidate = base.to_string();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}{}", base, n);
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

/// Render one test method. Field-map arguments become `dataN` locals declared
/// before the calls, numbered from 0 in each method.
pub fn render_test_method(
    test_name: &str,
    page_name: &str,
    module: &ModuleModel,
    tag: &str,
) -> Vec<String> {
    let mut declarations = Vec::new();
    let mut module_args = Vec::new();
    let mut calls = Vec::new();
    let mut variable_index = 0;

    for (i, step) in module.steps.iter().enumerate() {
        let arg = match &step.data {
            Some(DataLiteral::Text(literal)) => literal.clone(),
            Some(DataLiteral::Fields(fields)) => {
                let var = format!("data{}", variable_index);
                variable_index += 1;
                declarations.push(format!(
                    "HashMap<String, String> {} = new HashMap<String, String>();",
                    var
                ));
                for (name, value) in fields {
                    declarations.push(format!("{}.put({}, {});", var, quote(name), value));
                }
                var
            }
            None => String::new(),
        };
        if !arg.is_empty() {
            module_args.push(arg.clone());
        }
        let prefix = if i == 0 { "page" } else { "    " };
        calls.push(format!("{}.{}({})", prefix, step.method_name, arg));
    }
    if let Some(last) = calls.last_mut() {
        last.push(';');
    }

    let mut body = vec![
        format!("driver.get({});", quote(&module.start_url)),
        format!("{} page = new {}(driver);", page_name, page_name),
    ];
    body.extend(declarations);
    if module.is_module {
        body.push(format!(
            "page.{}({});",
            module.method_name,
            module_args.join(", ")
        ));
    } else {
        body.extend(calls);
    }

    let mut lines = vec![
        format!("@Tag({})", quote(tag)),
        format!("public void {}() {{", test_name),
    ];
    lines.extend(indent(2, &body));
    lines.push("}".to_string());
    lines
}
