use crate::emit::java::{
    class_doc, class_sig, escape_java, header, indent, logger_decl, to_text, PAGE_IMPORTS,
};
use crate::emit::options::EmitterConfig;
use crate::project::project_model::Project;

/// File name of the shared base class.
pub const BASE_PAGE: &str = "BasePage";

/// File name of the generated exception type.
pub const CUSTOM_EXCEPTION: &str = "CustomException";

/// Render the base class every page extends: wait, verify, select, sleep and
/// debug-log primitives.
pub fn render_base_page(project: &Project, config: &EmitterConfig) -> String {
    let mut lines = header(project, config, &project.package);
    lines.extend(PAGE_IMPORTS.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.extend(class_doc(
        "Common properties and actions shared by every page.",
        &project.author,
    ));
    lines.push(class_sig(BASE_PAGE, None));

    let mut members = logger_decl(BASE_PAGE);
    members.extend(
        [
            "protected final WebDriver driver;",
            "protected final WebDriverWait wait;",
            "WebElement element;",
            "",
            "public BasePage(WebDriver driver) {",
            "  this.driver = driver;",
        ]
        .map(String::from),
    );
    members.push(format!(
        "  wait = new WebDriverWait(driver, {});",
        config.wait_timeout_secs
    ));
    members.extend(
        [
            "  element = null;",
            "}",
            "",
            "public Function<WebDriver, WebElement> waitAndGetElement(final By locator) {",
            "  return new Function<WebDriver, WebElement>() {",
            "    public WebElement apply(WebDriver driver) {",
            "      return driver.findElement(locator);",
            "    }",
            "  };",
            "}",
            "",
            "public void verifyTextEquals(WebElement elem, String text) {",
            "  if (!elem.getText().equals(text)) {",
            "    throw new CustomException(\"Can not match the text.\");",
            "  }",
            "}",
            "",
            "public void selectOption(WebElement elem, String value) {",
            "  List<WebElement> options = elem.findElements(By.tagName(\"option\"));",
            "  for (WebElement option : options) {",
            "    if (value.equals(option.getAttribute(\"value\"))) {",
            "      option.click();",
            "      break;",
            "    }",
            "  }",
            "}",
            "",
            "public void sleep(Integer time) {",
            "  try {",
            "    TimeUnit.MILLISECONDS.sleep(time);",
            "  } catch (Exception e) {",
            "    throw new CustomException(\"Sleep error:\" + e.toString());",
            "  }",
            "}",
            "",
            "public void logDebugInfo(String stepId) {",
            "  StackTraceElement[] stacktrace =",
            "      Thread.currentThread().getStackTrace();",
            "  StackTraceElement caller = stacktrace[3];",
        ]
        .map(String::from),
    );
    members.push(format!(
        "  logger.log(Level.INFO, \"Debug info: project={}\" +",
        escape_java(&project.name)
    ));
    members.push("      \"&testName=\" + caller.getMethodName() +".to_string());
    members.push("      \"&stepId=\" + stepId +".to_string());
    members.push(format!(
        "      \"&path={}\");",
        escape_java(&project.package)
    ));
    members.extend(
        [
            "}",
            "",
            "public void verifyElement(WebElement elem, HashMap<String, String> data) {",
            "  for (String key : data.keySet()) {",
            "    String value = data.get(key);",
            "    if (key.equals(\"elementText\")) {",
            "      if (!elem.getText().equals(value)) {",
            "        throw new CustomException(\"Can not match the text. Expected: \" +",
            "            value + \", Actual: \" + elem.getText());",
            "      }",
            "    } else if (key.equals(\"checked\")) {",
            "      if (elem.isSelected() != Boolean.parseBoolean(value)) {",
            "        throw new CustomException(\"Element checked issue.\");",
            "      }",
            "    } else if (key.equals(\"disabled\")) {",
            "      if (elem.isEnabled() == Boolean.parseBoolean(value)) {",
            "        throw new CustomException(\"Element disabled issue.\");",
            "      }",
            "    } else if (key.equals(\"selectedIndex\")) {",
            "      List<WebElement> options = elem.findElements(By.tagName(\"option\"));",
            "      WebElement option = options.get(Integer.parseInt(value));",
            "      if (!option.isSelected()) {",
            "        throw new CustomException(\"Element selected issue.\");",
            "      }",
            "    } else if (elem.getAttribute(key) != null) {",
            "      if (!elem.getAttribute(key).equals(value)) {",
            "        throw new CustomException(\"Can not match the attribute. \" + key);",
            "      }",
            "    }",
            "  }",
            "}",
        ]
        .map(String::from),
    );

    lines.extend(indent(2, &members));
    lines.push("}".to_string());
    to_text(&lines)
}

/// Render the exception type thrown by failed verifications.
pub fn render_exception(project: &Project, config: &EmitterConfig) -> String {
    let mut lines = header(project, config, &project.package);
    lines.extend(class_doc("The exception class.", &project.author));
    lines.push(class_sig(CUSTOM_EXCEPTION, Some("RuntimeException")));
    lines.extend(indent(
        2,
        &[
            "public CustomException(String message) {",
            "  super(message);",
            "}",
        ],
    ));
    lines.push("}".to_string());
    to_text(&lines)
}
