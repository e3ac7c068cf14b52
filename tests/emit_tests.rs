use page_object_codegen::emit::options::EmitterConfig;
use page_object_codegen::emit::suite::fingerprint;
use page_object_codegen::generate;
use page_object_codegen::project::project_model::{DataValue, Test};

mod common;

use common::{
    click_line, element, element_with_text, login_click_test, project, redirect_line, step,
    step_with_var, test, with_data, with_element, with_step,
};

const LOGIN_URL: &str = "http://www.example.com/login";

fn has_line(text: &str, line: &str) -> bool {
    text.lines().any(|l| l == line)
}

fn signin_test(script_head: &[&str]) -> Test {
    let mut lines: Vec<&str> = script_head.to_vec();
    lines.push("type(getElem(\"s1\"));");
    let click = click_line("s2");
    lines.push(&click);

    let t = test("t1", "signin", LOGIN_URL, &lines);
    let t = with_step(t, "s1", step_with_var("type", "e1", "type-user", "user"));
    let t = with_step(t, "s2", step("click", "e2", "click-go"));
    let t = with_element(t, "e1", element("//input[@name='user']"));
    let t = with_element(t, "e2", element("//button[@id='go']"));
    with_data(t, "user", DataValue::Text("alice".into()))
}

// ============================================================================
// Suite layout
// ============================================================================

#[test]
fn files_are_pages_then_support_then_harness() {
    let redirect = redirect_line("http://www.example.com/home");
    let suite = generate(
        &project(vec![login_click_test(&[&redirect])]),
        &EmitterConfig::default(),
    )
    .unwrap();

    assert_eq!(
        suite.file_names(),
        vec![
            "PageExampleLogin0",
            "PageExampleHome1",
            "BasePage",
            "CustomException",
            "Tests"
        ]
    );
    assert_eq!(suite.len(), 5);
    assert!(!suite.is_empty());
}

#[test]
fn generation_is_byte_for_byte_deterministic() {
    let p = project(vec![login_click_test(&[]), signin_test(&[])]);
    let config = EmitterConfig::default();

    let a = generate(&p, &config).unwrap();
    let b = generate(&p, &config).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.fingerprints(), b.fingerprints());
}

#[test]
fn fingerprints_are_hex_sha1() {
    let suite = generate(&project(vec![login_click_test(&[])]), &EmitterConfig::default()).unwrap();
    let prints = suite.fingerprints();

    assert_eq!(prints.len(), suite.len());
    let tests_print = &prints["Tests"];
    assert_eq!(tests_print.len(), 40);
    assert!(tests_print.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fingerprint(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn errors_produce_no_files() {
    let t = test("t1", "login", LOGIN_URL, &[&click_line("missing")]);
    assert!(generate(&project(vec![t]), &EmitterConfig::default()).is_err());
}

// ============================================================================
// Page classes
// ============================================================================

#[test]
fn page_class_layout() {
    let suite = generate(&project(vec![login_click_test(&[])]), &EmitterConfig::default()).unwrap();
    let page = suite.get("PageExampleLogin0").unwrap();

    assert!(page.starts_with("// Copyright qa@example.com. All Rights Reserved.\n\npackage com.example.pages;\n"));
    assert!(has_line(page, "import org.openqa.selenium.By;"));
    assert!(has_line(page, "import com.example.pages.BasePage;"));
    assert!(has_line(page, " * @author qa@example.com"));
    assert!(has_line(page, "public class PageExampleLogin0 extends BasePage {"));
    assert!(has_line(page, "      Logger.getLogger(PageExampleLogin0.class.getName());"));
    assert!(has_line(page, "  private static final String selector0 ="));
    assert!(has_line(page, "      \"//button[@id='go']\";"));
    assert!(has_line(page, "  public PageExampleLogin0(WebDriver driver) {"));
    assert!(has_line(page, "    super(driver);"));
    assert!(page.ends_with("  }\n}\n"));
}

#[test]
fn action_method_body() {
    let suite = generate(&project(vec![login_click_test(&[])]), &EmitterConfig::default()).unwrap();
    let page = suite.get("PageExampleLogin0").unwrap();

    let expected = [
        "  public PageExampleLogin0 clickGo() {",
        "    logger.log(Level.INFO, \"clickGo started.\");",
        "    logDebugInfo(\"s1\");",
        "    sleep(600);",
        "    element = wait.until(",
        "        waitAndGetElement(By.xpath(selector0)));",
        "    element.click();",
        "    return new PageExampleLogin0(driver);",
        "  }",
    ]
    .join("\n");
    assert!(page.contains(&expected), "page was:\n{}", page);
    assert!(has_line(page, "   * Performs a click on a button element."));
}

#[test]
fn type_method_takes_string_data() {
    let suite = generate(&project(vec![signin_test(&[])]), &EmitterConfig::default()).unwrap();
    let page = suite.get("PageExampleLogin0").unwrap();

    assert!(has_line(page, "  public PageExampleLogin0 typeUser(String data) {"));
    assert!(has_line(page, "    element.clear();"));
    assert!(has_line(page, "    element.sendKeys(data);"));
}

#[test]
fn selector_values_are_escaped() {
    let t = test("t1", "login", LOGIN_URL, &[&click_line("s1")]);
    let t = with_step(t, "s1", step("click", "e1", "click-go"));
    let t = with_element(t, "e1", element("//a[text()=\"Go\"]"));

    let suite = generate(&project(vec![t]), &EmitterConfig::default()).unwrap();
    let page = suite.get("PageExampleLogin0").unwrap();
    assert!(has_line(page, "      \"//a[text()=\\\"Go\\\"]\";"));
}

#[test]
fn redirecting_page_imports_its_target() {
    let redirect = redirect_line("http://www.example.com/home");
    let suite = generate(
        &project(vec![login_click_test(&[&redirect])]),
        &EmitterConfig::default(),
    )
    .unwrap();

    let login = suite.get("PageExampleLogin0").unwrap();
    assert!(has_line(login, "import com.example.pages.PageExampleHome1;"));
    assert!(has_line(login, "  public PageExampleHome1 clickGo() {"));

    let home = suite.get("PageExampleHome1").unwrap();
    assert!(!home.contains("private static final String selector"));
}

#[test]
fn unused_seed_pages_are_still_emitted() {
    let mut p = project(vec![login_click_test(&[])]);
    p.page_map.insert("example.com/admin".into(), "AdminPage".into());

    let suite = generate(&p, &EmitterConfig::default()).unwrap();
    let admin = suite.get("AdminPage").unwrap();
    assert!(has_line(admin, "public class AdminPage extends BasePage {"));
    assert_eq!(suite.file_names()[0], "AdminPage");
}

// ============================================================================
// Test harness
// ============================================================================

#[test]
fn harness_calls_chain_step_methods() {
    let suite = generate(&project(vec![signin_test(&[])]), &EmitterConfig::default()).unwrap();
    let tests = suite.get("Tests").unwrap();

    assert!(has_line(tests, "package com.example.pages;"));
    assert!(has_line(tests, "import com.example.pages.PageExampleLogin0;"));
    assert!(has_line(tests, "public class Tests extends TestCase {"));
    assert!(has_line(tests, "    driver = new RemoteWebDriver(new URL(\"http://127.0.0.1:9515\"),"));
    assert!(has_line(tests, "  @Tag(\"SmokeTest\")"));
    assert!(has_line(tests, "  public void signin() {"));
    assert!(has_line(tests, "    driver.get(\"http://www.example.com/login\");"));
    assert!(has_line(tests, "    PageExampleLogin0 page = new PageExampleLogin0(driver);"));
    assert!(has_line(tests, "    page.typeUser(\"alice\")"));
    assert!(has_line(tests, "        .clickGo();"));
}

#[test]
fn harness_calls_composite_module_method() {
    let suite = generate(
        &project(vec![signin_test(&["// @type module"])]),
        &EmitterConfig::default(),
    )
    .unwrap();

    let tests = suite.get("Tests").unwrap();
    assert!(has_line(tests, "    page.signin(\"alice\");"));
    assert!(!tests.contains(".clickGo()"));

    let page = suite.get("PageExampleLogin0").unwrap();
    assert!(has_line(page, "  public PageExampleLogin0 signin(String data0) {"));
    assert!(has_line(page, "    return this.typeUser(data0)"));
}

#[test]
fn harness_declares_field_map_locals() {
    let t = test("t1", "check", LOGIN_URL, &["verify(getElem(\"s1\"));"]);
    let t = with_step(t, "s1", step("verify", "e1", "verify-status"));
    let t = with_element(t, "e1", element_with_text("//span[@id='status']", "OK"));

    let suite = generate(&project(vec![t]), &EmitterConfig::default()).unwrap();
    let tests = suite.get("Tests").unwrap();

    let expected = [
        "    HashMap<String, String> data0 = new HashMap<String, String>();",
        "    data0.put(\"elementText\", \"OK\");",
        "    page.verifyStatus(data0);",
    ]
    .join("\n");
    assert!(tests.contains(&expected), "harness was:\n{}", tests);

    let page = suite.get("PageExampleLogin0").unwrap();
    assert!(has_line(
        page,
        "  public PageExampleLogin0 verifyStatus(HashMap<String, String> data) {"
    ));
    assert!(has_line(page, "    verifyElement(element, data);"));
}

#[test]
fn harness_test_names_are_unique() {
    let first = login_click_test(&[]);
    let mut second = login_click_test(&[]);
    second.id = "t2".into();
    second.start_url = "http://www.example.com/home".into();

    let suite = generate(&project(vec![first, second]), &EmitterConfig::default()).unwrap();
    let tests = suite.get("Tests").unwrap();

    assert!(has_line(tests, "  public void login() {"));
    assert!(has_line(tests, "  public void login2() {"));
}

// ============================================================================
// Emitter options
// ============================================================================

#[test]
fn config_shapes_generated_code() {
    let config = EmitterConfig {
        settle_delay_ms: 250,
        wait_timeout_secs: 10,
        remote_driver_url: "http://grid:4444/wd/hub".into(),
        test_tag: "Nightly".into(),
        test_package: Some("com.example.tests".into()),
        copyright_holder: Some("Example Corp".into()),
    };
    let suite = generate(&project(vec![login_click_test(&[])]), &config).unwrap();

    let page = suite.get("PageExampleLogin0").unwrap();
    assert!(has_line(page, "    sleep(250);"));
    assert!(has_line(page, "// Copyright Example Corp. All Rights Reserved."));

    let base = suite.get("BasePage").unwrap();
    assert!(has_line(base, "    wait = new WebDriverWait(driver, 10);"));

    let tests = suite.get("Tests").unwrap();
    assert!(has_line(tests, "package com.example.tests;"));
    assert!(has_line(tests, "import com.example.pages.PageExampleLogin0;"));
    assert!(has_line(tests, "  @Tag(\"Nightly\")"));
    assert!(tests.contains("new URL(\"http://grid:4444/wd/hub\")"));
}

#[test]
fn base_page_and_exception_use_project_package() {
    let suite = generate(&project(vec![login_click_test(&[])]), &EmitterConfig::default()).unwrap();

    let base = suite.get("BasePage").unwrap();
    assert!(has_line(base, "package com.example.pages;"));
    assert!(has_line(base, "public class BasePage {"));
    assert!(has_line(base, "    wait = new WebDriverWait(driver, 6);"));
    assert!(base.contains("Debug info: project=shop"));
    assert!(base.contains("&path=com.example.pages"));

    let exception = suite.get("CustomException").unwrap();
    assert!(has_line(exception, "public class CustomException extends RuntimeException {"));
    assert!(has_line(exception, "  public CustomException(String message) {"));
}

// ============================================================================
// Command blocks and harness arguments
// ============================================================================

#[test]
fn submit_and_select_command_blocks() {
    let t = test(
        "t1",
        "order",
        LOGIN_URL,
        &["select(getElem(\"s1\"));", "submit(getElem(\"s2\"));"],
    );
    let t = with_step(t, "s1", step_with_var("select", "e1", "pick-size", "size"));
    let t = with_step(t, "s2", step("submit", "e2", "send-order"));
    let t = with_element(t, "e1", element("//select[@name='size']"));
    let t = with_element(t, "e2", element("//form[@id='order']"));
    let t = with_data(t, "size", DataValue::Text("M".into()));

    let suite = generate(&project(vec![t]), &EmitterConfig::default()).unwrap();
    let page = suite.get("PageExampleLogin0").unwrap();

    assert!(has_line(page, "  public PageExampleLogin0 pickSize(String data) {"));
    assert!(has_line(page, "    selectOption(element, data);"));
    assert!(has_line(page, "  public PageExampleLogin0 sendOrder() {"));
    assert!(has_line(page, "    element.submit();"));

    let tests = suite.get("Tests").unwrap();
    assert!(has_line(tests, "    page.pickSize(\"M\")"));
    assert!(has_line(tests, "        .sendOrder();"));
}

/// One test verifying the text of each `(step id, step name, selector, text)`.
fn verify_test(id: &str, name: &str, steps: &[(&str, &str, &str, &str)]) -> Test {
    let lines: Vec<String> = steps
        .iter()
        .map(|(step_id, ..)| format!("verify(getElem(\"{}\"));", step_id))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut t = test(id, name, LOGIN_URL, &refs);
    for (step_id, step_name, selector, text) in steps {
        let elem_id = format!("e-{}", step_id);
        t = with_step(t, step_id, step("verify", &elem_id, step_name));
        t = with_element(t, &elem_id, element_with_text(selector, text));
    }
    t
}

#[test]
fn harness_numbers_field_map_locals_in_first_seen_order() {
    let t = verify_test(
        "t1",
        "check",
        &[
            ("s1", "verify-status", "//span[@id='status']", "OK"),
            ("s2", "verify-banner", "//div[@id='banner']", "Done"),
        ],
    );

    let suite = generate(&project(vec![t]), &EmitterConfig::default()).unwrap();
    let tests = suite.get("Tests").unwrap();

    let expected = [
        "    HashMap<String, String> data0 = new HashMap<String, String>();",
        "    data0.put(\"elementText\", \"OK\");",
        "    HashMap<String, String> data1 = new HashMap<String, String>();",
        "    data1.put(\"elementText\", \"Done\");",
        "    page.verifyStatus(data0)",
        "        .verifyBanner(data1);",
    ]
    .join("\n");
    assert!(tests.contains(&expected), "harness was:\n{}", tests);
}

#[test]
fn harness_locals_restart_at_zero_in_each_test() {
    let first = verify_test(
        "t1",
        "check one",
        &[("s1", "verify-status", "//span[@id='status']", "OK")],
    );
    let second = verify_test(
        "t2",
        "check two",
        &[("s2", "verify-banner", "//div[@id='banner']", "Done")],
    );

    let suite = generate(&project(vec![first, second]), &EmitterConfig::default()).unwrap();
    let tests = suite.get("Tests").unwrap();

    let decl = "    HashMap<String, String> data0 = new HashMap<String, String>();";
    assert_eq!(tests.lines().filter(|l| *l == decl).count(), 2);
    assert!(!tests.contains("data1"));

    let one = tests.find("public void checkOne()").unwrap();
    let two = tests.find("public void checkTwo()").unwrap();
    assert!(tests[one..two].contains("    page.verifyStatus(data0);"));
    assert!(tests[two..].contains("    page.verifyBanner(data0);"));
}
