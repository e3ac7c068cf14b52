#![allow(dead_code)]

use indexmap::IndexMap;
use page_object_codegen::project::project_model::{
    ActionKind, DataValue, DescriptorValue, ElementDescriptor, ElementInfo, Project, StepInfo,
    Test,
};

// ============================================================================
// Project builders shared by the integration tests
// ============================================================================

pub fn step(action: &str, elem_id: &str, step_name: &str) -> StepInfo {
    StepInfo {
        action: ActionKind::from(action.to_string()),
        elem_id: elem_id.into(),
        var_name: None,
        step_name: step_name.into(),
        tag_name: "button".into(),
    }
}

pub fn step_with_var(action: &str, elem_id: &str, step_name: &str, var: &str) -> StepInfo {
    StepInfo {
        var_name: Some(var.into()),
        tag_name: "input".into(),
        ..step(action, elem_id, step_name)
    }
}

pub fn element(selector: &str) -> ElementInfo {
    ElementInfo {
        selectors: vec![selector.into()],
        descriptor: ElementDescriptor::default(),
    }
}

/// Element whose descriptor flags its text for verification.
pub fn element_with_text(selector: &str, text: &str) -> ElementInfo {
    ElementInfo {
        selectors: vec![selector.into()],
        descriptor: ElementDescriptor {
            tag_name: "span".into(),
            element_text: Some(DescriptorValue {
                value: text.into(),
                verify: true,
            }),
            attributes: IndexMap::new(),
        },
    }
}

pub fn test(id: &str, name: &str, start_url: &str, script: &[&str]) -> Test {
    Test {
        id: id.into(),
        name: name.into(),
        start_url: start_url.into(),
        script: script.join("\n"),
        data: IndexMap::new(),
        steps: IndexMap::new(),
        elements: IndexMap::new(),
    }
}

pub fn with_step(mut t: Test, step_id: &str, info: StepInfo) -> Test {
    t.steps.insert(step_id.into(), info);
    t
}

pub fn with_element(mut t: Test, elem_id: &str, info: ElementInfo) -> Test {
    t.elements.insert(elem_id.into(), info);
    t
}

pub fn with_data(mut t: Test, var: &str, value: DataValue) -> Test {
    t.data.insert(var.into(), value);
    t
}

pub fn project(tests: Vec<Test>) -> Project {
    Project {
        name: "shop".into(),
        package: "com.example.pages".into(),
        author: "qa@example.com".into(),
        page_map: IndexMap::new(),
        tests,
    }
}

pub fn click_line(step_id: &str) -> String {
    format!("click(getElem(\"{}\"));", step_id)
}

pub fn redirect_line(url: &str) -> String {
    format!("redirectTo(\"{}\");", url)
}

/// One test on the example login page clicking `//button[@id='go']`.
pub fn login_click_test(extra_lines: &[&str]) -> Test {
    let click = click_line("s1");
    let mut lines = vec![click.as_str()];
    lines.extend_from_slice(extra_lines);
    let t = test("t1", "login", "http://www.example.com/login", &lines);
    let t = with_step(t, "s1", step("click", "e1", "click-go"));
    with_element(t, "e1", element("//button[@id='go']"))
}
