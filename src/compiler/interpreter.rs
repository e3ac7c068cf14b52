use indexmap::IndexMap;
use tracing::debug;

use crate::compiler::context::{CompiledProject, GenerationContext, StepPlacement};
use crate::compiler::error::GenerationError;
use crate::emit::java::quote;
use crate::emit::options::EmitterConfig;
use crate::emit::page_class::{render_action_method, render_module_method, ActionMethod};
use crate::page::identity::{method_name, selector_key, MethodSignature};
use crate::page::page_model::{DataLiteral, MethodRef, ModuleModel, ModuleStep};
use crate::project::normalize::{normalize, NormalizedProject, ScriptEntry};
use crate::project::project_model::{ActionKind, DataValue, ElementInfo, Project, StepInfo};
use crate::script::step_line::{redirect_lookahead, ParsedScript, ScriptLine};
use crate::trace::trace::TraceKind;

// ============================================================================
// Project compilation
// ============================================================================

/// Normalize a project and interpret every script into page models.
///
/// Fails on the first integrity or data-shape error; no partial model is
/// returned.
pub fn compile(project: &Project, config: &EmitterConfig) -> Result<CompiledProject, GenerationError> {
    let normalized = normalize(project)?;
    let mut ctx = GenerationContext::new(normalized.url_page_map.clone());

    for entry in &normalized.scripts {
        interpret_script(&mut ctx, &normalized, entry, config)?;
    }

    debug!(
        pages = ctx.pages.len(),
        methods = ctx.method_table.len(),
        "interpreted {} scripts",
        normalized.scripts.len()
    );
    Ok(ctx.finish())
}

/// Page and URL the interpreter is currently on.
#[derive(Debug, Clone)]
struct Cursor {
    page: String,
    url: String,
}

/// Interpret one test script, accumulating into the context's page models.
pub fn interpret_script(
    ctx: &mut GenerationContext,
    project: &NormalizedProject,
    entry: &ScriptEntry,
    config: &EmitterConfig,
) -> Result<(), GenerationError> {
    let parsed = ParsedScript::parse(&entry.script);
    let lookahead = redirect_lookahead(&parsed.lines);
    let module_name = method_name(&entry.name);

    let start_page = ctx.resolve_page(&entry.start_url);

    let mut cursor = Cursor {
        page: start_page.clone(),
        url: entry.start_url.clone(),
    };
    let mut steps = Vec::new();

    for (i, line) in parsed.lines.iter().enumerate() {
        match line {
            ScriptLine::Step { keyword, step_id } => {
                let redirect = lookahead[i].and_then(|j| match &parsed.lines[j] {
                    ScriptLine::Redirect { url } => Some(url.as_str()),
                    _ => None,
                });
                let step = interpret_step(
                    ctx, project, entry, config, &cursor, keyword, step_id, redirect,
                )?;
                steps.push(step);
            }
            ScriptLine::Redirect { url } => {
                let page = ctx.resolve_page(url);
                if page != cursor.page {
                    let event = ctx
                        .event(TraceKind::PageSwitched, &page)
                        .with_test(&entry.name)
                        .with_detail(format!("from {} ({})", cursor.page, cursor.url));
                    ctx.push(event);
                    cursor = Cursor {
                        page,
                        url: url.clone(),
                    };
                }
            }
            ScriptLine::Other => {}
        }
    }

    let end_page = cursor.page;
    let start = ctx.page_mut(&start_page);
    start.add_import(&end_page);

    let composite_name = if parsed.is_module {
        let name = start.claim_method_name(&module_name);
        start.append_method(&render_module_method(&name, &steps, &end_page));
        name
    } else {
        module_name.clone()
    };

    let step_count = steps.len();
    let registered = start.register_module(
        &module_name,
        ModuleModel {
            method_name: composite_name,
            steps,
            is_module: parsed.is_module,
            start_url: entry.start_url.clone(),
        },
    );
    if !registered {
        return Err(GenerationError::DuplicateModule {
            module: module_name,
            page: start_page,
        });
    }

    let event = ctx
        .event(TraceKind::ModuleRecorded, &start_page)
        .with_test(&entry.name)
        .with_detail(format!("{} steps, ends on {}", step_count, end_page));
    ctx.push(event);
    Ok(())
}

// ============================================================================
// Step interpretation
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn interpret_step(
    ctx: &mut GenerationContext,
    project: &NormalizedProject,
    entry: &ScriptEntry,
    config: &EmitterConfig,
    cursor: &Cursor,
    keyword: &str,
    step_id: &str,
    redirect: Option<&str>,
) -> Result<ModuleStep, GenerationError> {
    let info = project
        .steps
        .get(step_id)
        .ok_or_else(|| GenerationError::MissingStep {
            test: entry.name.clone(),
            step_id: step_id.to_string(),
        })?;
    let element = project
        .elements
        .get(&info.elem_id)
        .ok_or_else(|| GenerationError::MissingElement {
            step_id: step_id.to_string(),
            elem_id: info.elem_id.clone(),
        })?;
    let selector = element
        .primary_selector()
        .ok_or_else(|| GenerationError::EmptySelectors {
            elem_id: info.elem_id.clone(),
        })?;

    let action = if keyword == ActionKind::VerifyNot.as_str() {
        ActionKind::VerifyNot
    } else {
        info.action.clone()
    };
    let data = data_literal(&project.data, step_id, info, &action, element)?;

    // A redirect before the next step means this action navigates away.
    let return_page = match redirect {
        Some(url) => {
            let target = ctx.resolve_page(url);
            ctx.page_mut(&cursor.page).add_import(&target);
            target
        }
        None => cursor.page.clone(),
    };

    let key = selector_key(selector);
    let existing_var = ctx
        .page(&cursor.page)
        .and_then(|p| p.selector_var(&key))
        .map(str::to_string);
    let selector_var = match existing_var {
        Some(var) => var,
        None => {
            let var = ctx.next_selector_var();
            ctx.page_mut(&cursor.page)
                .declare_selector(key, var.clone(), selector.to_string());
            let event = ctx
                .event(TraceKind::SelectorDeclared, &cursor.page)
                .with_step(step_id)
                .with_detail(format!("{} = {}", var, selector));
            ctx.push(event);
            var
        }
    };

    let signature = MethodSignature::new(action.clone(), selector_var.clone());
    let method = match ctx.method_table.get(&signature).cloned() {
        Some(existing) => {
            let event = ctx
                .event(TraceKind::MethodReused, &cursor.page)
                .with_step(step_id)
                .with_detail(&existing);
            ctx.push(event);
            existing
        }
        None => {
            let page = ctx.page_mut(&cursor.page);
            let name = page.claim_method_name(&method_name(&info.step_name));
            page.append_method(&render_action_method(&ActionMethod {
                step_id,
                method_name: &name,
                action: &action,
                tag_name: &info.tag_name,
                selector_var: &selector_var,
                return_page: &return_page,
                settle_delay_ms: config.settle_delay_ms,
            }));
            ctx.method_table.insert(signature.clone(), name.clone());
            debug!(page = %cursor.page, method = %name, signature = %signature.id(), "synthesized method");
            let event = ctx
                .event(TraceKind::MethodSynthesized, &cursor.page)
                .with_step(step_id)
                .with_detail(format!("{} returns {}", name, return_page));
            ctx.push(event);
            name
        }
    };

    ctx.page_mut(&cursor.page).methods.insert(
        info.step_name.clone(),
        MethodRef {
            signature,
            method_name: method.clone(),
            data: data.clone(),
        },
    );
    ctx.placements.insert(
        step_id.to_string(),
        StepPlacement {
            page_name: cursor.page.clone(),
            return_page_name: return_page,
            action,
        },
    );

    Ok(ModuleStep {
        original_name: info.step_name.clone(),
        method_name: method,
        data,
    })
}

/// Argument literal of a step, shaped by what its method accepts.
///
/// Verify steps take a field map: the dictionary entry when it is one,
/// otherwise the descriptor's verify-flagged fields. Text steps take the
/// dictionary scalar, or `""` when the variable is unset. Other actions take
/// no argument.
fn data_literal(
    data: &IndexMap<String, DataValue>,
    step_id: &str,
    info: &StepInfo,
    action: &ActionKind,
    element: &ElementInfo,
) -> Result<Option<DataLiteral>, GenerationError> {
    let value = info
        .var_name
        .as_ref()
        .and_then(|var| data.get(var).map(|v| (var, v)));

    let shape_error = |var: &String, expected: &'static str, found: &DataValue| {
        GenerationError::DataShape {
            step_id: step_id.to_string(),
            var_name: var.clone(),
            expected,
            found: found.shape(),
        }
    };

    if action.takes_fields() {
        let fields = match value {
            Some((_, DataValue::Fields(fields))) => fields.clone(),
            Some((var, other)) => return Err(shape_error(var, "field map", other)),
            None => element.descriptor.fields_to_verify(),
        };
        let quoted = fields
            .into_iter()
            .map(|(field, value)| (field, quote(&value.render())))
            .collect();
        return Ok(Some(DataLiteral::Fields(quoted)));
    }

    if action.takes_text() {
        let text = match value {
            Some((var, found)) if matches!(found, DataValue::Fields(_)) => {
                return Err(shape_error(var, "scalar", found));
            }
            Some((_, scalar)) => scalar.as_scalar().unwrap_or_default(),
            None => String::new(),
        };
        return Ok(Some(DataLiteral::Text(quote(&text))));
    }

    Ok(None)
}
