use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::config::{resolve_output_dir, AppConfig};
use crate::compiler::context::CompiledProject;
use crate::compiler::interpreter::compile;
use crate::emit::suite::{render_suite, GeneratedSuite};
use crate::project::project_model::Project;
use crate::trace::logger::write_trace;

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    project_path: &str,
    output_dir: Option<&str>,
    package: Option<&str>,
    trace_path: Option<&str>,
    config: &AppConfig,
) -> Result<GeneratedSuite, Box<dyn std::error::Error>> {
    let mut project = load_project(project_path)?;
    if let Some(package) = package {
        project.package = package.to_string();
    }

    info!("compiling {} tests from {}", project.tests.len(), project_path);
    let compiled = compile(&project, &config.emit)?;
    let suite = render_suite(&compiled, &project, &config.emit);

    let dir = resolve_output_dir(output_dir, config);
    let written = write_suite(&suite, Path::new(&dir), &config.output.extension)?;
    for path in &written {
        info!("wrote {}", path.display());
    }
    if config.output.manifest {
        write_manifest(&suite, Path::new(&dir))?;
    }

    if let Some(path) = trace_path {
        let n = write_trace(path, &compiled.events);
        info!("appended {} trace events to {}", n, path);
    }

    println!(
        "Generated {} pages and {} test methods in {}/",
        compiled.pages.len(),
        compiled.pages.values().map(|p| p.modules.len()).sum::<usize>(),
        dir
    );
    Ok(suite)
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(project_path: &str, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project(project_path)?;
    let compiled = compile(&project, &config.emit)?;
    print!("{}", format_inspection(&compiled));
    Ok(())
}

/// Human-readable summary of a compiled project.
pub fn format_inspection(compiled: &CompiledProject) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "URL patterns:");
    for (pattern, page) in &compiled.url_page_map {
        let _ = writeln!(out, "  {} -> {}", pattern, page);
    }

    for page in compiled.pages.values() {
        let _ = writeln!(
            out,
            "\n{} ({} selectors, {} methods, {} modules)",
            page.name,
            page.selectors.len(),
            page.method_count(),
            page.modules.len()
        );
        for decl in page.selectors.values() {
            let _ = writeln!(out, "  {} = {}", decl.var_name, decl.value);
        }
        for (step, method) in &page.methods {
            let _ = writeln!(out, "  {} -> {}()", step, method.method_name);
        }
        for (name, module) in &page.modules {
            let kind = if module.is_module { "module" } else { "test" };
            let _ = writeln!(out, "  [{}] {} ({} steps)", kind, name, module.steps.len());
        }
    }

    out
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a recorded project from JSON (`.json`) or YAML (anything else).
pub fn load_project(path: &str) -> Result<Project, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|e| e == "json");
    let project: Project = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(project)
}

/// Write every generated file as `<name>.<extension>` into `dir`.
pub fn write_suite(
    suite: &GeneratedSuite,
    dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (name, text) in &suite.files {
        let path = dir.join(format!("{}.{}", name, extension));
        std::fs::write(&path, text)?;
        written.push(path);
    }
    Ok(written)
}

/// Write `manifest.json`: file name → SHA-1 of its contents.
pub fn write_manifest(suite: &GeneratedSuite, dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&suite.fingerprints())?;
    std::fs::write(&path, json)?;
    Ok(path)
}
