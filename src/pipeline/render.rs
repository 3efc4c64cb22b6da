use std::path::PathBuf;

use minijinja::Environment;
use serde::Serialize;

use crate::error::{ReportError, ReportResult};
use crate::search::QueryHit;

use super::assemble::{self, ReportRow};

/// Fixed presentational label for where the runs executed; not derived from
/// the data.
const CLOUD_PLATFORM: &str = "OpenStack";

pub const TEMPLATE_FILE: &str = "report_template.html";

#[derive(Debug, Serialize)]
pub struct ReportContext {
    pub branch: String,
    pub cloud_platform: &'static str,
    pub rows: Vec<ReportRow>,
}

/// Rendering seam so the pipeline is testable without a real template file.
pub trait TemplateEngine {
    fn render(&self, context: &ReportContext) -> ReportResult<String>;
}

/// Renders through a human-editable minijinja template read from disk at
/// render time.
pub struct FileTemplate {
    path: PathBuf,
}

impl FileTemplate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateEngine for FileTemplate {
    fn render(&self, context: &ReportContext) -> ReportResult<String> {
        let source = std::fs::read_to_string(&self.path)
            .map_err(|_| ReportError::TemplateNotFound(self.path.clone()))?;
        render_str(&source, context)
    }
}

// Registered under an .html name so minijinja applies HTML auto-escaping.
fn render_str(source: &str, context: &ReportContext) -> ReportResult<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_FILE, source)?;
    let template = env.get_template(TEMPLATE_FILE)?;
    Ok(template.render(context)?)
}

/// Renders the report for `branch`. An empty hit list short-circuits to a
/// fixed fragment and never touches the template file.
#[tracing::instrument(
    name = "pipeline render",
    skip(engine, hits),
    fields(report.rows = hits.len())
)]
pub fn render(engine: &dyn TemplateEngine, hits: &[QueryHit], branch: &str) -> ReportResult<String> {
    if hits.is_empty() {
        return Ok(format!("<p>No data available for branch: {branch}</p>"));
    }

    let context = ReportContext {
        branch: capitalize(branch),
        cloud_platform: CLOUD_PLATFORM,
        rows: assemble::assemble(hits),
    };

    engine.render(&context)
}

/// Display-only casing: first character upper, the rest lower. The data model
/// keeps the branch exactly as given.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
