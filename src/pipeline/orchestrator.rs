use std::path::Path;

use crate::config::Config;
use crate::error::ReportResult;
use crate::mailer;
use crate::search::SearchClient;

use super::render::{self, FileTemplate};

/// Runs the whole pipeline for one (branch, date): load config, query the
/// backend, render, send. Returns the recipient address for the confirmation
/// line. Any stage failure aborts the run with nothing sent or persisted.
#[tracing::instrument(
    name = "pipeline report",
    skip(config_path),
    fields(report.hits = tracing::field::Empty)
)]
pub async fn run(config_path: &Path, branch: &str, date: &str) -> ReportResult<String> {
    let config = Config::load(config_path)?;

    let client = SearchClient::new(&config.search)?;
    let hits = client.query(branch, date).await?;
    tracing::Span::current().record("report.hits", hits.len());

    let engine = FileTemplate::new(render::TEMPLATE_FILE);
    let html = render::render(&engine, &hits, branch)?;

    let subject = format!("Teuthology Test Summary - {date} - {branch}");
    mailer::send_report(&config.mail, &subject, &html).await?;

    Ok(config.mail.to_address)
}
