use std::path::Path;

use ini::Properties;
use tracing::debug;

use crate::error::{ReportError, ReportResult};

const DEFAULT_SEARCH_PORT: u16 = 9200;

/// Credentials and target index for the OpenSearch backend.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub index: String,
}

/// SMTP relay and addressing for the outgoing report mail.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub from_address: String,
    pub to_address: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub mail: MailConfig,
}

impl Config {
    /// Loads and validates both sections eagerly. Every mandatory key is
    /// checked here, before any network or mail I/O happens, so a broken
    /// config can never produce a half-sent report.
    pub fn load(path: &Path) -> ReportResult<Self> {
        if !path.exists() {
            return Err(ReportError::ConfigNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "reading config file");

        let ini = ini::Ini::load_from_file(path)
            .map_err(|_| ReportError::ConfigNotFound(path.to_path_buf()))?;

        let search = ini
            .section(Some("opensearch"))
            .ok_or_else(|| ReportError::SectionMissing("opensearch".to_string()))?;
        let mail = ini
            .section(Some("email"))
            .ok_or_else(|| ReportError::SectionMissing("email".to_string()))?;

        Ok(Self {
            search: SearchConfig {
                host: required(search, "HOST")?,
                port: optional_port(search, "PORT")?.unwrap_or(DEFAULT_SEARCH_PORT),
                username: required(search, "USERNAME")?,
                password: required(search, "PASSWORD")?,
                index: required(search, "INDEX")?,
            },
            mail: MailConfig {
                host: required(mail, "HOST")?,
                port: required_port(mail, "PORT")?,
                from_address: required(mail, "EMAIL_FROM")?,
                to_address: required(mail, "EMAIL_TO")?,
            },
        })
    }
}

fn required(section: &Properties, key: &str) -> ReportResult<String> {
    match section.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ReportError::FieldMissing(key.to_string())),
    }
}

fn required_port(section: &Properties, key: &str) -> ReportResult<u16> {
    optional_port(section, key)?.ok_or_else(|| ReportError::FieldMissing(key.to_string()))
}

// An unparsable port is as fatal as an absent one; both refuse the run.
fn optional_port(section: &Properties, key: &str) -> ReportResult<Option<u16>> {
    match section.get(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ReportError::FieldMissing(key.to_string())),
        _ => Ok(None),
    }
}
