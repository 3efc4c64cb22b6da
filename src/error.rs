use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Section [{0}] not found in configuration file")]
    SectionMissing(String),

    #[error("Required field {0} is missing or blank in configuration file")]
    FieldMissing(String),

    #[error("Search backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Template render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Mail transmission error: {0}")]
    MailTransmission(String),
}

impl ReportError {
    /// Stable per-kind exit codes so wrapper scripts can tell a bad config
    /// from a dead backend without parsing stderr.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::ConfigNotFound(_) => 10,
            ReportError::SectionMissing(_) => 11,
            ReportError::FieldMissing(_) => 12,
            ReportError::BackendUnavailable(_) => 13,
            ReportError::TemplateNotFound(_) => 14,
            ReportError::Render(_) => 15,
            ReportError::MailTransmission(_) => 16,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_missing_message_names_the_key() {
        let error = ReportError::FieldMissing("EMAIL_TO".to_string());
        assert_eq!(
            error.to_string(),
            "Required field EMAIL_TO is missing or blank in configuration file"
        );
    }

    #[test]
    fn test_section_missing_message() {
        let error = ReportError::SectionMissing("opensearch".to_string());
        assert_eq!(
            error.to_string(),
            "Section [opensearch] not found in configuration file"
        );
    }

    #[test]
    fn test_backend_unavailable_message() {
        let error = ReportError::BackendUnavailable("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "Search backend unavailable: connection refused"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = vec![
            ReportError::ConfigNotFound(PathBuf::from("x")),
            ReportError::SectionMissing("email".to_string()),
            ReportError::FieldMissing("HOST".to_string()),
            ReportError::BackendUnavailable("x".to_string()),
            ReportError::TemplateNotFound(PathBuf::from("x")),
            ReportError::MailTransmission("x".to_string()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(ReportError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|&c| c != 0));
    }

    #[test]
    fn test_report_result_ok() {
        fn returns_ok() -> ReportResult<i32> {
            Ok(42)
        }
        let result = returns_ok();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }
}
