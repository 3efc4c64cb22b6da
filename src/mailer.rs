use std::time::Duration;

use lettre::message::{Mailbox, MultiPart, SinglePart, header};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::error::{ReportError, ReportResult};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Composes the multipart/alternative message with a single HTML part.
/// Split out from the transport so composition is testable offline.
pub fn build_message(config: &MailConfig, subject: &str, html_body: &str) -> ReportResult<Message> {
    let from: Mailbox = config
        .from_address
        .parse()
        .map_err(|e| ReportError::MailTransmission(format!("invalid from address: {e}")))?;
    let to: Mailbox = config
        .to_address
        .parse()
        .map_err(|e| ReportError::MailTransmission(format!("invalid to address: {e}")))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::alternative().singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_HTML)
                    .body(html_body.to_string()),
            ),
        )
        .map_err(|e| ReportError::MailTransmission(e.to_string()))
}

/// Sends the rendered report to the single configured recipient. STARTTLS is
/// issued unconditionally; one attempt, no retry. The transport is dropped on
/// every exit path.
#[tracing::instrument(
    name = "mail send",
    skip(config, html_body),
    fields(mail.to = %config.to_address)
)]
pub async fn send_report(config: &MailConfig, subject: &str, html_body: &str) -> ReportResult<()> {
    let message = build_message(config, subject, html_body)?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        .map_err(|e| ReportError::MailTransmission(e.to_string()))?
        .port(config.port)
        .timeout(Some(SMTP_TIMEOUT))
        .build();

    transport
        .send(message)
        .await
        .map_err(|e| ReportError::MailTransmission(e.to_string()))?;

    tracing::info!(to = %config.to_address, "report submitted to mail relay");
    Ok(())
}
