//! Inaccuracy reports forwarded by email.
//!
//! The HTTP layer only sees the [`ReportMailer`] trait; production uses
//! [`SmtpMailer`], tests substitute their own.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::{Deserialize, Serialize};

use crate::config::{MailConfig, mail};
use crate::error::{ReportError, ReportResult};

/// Body of a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Free text describing the inaccuracy.
    pub description: String,
}

/// Composed report email, independent of transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEmail {
    pub subject: String,
    pub body: String,
}

impl ReportEmail {
    /// Compose the email for a user-submitted description.
    #[must_use]
    pub fn compose(description: &str) -> Self {
        Self {
            subject: mail::REPORT_SUBJECT.to_string(),
            body: format!("A user has reported inaccurate information:\n\n{description}"),
        }
    }
}

/// Delivers report emails.
#[async_trait::async_trait]
pub trait ReportMailer: Send + Sync {
    /// Send one report. Called once per request, never retried.
    async fn send(&self, email: &ReportEmail) -> ReportResult<()>;
}

/// SMTP relay mailer (STARTTLS, optional credentials).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Create a mailer from configuration. Does not connect.
    ///
    /// # Errors
    ///
    /// Returns error if a configured address is invalid or the relay
    /// parameters are rejected.
    pub fn new(config: &MailConfig) -> ReportResult<Self> {
        let from: Mailbox = config.from.parse()?;
        let to: Mailbox = config.to.parse()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| ReportError::send_failed(e.to_string()))?;

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self { transport: builder.build(), from, to })
    }
}

fn build_message(from: &Mailbox, to: &Mailbox, email: &ReportEmail) -> ReportResult<Message> {
    Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(ReportError::from)
}

#[async_trait::async_trait]
impl ReportMailer for SmtpMailer {
    async fn send(&self, email: &ReportEmail) -> ReportResult<()> {
        let message = build_message(&self.from, &self.to, email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| ReportError::send_failed(e.to_string()))?;

        tracing::info!(code = %response.code(), "Report email sent");
        Ok(())
    }
}

/// Stand-in used when no valid mail settings are available; every send fails.
#[derive(Debug, Clone)]
pub struct UnconfiguredMailer {
    reason: String,
}

impl UnconfiguredMailer {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait::async_trait]
impl ReportMailer for UnconfiguredMailer {
    async fn send(&self, _email: &ReportEmail) -> ReportResult<()> {
        Err(ReportError::send_failed(format!("mail transport not configured: {}", self.reason)))
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").field("from", &self.from).field("to", &self.to).finish()
    }
}
