//! Configuration for the college search service.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// College Scorecard schools endpoint.
    pub const BASE_URL: &str = "https://api.data.gov/ed/collegescorecard/v1/schools";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Mail defaults for inaccuracy reports.
pub mod mail {
    /// SMTP relay used when none is configured.
    pub const SMTP_HOST: &str = "smtp.gmail.com";

    /// Subject line of every report.
    pub const REPORT_SUBJECT: &str = "Inaccurate Information Report";
}

/// SMTP settings for forwarding inaccuracy reports.
#[derive(Clone, Default)]
pub struct MailConfig {
    /// SMTP relay host (STARTTLS on 587).
    pub smtp_host: String,

    /// Relay login.
    pub username: Option<String>,

    /// Relay password or app password.
    pub password: Option<String>,

    /// Sender mailbox.
    pub from: String,

    /// Recipient mailbox.
    pub to: String,
}

impl MailConfig {
    /// Check if relay credentials are configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// College Scorecard API key, sent as the `api_key` query parameter.
    pub api_key: String,

    /// Schools endpoint (overridden for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Report mail settings.
    pub mail: MailConfig,
}

impl Config {
    /// Create a new configuration for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            mail: MailConfig { smtp_host: mail::SMTP_HOST.to_string(), ..MailConfig::default() },
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            api_url: format!("{}/v1/schools", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            mail: MailConfig {
                smtp_host: "localhost".to_string(),
                username: None,
                password: None,
                from: "reports@example.com".to_string(),
                to: "maintainer@example.com".to_string(),
            },
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A missing API key is not an error here: the upstream rejects the
    /// request and the search endpoint reports the failure.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env_var("COLLEGE_SCORECARD_API_KEY").unwrap_or_default();
        let mut config = Self::new(api_key);

        if let Some(url) = env_var("COLLEGE_SCORECARD_API_URL") {
            url::Url::parse(&url)
                .map_err(|e| anyhow::anyhow!("Invalid COLLEGE_SCORECARD_API_URL: {e}"))?;
            config.api_url = url;
        }

        if let Some(host) = env_var("SMTP_HOST") {
            config.mail.smtp_host = host;
        }
        config.mail.username = env_var("SMTP_USERNAME");
        config.mail.password = env_var("SMTP_PASSWORD").or_else(|| env_var("GMAIL_APP_PASSWORD"));
        config.mail.from = env_var("REPORT_FROM")
            .or_else(|| config.mail.username.clone())
            .unwrap_or_default();
        config.mail.to = env_var("REPORT_TO").unwrap_or_else(|| config.mail.from.clone());

        Ok(config)
    }

    /// Replace the API key when an override is given (e.g. from the CLI).
    #[must_use]
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("mail", &self.mail)
            .finish()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
