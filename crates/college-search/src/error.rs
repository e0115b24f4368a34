//! Error types for the college search service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from mapping between the search criteria, the upstream schema and
/// the normalized records.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Ownership label or code outside the three known values.
    #[error("Invalid ownership: {value}")]
    InvalidOwnership {
        /// The offending label or code, as received
        value: String,
    },

    /// Range filter with neither bound set.
    #[error("Invalid range: at least one of min or max is required")]
    InvalidRange,
}

impl MappingError {
    /// Create an invalid ownership error.
    #[must_use]
    pub fn invalid_ownership(value: impl ToString) -> Self {
        Self::InvalidOwnership { value: value.to_string() }
    }
}

/// Errors from the College Scorecard client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Criteria could not be encoded, or the response could not be normalized.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Upstream answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    UpstreamRequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Connection, DNS, TLS or timeout failure.
    #[error("College Scorecard API unreachable: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an upstream request failure.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamRequestFailed { status, message: message.into() }
    }

    /// Returns the upstream status code, if the upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from sending an inaccuracy report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Configured sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// Transport-level failure handing the message to the relay.
    #[error("Failed to send email: {0}")]
    MailSendFailed(String),
}

impl ReportError {
    /// Create a send failure.
    #[must_use]
    pub fn send_failed(message: impl Into<String>) -> Self {
        Self::MailSendFailed(message.into())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
