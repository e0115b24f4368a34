//! College Scorecard API client.
//!
//! One GET per search: criteria are encoded by the [`QueryBuilder`], the
//! response is normalized by [`transform`]. No retries and no caching.

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{College, RawApiResult, SearchCriteria};
use crate::query::QueryBuilder;
use crate::transform::transform;

/// College Scorecard API client.
#[derive(Clone)]
pub struct CollegeScorecardClient {
    /// HTTP client.
    client: Client,

    /// Query builder carrying the API key.
    builder: QueryBuilder,

    /// Schools endpoint.
    api_url: String,

    has_api_key: bool,
}

impl CollegeScorecardClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            builder: QueryBuilder::new(config.api_key.clone()),
            api_url: config.api_url.clone(),
            has_api_key: config.has_api_key(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Search colleges and return normalized records.
    ///
    /// # Errors
    ///
    /// Returns error if the criteria cannot be encoded, the upstream fails,
    /// or a result carries an unknown ownership code.
    pub async fn search(&self, criteria: &SearchCriteria) -> ClientResult<Vec<College>> {
        let raw = self.fetch(criteria).await?;
        let colleges = transform(&raw)?;

        tracing::debug!(
            total = raw.metadata.total,
            returned = colleges.len(),
            "Transformed search results"
        );

        Ok(colleges)
    }

    /// Fetch the raw upstream response for the given criteria.
    ///
    /// # Errors
    ///
    /// Returns error on encoding, transport or status failure.
    pub async fn fetch(&self, criteria: &SearchCriteria) -> ClientResult<RawApiResult> {
        let params = self.builder.build(criteria)?;
        tracing::debug!(query = %params.redacted(), "Querying College Scorecard");

        let response = self.client.get(&self.api_url).query(params.pairs()).send().await?;
        let response = Self::handle_response(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Map non-success statuses to errors.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "College Scorecard request failed");
        Err(ClientError::upstream(status.as_u16(), text))
    }
}

impl std::fmt::Debug for CollegeScorecardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollegeScorecardClient")
            .field("api_url", &self.api_url)
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}
