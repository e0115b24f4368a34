//! College Search
//!
//! A small web service over the College Scorecard API. Users search by
//! location, test scores and institution type; results come back as flat,
//! display-ready college records. Users can also report inaccurate data,
//! which is forwarded by email.
//!
//! # Layers
//!
//! - [`query`]: search criteria to upstream query parameters
//! - [`transform`]: upstream results to [`models::College`] records
//! - [`client`]: one GET per search against the upstream
//! - [`report`]: report email composition and SMTP delivery
//! - [`server`]: axum routes
//!
//! # Example
//!
//! ```no_run
//! use college_search::{client::CollegeScorecardClient, config::Config, models::SearchCriteria};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = CollegeScorecardClient::new(&config)?;
//!
//!     let colleges = client.search(&SearchCriteria::paged(1, 20)).await?;
//!     println!("{} colleges", colleges.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod report;
pub mod server;
pub mod transform;

pub use client::CollegeScorecardClient;
pub use config::Config;
pub use error::{ClientError, MappingError, ReportError};
