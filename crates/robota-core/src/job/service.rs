//! Job catalog service trait.
//!
//! The catalog is the one asynchronous boundary in the client: callers await
//! a search and resume when listings come back. Implementations simulate or
//! perform network access; the stores treat the catalog as an opaque data
//! source.

use super::model::{Job, JobSearchParams};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of job listings.
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Returns the listings matching `params`.
    ///
    /// Query matching is case-insensitive substring search over title,
    /// company and description; location is a substring match; employment
    /// type is exact.
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>>;

    /// Looks up one listing by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Job))`: listing found
    /// - `Ok(None)`: no listing with that id
    /// - `Err(_)`: the fetch itself failed
    async fn job_by_id(&self, id: &str) -> Result<Option<Job>>;
}
