//! Job listing models.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Employment type of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
    Hybrid,
}

/// A single vacancy as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Display string, e.g. "₴60 000 – ₴90 000". Absent for undisclosed pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Human-readable recency label supplied by the catalog.
    pub posted_at: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Search parameters accepted by the catalog.
///
/// All fields are optional; an empty set of parameters matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearchParams {
    /// Free-text query matched against title, company and description.
    pub query: Option<String>,
    /// Substring match against the listing location.
    pub location: Option<String>,
    /// Exact employment-type filter.
    pub job_type: Option<JobType>,
}
