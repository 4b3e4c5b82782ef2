//! Derived job-feed views.
//!
//! Pure helpers that combine catalog results with store state for display:
//! salary/title ordering behind the sort button, and the preference-driven
//! filters (hide applied, remote only).

use robota_core::job::salary::extract_salary;
use robota_core::job::{Job, JobType};
use robota_core::preferences::UserPreferences;

/// Feed ordering options, cycled by the sort button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSortOrder {
    /// Catalog order (most recently posted first).
    #[default]
    Recent,
    /// Highest salary first.
    SalaryHigh,
    /// Lowest salary first.
    SalaryLow,
    /// Alphabetical by title.
    Title,
}

impl JobSortOrder {
    /// The next option in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Recent => Self::SalaryHigh,
            Self::SalaryHigh => Self::SalaryLow,
            Self::SalaryLow => Self::Title,
            Self::Title => Self::Recent,
        }
    }
}

/// Orders `jobs` in place according to `order`.
///
/// Salary comparisons use [`extract_salary`], so listings without a disclosed
/// salary sort as zero. The sort is stable: ties keep catalog order.
pub fn sort_jobs(jobs: &mut [Job], order: JobSortOrder) {
    match order {
        JobSortOrder::Recent => {}
        JobSortOrder::SalaryHigh => jobs.sort_by(|a, b| {
            extract_salary(b.salary.as_deref()).cmp(&extract_salary(a.salary.as_deref()))
        }),
        JobSortOrder::SalaryLow => jobs.sort_by(|a, b| {
            extract_salary(a.salary.as_deref()).cmp(&extract_salary(b.salary.as_deref()))
        }),
        JobSortOrder::Title => jobs.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

/// Applies the preference-driven feed filters.
///
/// `is_applied` reports whether the user already applied to a job id; it is
/// only consulted when `hide_applied_jobs` is on.
pub fn visible_jobs(
    jobs: Vec<Job>,
    preferences: &UserPreferences,
    is_applied: impl Fn(&str) -> bool,
) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| !preferences.hide_applied_jobs || !is_applied(&job.id))
        .filter(|job| !preferences.remote_only_search || job.job_type == JobType::Remote)
        .collect()
}
