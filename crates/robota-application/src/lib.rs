pub mod job_feed;
pub mod services;

pub use crate::job_feed::{JobSortOrder, sort_jobs, visible_jobs};
pub use crate::services::AppServices;
