//! Job listing domain: models, salary helpers, and the catalog port.

pub mod model;
pub mod salary;
pub mod service;

pub use model::{Job, JobSearchParams, JobType};
pub use service::JobCatalog;
