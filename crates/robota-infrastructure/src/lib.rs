pub mod fs_backend;
pub mod mock_jobs;
pub mod paths;
pub mod storage;

pub use crate::fs_backend::FsKeyValueBackend;
pub use crate::mock_jobs::MockJobCatalog;
pub use crate::paths::RobotaPaths;
