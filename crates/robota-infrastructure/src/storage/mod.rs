//! Low-level storage primitives for snapshot files.

pub mod atomic_file;

pub use atomic_file::{AtomicFile, AtomicFileError};
