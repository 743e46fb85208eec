//! Plain-text Course Catalogs
//!
//! Courses are read from a whitespace-delimited text file, one course per
//! line, and can then be listed in order or looked up with their
//! prerequisites.

pub mod domain;
pub use domain::{Catalog, Config, Course, Prerequisite};

/// Reading course catalogs from text sources.
pub mod storage;
pub use storage::{LoadError, load};
