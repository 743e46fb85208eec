//! Domain models for course catalogs.
//!
//! This module contains the course record, the in-memory catalog that
//! answers lookups, and the parser configuration.

/// Course record model.
pub mod course;
pub use course::Course;

/// Load-ordered collection of courses with lookup and ordering.
pub mod catalog;
pub use catalog::{Catalog, Prerequisite};

mod config;
pub use config::Config;
