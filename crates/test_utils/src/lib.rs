//! Test Utilities Crate
//!
//! Shared test infrastructure for the staff claims test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `adapters`: Failure-injecting port implementations

pub mod adapters;
pub mod builders;
pub mod generators;

pub use adapters::*;
pub use builders::*;
pub use generators::*;
