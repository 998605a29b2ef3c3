//! Core Kernel - Foundational types for the staff claims system
//!
//! This crate provides the building blocks used across the domain modules:
//! - Strongly-typed UUID identifiers
//! - Port infrastructure shared by all storage adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{AuditEntryId, ClaimId, LecturerId};
pub use ports::{DomainPort, PortError};
