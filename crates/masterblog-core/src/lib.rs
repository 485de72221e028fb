//! # Masterblog Core
//!
//! The domain layer of the Masterblog service.
//! This crate contains the post rules (validation, sorting, search) and the
//! service that applies them, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{DeleteConfirmation, PostService};
