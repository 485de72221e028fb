//! # Masterblog Infrastructure
//!
//! Concrete implementations of the ports defined in `masterblog-core`.
//! Posts live in process memory only and are lost on restart.

pub mod repository;

pub use repository::InMemoryPostRepository;
