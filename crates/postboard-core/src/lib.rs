//! # Postboard Core
//!
//! The domain layer of the Postboard backend.
//! This crate contains the post types and the ports that infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
