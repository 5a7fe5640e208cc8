//! Core types and shared functionality for reps.
//!
//! This crate provides:
//! - Representative data model (offices, officials, addresses)
//! - The `RepFinder` lookup capability
//! - Unified error types, including the upstream API error
//! - Configuration structures

pub mod config;
pub mod error;
pub mod finder;
pub mod model;

pub use config::{CacheConfig, ConfigError};
pub use error::{ApiError, ApiErrorDetail, Error};
pub use finder::RepFinder;
pub use model::{Address, Channel, LocalReps, Lookup, Office, Official, RepresentativeResponse};
