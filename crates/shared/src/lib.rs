//! Shared types, errors, and configuration for Chama.
//!
//! This crate provides the pieces every other crate leans on:
//! - Minor-unit money parsing and display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
