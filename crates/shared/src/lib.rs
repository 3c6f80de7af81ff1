//! Shared configuration and errors for Moneta.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application configuration (default currency, exchange rates, logging)
//! - The process-level error type used at the edges (CLI, embedders)

pub mod config;
pub mod error;

pub use config::{AppConfig, LoggingConfig, MoneyConfig};
pub use error::{AppError, AppResult};
