//! Shared types and configuration for Jurnal.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - Pagination types for list screens
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
