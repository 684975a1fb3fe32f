//! Core components and types shared across sjakie.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Common types, result aliases, and the triage wire types.

pub mod config;
pub mod types;
