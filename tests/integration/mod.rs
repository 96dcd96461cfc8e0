//! Integration test suite for tmpl-helpers
//!
//! End-to-end tests that render real Tera templates through the public API.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! cargo nextest run --test integration
//! ```
//!
//! # Test Organization
//!
//! - **rendering**: helpers called as functions and filters from templates
//! - **failures**: hard faults, soft failures and structured render errors
//! - **config**: `[helpers]` configuration loaded from disk
//! - **markup**: `JSON` output embedded in autoescaped HTML templates
//! - **strings**: the string primitive family inside templates

mod config;
mod failures;
mod markup;
mod rendering;
mod strings;
