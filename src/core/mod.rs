//! Core types shared by the helper registry and the Tera adapter.
//!
//! At the moment this is only the error type; see [`HelperError`].

pub mod error;

pub use error::{HelperError, Result};
