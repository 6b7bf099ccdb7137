//! LodeKV Core Library
//!
//! This crate provides the error types shared by every LodeKV component.
//!
//! # Modules
//!
//! - `error` - Error types and result aliases

pub mod error;

pub use error::{Error, Result};
