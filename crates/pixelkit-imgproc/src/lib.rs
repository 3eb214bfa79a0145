#![deny(missing_docs)]
//! Spatial filtering operations on images.

/// Error types for the filtering routines.
pub mod error;

/// image filtering module.
pub mod filter;

pub use crate::error::FilterError;
