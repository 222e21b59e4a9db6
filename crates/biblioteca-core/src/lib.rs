//! # Biblioteca Core
//!
//! Core types, domain entities, and error definitions for the Biblioteca
//! library catalog. This crate provides the foundational abstractions used
//! across all layers: typed identifiers, the unified error type, the
//! publication-date normalization rule, and validation helpers.

pub mod dates;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use dates::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
