//! # Biblioteca Repository
//!
//! Persistence layer for the library catalog: the per-entity repository
//! traits (the entity-store contract) and the in-memory document store that
//! implements them. All operations are single-document point operations;
//! there are no multi-document transactions.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
