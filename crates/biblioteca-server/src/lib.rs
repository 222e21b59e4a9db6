//! # Biblioteca Server Library
//!
//! Wiring and startup utilities for the Biblioteca server binary.

pub mod startup;
pub mod wiring;
