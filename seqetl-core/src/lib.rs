//! # Core models for seqetl.
//!
//! This crate holds the types shared by the rest of the workspace: the [models::Sequence] and
//! [models::SequenceSet] structs that represent a participant's DNA sequence text file, the
//! [errors::SequenceSetError] taxonomy, and small io helpers.
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{Result, SequenceSetError};
