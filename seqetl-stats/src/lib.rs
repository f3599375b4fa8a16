//! Sequence statistics for DNA sequence text files.
//!
//! This crate implements the transform stage for a participant's sequence file:
//!
//! - GC content and codon frequencies per sequence
//! - The most common codons across all sequences
//! - The longest common substrings across every pair of sequences
//!
//! # Example
//!
//! ```no_run
//! use seqetl_stats::SequenceReport;
//!
//! let report = SequenceReport::from_path("participant.txt").unwrap();
//!
//! for lcs in &report.lcs {
//!     println!("{} shared by {:?}", lcs.value, lcs.sequences);
//! }
//! ```

pub mod errors;
pub mod lcs;
pub mod models;
pub mod report;
pub mod statistics;

// re-exports
pub use errors::SeqStatsError;
pub use lcs::{all_pairs_lcs, longest_common_substring};
pub use models::{CodonFrequencyTable, LcsResult, SequenceReport, SequenceStat};
pub use statistics::SequenceSetStatistics;
