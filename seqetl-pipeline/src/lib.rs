//! # Extract, transform and load for seqetl participant directories.
//!
//! A participant directory is named by the participant's UUID and holds one DNA
//! sequence text file and one metadata JSON file. [EtlManager] validates the directory,
//! runs the sequence statistics and the metadata sanitizer over the files, and writes a
//! single combined JSON document to the directory's `out` folder.
//!
//! ```no_run
//! use seqetl_pipeline::{EtlManager, PipelineConfig, PipelineInput};
//!
//! let input = PipelineInput::new(
//!     "data/f3324a99-8a63-4ada-9d1d-562f84c7636d",
//!     "data/f3324a99-8a63-4ada-9d1d-562f84c7636d/out",
//! );
//! let output = EtlManager::new(input, PipelineConfig::default()).process().unwrap();
//! println!("wrote {}", output.display());
//! ```
//!
pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod load;
pub mod manager;
pub mod metadata;
pub mod models;
pub mod processors;
pub mod transform;
pub mod validation;

// re-expose the main entry points
pub use config::{PipelineConfig, PipelineInput};
pub use error::*;
pub use load::{JsonWrite, Loader};
pub use manager::EtlManager;
pub use metadata::MetadataSanitizer;
pub use processors::{FileProcessor, processor_for};
