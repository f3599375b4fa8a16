use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::info;
use serde_json::Value;

use seqetl_core::SequenceSetError;
use seqetl_stats::{SeqStatsError, SequenceReport};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::metadata::MetadataSanitizer;

/// A participant file type the pipeline knows how to transform.
pub trait FileProcessor {
    ///
    /// Process the file and return its JSON-ready result.
    ///
    fn process(&self) -> Result<Value>;

    fn path(&self) -> &Path;
}

/// Transform for the DNA sequence text file.
pub struct DnaSequenceProcessor {
    path: PathBuf,
}

impl DnaSequenceProcessor {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        DnaSequenceProcessor { path: path.into() }
    }
}

impl FileProcessor for DnaSequenceProcessor {
    fn process(&self) -> Result<Value> {
        let report = SequenceReport::from_path(&self.path).map_err(|e| match e {
            SeqStatsError::SequenceSet(SequenceSetError::NotFound(path)) => {
                PipelineError::NotFound(path)
            }
            other => PipelineError::SeqStats(other),
        })?;

        info!(
            "Sequence file {}: {} sequences analyzed, {} longest common substrings",
            self.path.display(),
            report.sequences.len(),
            report.lcs.len()
        );

        Ok(serde_json::to_value(report)?)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Validation and redaction of the participant metadata file.
pub struct MetadataProcessor {
    path: PathBuf,
    sanitizer: MetadataSanitizer,
}

impl MetadataProcessor {
    pub fn new<P: Into<PathBuf>>(path: P, sanitizer: MetadataSanitizer) -> Self {
        MetadataProcessor {
            path: path.into(),
            sanitizer,
        }
    }
}

impl FileProcessor for MetadataProcessor {
    fn process(&self) -> Result<Value> {
        if !self.path.is_file() {
            return Err(PipelineError::NotFound(self.path.display().to_string()));
        }

        let content = read_to_string(&self.path)?;
        let data: Value =
            serde_json::from_str(&content).map_err(|source| PipelineError::InvalidJson {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(self.sanitizer.sanitize(data)?)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

///
/// Pick the processor for a file by its type (its extension, case-insensitive).
///
pub fn processor_for(
    path: &Path,
    file_type: &str,
    config: &PipelineConfig,
) -> Result<Box<dyn FileProcessor>> {
    match file_type.to_lowercase().as_str() {
        "txt" => Ok(Box::new(DnaSequenceProcessor::new(path))),
        "json" => Ok(Box::new(MetadataProcessor::new(
            path,
            MetadataSanitizer::from(config),
        ))),
        _ => Err(PipelineError::UnsupportedFileType(file_type.to_string())),
    }
}
