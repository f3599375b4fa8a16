use std::fmt::{self, Display};
use std::io;

use seqetl_stats::SeqStatsError;
use thiserror::Error;

/// Problems with the input descriptor or the participant directory.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is empty.")]
    EmptyPath(&'static str),

    #[error("Invalid {name}: {path} does not exist.")]
    PathNotFound { name: &'static str, path: String },

    #[error("Invalid {name}: {path} must be a directory.")]
    NotADirectory { name: &'static str, path: String },

    #[error("Invalid context_path structure: {0}. It must have a UUID as the directory name.")]
    InvalidContextPath(String),

    #[error(
        "Invalid results_path structure: {0}. It must have a UUID as the grandparent directory and 'out' as the parent directory."
    )]
    InvalidResultsPath(String),

    #[error("UUID mismatch between context_path and results_path: {context} != {results}")]
    UuidMismatch { context: String, results: String },

    #[error("The context_path directory is empty: {0}")]
    EmptyContextDirectory(String),

    #[error("Invalid file extension: {extension} for file {file}.")]
    InvalidExtension { extension: String, file: String },

    #[error(
        "UUID {found} does not match the current UUID {expected}, there is a file with a different UUID in the context_path directory."
    )]
    ForeignFile { found: String, expected: String },

    #[error("Expected exactly one '.{extension}' file in the context_path directory, found {count}.")]
    FileCount { extension: String, count: usize },
}

/// Problems with the content of a participant metadata file.
#[derive(Error, Debug, PartialEq)]
pub enum MetadataError {
    #[error("The string '{value}' exceeds {max} characters.")]
    StringTooLong { value: String, max: usize },

    #[error("Date '{0}' is out of the allowed range.")]
    DateOutOfRange(String),

    #[error("Invalid date of birth format.")]
    InvalidBirthDate,

    #[error("Participant must be at least {minimum} years old, and they are {age}.")]
    ParticipantTooYoung { minimum: i64, age: i64 },
}

/// Stage of the pipeline an error surfaced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Extract,
    Transform,
    Load,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validate => "validate",
            Stage::Extract => "extract",
            Stage::Transform => "transform",
            Stage::Load => "load",
        };
        write!(f, "{}", name)
    }
}

/// Error type for seqetl-pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid data in file: {0}")]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    SeqStats(#[from] SeqStatsError),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid JSON file format in {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input descriptor: {0}")]
    InvalidInput(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("ETL process failed during {stage}: {source}")]
    Failed {
        stage: Stage,
        #[source]
        source: Box<PipelineError>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PipelineError {
    pub fn at(self, stage: Stage) -> PipelineError {
        PipelineError::Failed {
            stage,
            source: Box::new(self),
        }
    }
}

/// Result type alias for seqetl-pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
