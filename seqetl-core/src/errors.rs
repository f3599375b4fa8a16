use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceSetError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("No valid DNA sequences found in the file: {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SequenceSetError>;
