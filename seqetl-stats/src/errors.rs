use seqetl_core::SequenceSetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqStatsError {
    #[error("The sequence cannot be empty.")]
    EmptySequence,
    #[error("No codon frequencies provided.")]
    NoData,
    #[error(transparent)]
    SequenceSet(#[from] SequenceSetError),
}

pub type Result<T> = std::result::Result<T, SeqStatsError>;
