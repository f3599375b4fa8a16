pub mod sequence;
pub mod sequence_set;

// re-export for cleaner imports
pub use self::sequence::Sequence;
pub use self::sequence_set::SequenceSet;
