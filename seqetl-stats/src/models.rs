use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Codon to occurrence count. Keys are kept in lexicographic order so that
/// serialized output is stable between runs.
pub type CodonFrequencyTable = BTreeMap<String, u64>;

/// Statistics for a single sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStat {
    /// Percentage of `G`/`C` characters, rounded to two decimals
    pub gc_content: f64,
    /// Non-overlapping codon counts
    pub codons: CodonFrequencyTable,
}

/// One longest common substring and the sequences that share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsResult {
    /// The substring itself
    pub value: String,
    /// 1-based indices of the sequences sharing `value`, ascending and unique
    pub sequences: Vec<usize>,
    /// Length of `value` in characters
    pub length: usize,
}

/// The transform output for one DNA sequence file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub sequences: Vec<SequenceStat>,
    pub most_common_codon: Vec<String>,
    pub lcs: Vec<LcsResult>,
}
