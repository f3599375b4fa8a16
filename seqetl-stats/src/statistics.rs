//! Per-sequence statistics and codon aggregation for SequenceSets
//!
//! GC content and codon frequencies are computed per sequence. A sequence that fails
//! analysis is logged and skipped so one bad line never aborts the whole file.
//!

use log::error;

use seqetl_core::models::SequenceSet;

use crate::errors::{Result, SeqStatsError};
use crate::models::{CodonFrequencyTable, SequenceStat};

/// Length of a codon in characters.
pub const CODON_LENGTH: usize = 3;

/// Trait for computing statistics over the sequences of a file.
pub trait SequenceSetStatistics {
    /// Calculate GC content and codon frequencies for every sequence.
    ///
    /// Sequences that fail analysis are skipped, so the returned list can be shorter
    /// than the set.
    fn sequence_statistics(&self) -> Vec<SequenceStat>;

    /// Codons with the highest combined frequency across all analyzable sequences.
    fn most_common_codons(&self) -> Result<Vec<String>> {
        let tables: Vec<CodonFrequencyTable> = self
            .sequence_statistics()
            .into_iter()
            .map(|stat| stat.codons)
            .collect();
        most_frequent_codons(&tables)
    }
}

impl SequenceSetStatistics for SequenceSet {
    fn sequence_statistics(&self) -> Vec<SequenceStat> {
        let mut stats: Vec<SequenceStat> = Vec::with_capacity(self.len());

        for sequence in self {
            match analyze_sequence(sequence.as_str()) {
                Ok(stat) => stats.push(stat),
                Err(e) => {
                    error!("Error processing sequence {}: {}", sequence.index, e);
                    continue;
                }
            }
        }

        stats
    }
}

///
/// GC content and codon frequencies of one sequence.
///
pub fn analyze_sequence(sequence: &str) -> Result<SequenceStat> {
    Ok(SequenceStat {
        gc_content: gc_content(sequence)?,
        codons: codon_frequency(sequence)?,
    })
}

///
/// Percentage of characters in `sequence` that are `G` or `C`, rounded to two decimals.
///
/// Every character counts toward the denominator, including ambiguous bases and
/// anything else that is not `A`, `T`, `G` or `C`. Matching is case-sensitive.
///
pub fn gc_content(sequence: &str) -> Result<f64> {
    if sequence.is_empty() {
        return Err(SeqStatsError::EmptySequence);
    }

    let mut gc_count: u64 = 0;
    let mut total_count: u64 = 0;
    for base in sequence.chars() {
        if matches!(base, 'G' | 'C') {
            gc_count += 1;
        }
        total_count += 1;
    }

    Ok(round_to_hundredths(
        gc_count as f64 / total_count as f64 * 100.0,
    ))
}

///
/// Count codons in `sequence`, read as consecutive non-overlapping triplets from
/// position 0. One or two trailing characters that do not form a full codon are dropped.
///
pub fn codon_frequency(sequence: &str) -> Result<CodonFrequencyTable> {
    if sequence.is_empty() {
        return Err(SeqStatsError::EmptySequence);
    }

    let mut codon_freqs = CodonFrequencyTable::new();

    if sequence.is_ascii() {
        for codon in sequence.as_bytes().chunks_exact(CODON_LENGTH) {
            // ascii chunks always land on char boundaries
            let codon = String::from_utf8_lossy(codon);
            match codon_freqs.get_mut(codon.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    codon_freqs.insert(codon.into_owned(), 1);
                }
            }
        }
    } else {
        let chars: Vec<char> = sequence.chars().collect();
        for codon in chars.chunks_exact(CODON_LENGTH) {
            *codon_freqs.entry(codon.iter().collect()).or_insert(0) += 1;
        }
    }

    Ok(codon_freqs)
}

///
/// Find the most frequent codons across several codon frequency tables.
///
/// Counts are summed per codon; empty tables are skipped. Every codon tied at the
/// maximum combined count is returned, in lexicographic order. When every table is
/// empty the result is empty.
///
pub fn most_frequent_codons(codon_freqs: &[CodonFrequencyTable]) -> Result<Vec<String>> {
    if codon_freqs.is_empty() {
        return Err(SeqStatsError::NoData);
    }

    let mut combined = CodonFrequencyTable::new();
    for freq in codon_freqs.iter().filter(|freq| !freq.is_empty()) {
        for (codon, count) in freq {
            *combined.entry(codon.clone()).or_insert(0) += count;
        }
    }

    let max_freq = combined.values().copied().max().unwrap_or(0);

    Ok(combined
        .into_iter()
        .filter(|(_, count)| *count == max_freq)
        .map(|(codon, _)| codon)
        .collect())
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
