//! Full transform of one DNA sequence file into a [SequenceReport].

use std::path::Path;

use log::info;

use seqetl_core::models::SequenceSet;

use crate::errors::Result;
use crate::lcs::all_pairs_lcs;
use crate::models::{CodonFrequencyTable, SequenceReport};
use crate::statistics::{SequenceSetStatistics, most_frequent_codons};

impl TryFrom<&SequenceSet> for SequenceReport {
    type Error = crate::errors::SeqStatsError;

    ///
    /// Compute per-sequence statistics, the most common codons and the longest
    /// common substrings for a set of sequences.
    ///
    fn try_from(sequence_set: &SequenceSet) -> Result<Self> {
        let sequences = sequence_set.sequence_statistics();

        let codon_freqs: Vec<CodonFrequencyTable> =
            sequences.iter().map(|stat| stat.codons.clone()).collect();
        let most_common_codon = most_frequent_codons(&codon_freqs)?;

        let lcs = all_pairs_lcs(sequence_set);

        Ok(SequenceReport {
            sequences,
            most_common_codon,
            lcs,
        })
    }
}

impl SequenceReport {
    ///
    /// Load a sequence text file and transform it.
    ///
    /// # Arguments
    /// - path: path to the sequence file, optionally gzip'd
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let sequence_set = SequenceSet::try_from(path)?;

        info!(
            "Processing {} sequences from {}",
            sequence_set.len(),
            path.display()
        );

        SequenceReport::try_from(&sequence_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use seqetl_core::SequenceSetError;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::errors::SeqStatsError;
    use crate::models::LcsResult;

    fn write_sequences(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("sequences.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[rstest]
    fn test_report_from_path() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_sequences(
            tempdir.path(),
            "ATCGATCGTAGCTAGCTAGCTGATCGATCGAT\n\nATCGGTAAATGCCTGAAAGATG\n",
        );

        let report = SequenceReport::from_path(&path).unwrap();

        assert_eq!(report.sequences.len(), 2);
        assert_eq!(report.sequences[0].gc_content, 46.88);
        assert_eq!(report.sequences[1].gc_content, 40.91);
        assert_eq!(
            report.lcs,
            vec![LcsResult {
                value: "ATCG".to_string(),
                sequences: vec![1, 2],
                length: 4,
            }]
        );
        assert_eq!(report.most_common_codon, vec!["GAT"]);
    }

    #[rstest]
    fn test_report_single_sequence() {
        let set = SequenceSet::from(vec!["ATGATGCCC"]);
        let report = SequenceReport::try_from(&set).unwrap();

        assert!(report.lcs.is_empty());
        assert_eq!(report.most_common_codon, vec!["ATG"]);
    }

    #[rstest]
    fn test_report_is_idempotent() {
        let set = SequenceSet::from(vec!["ATCGGCTA", "GGCTAATC", "TTAGGCTA"]);

        let first = serde_json::to_string(&SequenceReport::try_from(&set).unwrap()).unwrap();
        let second = serde_json::to_string(&SequenceReport::try_from(&set).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_report_json_shape() {
        let set = SequenceSet::from(vec!["ATGATG", "ATGCCC"]);
        let report = SequenceReport::try_from(&set).unwrap();

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sequences": [
                    { "gc_content": 33.33, "codons": { "ATG": 2 } },
                    { "gc_content": 66.67, "codons": { "ATG": 1, "CCC": 1 } }
                ],
                "most_common_codon": ["ATG"],
                "lcs": [ { "value": "ATG", "sequences": [1, 2], "length": 3 } ]
            })
        );
    }

    #[rstest]
    fn test_report_all_sequences_failing() {
        let mut set = SequenceSet::from(vec!["ATG"]);
        set.sequences[0].bases.clear();

        let result = SequenceReport::try_from(&set);
        assert!(matches!(result, Err(SeqStatsError::NoData)));
    }

    #[rstest]
    fn test_report_missing_file() {
        let result = SequenceReport::from_path("not/a/real/file.txt");
        assert!(matches!(
            result,
            Err(SeqStatsError::SequenceSet(SequenceSetError::NotFound(_)))
        ));
    }
}
