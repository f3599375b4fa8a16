use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, SequenceSetError};
use crate::models::Sequence;
use crate::utils::get_dynamic_reader;

///
/// SequenceSet struct, the representation of a DNA sequence text file:
/// one sequence per line, blank lines ignored.
///
#[derive(Clone, Debug, Default)]
pub struct SequenceSet {
    pub sequences: Vec<Sequence>,
    pub path: Option<PathBuf>,
}

pub struct SequenceSetIterator<'a> {
    sequence_set: &'a SequenceSet,
    index: usize,
}

impl TryFrom<&Path> for SequenceSet {
    type Error = SequenceSetError;

    ///
    /// Create a new [SequenceSet] from a text file.
    ///
    /// Every line is trimmed, lines that end up empty are dropped. Gzip'd
    /// files (`.gz`) are decompressed on the fly.
    ///
    /// # Arguments:
    /// - value: path to the sequence file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        if !value.is_file() {
            return Err(SequenceSetError::NotFound(value.display().to_string()));
        }

        let reader = get_dynamic_reader(value)?;

        let mut lines: Vec<String> = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        let mut sequence_set = SequenceSet::from(lines);
        if sequence_set.is_empty() {
            return Err(SequenceSetError::EmptyInput(value.display().to_string()));
        }
        sequence_set.path = Some(value.to_owned());

        debug!(
            "Loaded {} sequences from {}",
            sequence_set.len(),
            value.display()
        );

        Ok(sequence_set)
    }
}

impl TryFrom<&str> for SequenceSet {
    type Error = SequenceSetError;

    fn try_from(value: &str) -> Result<Self> {
        SequenceSet::try_from(Path::new(value))
    }
}

impl TryFrom<String> for SequenceSet {
    type Error = SequenceSetError;

    fn try_from(value: String) -> Result<Self> {
        SequenceSet::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for SequenceSet {
    type Error = SequenceSetError;

    fn try_from(value: PathBuf) -> Result<Self> {
        SequenceSet::try_from(value.as_path())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for SequenceSet {
    ///
    /// Build a [SequenceSet] from in-memory lines, applying the same
    /// trimming and blank-line filtering as the file reader.
    ///
    fn from(lines: Vec<S>) -> Self {
        let sequences = lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| Sequence::new(i + 1, line))
            .collect();

        SequenceSet {
            sequences,
            path: None,
        }
    }
}

impl<'a> Iterator for SequenceSetIterator<'a> {
    type Item = &'a Sequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.sequence_set.sequences.len() {
            let sequence = &self.sequence_set.sequences[self.index];
            self.index += 1;
            Some(sequence)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = SequenceSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceSetIterator {
            sequence_set: self,
            index: 0,
        }
    }
}

impl SequenceSet {
    pub fn iter(&self) -> SequenceSetIterator<'_> {
        self.into_iter()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    ///
    /// Get a sequence by its 1-based index
    ///
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        index.checked_sub(1).and_then(|i| self.sequences.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs::File;
    use std::io::Write;

    fn write_sequences(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[rstest]
    fn test_open_from_path() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_sequences(
            tempdir.path(),
            "seqs.txt",
            "  ATCGATCG  \n\n   \nGGCCTA\r\nTTTT\n",
        );

        let sequence_set = SequenceSet::try_from(path.as_path()).unwrap();
        let bases: Vec<&str> = sequence_set.iter().map(|s| s.as_str()).collect();
        let indices: Vec<usize> = sequence_set.iter().map(|s| s.index).collect();

        assert_eq!(bases, vec!["ATCGATCG", "GGCCTA", "TTTT"]);
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(sequence_set.path, Some(path));
    }

    #[rstest]
    fn test_open_from_string() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_sequences(tempdir.path(), "seqs.txt", "ATCG\n");
        assert!(SequenceSet::try_from(path.to_str().unwrap()).is_ok());
    }

    #[rstest]
    fn test_missing_file() {
        let result = SequenceSet::try_from("this/file/does/not/exist.txt");
        assert!(matches!(result, Err(SequenceSetError::NotFound(_))));
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case("   \n\t\n  ")]
    fn test_empty_input(#[case] content: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_sequences(tempdir.path(), "seqs.txt", content);

        let result = SequenceSet::try_from(path.as_path());
        assert!(matches!(result, Err(SequenceSetError::EmptyInput(_))));
    }

    #[rstest]
    fn test_get_is_one_based() {
        let sequence_set = SequenceSet::from(vec!["AAA", "", "CCC"]);

        assert_eq!(sequence_set.len(), 2);
        assert!(sequence_set.get(0).is_none());
        assert_eq!(sequence_set.get(1).unwrap().as_str(), "AAA");
        assert_eq!(sequence_set.get(2).unwrap().as_str(), "CCC");
        assert!(sequence_set.get(3).is_none());
    }
}
