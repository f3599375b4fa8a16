//! Longest common substring search.
//!
//! [longest_common_substring] compares two strings with the classic dynamic programming
//! recurrence: `dp[i][j]` is the length of the common run ending at `a[i - 1]` and
//! `b[j - 1]`, `dp[i - 1][j - 1] + 1` when the characters match and `0` otherwise.
//! Only two rows of the table are kept alive, so memory is `O(len(b))` while time is
//! `O(len(a) * len(b))`.
//!
//! [all_pairs_lcs] runs that comparison for every unordered pair of sequences in a
//! [SequenceSet] and keeps the longest results.
//!
//! Tie policy: every pair whose substring reaches the best length is kept. Pairs are
//! grouped by the substring value, groups are reported in the order their value was
//! first found, and each group lists the 1-based indices of all sequences that shared it,
//! ascending and without duplicates.
//!

use std::collections::BTreeSet;

use log::debug;

use seqetl_core::models::SequenceSet;

use crate::models::LcsResult;

/// A common substring of two strings, borrowed from the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonSubstring<'a> {
    pub value: &'a str,
    /// Length in characters
    pub length: usize,
}

///
/// Find the longest common contiguous substring of `a` and `b`.
///
/// When several substrings share the maximal length, the one whose end comes first
/// in `a` wins. Returns `""` if either input is empty or they share no character.
///
pub fn longest_common_substring<'a>(a: &'a str, b: &str) -> &'a str {
    common_substring(a, b).value
}

///
/// Same as [longest_common_substring], also reporting the length in characters.
///
pub fn common_substring<'a>(a: &'a str, b: &str) -> CommonSubstring<'a> {
    if a.is_empty() || b.is_empty() {
        return CommonSubstring {
            value: "",
            length: 0,
        };
    }

    if a.is_ascii() && b.is_ascii() {
        let (end, length) = longest_common_run(a.as_bytes(), b.as_bytes());
        return CommonSubstring {
            value: &a[end - length..end],
            length,
        };
    }

    let a_chars: Vec<(usize, char)> = a.char_indices().collect();
    let a_bases: Vec<char> = a_chars.iter().map(|(_, c)| *c).collect();
    let b_bases: Vec<char> = b.chars().collect();

    let (end, length) = longest_common_run(&a_bases, &b_bases);
    if length == 0 {
        return CommonSubstring {
            value: "",
            length: 0,
        };
    }

    let start_byte = a_chars[end - length].0;
    let end_byte = a_chars.get(end).map_or(a.len(), |(offset, _)| *offset);

    CommonSubstring {
        value: &a[start_byte..end_byte],
        length,
    }
}

///
/// Core of the substring search over any comparable alphabet.
///
/// Returns `(end, length)` where `a[end - length..end]` is the longest run shared
/// with `b`. A later run replaces the current best only when it is strictly longer.
///
fn longest_common_run<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize) {
    let m = b.len();

    // column 0 is never written and stays 0 in both rows
    let mut prev: Vec<usize> = vec![0; m + 1];
    let mut curr: Vec<usize> = vec![0; m + 1];

    let mut max_length = 0;
    let mut end_index = 0;

    for (i, a_base) in a.iter().enumerate() {
        for (j, b_base) in b.iter().enumerate() {
            if a_base == b_base {
                curr[j + 1] = prev[j] + 1;
                if curr[j + 1] > max_length {
                    max_length = curr[j + 1];
                    end_index = i + 1;
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (end_index, max_length)
}

///
/// Running state of the all-pairs search: the best length seen so far and the
/// substrings that reached it, each with the sequences that share it.
///
#[derive(Debug, Default)]
pub struct LcsAccumulator {
    best_length: usize,
    groups: Vec<(String, BTreeSet<usize>)>,
}

impl LcsAccumulator {
    ///
    /// Fold the result for the pair `(first, second)` into the running state.
    ///
    pub fn observe(&mut self, candidate: CommonSubstring<'_>, first: usize, second: usize) {
        if candidate.length > self.best_length {
            self.best_length = candidate.length;
            self.groups = vec![(
                candidate.value.to_string(),
                BTreeSet::from([first, second]),
            )];
        } else if candidate.length == self.best_length && self.best_length > 0 {
            match self
                .groups
                .iter_mut()
                .find(|(value, _)| value == candidate.value)
            {
                Some((_, indices)) => {
                    indices.insert(first);
                    indices.insert(second);
                }
                None => self.groups.push((
                    candidate.value.to_string(),
                    BTreeSet::from([first, second]),
                )),
            }
        }
    }

    pub fn best_length(&self) -> usize {
        self.best_length
    }

    pub fn finish(self) -> Vec<LcsResult> {
        if self.best_length == 0 {
            return vec![];
        }

        let length = self.best_length;
        self.groups
            .into_iter()
            .map(|(value, indices)| LcsResult {
                value,
                sequences: indices.into_iter().collect(),
                length,
            })
            .collect()
    }
}

///
/// Longest common substrings across every unordered pair of sequences.
///
/// Pairs are visited in lexicographic order of their 1-based indices. Returns an
/// empty list when there are fewer than two sequences or no pair shares a character.
///
pub fn all_pairs_lcs(sequence_set: &SequenceSet) -> Vec<LcsResult> {
    if sequence_set.len() < 2 {
        return vec![];
    }

    let sequences = &sequence_set.sequences;
    let mut accumulator = LcsAccumulator::default();

    for (i, first) in sequences.iter().enumerate() {
        for second in &sequences[i + 1..] {
            let candidate = common_substring(first.as_str(), second.as_str());
            debug!(
                "LCS between sequences {} and {}: length {}",
                first.index, second.index, candidate.length
            );
            accumulator.observe(candidate, first.index, second.index);
        }
    }

    accumulator.finish()
}
