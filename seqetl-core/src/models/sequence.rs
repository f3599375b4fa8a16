use std::fmt::{self, Display};

///
/// Sequence struct, one line of a DNA sequence text file.
///
/// `index` is the 1-based position of the sequence in its file and is the
/// identity used when reporting results.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Sequence {
    pub index: usize,
    pub bases: String,
}

impl Sequence {
    pub fn new(index: usize, bases: impl Into<String>) -> Self {
        Sequence {
            index,
            bases: bases.into(),
        }
    }

    ///
    /// Number of characters in the sequence
    ///
    pub fn len(&self) -> usize {
        self.bases.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.bases
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bases)
    }
}
