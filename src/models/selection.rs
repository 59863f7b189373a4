use std::collections::BTreeSet;

use crate::models::Letter;

const INVALID_SELECTION: &str = "Answers must be the letters A-D, several letters separated by /";

/// The set of letters a user submitted for one question.
///
/// Non-empty by construction: parsing rejects input with no valid letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(BTreeSet<Letter>);

impl Selection {
    /// Parses one line of user input.
    ///
    /// Case-insensitive, split on `/`; duplicates collapse and order does
    /// not matter, so "a/c", "A/C" and "C/A" are the same selection.
    /// Returns a user-facing message on anything that is not pure A-D
    /// letters.
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        let raw = raw.strip_suffix('\n').unwrap_or(raw);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let mut letters = BTreeSet::new();
        for token in raw.split('/') {
            let letter = token.parse::<Letter>().map_err(|_| INVALID_SELECTION)?;
            letters.insert(letter);
        }

        Ok(Self(letters))
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// Number of distinct letters in the selection, between 1 and 4.
    pub fn count(&self) -> usize {
        self.0.len()
    }
}
