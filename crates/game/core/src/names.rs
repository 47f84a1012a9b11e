//! Duplicate-free fighter names.
//!
//! The generator builds every `prefix suffix` combination once, shuffles the
//! pool with its own seeded stream, and hands names out in that order until
//! the pool runs dry. There is no wraparound.

use std::collections::BTreeSet;

use crate::env::{PcgRng, RngSource};
use crate::error::{ErrorSeverity, GameError};

/// Name generation failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("{list} list is empty")]
    EmptyList { list: &'static str },

    #[error("{list} list contains a blank entry at index {index}")]
    BlankEntry { list: &'static str, index: usize },

    #[error("{list} entry {value:?} has surrounding whitespace")]
    Untrimmed { list: &'static str, value: String },

    #[error("{list} entry {value:?} appears more than once")]
    Duplicate { list: &'static str, value: String },

    #[error("all {capacity} names have been issued")]
    Exhausted { capacity: usize },
}

impl GameError for NameError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Exhausted { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyList { .. } => "NAME_EMPTY_LIST",
            Self::BlankEntry { .. } => "NAME_BLANK_ENTRY",
            Self::Untrimmed { .. } => "NAME_UNTRIMMED",
            Self::Duplicate { .. } => "NAME_DUPLICATE",
            Self::Exhausted { .. } => "NAME_EXHAUSTED",
        }
    }
}

/// Shuffled, single-use pool of names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameGenerator {
    pool: Vec<String>,
    cursor: usize,
}

impl NameGenerator {
    /// Validates both lists and shuffles their cross product.
    ///
    /// # Errors
    ///
    /// Fails if either list is empty or holds a blank, untrimmed or repeated
    /// entry.
    pub fn new<P, S>(prefixes: &[P], suffixes: &[S], seed: u64) -> Result<Self, NameError>
    where
        P: AsRef<str>,
        S: AsRef<str>,
    {
        check_list("prefix", prefixes)?;
        check_list("suffix", suffixes)?;

        let mut pool: Vec<String> = prefixes
            .iter()
            .flat_map(|prefix| {
                suffixes
                    .iter()
                    .map(move |suffix| format!("{} {}", prefix.as_ref(), suffix.as_ref()))
            })
            .collect();
        PcgRng::new(seed).shuffle(&mut pool);

        Ok(Self { pool, cursor: 0 })
    }

    /// Issues the next name.
    ///
    /// # Errors
    ///
    /// [`NameError::Exhausted`] once every name has been issued.
    pub fn next_name(&mut self) -> Result<String, NameError> {
        self.try_next_name().ok_or(NameError::Exhausted {
            capacity: self.capacity(),
        })
    }

    /// Issues the next name, or `None` once the pool is used up.
    pub fn try_next_name(&mut self) -> Option<String> {
        let name = self.pool.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(name)
    }

    /// Names still available.
    pub fn remaining(&self) -> usize {
        self.pool.len() - self.cursor
    }

    /// Total names this generator can issue.
    pub fn capacity(&self) -> usize {
        self.pool.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

fn check_list<T: AsRef<str>>(list: &'static str, entries: &[T]) -> Result<(), NameError> {
    if entries.is_empty() {
        return Err(NameError::EmptyList { list });
    }
    let mut seen = BTreeSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let value = entry.as_ref();
        if value.trim().is_empty() {
            return Err(NameError::BlankEntry { list, index });
        }
        if value.trim() != value {
            return Err(NameError::Untrimmed {
                list,
                value: value.to_owned(),
            });
        }
        if !seen.insert(value) {
            return Err(NameError::Duplicate {
                list,
                value: value.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: [&str; 3] = ["Marcus", "Tiberius", "Spiculus"];
    const SUFFIXES: [&str; 2] = ["the Bold", "of Capua"];

    #[test]
    fn issues_every_combination_once() {
        let mut names = NameGenerator::new(&PREFIXES, &SUFFIXES, 42).unwrap();
        assert_eq!(names.capacity(), 6);

        let mut issued: Vec<String> = std::iter::from_fn(|| names.try_next_name()).collect();
        assert_eq!(issued.len(), 6);
        issued.sort();
        issued.dedup();
        assert_eq!(issued.len(), 6);
        assert!(issued.contains(&"Spiculus of Capua".to_owned()));
        assert!(names.is_exhausted());
    }

    #[test]
    fn exhaustion_is_explicit() {
        let mut names = NameGenerator::new(&["Crixus"], &["the Gaul"], 1).unwrap();
        assert_eq!(names.next_name().unwrap(), "Crixus the Gaul");
        assert_eq!(
            names.next_name().unwrap_err(),
            NameError::Exhausted { capacity: 1 }
        );
        assert_eq!(names.try_next_name(), None);
        assert!(
            NameError::Exhausted { capacity: 1 }
                .severity()
                .is_recoverable()
        );
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = NameGenerator::new(&PREFIXES, &SUFFIXES, 7).unwrap();
        let mut b = NameGenerator::new(&PREFIXES, &SUFFIXES, 7).unwrap();
        for _ in 0..6 {
            assert_eq!(a.next_name(), b.next_name());
        }
    }

    #[test]
    fn rejects_malformed_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(
            NameGenerator::new(&empty, &SUFFIXES, 0).unwrap_err(),
            NameError::EmptyList { list: "prefix" }
        );
        assert_eq!(
            NameGenerator::new(&PREFIXES, &["ok", "  "], 0).unwrap_err(),
            NameError::BlankEntry {
                list: "suffix",
                index: 1
            }
        );
        assert!(matches!(
            NameGenerator::new(&[" Marcus"], &SUFFIXES, 0),
            Err(NameError::Untrimmed { .. })
        ));
        assert!(matches!(
            NameGenerator::new(&["Marcus", "Marcus"], &SUFFIXES, 0),
            Err(NameError::Duplicate { .. })
        ));
    }
}
