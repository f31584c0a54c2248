//! Checking a string against composition rules.
//!
//! [`Composition::tally`] counts how many symbols of a string fall into each
//! class. [`check`] compares such a tally with a [`PasswordConfig`]. Errors
//! report positions and counts only, never the symbols themselves.
//!
//! Class membership is not exclusive: when an overridden special set shares
//! symbols with another class, a shared symbol counts toward both.

use thiserror::Error;

use crate::{
    charset::{CharClass, CharSets},
    PasswordConfig,
};

/// Per-class symbol counts for one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    counts: [usize; 4],
    len: usize,
    first_unclassified: Option<usize>,
}

impl Composition {
    /// Counts the symbols of `password` per class.
    ///
    /// # Examples
    ///
    /// ```
    /// use passgen_core::{CharClass, CharSets, Composition};
    ///
    /// let tally = Composition::tally("aB3$x", &CharSets::new(None));
    /// assert_eq!(tally.count(CharClass::Lower), 2);
    /// assert_eq!(tally.count(CharClass::Special), 1);
    /// assert_eq!(tally.len(), 5);
    /// ```
    pub fn tally(password: &str, sets: &CharSets) -> Self {
        let mut counts = [0usize; 4];
        let mut len = 0;
        let mut first_unclassified = None;

        for (position, c) in password.chars().enumerate() {
            len += 1;
            let mut classified = false;
            for (slot, class) in counts.iter_mut().zip(CharClass::ALL) {
                if sets.contains(class, c) {
                    *slot += 1;
                    classified = true;
                }
            }
            if !classified && first_unclassified.is_none() {
                first_unclassified = Some(position);
            }
        }

        Self {
            counts,
            len,
            first_unclassified,
        }
    }

    /// Number of symbols belonging to `class`.
    pub fn count(&self, class: CharClass) -> usize {
        self.counts[class.index()]
    }

    /// Number of characters tallied.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was tallied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first character outside every class, if any.
    pub fn first_unclassified(&self) -> Option<usize> {
        self.first_unclassified
    }
}

/// Why a string does not satisfy a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComplianceError {
    /// The string has the wrong number of characters
    #[error("expected {expected} characters, found {actual}")]
    WrongLength {
        /// Configured length
        expected: usize,
        /// Characters in the string
        actual: usize,
    },
    /// A class minimum is not met
    #[error("expected at least {required} {class} characters, found {found}")]
    BelowMinimum {
        /// The class that falls short
        class: CharClass,
        /// Configured minimum
        required: usize,
        /// Characters of that class in the string
        found: usize,
    },
    /// A character belongs to no class the configuration allows
    #[error("character at position {position} is outside the allowed classes")]
    DisallowedSymbol {
        /// Zero-based character position
        position: usize,
    },
}

/// Checks that `password` could have been produced from `config`.
///
/// Length is checked first, then minimums in [`CharClass::ALL`] order, then
/// membership: every character must belong to an enabled class or to a class
/// with a non-zero minimum.
///
/// # Errors
///
/// Returns the first [`ComplianceError`] found.
pub fn check(password: &str, config: &PasswordConfig) -> Result<Composition, ComplianceError> {
    let sets = CharSets::for_config(config);
    let tally = Composition::tally(password, &sets);

    if tally.len() != config.length {
        return Err(ComplianceError::WrongLength {
            expected: config.length,
            actual: tally.len(),
        });
    }

    for (class, required) in config.minimums() {
        let found = tally.count(class);
        if found < required {
            return Err(ComplianceError::BelowMinimum {
                class,
                required,
                found,
            });
        }
    }

    let allowed: Vec<CharClass> = CharClass::ALL
        .into_iter()
        .filter(|class| config.is_enabled(*class) || config.minimum(*class) > 0)
        .collect();
    if let Some(position) = password
        .chars()
        .position(|c| !allowed.iter().any(|class| sets.contains(*class, c)))
    {
        return Err(ComplianceError::DisallowedSymbol { position });
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_specials(length: usize) -> PasswordConfig {
        PasswordConfig {
            length,
            special: false,
            ..PasswordConfig::default()
        }
    }

    #[test]
    fn tally_counts_each_class() {
        let tally = Composition::tally("AAb12!?", &CharSets::new(None));
        assert_eq!(tally.count(CharClass::Upper), 2);
        assert_eq!(tally.count(CharClass::Lower), 1);
        assert_eq!(tally.count(CharClass::Numeric), 2);
        assert_eq!(tally.count(CharClass::Special), 2);
        assert_eq!(tally.first_unclassified(), None);
    }

    #[test]
    fn tally_reports_unclassified_position() {
        let tally = Composition::tally("ab cd", &CharSets::new(None));
        assert_eq!(tally.first_unclassified(), Some(2));
    }

    #[test]
    fn shared_override_symbol_counts_twice() {
        let tally = Composition::tally("a", &CharSets::new(Some("a")));
        assert_eq!(tally.count(CharClass::Lower), 1);
        assert_eq!(tally.count(CharClass::Special), 1);
    }

    #[test]
    fn check_rejects_wrong_length() {
        let err = check("abc", &no_specials(4)).unwrap_err();
        assert_eq!(
            err,
            ComplianceError::WrongLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn check_rejects_missing_minimum() {
        let config = PasswordConfig {
            min_numeric: 2,
            ..no_specials(4)
        };
        let err = check("ab1c", &config).unwrap_err();
        assert_eq!(
            err,
            ComplianceError::BelowMinimum {
                class: CharClass::Numeric,
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn check_rejects_disabled_class_without_minimum() {
        let err = check("ab!c", &no_specials(4)).unwrap_err();
        assert_eq!(err, ComplianceError::DisallowedSymbol { position: 2 });
        assert!(!err.to_string().contains('!'));
    }

    #[test]
    fn check_accepts_disabled_class_with_minimum() {
        let config = PasswordConfig {
            min_special: 1,
            ..no_specials(4)
        };
        let tally = check("ab!c", &config).unwrap();
        assert_eq!(tally.count(CharClass::Special), 1);
    }
}
