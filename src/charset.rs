use std::fmt;

use crate::PasswordConfig;

/// Digits.
pub const NUMERIC_CHARS: &str = "0123456789";
/// Lowercase ASCII letters.
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Built-in special symbols, used unless the configuration overrides them.
pub const SPECIAL_CHARS: &str = "!@#$%&*()-_=+[]{}<>:?";

/// One of the four character classes a password policy can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
    /// `0-9`
    Numeric,
    /// Special symbols, built-in or overridden
    Special,
}

impl CharClass {
    /// Every class, in the order used for pool assembly and minimum sampling.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Numeric,
        CharClass::Special,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            CharClass::Upper => 0,
            CharClass::Lower => 1,
            CharClass::Numeric => 2,
            CharClass::Special => 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Numeric => "numeric",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// The resolved source symbols for each character class.
///
/// The special class is replaced wholesale by a non-empty override. An
/// override may share symbols with another class; no deduplication is done,
/// so a shared symbol simply appears in both sets.
///
/// # Examples
///
/// ```
/// use passgen_core::{CharClass, CharSets};
///
/// let sets = CharSets::new(Some("#$%"));
/// assert_eq!(sets.class(CharClass::Special), &['#', '$', '%']);
/// assert_eq!(sets.class(CharClass::Numeric).len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSets {
    sets: [Vec<char>; 4],
}

impl CharSets {
    /// Resolves the four class sets, applying a special-set override if present.
    pub fn new(override_special: Option<&str>) -> Self {
        let special = match override_special {
            Some(custom) if !custom.is_empty() => custom,
            _ => SPECIAL_CHARS,
        };

        Self {
            sets: [
                UPPER_CHARS.chars().collect(),
                LOWER_CHARS.chars().collect(),
                NUMERIC_CHARS.chars().collect(),
                special.chars().collect(),
            ],
        }
    }

    /// Resolves the class sets for a configuration.
    pub fn for_config(config: &PasswordConfig) -> Self {
        Self::new(config.override_special.as_deref())
    }

    /// Returns the source symbols of one class.
    pub fn class(&self, class: CharClass) -> &[char] {
        &self.sets[class.index()]
    }

    /// Returns `true` if `c` belongs to `class`.
    pub fn contains(&self, class: CharClass, c: char) -> bool {
        self.class(class).contains(&c)
    }

    /// Builds the general filler pool: every enabled class, in [`CharClass::ALL`] order.
    ///
    /// Each enabled class contributes its full set exactly once. The result
    /// is empty when no class is enabled.
    pub fn pool(&self, config: &PasswordConfig) -> Vec<char> {
        CharClass::ALL
            .iter()
            .filter(|class| config.is_enabled(**class))
            .flat_map(|class| self.class(*class).iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(upper: bool, lower: bool, number: bool, special: bool) -> PasswordConfig {
        PasswordConfig {
            upper,
            lower,
            number,
            special,
            ..PasswordConfig::default()
        }
    }

    #[test]
    fn builtin_classes_do_not_overlap() {
        let sets = CharSets::new(None);
        for a in CharClass::ALL {
            for b in CharClass::ALL {
                if a == b {
                    continue;
                }
                assert!(
                    sets.class(a).iter().all(|c| !sets.contains(b, *c)),
                    "{} overlaps {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn empty_override_keeps_builtin_special() {
        let sets = CharSets::new(Some(""));
        let expected: Vec<char> = SPECIAL_CHARS.chars().collect();
        assert_eq!(sets.class(CharClass::Special), expected.as_slice());
    }

    #[test]
    fn override_replaces_special_entirely() {
        let sets = CharSets::new(Some("~^"));
        assert_eq!(sets.class(CharClass::Special), &['~', '^']);
        assert!(!sets.contains(CharClass::Special, '!'));
    }

    #[test]
    fn override_handles_multibyte_symbols() {
        let sets = CharSets::new(Some("§€"));
        assert_eq!(sets.class(CharClass::Special), &['§', '€']);
    }

    #[test]
    fn pool_follows_fixed_class_order() {
        let sets = CharSets::new(None);
        let pool = sets.pool(&config(true, true, true, true));

        let expected: String = [UPPER_CHARS, LOWER_CHARS, NUMERIC_CHARS, SPECIAL_CHARS].concat();
        assert_eq!(pool.iter().collect::<String>(), expected);
    }

    #[test]
    fn pool_skips_disabled_classes() {
        let sets = CharSets::new(None);
        let pool = sets.pool(&config(false, true, false, true));

        let expected: String = [LOWER_CHARS, SPECIAL_CHARS].concat();
        assert_eq!(pool.iter().collect::<String>(), expected);
    }

    #[test]
    fn pool_is_empty_when_nothing_enabled() {
        let sets = CharSets::new(None);
        assert!(sets.pool(&config(false, false, false, false)).is_empty());
    }

    #[test]
    fn overlapping_override_is_included_once_per_class() {
        // "abc" overlaps lowercase; each class still contributes its own set once
        let sets = CharSets::new(Some("abc"));
        let pool = sets.pool(&config(false, true, false, true));

        assert_eq!(pool.len(), LOWER_CHARS.len() + 3);
        assert_eq!(pool.iter().filter(|c| **c == 'a').count(), 2);
        assert!(sets.contains(CharClass::Lower, 'a'));
        assert!(sets.contains(CharClass::Special, 'a'));
    }
}
