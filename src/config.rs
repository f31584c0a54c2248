use crate::{
    charset::CharClass,
    error::{ConfigError, ConfigErrorKind},
};

/// Composition rules for one password.
///
/// A configuration is a plain value: build it, pass it by reference to
/// [`generate`](crate::generate), reuse it as often as needed. There is no
/// process-wide default that can be mutated behind a caller's back;
/// [`PasswordConfig::default`] simply constructs a fresh value.
///
/// Enable flags control which classes feed the general filler pool. Minimums
/// are honored independently: a minimum for a disabled class still draws
/// that many symbols from the class.
///
/// # Examples
///
/// ```
/// use passgen_core::{CharClass, PasswordConfig};
///
/// let config = PasswordConfig::builder()
///     .length(12)
///     .special(false)
///     .min(CharClass::Upper, 2)
///     .min(CharClass::Lower, 2)
///     .min(CharClass::Numeric, 2)
///     .build()
///     .expect("minimums fit in the length");
///
/// assert_eq!(config.filler_len(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Total number of characters in the generated password
    pub length: usize,
    /// Uppercase letters feed the general pool
    pub upper: bool,
    /// Lowercase letters feed the general pool
    pub lower: bool,
    /// Digits feed the general pool
    pub number: bool,
    /// Special symbols feed the general pool
    pub special: bool,
    /// Minimum number of uppercase letters
    pub min_upper: usize,
    /// Minimum number of lowercase letters
    pub min_lower: usize,
    /// Minimum number of digits
    pub min_numeric: usize,
    /// Minimum number of special symbols
    pub min_special: usize,
    /// Replacement for the built-in special set; ignored when empty
    pub override_special: Option<String>,
}

impl Default for PasswordConfig {
    /// 32 characters from every class, no minimums, built-in special set.
    fn default() -> Self {
        Self {
            length: 32,
            upper: true,
            lower: true,
            number: true,
            special: true,
            min_upper: 0,
            min_lower: 0,
            min_numeric: 0,
            min_special: 0,
            override_special: None,
        }
    }
}

impl PasswordConfig {
    /// Starts a builder seeded with [`PasswordConfig::default`].
    pub fn builder() -> PasswordConfigBuilder {
        PasswordConfigBuilder::new()
    }

    /// Returns whether `class` contributes to the general pool.
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Numeric => self.number,
            CharClass::Special => self.special,
        }
    }

    /// Returns the minimum required count for `class`.
    pub fn minimum(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.min_upper,
            CharClass::Lower => self.min_lower,
            CharClass::Numeric => self.min_numeric,
            CharClass::Special => self.min_special,
        }
    }

    /// Returns `(class, minimum)` pairs in [`CharClass::ALL`] order.
    pub fn minimums(&self) -> [(CharClass, usize); 4] {
        CharClass::ALL.map(|class| (class, self.minimum(class)))
    }

    /// Sum of all minimums, or `None` on overflow.
    pub fn required_len(&self) -> Option<usize> {
        self.minimums()
            .iter()
            .try_fold(0usize, |acc, (_, min)| acc.checked_add(*min))
    }

    /// Number of characters drawn from the general pool, or `None` when the
    /// minimums do not fit in `length`.
    pub fn filler_len(&self) -> Option<usize> {
        self.required_len()
            .and_then(|required| self.length.checked_sub(required))
    }

    /// Checks that this configuration can produce a compliant password.
    ///
    /// # Errors
    ///
    /// - [`ConfigErrorKind::MinimumsExceedLength`] when the minimums add up to
    ///   more than `length`
    /// - [`ConfigErrorKind::EmptyPool`] when filler characters are needed but
    ///   no class is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_filler_len().map(|_| ())
    }

    /// Validates the configuration and returns the filler length.
    pub(crate) fn checked_filler_len(&self) -> Result<usize, ConfigError> {
        let filler = match self.filler_len() {
            Some(filler) => filler,
            None => {
                let required = self
                    .minimums()
                    .iter()
                    .fold(0usize, |acc, (_, min)| acc.saturating_add(*min));
                return Err(ConfigError::new(
                    ConfigErrorKind::MinimumsExceedLength {
                        required,
                        length: self.length,
                    },
                    "lower the per-class minimums or raise the length",
                ));
            }
        };

        if filler > 0 && !CharClass::ALL.iter().any(|class| self.is_enabled(*class)) {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyPool { filler },
                "enable at least one character class or raise the minimums to cover the length",
            ));
        }

        Ok(filler)
    }
}

/// Chainable builder for [`PasswordConfig`].
///
/// [`build`](Self::build) validates the result, so a config obtained from the
/// builder is known to be satisfiable.
#[derive(Debug, Clone, Default)]
pub struct PasswordConfigBuilder {
    config: PasswordConfig,
}

impl PasswordConfigBuilder {
    /// Creates a builder seeded with [`PasswordConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total password length.
    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    /// Enables or disables uppercase letters in the general pool.
    pub fn upper(mut self, enabled: bool) -> Self {
        self.config.upper = enabled;
        self
    }

    /// Enables or disables lowercase letters in the general pool.
    pub fn lower(mut self, enabled: bool) -> Self {
        self.config.lower = enabled;
        self
    }

    /// Enables or disables digits in the general pool.
    pub fn number(mut self, enabled: bool) -> Self {
        self.config.number = enabled;
        self
    }

    /// Enables or disables special symbols in the general pool.
    pub fn special(mut self, enabled: bool) -> Self {
        self.config.special = enabled;
        self
    }

    /// Sets the minimum count for one class. Later calls for the same class win.
    pub fn min(mut self, class: CharClass, count: usize) -> Self {
        match class {
            CharClass::Upper => self.config.min_upper = count,
            CharClass::Lower => self.config.min_lower = count,
            CharClass::Numeric => self.config.min_numeric = count,
            CharClass::Special => self.config.min_special = count,
        }
        self
    }

    /// Replaces the built-in special set. An empty string restores the default.
    pub fn override_special(mut self, symbols: impl Into<String>) -> Self {
        let symbols = symbols.into();
        self.config.override_special = if symbols.is_empty() {
            None
        } else {
            Some(symbols)
        };
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the rules cannot be satisfied; see
    /// [`PasswordConfig::validate`].
    pub fn build(self) -> Result<PasswordConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
