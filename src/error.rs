use std::{collections::TryReserveError, fmt};

use thiserror::Error;

use crate::charset::CharClass;

/// Errors that can occur while generating a password.
///
/// Configuration misuse ([`Error::Config`]) is always reported before the
/// random source is touched. Environmental failures ([`Error::RandomSource`])
/// abort the call and are never retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The secure random source failed to produce bytes.
    #[error("error generating random bytes ({step}): {source}")]
    RandomSource {
        /// The generation step whose draw failed
        step: Step,
        /// The underlying failure reported by the random source
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The configuration can never produce a compliant password.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sampling was asked to draw symbols from an empty character set.
    #[error("cannot sample from an empty character set")]
    EmptyCharacterSet,

    /// Room for the requested number of characters could not be allocated.
    #[error("cannot allocate room for {requested} characters")]
    Capacity {
        /// Number of characters requested
        requested: usize,
        /// The allocation failure
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    pub(crate) fn random_source<E>(step: Step, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::RandomSource {
            step,
            source: Box::new(source),
        }
    }

    pub(crate) fn capacity(requested: usize, source: TryReserveError) -> Self {
        Error::Capacity { requested, source }
    }

    /// Returns `true` if the caller supplied an unusable configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns `true` if the random source failed.
    pub fn is_random_source(&self) -> bool {
        matches!(self, Error::RandomSource { .. })
    }

    /// Returns the step that failed, for random-source failures.
    pub fn step(&self) -> Option<Step> {
        match self {
            Error::RandomSource { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A generation step that draws from the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Drawing the required minimum for one character class
    SampleClass(CharClass),
    /// Drawing filler symbols from the general pool
    SampleFiller,
    /// Permuting the assembled symbols
    Shuffle,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::SampleClass(class) => write!(f, "sampling minimum {} characters", class),
            Step::SampleFiller => write!(f, "sampling filler characters"),
            Step::Shuffle => write!(f, "shuffling"),
        }
    }
}

/// A configuration that cannot be satisfied, with details about why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ConfigError {
    /// The kind of configuration problem
    pub kind: ConfigErrorKind,
    /// Human-readable message explaining the problem
    pub message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of configuration problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The per-class minimums add up to more than the requested length
    MinimumsExceedLength {
        /// Sum of all minimums (saturating)
        required: usize,
        /// Requested password length
        length: usize,
    },
    /// Filler characters are needed but no class is enabled
    EmptyPool {
        /// Number of filler characters that could not be drawn
        filler: usize,
    },
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::MinimumsExceedLength { required, length } => write!(
                f,
                "minimums require {} characters but length is {}",
                required, length
            ),
            ConfigErrorKind::EmptyPool { filler } => {
                write!(f, "{} filler characters requested from an empty pool", filler)
            }
        }
    }
}
