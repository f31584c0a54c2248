//! Policy-compliant password generation.
//!
//! This crate generates passwords that satisfy composition rules using a
//! cryptographically secure random source:
//! - **Composition rules**: per-class minimums for uppercase, lowercase,
//!   numeric and special characters, plus which classes fill the remainder
//! - **Unbiased randomness**: every symbol is drawn uniformly, and the result
//!   is shuffled so required characters do not sit in predictable positions
//! - **Fail fast**: unsatisfiable rules are rejected before any randomness is
//!   consumed, and random-source failures are never retried
//!
//! # Core Types
//!
//! - [`PasswordConfig`]: Immutable composition rules, built per call site
//! - [`Password`]: Generated value, redacted in logs and wiped on drop
//! - [`CharSets`]: Resolved character classes and the general filler pool
//! - [`Composition`]: Per-class tally used to check a string against rules
//! - [`Error`]: Configuration misuse or random-source failure
//!
//! # Examples
//!
//! ```
//! use passgen_core::{generate, CharClass, PasswordConfig};
//!
//! let config = PasswordConfig::builder()
//!     .length(16)
//!     .min(CharClass::Upper, 2)
//!     .min(CharClass::Numeric, 2)
//!     .min(CharClass::Special, 1)
//!     .build()
//!     .expect("minimums fit in the length");
//!
//! let password = generate(&config).expect("OS random source available");
//! println!("{:?}", password); // Prints: [REDACTED]
//!
//! assert!(passgen_core::check(password.expose_secret(), &config).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod charset;
mod composition;
mod config;
mod error;
mod generator;
mod password;
pub mod random;

#[cfg(test)]
mod test_utils;

pub use charset::{CharClass, CharSets, LOWER_CHARS, NUMERIC_CHARS, SPECIAL_CHARS, UPPER_CHARS};
pub use composition::{check, ComplianceError, Composition};
pub use config::{PasswordConfig, PasswordConfigBuilder};
pub use error::{ConfigError, ConfigErrorKind, Error, Result, Step};
pub use generator::{generate, generate_with};
pub use password::Password;
