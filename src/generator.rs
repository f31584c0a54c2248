//! Password generation.
//!
//! Generation runs in a fixed sequence:
//! 1. validate the configuration (no randomness is consumed on failure)
//! 2. resolve the class sets and the general pool
//! 3. draw each class minimum, in [`CharClass::ALL`] order
//! 4. draw the remaining length from the general pool
//! 5. shuffle the assembled symbols
//!
//! Any failure aborts the call. Partial passwords are never returned.

use rand::{rngs::OsRng, TryCryptoRng};
use zeroize::Zeroizing;

use crate::{
    charset::{CharClass, CharSets},
    error::{Error, Result, Step},
    random::{sample, shuffle},
    Password, PasswordConfig,
};

/// Generates a password using the operating system's secure random source.
///
/// # Errors
///
/// - [`Error::Config`] if the configuration cannot be satisfied
/// - [`Error::RandomSource`] if the operating system fails to supply randomness
/// - [`Error::Capacity`] if `length` characters cannot be allocated
///
/// # Examples
///
/// ```
/// use passgen_core::{generate, CharClass, PasswordConfig};
///
/// let config = PasswordConfig::builder()
///     .length(3)
///     .min(CharClass::Special, 3)
///     .override_special("#$%")
///     .build()
///     .unwrap();
///
/// let password = generate(&config).unwrap();
/// assert!(password.expose_secret().chars().all(|c| "#$%".contains(c)));
/// ```
pub fn generate(config: &PasswordConfig) -> Result<Password> {
    generate_with(config, &mut OsRng)
}

/// Generates a password drawing from the supplied cryptographic source.
///
/// Use this to inject a seeded source for reproducible tests. The source is
/// never retried: the first failed draw ends the call.
///
/// # Errors
///
/// Same as [`generate`], with [`Error::RandomSource`] carrying the error
/// reported by `rng`.
pub fn generate_with<R>(config: &PasswordConfig, rng: &mut R) -> Result<Password>
where
    R: TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let filler = config.checked_filler_len()?;

    let span = tracing::debug_span!("generate_password", length = config.length, filler);
    let _enter = span.enter();

    if config.length == 0 {
        return Ok(Password::new(String::new()));
    }

    assemble(config, filler, rng)
        .map(|symbols| Password::new(symbols.iter().collect()))
        .inspect_err(|err| tracing::warn!(error = %err, "password generation aborted"))
}

fn assemble<R>(config: &PasswordConfig, filler: usize, rng: &mut R) -> Result<Zeroizing<Vec<char>>>
where
    R: TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let sets = CharSets::for_config(config);
    let mut symbols = Zeroizing::new(Vec::new());
    symbols
        .try_reserve_exact(config.length)
        .map_err(|e| Error::capacity(config.length, e))?;

    for (class, min) in config.minimums() {
        let drawn = Zeroizing::new(sample(sets.class(class), min, rng, Step::SampleClass(class))?);
        symbols.extend_from_slice(&drawn);
    }

    let pool = sets.pool(config);
    let drawn = Zeroizing::new(sample(&pool, filler, rng, Step::SampleFiller)?);
    symbols.extend_from_slice(&drawn);

    shuffle(&mut symbols[..], rng)?;

    tracing::debug!(
        pool = pool.len(),
        classes = CharClass::ALL.iter().filter(|c| config.is_enabled(**c)).count(),
        "password assembled"
    );
    Ok(symbols)
}
