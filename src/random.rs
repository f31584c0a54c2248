//! Secure sampling and shuffling primitives.
//!
//! Both operations draw from a caller-supplied [`TryCryptoRng`]. Only
//! cryptographic sources are accepted, and a failing source is reported
//! immediately as [`Error::RandomSource`]; nothing here retries a failed draw.
//!
//! Index selection is unbiased: a 64-bit draw is mapped into `[0, bound)` by
//! widening multiplication, and draws that would land in the short final
//! interval are rejected. Rejection discards a successful draw; it is not a
//! retry of a failed one.

use rand::{TryCryptoRng, TryRngCore};

use crate::error::{Error, Result, Step};

/// Draws a uniformly distributed index in `0..bound`.
///
/// `bound` must be non-zero.
fn uniform_index<R>(rng: &mut R, bound: usize) -> std::result::Result<usize, R::Error>
where
    R: TryRngCore + ?Sized,
{
    debug_assert!(bound > 0);
    let range = bound as u64;
    // 2^64 mod range: draws whose low half falls below this are biased
    let threshold = range.wrapping_neg() % range;
    loop {
        let wide = u128::from(rng.try_next_u64()?) * u128::from(range);
        if (wide as u64) >= threshold {
            return Ok((wide >> 64) as usize);
        }
    }
}

/// Draws `count` symbols from `symbols`, independently and with replacement.
///
/// `count == 0` returns an empty vector without touching `rng`. A one-symbol
/// set is valid and always yields that symbol.
///
/// # Errors
///
/// - [`Error::EmptyCharacterSet`] if `symbols` is empty and `count > 0`
/// - [`Error::Capacity`] if room for `count` symbols cannot be allocated
/// - [`Error::RandomSource`] tagged with `step` if `rng` fails
///
/// # Examples
///
/// ```
/// use passgen_core::random::sample;
/// use passgen_core::Step;
/// use rand::rngs::OsRng;
///
/// let digits: Vec<char> = "0123456789".chars().collect();
/// let drawn = sample(&digits, 6, &mut OsRng, Step::SampleFiller).unwrap();
///
/// assert_eq!(drawn.len(), 6);
/// assert!(drawn.iter().all(char::is_ascii_digit));
/// ```
pub fn sample<R>(symbols: &[char], count: usize, rng: &mut R, step: Step) -> Result<Vec<char>>
where
    R: TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if symbols.is_empty() {
        return Err(Error::EmptyCharacterSet);
    }

    let mut drawn = Vec::new();
    drawn
        .try_reserve_exact(count)
        .map_err(|e| Error::capacity(count, e))?;
    for _ in 0..count {
        let idx = uniform_index(rng, symbols.len()).map_err(|e| Error::random_source(step, e))?;
        drawn.push(symbols[idx]);
    }
    Ok(drawn)
}

/// Permutes `items` in place, every ordering equally likely.
///
/// Walks from the last index down to 1, swapping each element with one at a
/// uniformly drawn index in the remaining prefix (inclusive). Slices shorter
/// than two elements are left alone and `rng` is not touched.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] with [`Step::Shuffle`] if `rng` fails. The
/// slice may be partially permuted in that case.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R) -> Result<()>
where
    R: TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1).map_err(|e| Error::random_source(Step::Shuffle, e))?;
        items.swap(i, j);
    }
    Ok(())
}
