//! High-volume generation driver.
//!
//! Generates a large batch of passwords with the default configuration,
//! checks each against its rules, and logs progress every 10,000 passwords.
//! Any error aborts the run. Passwords containing a single quote are counted
//! and reported by index, since they tend to break naive shell quoting.
//!
//! Run with: `RUST_LOG=info cargo run --release --example stress_driver -- 1000000`

use passgen_core::{check, generate, CharClass, PasswordConfig};
use tracing_subscriber::EnvFilter;

const REPORT_EVERY: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let iterations: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1_000_000,
    };

    let config = PasswordConfig::default();
    let mut with_quote = 0usize;

    for n in 0..iterations {
        let password = generate(&config)?;
        let tally = check(password.expose_secret(), &config)?;

        if password.expose_secret().contains('\'') {
            with_quote += 1;
            tracing::warn!(index = n, "password contains a single quote");
        }

        if n % REPORT_EVERY == 0 {
            tracing::info!(
                index = n,
                length = tally.len(),
                upper = tally.count(CharClass::Upper),
                lower = tally.count(CharClass::Lower),
                numeric = tally.count(CharClass::Numeric),
                special = tally.count(CharClass::Special),
                "progress"
            );
        }
    }

    tracing::info!(iterations, with_quote, "done");
    Ok(())
}
