//! Composition policy demonstration.
//!
//! This example shows how to:
//! 1. Build password rules with per-class minimums
//! 2. Replace the special-symbol set
//! 3. Handle rules that cannot be satisfied
//! 4. Keep generated passwords out of logs
//!
//! Run with: `cargo run --example policy_passwords`

use passgen_core::{check, generate, CharClass, PasswordConfig};

fn main() {
    println!("=== Policy Password Example ===\n");

    println!("--- Scenario 1: Minimums Per Class ---");
    let config = PasswordConfig::builder()
        .length(12)
        .special(false)
        .min(CharClass::Upper, 2)
        .min(CharClass::Lower, 2)
        .min(CharClass::Numeric, 2)
        .build()
        .expect("minimums fit in 12 characters");

    let password = generate(&config).expect("OS random source available");
    let tally = check(password.expose_secret(), &config).expect("generated password complies");
    for class in CharClass::ALL {
        println!("{:>9}: {}", class.to_string(), tally.count(class));
    }

    println!("\n--- Scenario 2: Custom Special Symbols ---");
    let config = PasswordConfig::builder()
        .length(3)
        .min(CharClass::Special, 3)
        .override_special("#$%")
        .build()
        .expect("valid rules");
    let password = generate(&config).expect("OS random source available");
    println!("Explicitly exposed: {}", password.expose_secret());

    println!("\n--- Scenario 3: Unsatisfiable Rules ---");
    let result = PasswordConfig::builder()
        .length(4)
        .min(CharClass::Upper, 3)
        .min(CharClass::Numeric, 3)
        .build();
    match result {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("✓ Rejected before generation: {}", err),
    }

    println!("\n--- Scenario 4: Redaction ---");
    let password = generate(&PasswordConfig::default()).expect("OS random source available");
    println!("Debug:   {:?}", password);
    println!("Display: {}", password);
    println!("Length:  {}", password.len());
}
