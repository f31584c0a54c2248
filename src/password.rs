use std::fmt;

use zeroize::Zeroize;

/// A generated password that cannot be printed by accident.
///
/// `Password` owns the generated string, redacts it in `Debug` and `Display`
/// output, and wipes its buffer when dropped. The value is reachable only
/// through [`expose_secret`](Self::expose_secret) or by taking ownership with
/// [`into_inner`](Self::into_inner).
///
/// # Examples
///
/// ```
/// use passgen_core::{generate, PasswordConfig};
///
/// let password = generate(&PasswordConfig::default()).unwrap();
///
/// assert_eq!(format!("{:?}", password), "[REDACTED]");
/// assert_eq!(password.expose_secret().chars().count(), 32);
/// ```
// BREAKING CHANGE WARNING: Do NOT derive Clone, Copy or Default.
// Copies would escape the zeroize-on-drop guarantee.
pub struct Password {
    // Must stay private; public access bypasses redaction.
    inner: String,
}

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the password.
    ///
    /// Callers are responsible for not logging or displaying the returned value.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Takes ownership of the password string.
    ///
    /// The returned `String` is no longer wiped on drop.
    pub fn into_inner(mut self) -> String {
        std::mem::take(&mut self.inner)
    }

    /// Number of characters (not bytes) in the password.
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    /// Returns `true` for a zero-length password.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_redacts_debug() {
        let password = Password::new("hunter2".to_string());
        let debug_output = format!("{:?}", password);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("String"));
    }

    #[test]
    fn password_redacts_display() {
        let password = Password::new("sk-1234567890".to_string());
        assert_eq!(password.to_string(), "[REDACTED]");
    }

    #[test]
    fn password_exposes_when_explicit() {
        let password = Password::new("Tr0ub4dor&3".to_string());
        assert_eq!(password.expose_secret(), "Tr0ub4dor&3");
        assert_eq!(password.into_inner(), "Tr0ub4dor&3");
    }

    #[test]
    fn len_counts_characters() {
        let password = Password::new("a€§".to_string());
        assert_eq!(password.len(), 3);
        assert!(!password.is_empty());
        assert!(Password::new(String::new()).is_empty());
    }
}
