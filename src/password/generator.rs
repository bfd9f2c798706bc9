//! Password generation functionality

use rand::Rng;

pub(crate) const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &str = "0123456789";
pub(crate) const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Options for password generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Password length
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include symbols (!@#$%...)
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: crate::DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Options used by the record form's generate button
    pub fn for_form() -> Self {
        Self {
            length: crate::FORM_PASSWORD_LENGTH,
            ..Default::default()
        }
    }

    /// Characters a generated password is drawn from
    ///
    /// Falls back to lowercase letters and digits when no class is selected.
    pub fn char_pool(&self) -> Vec<char> {
        let mut pool = String::new();

        if self.uppercase {
            pool.push_str(UPPER_LETTERS);
        }
        if self.lowercase {
            pool.push_str(LOWER_LETTERS);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }

        if pool.is_empty() {
            pool.push_str(LOWER_LETTERS);
            pool.push_str(DIGITS);
        }

        pool.chars().collect()
    }
}

/// Generate a random password with the specified options.
///
/// Each character is drawn independently and uniformly from the pool.
/// Uses the thread-local generator, which is seeded from the OS and
/// backed by a cryptographically secure stream cipher.
///
/// # Example
/// ```
/// use credvault::password::{generate_password, PasswordOptions};
///
/// let options = PasswordOptions {
///     length: 16,
///     ..Default::default()
/// };
/// let password = generate_password(&options);
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate_password(options: &PasswordOptions) -> String {
    let mut rng = rand::rng();
    let chars = options.char_pool();

    (0..options.length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}
