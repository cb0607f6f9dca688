//! Secure password generator.
//!
//! Draws every character independently and uniformly from the
//! configured charset using the OS random source. The generator makes
//! no strength guarantee of its own; callers verify the output through
//! the analyzer.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::types::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid generation config: length must be at least 1")]
    InvalidConfig,
}

/// Generates a password of exactly `config.length` characters.
///
/// The charset always contains lowercase letters; uppercase, digits and
/// symbols are added per config. A lowercase-only config is valid and
/// simply yields a weak-charset password.
pub fn generate(config: &GenerationConfig) -> Result<String, GenerateError> {
    if config.length == 0 {
        return Err(GenerateError::InvalidConfig);
    }

    let mut charset = String::from(LOWERCASE);
    if config.include_upper {
        charset.push_str(UPPERCASE);
    }
    if config.include_digits {
        charset.push_str(DIGITS);
    }
    if config.include_symbols {
        charset.push_str(SYMBOLS);
    }
    let pool: Vec<char> = charset.chars().collect();

    let mut rng = OsRng;
    let password = (0..config.length)
        .map(|_| {
            // pool always holds at least the lowercase alphabet
            *pool.choose(&mut rng).expect("charset is non-empty")
        })
        .collect();

    Ok(password)
}
