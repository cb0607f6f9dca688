//! Charset pool detection and entropy estimation.
//!
//! Entropy here is the simplified `length × log2(pool)` proxy: it only
//! looks at which character classes are present, never at repeats or
//! patterns. Pattern penalties are a separate scoring layer.

/// Which of the four character classes a password contains.
///
/// Anything outside the three ASCII alphanumeric classes counts as a
/// symbol, including non-ASCII letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    pub fn scan(password: &str) -> Self {
        let mut classes = CharClasses::default();
        for ch in password.chars() {
            if ch.is_ascii_lowercase() {
                classes.lower = true;
            } else if ch.is_ascii_uppercase() {
                classes.upper = true;
            } else if ch.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.symbol = true;
            }
        }
        classes
    }

    /// Sum of the alphabet sizes of the classes present.
    pub fn pool_size(self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += 26;
        }
        if self.upper {
            pool += 26;
        }
        if self.digit {
            pool += 10;
        }
        if self.symbol {
            pool += 32;
        }
        pool
    }
}

/// Returns the charset pool size for a password.
pub fn charset_pool(password: &str) -> u32 {
    CharClasses::scan(password).pool_size()
}

/// Estimates password entropy in bits, rounded to 2 decimal places.
///
/// Returns exactly `0.0` for an empty password or an empty pool.
pub fn estimate_entropy(password: &str) -> f64 {
    let length = password.chars().count();
    let pool = charset_pool(password);
    if pool == 0 || length == 0 {
        return 0.0;
    }
    let bits = length as f64 * (pool as f64).log2();
    (bits * 100.0).round() / 100.0
}
