//! Character variety section - one point per character class present.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::entropy::CharClasses;

pub(crate) const ADD_LOWERCASE: &str = "Add lowercase letters";
pub(crate) const ADD_UPPERCASE: &str = "Add uppercase letters";
pub(crate) const ADD_DIGITS: &str = "Add digits";
pub(crate) const ADD_SYMBOLS: &str = "Add symbols (!, @, #, etc.)";

/// Scores character variety: +1 for each of the four classes present,
/// with a dedicated remark for each missing class.
///
/// Remark order (lowercase, uppercase, digits, symbols) is fixed.
pub fn variety_section(password: &SecretString) -> SectionOutcome {
    let classes = CharClasses::scan(password.expose_secret());

    let mut points = 0;
    let mut remarks = Vec::new();
    for (present, remark) in [
        (classes.lower, ADD_LOWERCASE),
        (classes.upper, ADD_UPPERCASE),
        (classes.digit, ADD_DIGITS),
        (classes.symbol, ADD_SYMBOLS),
    ] {
        if present {
            points += 1;
        } else {
            remarks.push(remark);
        }
    }
    SectionOutcome { points, remarks }
}
