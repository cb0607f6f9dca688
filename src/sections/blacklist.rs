//! Blacklist section - penalizes passwords found in a known-bad set.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::blacklist::Blacklist;

pub(crate) const BLACKLISTED: &str = "Found in common-password blacklist";

/// Checks the password against the caller-supplied blacklist.
///
/// Returns `Some` with a −2 penalty on a hit; `None` means the password
/// is not blacklisted (or no blacklist was supplied).
pub fn blacklist_section(
    password: &SecretString,
    blacklist: Option<&Blacklist>,
) -> Option<SectionOutcome> {
    let hit = blacklist.is_some_and(|b| b.contains(password.expose_secret()));
    hit.then(|| SectionOutcome {
        points: -2,
        remarks: vec![BLACKLISTED],
    })
}
