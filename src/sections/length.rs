//! Length section - scores password length in three tiers.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;

const MIN_LENGTH: usize = 8;

pub(crate) const TOO_SHORT: &str = "Too short (min 8 chars)";

/// Scores password length: +3 at 16 chars, +2 at 12, +1 at 8,
/// otherwise a remark and no points.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let length = password.expose_secret().chars().count();
    let (points, remarks) = if length >= 16 {
        (3, vec![])
    } else if length >= 12 {
        (2, vec![])
    } else if length >= MIN_LENGTH {
        (1, vec![])
    } else {
        (0, vec![TOO_SHORT])
    };
    SectionOutcome { points, remarks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let outcome = length_section(&secret("Short1!"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.remarks, vec![TOO_SHORT]);
    }

    #[test]
    fn test_length_section_tier_boundaries() {
        assert_eq!(length_section(&secret(&"a".repeat(8))).points, 1);
        assert_eq!(length_section(&secret(&"a".repeat(11))).points, 1);
        assert_eq!(length_section(&secret(&"a".repeat(12))).points, 2);
        assert_eq!(length_section(&secret(&"a".repeat(15))).points, 2);
        assert_eq!(length_section(&secret(&"a".repeat(16))).points, 3);
    }

    #[test]
    fn test_length_section_empty() {
        let outcome = length_section(&secret(""));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.remarks, vec![TOO_SHORT]);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 8 two-byte characters clear the minimum length
        let outcome = length_section(&secret(&"é".repeat(8)));
        assert_eq!(outcome.points, 1);
        assert!(outcome.remarks.is_empty());
    }
}
