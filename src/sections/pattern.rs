//! Pattern section - penalizes repeated runs and known weak substrings.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;

pub(crate) const REPEATED_CHARS: &str = "Contains repeated characters";
pub(crate) const COMMON_PATTERN: &str = "Contains common pattern (qwerty/1234)";

/// Known weak substrings, matched case-insensitively by containment.
const WEAK_SUBSTRINGS: [&str; 6] = ["qwerty", "asdf", "1234", "password", "abcd", "1111"];

/// True if any character appears three or more times consecutively.
pub(crate) fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// True if the lowercased password contains a known weak substring.
pub(crate) fn has_weak_substring(password: &str) -> bool {
    let lowered = password.to_lowercase();
    WEAK_SUBSTRINGS.iter().any(|p| lowered.contains(p))
}

/// Applies the two independent pattern penalties, −1 each.
///
/// Both checks may fire on the same password.
pub fn pattern_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();

    let mut points = 0;
    let mut remarks = Vec::new();
    if has_repeated_run(pwd) {
        points -= 1;
        remarks.push(REPEATED_CHARS);
    }
    if has_weak_substring(pwd) {
        points -= 1;
        remarks.push(COMMON_PATTERN);
    }
    SectionOutcome { points, remarks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_repeated_run_detected() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("x111y"));
        assert!(!has_repeated_run("aabbaabb"));
        assert!(!has_repeated_run("ab"));
        assert!(!has_repeated_run(""));
    }

    #[test]
    fn test_weak_substring_case_insensitive() {
        assert!(has_weak_substring("MyQwerty99"));
        assert!(has_weak_substring("PASSWORD"));
        assert!(has_weak_substring("xx1234xx"));
        assert!(!has_weak_substring("Tr0ub4dor&3"));
    }

    #[test]
    fn test_pattern_section_both_penalties() {
        let outcome = pattern_section(&secret("aaa1234"));
        assert_eq!(outcome.points, -2);
        assert_eq!(outcome.remarks, vec![REPEATED_CHARS, COMMON_PATTERN]);
    }

    #[test]
    fn test_pattern_section_single_penalty() {
        let outcome = pattern_section(&secret("qwertyXz"));
        assert_eq!(outcome.points, -1);
        assert_eq!(outcome.remarks, vec![COMMON_PATTERN]);
    }

    #[test]
    fn test_pattern_section_clean_password() {
        let outcome = pattern_section(&secret("Rk3#pQ9z!mW"));
        assert_eq!(outcome.points, 0);
        assert!(outcome.remarks.is_empty());
    }
}
