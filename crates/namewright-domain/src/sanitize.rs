//! Sanitization of proposed names
//!
//! Runs on every generated name before it reaches the filesystem, never on
//! the names sent to the collaborator.

/// Characters stripped from proposed names
pub const FORBIDDEN_CHARS: [char; 8] = ['<', '>', ':', '"', '/', '|', '?', '*'];

/// Maximum name length in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Make a proposed name filesystem-safe
///
/// Removes every character in [`FORBIDDEN_CHARS`], replaces spaces with
/// underscores, and truncates to [`MAX_NAME_LENGTH`] characters. The
/// transformation is idempotent.
///
/// # Examples
///
/// ```
/// use namewright_domain::sanitize;
///
/// assert_eq!(sanitize("My Report: final?.pdf"), "My_Report_final.pdf");
/// ```
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(MAX_NAME_LENGTH)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: sanitizing twice changes nothing
        #[test]
        fn test_sanitize_idempotent(input in ".*") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once);
        }

        /// Property: output has no forbidden characters, no spaces, and fits the limit
        #[test]
        fn test_sanitize_output_is_safe(input in "[ a-z<>:\"/|?*.]{0,600}") {
            let out = sanitize(&input);
            prop_assert!(!out.chars().any(|c| FORBIDDEN_CHARS.contains(&c)));
            prop_assert!(!out.contains(' '));
            prop_assert!(out.chars().count() <= MAX_NAME_LENGTH);
        }
    }
}
