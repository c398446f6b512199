//! Rule module - naming-convention rules

/// Description of the built-in rule that forbids a leading dot.
///
/// The validator matches on this exact text to exempt regular files that
/// carry an extension, so renaming the rule disables the exemption.
pub const DOT_PREFIX_RULE: &str = "Must not start with a dot";

/// A naming rule: a human description plus a regular expression
///
/// Rules carry no identifier of their own. Their identity is their position
/// in the owning rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Short human-readable description
    pub description: String,

    /// Regular expression the entry name must match (from its first character)
    pub pattern: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(description: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            pattern: pattern.into(),
        }
    }

    /// Whether this is the leading-dot rule that files with an extension are exempt from
    pub fn is_dot_prefix_rule(&self) -> bool {
        self.description == DOT_PREFIX_RULE
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.description, self.pattern)
    }
}

impl From<(String, String)> for Rule {
    fn from((description, pattern): (String, String)) -> Self {
        Self::new(description, pattern)
    }
}

impl From<Rule> for (String, String) {
    fn from(rule: Rule) -> Self {
        (rule.description, rule.pattern)
    }
}

/// The rule set installed when no rules have been persisted yet
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Only letters, digits, underscores and hyphens",
            r"^[a-zA-Z0-9_-]+$",
        ),
        Rule::new(DOT_PREFIX_RULE, r"^[^.]+$"),
        Rule::new("Length between 1 and 255 characters", r"^.{1,255}$"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_order() {
        let rules = default_rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].pattern, r"^[a-zA-Z0-9_-]+$");
        assert_eq!(rules[1].description, DOT_PREFIX_RULE);
        assert_eq!(rules[2].pattern, r"^.{1,255}$");
    }

    #[test]
    fn test_dot_prefix_detection() {
        let rules = default_rules();
        assert!(!rules[0].is_dot_prefix_rule());
        assert!(rules[1].is_dot_prefix_rule());
        assert!(!Rule::new("must not start with a dot", "^[^.]").is_dot_prefix_rule());
    }

    #[test]
    fn test_tuple_conversion() {
        let rule: Rule = ("desc".to_string(), "^a".to_string()).into();
        assert_eq!(rule, Rule::new("desc", "^a"));

        let pair: (String, String) = rule.into();
        assert_eq!(pair.0, "desc");
        assert_eq!(pair.1, "^a");
    }

    #[test]
    fn test_display() {
        let rule = Rule::new("Lowercase", "^[a-z]+$");
        assert_eq!(rule.to_string(), "Lowercase: ^[a-z]+$");
    }
}
