//! Validation report

use namewright_domain::{NamingViolation, Rule, Scope};
use std::path::PathBuf;

/// Outcome of a validation pass
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Directory that was walked
    pub root: PathBuf,

    /// Scope the walk used
    pub scope: Scope,

    /// Number of in-scope entries checked
    pub checked: usize,

    /// Non-compliant entries
    pub violations: Vec<NamingViolation>,

    /// Rules that were applied, in order
    pub rules: Vec<Rule>,
}

impl ValidationReport {
    /// Whether every checked entry is compliant
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Plain-text rendering: one line per violation, then the rule list
    pub fn to_text(&self) -> String {
        if self.is_clean() {
            return "No badly named entries found.".to_string();
        }

        let mut out = String::from("Entries with naming problems:\n\n");
        for violation in &self.violations {
            out.push_str(&format!("{}: {}\n", violation.path.display(), violation.summary()));
        }

        out.push_str("\nRules applied:\n");
        for (i, rule) in self.rules.iter().enumerate() {
            out.push_str(&format!("Rule {}: {} ({})\n", i + 1, rule.description, rule.pattern));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namewright_domain::ViolationReason;

    fn report(violations: Vec<NamingViolation>) -> ValidationReport {
        ValidationReport {
            root: PathBuf::from("/data"),
            scope: Scope::All,
            checked: 4,
            violations,
            rules: vec![Rule::new("Lowercase", "^[a-z]+$")],
        }
    }

    #[test]
    fn test_clean_report() {
        let r = report(vec![]);
        assert!(r.is_clean());
        assert_eq!(r.to_text(), "No badly named entries found.");
    }

    #[test]
    fn test_report_lists_violations_and_rules() {
        let r = report(vec![NamingViolation {
            path: PathBuf::from("/data/Upper"),
            reasons: vec![ViolationReason::RuleFailed {
                index: 1,
                description: "Lowercase".into(),
            }],
        }]);

        let text = r.to_text();
        assert!(text.contains("/data/Upper: Fails rule 1: Lowercase"));
        assert!(text.contains("Rule 1: Lowercase (^[a-z]+$)"));
    }
}
