//! Naming validation logic

use crate::{ValidationConfig, ValidationReport, ValidatorError};
use namewright_domain::{NamingViolation, Rule, Scope, ViolationReason};
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A rule with its pattern compiled for match-at-start testing
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// One-based rule position
    pub index: usize,
    /// The source rule
    pub rule: Rule,
    regex: Regex,
}

impl CompiledRule {
    /// Compile a rule
    ///
    /// The pattern is wrapped as `^(?:pattern)` so it must match starting at
    /// the first character of the name. It only has to match the whole name
    /// if the pattern itself ends with `$`.
    pub fn compile(index: usize, rule: &Rule) -> Result<Self, ValidatorError> {
        let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(|source| {
            ValidatorError::InvalidPattern {
                index,
                description: rule.description.clone(),
                source,
            }
        })?;

        Ok(Self {
            index,
            rule: rule.clone(),
            regex,
        })
    }

    /// Whether `name` satisfies the rule
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Checks directory entries against the naming rules
pub struct NamingValidator {
    rules: Vec<Rule>,
    config: ValidationConfig,
}

impl NamingValidator {
    /// Create a validator for the given rules
    pub fn new(rules: Vec<Rule>, config: ValidationConfig) -> Self {
        Self { rules, config }
    }

    /// Create a validator with default configuration
    pub fn default_config(rules: Vec<Rule>) -> Self {
        Self::new(rules, ValidationConfig::default())
    }

    /// Rules this validator applies
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Compile every rule, failing on the first invalid pattern
    pub fn compile_rules(&self) -> Result<Vec<CompiledRule>, ValidatorError> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| CompiledRule::compile(i + 1, rule))
            .collect()
    }

    /// Validate every in-scope entry below `root`
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to walk (the root itself is not checked)
    /// * `scope` - Which entries to check; everything else is skipped
    ///
    /// # Returns
    ///
    /// One violation per non-compliant entry, in walk order
    pub fn validate<P: AsRef<Path>>(
        &self,
        root: P,
        scope: Scope,
    ) -> Result<Vec<NamingViolation>, ValidatorError> {
        Ok(self.validate_report(root, scope)?.violations)
    }

    /// Validate and return the violations together with the rules and entry count
    pub fn validate_report<P: AsRef<Path>>(
        &self,
        root: P,
        scope: Scope,
    ) -> Result<ValidationReport, ValidatorError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ValidatorError::NotADirectory(root.to_path_buf()));
        }
        self.config.validate().map_err(ValidatorError::Config)?;

        let compiled = self.compile_rules()?;
        info!(
            "Validating {} against {} rules (scope: {})",
            root.display(),
            compiled.len(),
            scope
        );

        let mut violations = Vec::new();
        let mut checked = 0;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().is_dir() || (entry.path_is_symlink() && path.is_dir());
            if !scope.includes(is_dir) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let reasons = self.check_name(&name, path.is_file(), scope, &compiled);
            checked += 1;

            if !reasons.is_empty() {
                debug!("{} has {} violation(s)", path.display(), reasons.len());
                violations.push(NamingViolation {
                    path: path.to_path_buf(),
                    reasons,
                });
            }
        }

        info!(
            "Validation complete: {} checked, {} non-compliant",
            checked,
            violations.len()
        );

        Ok(ValidationReport {
            root: root.to_path_buf(),
            scope,
            checked,
            violations,
            rules: self.rules.clone(),
        })
    }

    /// Check a single name
    ///
    /// `is_file` must be true only for regular files. Returns every reason the
    /// name fails; an empty result means the name is compliant.
    pub fn check_name(
        &self,
        name: &str,
        is_file: bool,
        scope: Scope,
        compiled: &[CompiledRule],
    ) -> Vec<ViolationReason> {
        let has_extension = Path::new(name).extension().is_some();
        let mut reasons = Vec::new();

        for rule in compiled {
            if rule.matches(name) {
                continue;
            }
            // Files with an extension necessarily contain a dot
            if rule.rule.is_dot_prefix_rule() && is_file && has_extension {
                continue;
            }
            reasons.push(ViolationReason::RuleFailed {
                index: rule.index,
                description: rule.rule.description.clone(),
            });
        }

        if self.config.check_extension && scope.includes_files() && is_file && !has_extension {
            reasons.push(ViolationReason::MissingExtension);
        }

        let length = name.chars().count();
        if self.config.check_length && length > self.config.max_name_length {
            reasons.push(ViolationReason::NameTooLong {
                length,
                max: self.config.max_name_length,
            });
        }

        reasons
    }
}
