//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use namewright_domain::{RenamePlan, Rule};
use namewright_renamer::ExecutionReport;
use namewright_validator::ValidationReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the rule list.
    pub fn format_rules(&self, rules: &[Rule]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rules
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        serde_json::json!({
                            "number": i + 1,
                            "description": r.description,
                            "pattern": r.pattern,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(rules.iter().map(|r| r.pattern.as_str()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if rules.is_empty() {
                    return Ok(self.colorize("No rules defined.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Description", "Pattern"]);
                for (i, rule) in rules.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), rule.description.clone(), rule.pattern.clone()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let violations: Vec<serde_json::Value> = report
                    .violations
                    .iter()
                    .map(|v| {
                        serde_json::json!({
                            "path": v.path.display().to_string(),
                            "failed_rules": v.failed_rules(),
                            "reasons": v.reasons.iter().map(ToString::to_string).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                let json = serde_json::json!({
                    "root": report.root.display().to_string(),
                    "scope": report.scope.as_str(),
                    "checked": report.checked,
                    "violations": violations,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(report
                .violations
                .iter()
                .map(|v| v.path.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if report.is_clean() {
                    return Ok(self.success(&format!(
                        "All {} entries follow the rules",
                        report.checked
                    )));
                }

                let mut builder = Builder::default();
                builder.push_record(["Entry", "Problems"]);
                for violation in &report.violations {
                    let entry = violation
                        .path
                        .strip_prefix(&report.root)
                        .unwrap_or(&violation.path)
                        .display()
                        .to_string();
                    builder.push_record([entry, violation.summary()]);
                }

                let mut out = self.render(builder);
                out.push_str("\n\n");
                out.push_str(&self.warning(&format!(
                    "{} of {} entries have naming problems",
                    report.violations.len(),
                    report.checked
                )));
                out.push_str("\n\nRules applied:\n");
                for (i, rule) in report.rules.iter().enumerate() {
                    out.push_str(&format!("  Rule {}: {} ({})\n", i + 1, rule.description, rule.pattern));
                }
                Ok(out)
            }
        }
    }

    /// Format a rename plan.
    pub fn format_plan(&self, plan: &RenamePlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = plan
                    .entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "old_name": e.old_name,
                            "new_name": e.new_name_sanitized,
                            "proposed": e.new_name_raw,
                        })
                    })
                    .collect();
                let json = serde_json::json!({
                    "directory": plan.directory.display().to_string(),
                    "requested": plan.requested,
                    "received": plan.received,
                    "entries": entries,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(plan
                .entries
                .iter()
                .map(|e| format!("{}\t{}", e.old_name, e.new_name_sanitized))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if plan.is_empty() && !plan.is_partial() {
                    return Ok(self.colorize("Nothing to rename.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Current name", "New name"]);
                for entry in &plan.entries {
                    let new_name = if entry.is_noop() {
                        format!("{} (unchanged)", entry.new_name_sanitized)
                    } else {
                        entry.new_name_sanitized.clone()
                    };
                    builder.push_record([entry.old_name.clone(), new_name]);
                }

                let mut out = self.render(builder);
                if plan.is_partial() {
                    out.push_str("\n\n");
                    out.push_str(&self.warning(&format!(
                        "Only {} names returned for {} entries; {} left unplanned",
                        plan.received,
                        plan.requested,
                        plan.shortfall()
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Format the result of a batch rename.
    pub fn format_execution(&self, report: &ExecutionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report
                .renamed
                .iter()
                .map(|r| r.to.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut out = self.success(&format!(
                    "Renamed {} entries ({} unchanged)",
                    report.renamed.len(),
                    report.unchanged
                ));
                if report.partial_levels > 0 {
                    out.push('\n');
                    out.push_str(&self.warning(&format!(
                        "{} directories were only partially renamed",
                        report.partial_levels
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a single rename as it happens.
    pub fn rename_line(&self, from: &str, to: &str) -> String {
        format!("  {} → {}", from, self.colorize(to, "cyan"))
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namewright_domain::{default_rules, NamingViolation, Scope, ViolationReason};
    use std::path::PathBuf;

    fn report() -> ValidationReport {
        ValidationReport {
            root: PathBuf::from("/data"),
            scope: Scope::All,
            checked: 3,
            violations: vec![NamingViolation {
                path: PathBuf::from("/data/Bad Name"),
                reasons: vec![ViolationReason::RuleFailed {
                    index: 1,
                    description: "Only letters, digits, underscores and hyphens".into(),
                }],
            }],
            rules: default_rules(),
        }
    }

    fn plan() -> RenamePlan {
        RenamePlan::pair(
            "/data",
            &["a.txt".to_string(), "b.txt".to_string()],
            &["one file.txt".to_string()],
        )
    }

    #[test]
    fn test_rules_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_rules(&default_rules()).unwrap();
        assert!(output.contains("Description"));
        assert!(output.contains("^[^.]+$"));
    }

    #[test]
    fn test_rules_json_numbers_from_one() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_rules(&default_rules()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["number"], 1);
        assert_eq!(json[1]["description"], "Must not start with a dot");
    }

    #[test]
    fn test_report_table_lists_rules() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Bad Name"));
        assert!(output.contains("1 of 3 entries"));
        assert!(output.contains("Rule 3: Length between 1 and 255 characters"));
    }

    #[test]
    fn test_report_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_report(&report()).unwrap(), "/data/Bad Name");
    }

    #[test]
    fn test_plan_partial_warning() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_plan(&plan()).unwrap();
        assert!(output.contains("one_file.txt"));
        assert!(output.contains("Only 1 names returned for 2 entries"));
    }

    #[test]
    fn test_plan_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let json: serde_json::Value = serde_json::from_str(&formatter.format_plan(&plan()).unwrap()).unwrap();
        assert_eq!(json["requested"], 2);
        assert_eq!(json["entries"][0]["new_name"], "one_file.txt");
        assert_eq!(json["entries"][0]["proposed"], "one file.txt");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
