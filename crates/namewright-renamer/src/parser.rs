//! Parse LLM output into names and patterns

/// Split a response into one name per line
///
/// Lines are trimmed and blank lines dropped. LLMs sometimes wrap the list in
/// a code block or prefix list markers despite being asked not to, so fence
/// lines are skipped and leading markers removed.
pub fn parse_name_list(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract a single pattern from a response, removing fences and backticks
pub fn parse_pattern(response: &str) -> String {
    let body: Vec<&str> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("```"))
        .collect();

    // The first remaining line is the expression
    body.first()
        .map(|line| line.trim_matches('`').trim().to_string())
        .unwrap_or_default()
}

fn strip_list_marker(line: &str) -> &str {
    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }

    line
}
