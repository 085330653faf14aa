//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Build a styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Status tag for a comparison row.
#[must_use]
pub fn status_tag(ok: bool) -> String {
    let tag = if ok { "[OK]" } else { "[MISMATCH]" };
    if is_color_disabled() {
        tag.to_string()
    } else if ok {
        style(tag).green().bold().to_string()
    } else {
        style(tag).red().bold().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Comparison").contains("=== Comparison ==="));
    }

    #[test]
    fn status_tags() {
        assert!(status_tag(true).contains("[OK]"));
        assert!(status_tag(false).contains("[MISMATCH]"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }
}
