//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for trails.

use crate::models::{Crumb, Trail};
use colored::Colorize;

/// Format a trail as ANSI colored text
pub fn format_ansi(trail: &Trail) -> String {
    if trail.is_empty() {
        return format!("{}", "(no breadcrumbs)".dimmed());
    }

    let separator = format!(" {} ", "›".dimmed());
    let path = trail
        .crumbs
        .iter()
        .map(format_crumb)
        .collect::<Vec<_>>()
        .join(&separator);

    let mut output = path;
    output.push('\n');
    for crumb in &trail.crumbs {
        output.push_str(&format!(
            "  {} {}{}\n",
            format!("{}.", crumb.position).dimmed(),
            crumb.label.bold(),
            crumb
                .link
                .as_deref()
                .map(|link| format!(" {}", link.cyan().underline()))
                .unwrap_or_default()
        ));
    }

    output
}

/// Linked crumbs in blue, the terminal crumb highlighted
fn format_crumb(crumb: &Crumb) -> String {
    if crumb.is_linked() {
        crumb.label.bright_blue().to_string()
    } else {
        crumb.label.bright_yellow().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ansi_basic() {
        colored::control::set_override(false);

        let trail = Trail {
            crumbs: vec![
                Crumb {
                    label: "Home".to_string(),
                    link: Some("https://site.test/".to_string()),
                    position: 1,
                },
                Crumb {
                    label: "Hello".to_string(),
                    link: None,
                    position: 2,
                },
            ],
        };

        let output = format_ansi(&trail);
        assert!(output.starts_with("Home › Hello\n"));
        assert!(output.contains("1. Home https://site.test/"));
        assert!(output.contains("2. Hello\n"));
    }

    #[test]
    fn test_format_ansi_empty() {
        colored::control::set_override(false);
        assert_eq!(format_ansi(&Trail::empty()), "(no breadcrumbs)");
    }
}
