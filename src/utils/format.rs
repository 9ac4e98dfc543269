//! Output formatting utilities
//!
//! Everything is written to a caller-supplied writer so the provisioning
//! output can be captured in tests as easily as it goes to stdout.

use crate::arm::ArmResource;
use crate::error::Result;
use crossterm::style::{Color as CrosstermColor, Stylize};
use std::collections::HashMap;
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Padding, Style},
    Table, Tabled,
};

/// Color theme for console output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub header: CrosstermColor,
    pub accent: CrosstermColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: CrosstermColor::Blue,
            accent: CrosstermColor::Magenta,
        }
    }
}

/// Display utilities for provisioning output
pub struct DisplayUtils {
    theme: ColorTheme,
    no_color: bool,
}

impl DisplayUtils {
    pub fn new(no_color: bool) -> Self {
        Self {
            theme: ColorTheme::default(),
            no_color,
        }
    }

    /// Print a section header, preceded by a blank line
    pub fn print_header(&self, out: &mut dyn Write, title: &str) -> Result<()> {
        let styled_title = if self.no_color {
            format!("=== {} ===", title)
        } else {
            format!("=== {} ===", title.with(self.theme.header).bold())
        };

        writeln!(out)?;
        writeln!(out, "{}", styled_title)?;
        Ok(())
    }

    /// Print the identifying fields of a resource followed by its full JSON body
    pub fn print_resource<R: ArmResource>(&self, out: &mut dyn Write, resource: &R) -> Result<()> {
        let tags = format_tags(resource.tags());
        let pairs = [
            ("Name", resource.name()),
            ("Id", resource.id()),
            ("Location", resource.location().unwrap_or("-")),
            ("Tags", tags.as_str()),
        ];

        for line in self.format_key_value_pairs(&pairs).lines() {
            writeln!(out, "\t{}", line)?;
        }
        writeln!(out, "{}", serde_json::to_string_pretty(resource)?)?;
        Ok(())
    }

    /// Format key-value pairs
    pub fn format_key_value_pairs(&self, pairs: &[(&str, &str)]) -> String {
        let max_key_length = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        pairs
            .iter()
            .map(|(key, value)| {
                let formatted_key = if self.no_color {
                    format!("{:width$}", key, width = max_key_length)
                } else {
                    format!(
                        "{:width$}",
                        key.with(self.theme.accent).bold(),
                        width = max_key_length
                    )
                };
                format!("{}: {}", formatted_key, value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render tags as `{key=value, ...}` in key order
pub fn format_tags(tags: &HashMap<String, String>) -> String {
    let mut entries: Vec<_> = tags.iter().collect();
    entries.sort();
    let body = entries
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Format rows as a rounded table, or a placeholder line when there are none
pub fn format_table<T: Tabled>(rows: &[T], no_color: bool) -> String {
    if rows.is_empty() {
        return "No data to display".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Padding::new(1, 1, 0, 0));

    if !no_color {
        table.with(Modify::new(Rows::first()).with(Color::FG_BLUE));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct TestData {
        name: String,
        value: String,
    }

    #[test]
    fn test_table_formatting() {
        let data = vec![
            TestData {
                name: "test1".to_string(),
                value: "value1".to_string(),
            },
            TestData {
                name: "test2".to_string(),
                value: "value2".to_string(),
            },
        ];

        let table = format_table(&data, true);
        assert!(table.contains("test1"));
        assert!(table.contains("value2"));
    }

    #[test]
    fn test_empty_table() {
        let data: Vec<TestData> = Vec::new();
        assert_eq!(format_table(&data, true), "No data to display");
    }

    #[test]
    fn test_key_value_formatting() {
        let display = DisplayUtils::new(true);
        let pairs = vec![("Name", "sample-rust-nsg"), ("Location", "westus")];

        let result = display.format_key_value_pairs(&pairs);
        assert_eq!(result, "Name    : sample-rust-nsg\nLocation: westus");
    }

    #[test]
    fn test_format_tags_sorted() {
        let mut tags = HashMap::new();
        tags.insert("env".to_string(), "demo".to_string());
        tags.insert("app".to_string(), "nsg".to_string());
        assert_eq!(format_tags(&tags), "{app=nsg, env=demo}");
        assert_eq!(format_tags(&HashMap::new()), "{}");
    }

    #[test]
    fn test_print_header_no_color() {
        let display = DisplayUtils::new(true);
        let mut out = Vec::new();
        display.print_header(&mut out, "Create Resource Group").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n=== Create Resource Group ===\n"
        );
    }
}
