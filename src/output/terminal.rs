//! Terminal output utilities.
//!
//! Provides formatting helpers and the startup banner.

use colored::Colorize;

/// Format a value as a left-aligned column of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the column
///
/// # Returns
/// A left-padded string, never truncated
pub fn column<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// One-line name and version banner.
pub fn banner() -> String {
    format!("#{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Print the banner to stderr, keeping stdout clean for report output.
pub fn print_banner() {
    eprintln!("{}", banner().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_short() {
        assert_eq!(column("test", 10), "test      ");
    }

    #[test]
    fn test_column_exact() {
        assert_eq!(column("test", 4), "test");
    }

    #[test]
    fn test_column_long() {
        assert_eq!(column("long_value", 5), "long_value");
    }

    #[test]
    fn test_column_number() {
        assert_eq!(column(42, 6), "42    ");
    }

    #[test]
    fn test_banner_names_the_binary() {
        let banner = banner();
        assert!(banner.starts_with('#'));
        assert!(banner.contains(env!("CARGO_PKG_NAME")));
    }
}
