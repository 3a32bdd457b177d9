/// Line Awk - An awk-style line scanner for simulation output files
///
/// This library provides a small scanning utility that reads a text file line
/// by line and, for each registered pattern that matches a line, invokes a
/// caller-supplied handler with the line index and the matched groups (or a
/// transformed version thereof).

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main scanner types for convenience
pub use crate::core::scanner::{compile_pattern, LineScanner, ScanError, ScanRule, ScanStats};
pub use crate::utils::file_utils::{clean_lines, open_reader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a single file with a set of pattern rules
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to scan
/// * `rules` - Pattern rules, applied to every line in registration order
///
/// # Returns
///
/// Counters for the completed scan; all real results are accumulated by the
/// caller-supplied rule handlers
pub fn scan_file<'s, P, T>(file_path: P, rules: Vec<ScanRule<'s, T>>) -> anyhow::Result<ScanStats>
where
    P: AsRef<std::path::Path>,
{
    let mut scanner = LineScanner::new();
    for rule in rules {
        scanner.add_rule(rule);
    }

    scanner.scan(file_path.as_ref())
}
