/// Core line scanner implementation
///
/// This file contains the implementation of the LineScanner which drives an
/// ordered table of pattern rules over the lines of a text file, invoking
/// caller-supplied handlers on each match.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error, info};
use regex::{Captures, Regex};

use crate::utils::file_utils;

/// Errors raised during rule construction and scanning
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A rule pattern failed to compile
    #[error("Invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Handler for rules without a transform; receives the raw captures
type RawHandler<'s> = Box<dyn FnMut(usize, &Captures<'_>) + 's>;

/// Pre-processing function applied to the captures before the handler runs
type Transform<'s, T> = Box<dyn FnMut(usize, &Captures<'_>) -> T + 's>;

/// Handler for rules with a transform; receives the transform's output
type Handler<'s, T> = Box<dyn FnMut(usize, T) + 's>;

enum RuleAction<'s, T> {
    Raw(RawHandler<'s>),
    Transformed {
        transform: Transform<'s, T>,
        handler: Handler<'s, T>,
    },
}

/// A single pattern rule: a compiled regex plus the callbacks to run on match
pub struct ScanRule<'s, T = ()> {
    regex: Regex,
    action: RuleAction<'s, T>,
}

impl<T> std::fmt::Debug for ScanRule<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanRule")
            .field("regex", &self.regex)
            .finish_non_exhaustive()
    }
}

impl<'s, T> ScanRule<'s, T> {
    /// Create a rule whose handler receives the raw captures
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regex applied to each line
    /// * `handler` - Called with the 0-based line index and the captures for
    ///   every matching line
    ///
    /// # Returns
    ///
    /// The rule, or an error if the pattern does not compile
    pub fn new(pattern: &str, handler: impl FnMut(usize, &Captures<'_>) + 's) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern(pattern)?,
            action: RuleAction::Raw(Box::new(handler)),
        })
    }

    /// Create a rule with a pre-processing transform
    ///
    /// For every matching line the transform is called with the 0-based line
    /// index and the captures, and the handler is then called with the index
    /// and the transform's output in place of the raw captures.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regex applied to each line
    /// * `transform` - Maps (index, captures) to the value the handler sees
    /// * `handler` - Called with the line index and the transformed value
    ///
    /// # Returns
    ///
    /// The rule, or an error if the pattern does not compile
    pub fn with_transform(
        pattern: &str,
        transform: impl FnMut(usize, &Captures<'_>) -> T + 's,
        handler: impl FnMut(usize, T) + 's,
    ) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern(pattern)?,
            action: RuleAction::Transformed {
                transform: Box::new(transform),
                handler: Box::new(handler),
            },
        })
    }

    /// The source pattern of this rule
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Apply the rule to one line, firing its callbacks if the regex matches
    fn apply(&mut self, index: usize, line: &str) -> bool {
        let caps = match self.regex.captures(line) {
            Some(caps) => caps,
            None => return false,
        };

        match &mut self.action {
            RuleAction::Raw(handler) => handler(index, &caps),
            RuleAction::Transformed { transform, handler } => {
                let value = transform(index, &caps);
                handler(index, value);
            }
        }

        true
    }
}

/// Compile a rule pattern, surfacing failures as a typed error
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| {
        error!("Error compiling pattern `{}`: {}", pattern, source);
        ScanError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
        .into()
    })
}

/// Counters reported after a scan completes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of lines read from the input
    pub lines: usize,
    /// Number of handler invocations across all rules
    pub matches: usize,
}

/// Ordered table of pattern rules driven over a file line by line
///
/// Each line is tested against every rule in registration order; a line that
/// matches several rules fires each of their handlers. Line indices passed to
/// transforms and handlers are 0-based.
pub struct LineScanner<'s, T = ()> {
    rules: Vec<ScanRule<'s, T>>,
}

impl<'s, T> LineScanner<'s, T> {
    /// Create a scanner with an empty rule table
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule; rules run in the order they were added
    pub fn add_rule(&mut self, rule: ScanRule<'s, T>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Number of registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Scan a file on disk
    ///
    /// Fails with `ScanError::FileNotFound` if the path does not exist, never
    /// with a silent empty result. Files ending in `.gz` are decompressed
    /// transparently.
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to scan
    ///
    /// # Returns
    ///
    /// Counters for the completed scan
    pub fn scan(&mut self, file_path: &Path) -> Result<ScanStats> {
        info!("Scanning file: {}", file_path.display());

        if !file_path.exists() {
            error!("File not found: {}", file_path.display());
            return Err(ScanError::FileNotFound(file_path.to_path_buf()).into());
        }

        let reader = file_utils::open_reader(file_path)?;
        let stats = self
            .scan_reader(reader)
            .context(format!("Failed to scan file: {}", file_path.display()))?;

        info!(
            "Scan of {} complete: {} lines, {} matches",
            file_path.display(),
            stats.lines,
            stats.matches
        );

        Ok(stats)
    }

    /// Scan lines from any buffered reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of lines to scan
    ///
    /// # Returns
    ///
    /// Counters for the completed scan
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> Result<ScanStats> {
        let mut stats = ScanStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read line from input")?;
            stats.lines += 1;

            for rule in &mut self.rules {
                if rule.apply(index, &line) {
                    debug!("Line {} matched pattern `{}`", index, rule.pattern());
                    stats.matches += 1;
                }
            }
        }

        Ok(stats)
    }
}

impl<'s, T> Default for LineScanner<'s, T> {
    fn default() -> Self {
        Self::new()
    }
}
