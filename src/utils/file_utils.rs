/// File handling utilities
///
/// This module provides helpers for opening scan inputs and tidying their
/// lines. Files are opened with scoped acquisition; the returned readers
/// release the handle when dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::debug;

use crate::core::scanner::ScanError;

/// Open a text file for line-by-line reading
///
/// Files with a `.gz` extension are decompressed on the fly; everything else
/// is read as-is. A missing path is reported as `ScanError::FileNotFound`
/// rather than a silent empty reader.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// A buffered reader over the file's text content
pub fn open_reader(file_path: &Path) -> Result<Box<dyn BufRead>> {
    if !file_path.exists() {
        return Err(ScanError::FileNotFound(file_path.to_path_buf()).into());
    }

    let file = File::open(file_path)
        .context(format!("Failed to open file: {}", file_path.display()))?;

    let is_gzip = file_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase() == "gz")
        .unwrap_or(false);

    if is_gzip {
        debug!("Opening {} with gzip decompression", file_path.display());
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Strip lines of surrounding whitespace
///
/// # Arguments
///
/// * `lines` - Lines to clean
/// * `remove_empty_lines` - Drop lines that are empty after cleaning
/// * `rstrip_only` - Strip trailing whitespace only, keeping indentation
///
/// # Returns
///
/// An iterator over the cleaned lines
pub fn clean_lines<I>(
    lines: I,
    remove_empty_lines: bool,
    rstrip_only: bool,
) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().filter_map(move |line| {
        let cleaned = if rstrip_only {
            line.trim_end().to_string()
        } else {
            line.trim().to_string()
        };

        if remove_empty_lines && cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    })
}
