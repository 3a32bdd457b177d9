/// Utility modules for the line scanner
///
/// This module contains helper functions for opening scan inputs and tidying
/// their lines.

pub mod file_utils;
