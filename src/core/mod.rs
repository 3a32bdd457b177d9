/// Core module for line scanning
///
/// This module contains the pattern-rule table and the scanner that drives it
/// over the lines of an input file.

pub mod scanner;
