//! Writer Configuration
//!
//! [`IndentConfig`] is the user-facing configuration with plain public fields.
//! It is checked once, when a writer is constructed, and turned into a
//! [`ValidConfig`] whose line terminator is known to be supported.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WriteError};

/// Indentation unit used when none (or an empty one) is given.
pub const DEFAULT_INDENT_UNIT: &str = " ";

/// Line terminator written at the end of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineTerminator {
    /// Unix-style `"\n"`.
    #[default]
    Lf,
    /// Windows-style `"\r\n"`.
    CrLf,
}

impl LineTerminator {
    /// The terminator as text.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineTerminator {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "\n" => Ok(LineTerminator::Lf),
            "\r\n" => Ok(LineTerminator::CrLf),
            other => Err(WriteError::UnsupportedLineTerminator(other.to_owned())),
        }
    }
}

impl fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an [`IndentedWriter`](crate::IndentedWriter).
///
/// Everything except the indent level is fixed once the writer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentConfig {
    /// String repeated once per indent level. Empty normalizes to one space.
    pub indent_unit: String,

    /// Whether lines without any content still receive their prefix.
    /// Defaults to `false`.
    ///
    /// The prefix is written when the empty line is terminated, so a trailing
    /// empty line that is never terminated gets none.
    pub indent_empty_lines: bool,

    /// Line terminator, either `"\n"` or `"\r\n"`.
    /// Anything else is rejected when the writer is constructed.
    pub line_terminator: String,

    /// Leave the sink open when the writer is closed.
    /// Defaults to `false`, so closing the writer closes the sink.
    pub keep_open: bool,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
            indent_empty_lines: false,
            line_terminator: LineTerminator::Lf.as_str().to_owned(),
            keep_open: false,
        }
    }
}

impl IndentConfig {
    /// Create a config with the specified indentation unit.
    pub fn with_indent_unit(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
            ..Default::default()
        }
    }

    /// Create a config with the specified line terminator.
    pub fn with_line_terminator(line_terminator: impl Into<String>) -> Self {
        Self {
            line_terminator: line_terminator.into(),
            ..Default::default()
        }
    }

    /// Set whether empty lines are indented.
    #[must_use]
    pub fn indent_empty_lines(mut self, indent_empty_lines: bool) -> Self {
        self.indent_empty_lines = indent_empty_lines;
        self
    }

    /// Set whether the sink outlives the writer.
    #[must_use]
    pub fn keep_open(mut self, keep_open: bool) -> Self {
        self.keep_open = keep_open;
        self
    }

    /// Check the configuration and normalize the indentation unit.
    pub fn validate(self) -> Result<ValidConfig> {
        let line_terminator = self.line_terminator.parse::<LineTerminator>()?;
        Ok(ValidConfig {
            indent_unit: normalize_indent_unit(self.indent_unit),
            indent_empty_lines: self.indent_empty_lines,
            line_terminator,
            keep_open: self.keep_open,
        })
    }
}

/// A checked [`IndentConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConfig {
    pub(crate) indent_unit: String,
    pub(crate) indent_empty_lines: bool,
    pub(crate) line_terminator: LineTerminator,
    pub(crate) keep_open: bool,
}

impl ValidConfig {
    /// The normalized indentation unit.
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Whether empty lines are indented.
    pub fn indent_empty_lines(&self) -> bool {
        self.indent_empty_lines
    }

    /// The parsed line terminator.
    pub fn line_terminator(&self) -> LineTerminator {
        self.line_terminator
    }

    /// Whether the sink outlives the writer.
    pub fn keep_open(&self) -> bool {
        self.keep_open
    }
}

impl Default for ValidConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
            indent_empty_lines: false,
            line_terminator: LineTerminator::Lf,
            keep_open: false,
        }
    }
}

/// Replace an empty unit with [`DEFAULT_INDENT_UNIT`].
pub(crate) fn normalize_indent_unit(unit: String) -> String {
    if unit.is_empty() {
        DEFAULT_INDENT_UNIT.to_owned()
    } else {
        unit
    }
}
