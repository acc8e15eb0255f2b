//! Indentation State Machine
//!
//! Pure bookkeeping for line starts. Nothing here touches a sink: callers ask
//! which prefix is owed, write it themselves, and only then report success.
//! A failed write therefore leaves the state exactly as it was.
//!
//! # Line boundaries
//!
//! - `'\r'` is dropped. It never reaches the sink and never counts as content.
//! - `'\n'` ends the current line; the writer emits its configured terminator.
//! - Everything else is content and requires the line's prefix first.
//!
//! Changing the level is only a counter update. The prefix is built the first
//! time a line needs it and cached until the level or unit changes.

use crate::error::{Result, WriteError};

/// How a single character is treated by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Silently dropped.
    Discard,
    /// Ends the current line.
    LineEnd,
    /// Forwarded to the sink after any pending indentation.
    Content,
}

/// Classify a single character.
#[inline]
pub(crate) fn classify(c: char) -> CharClass {
    match c {
        '\r' => CharClass::Discard,
        '\n' => CharClass::LineEnd,
        _ => CharClass::Content,
    }
}

/// A piece of bulk text as seen by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A non-empty run of content characters.
    Text(&'a str),
    /// A line break.
    LineEnd,
}

/// Split `text` into content runs and line breaks, dropping `'\r'`.
///
/// Equivalent to walking the text one character at a time through
/// [`classify`], but yields whole runs so they reach the sink in one call.
pub(crate) fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        loop {
            let rest = self.rest;
            let mut chars = rest.char_indices();
            let (_, first) = chars.next()?;
            match classify(first) {
                CharClass::Discard => self.rest = &rest[first.len_utf8()..],
                CharClass::LineEnd => {
                    self.rest = &rest[first.len_utf8()..];
                    return Some(Segment::LineEnd);
                }
                CharClass::Content => {
                    let end = chars
                        .find(|&(_, c)| classify(c) != CharClass::Content)
                        .map_or(rest.len(), |(i, _)| i);
                    self.rest = &rest[end..];
                    return Some(Segment::Text(&rest[..end]));
                }
            }
        }
    }
}

/// Per-writer indentation state.
#[derive(Debug, Clone)]
pub(crate) struct IndentState {
    unit: String,
    level: usize,
    /// `unit` repeated `level` times, built on demand.
    prefix: Option<String>,
    indent_empty_lines: bool,
    pending: bool,
}

impl IndentState {
    /// Fresh state: level 0, at the start of a line.
    pub(crate) fn new(unit: String, indent_empty_lines: bool) -> Self {
        Self {
            unit,
            level: 0,
            prefix: None,
            indent_empty_lines,
            pending: true,
        }
    }

    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn set_level(&mut self, level: usize) {
        if level != self.level {
            self.level = level;
            self.prefix = None;
        }
    }

    #[inline]
    pub(crate) fn unit(&self) -> &str {
        &self.unit
    }

    /// Replace the unit. The caller has already normalized it.
    pub(crate) fn set_unit(&mut self, unit: String) {
        self.unit = unit;
        self.prefix = None;
    }

    #[inline]
    pub(crate) fn indent_empty_lines(&self) -> bool {
        self.indent_empty_lines
    }

    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Prefix owed before content on the current line.
    ///
    /// `Some("")` at level 0: nothing to write, but the line still has to be
    /// marked as indented via [`Self::indent_emitted`]. Fails without touching
    /// the state if the prefix cannot be allocated.
    pub(crate) fn indent_due(&mut self) -> Result<Option<&str>> {
        if !self.pending {
            return Ok(None);
        }
        self.prefix().map(Some)
    }

    /// Prefix owed before terminating the current line.
    ///
    /// Only an empty line can still be pending here, and it is indented only
    /// when the empty-line policy asks for it.
    pub(crate) fn indent_due_for_line(&mut self) -> Result<Option<&str>> {
        if self.indent_empty_lines {
            self.indent_due()
        } else {
            Ok(None)
        }
    }

    fn prefix(&mut self) -> Result<&str> {
        let prefix = match self.prefix.take() {
            Some(prefix) => prefix,
            None => build_prefix(&self.unit, self.level)?,
        };
        Ok(self.prefix.insert(prefix).as_str())
    }

    /// The owed prefix has reached the sink.
    #[inline]
    pub(crate) fn indent_emitted(&mut self) {
        self.pending = false;
    }

    /// A line terminator has reached the sink.
    #[inline]
    pub(crate) fn line_started(&mut self) {
        self.pending = true;
    }
}

/// `unit` repeated `level` times, or an error if that cannot be allocated.
fn build_prefix(unit: &str, level: usize) -> Result<String> {
    let too_large = || WriteError::IndentTooLarge {
        level,
        unit_len: unit.len(),
    };
    let len = unit.len().checked_mul(level).ok_or_else(too_large)?;
    let mut prefix = String::new();
    if len == 0 {
        return Ok(prefix);
    }
    prefix.try_reserve_exact(len).map_err(|_| too_large())?;
    for _ in 0..level {
        prefix.push_str(unit);
    }
    Ok(prefix)
}

#[cfg(test)]
mod tests;
