//! Indented Writer
//!
//! [`IndentedWriter`] decorates a sink and inserts the current indentation at
//! the start of every line. Callers only adjust the indent level; line
//! boundaries are detected from the text itself.
//!
//! # Write paths
//!
//! Every write goes through the same two primitives:
//!
//! - `emit_indent`: write the owed prefix before content.
//! - `emit_indent_for_line`: write the owed prefix of an empty line before its
//!   terminator, if empty lines are indented.
//!
//! The blocking surface lives here; the suspending mirror lives in
//! `async_ops` and calls the sink in exactly the same order.
//!
//! # Lifecycle
//!
//! A writer is open until [`IndentedWriter::close`] (or its async twin) runs.
//! Closing is idempotent. Every other write fails with
//! [`WriteError::Disposed`] afterwards, and the sink is never touched again.
//! Dropping an open writer closes it as a backstop.

use std::fmt::{self, Display};

use crate::config::{normalize_indent_unit, IndentConfig, LineTerminator, ValidConfig};
use crate::error::{Result, WriteError};
use crate::sink::{Close, TextSink};
use crate::state::{classify, segments, CharClass, IndentState, Segment};

mod async_ops;
mod guard;

pub use guard::IndentGuard;

/// Name reported by [`WriteError::Disposed`].
const DISPOSED_NAME: &str = "IndentedWriter";

/// A sink decorator that indents every line it writes.
///
/// # Example
///
/// ```
/// use ori_indent::{IndentConfig, IndentedWriter};
///
/// let mut out = String::new();
/// let mut writer = IndentedWriter::with_config(&mut out, IndentConfig::with_indent_unit("    "))?;
/// writer.write_line_str("fn main() {")?;
/// writer.indent();
/// writer.write_str("let x = 1;\nprintln!(\"{x}\");\n")?;
/// writer.dedent();
/// writer.write_line_str("}")?;
/// writer.close()?;
/// drop(writer);
///
/// assert_eq!(out, "fn main() {\n    let x = 1;\n    println!(\"{x}\");\n}\n");
/// # Ok::<(), ori_indent::WriteError>(())
/// ```
#[derive(Debug)]
pub struct IndentedWriter<S: Close> {
    /// Always `Some` until ownership is handed back by `into_inner`.
    sink: Option<S>,
    state: IndentState,
    line_terminator: LineTerminator,
    keep_open: bool,
    closed: bool,
}

impl<S: Close> IndentedWriter<S> {
    /// Wrap `sink` with the default configuration.
    pub fn new(sink: S) -> Self {
        Self::from_valid(sink, ValidConfig::default())
    }

    /// Wrap `sink`, rejecting an unsupported line terminator.
    pub fn with_config(sink: S, config: IndentConfig) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self::from_valid(sink, config))
    }

    /// Wrap `sink` with an already checked configuration.
    pub fn from_valid(sink: S, config: ValidConfig) -> Self {
        Self {
            sink: Some(sink),
            state: IndentState::new(config.indent_unit, config.indent_empty_lines),
            line_terminator: config.line_terminator,
            keep_open: config.keep_open,
            closed: false,
        }
    }

    /// Current indent level.
    #[inline]
    pub fn indent_level(&self) -> usize {
        self.state.level()
    }

    /// Set the indent level. Negative values clamp to zero.
    ///
    /// Takes effect at the next line start; a line that already received its
    /// prefix is not re-indented.
    pub fn set_indent_level(&mut self, level: isize) {
        let clamped = usize::try_from(level).unwrap_or(0);
        if level < 0 {
            tracing::trace!(requested = level, "negative indent level clamped to zero");
        }
        self.state.set_level(clamped);
    }

    /// Increase the indent level by one.
    pub fn indent(&mut self) {
        self.state.set_level(self.state.level().saturating_add(1));
    }

    /// Decrease the indent level by one, stopping at zero.
    pub fn dedent(&mut self) {
        self.state.set_level(self.state.level().saturating_sub(1));
    }

    /// String repeated once per indent level.
    #[inline]
    pub fn indent_unit(&self) -> &str {
        self.state.unit()
    }

    /// Replace the indentation unit. Empty normalizes to a single space.
    pub fn set_indent_unit(&mut self, unit: impl Into<String>) {
        self.state.set_unit(normalize_indent_unit(unit.into()));
    }

    /// Whether lines without content still receive their prefix.
    #[inline]
    pub fn indent_empty_lines(&self) -> bool {
        self.state.indent_empty_lines()
    }

    /// Terminator written at the end of every line.
    #[inline]
    pub fn line_terminator(&self) -> LineTerminator {
        self.line_terminator
    }

    /// Whether closing leaves the sink open.
    #[inline]
    pub fn keep_open(&self) -> bool {
        self.keep_open
    }

    /// Whether the next content character starts a fresh line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.state.is_pending()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The wrapped sink.
    pub fn get_ref(&self) -> Result<&S> {
        match self.sink.as_ref() {
            Some(sink) if !self.closed => Ok(sink),
            _ => Err(WriteError::Disposed(DISPOSED_NAME)),
        }
    }

    /// Hand back the sink without closing it.
    ///
    /// Fails once the writer has been closed and has released the sink.
    /// With `keep_open` the sink was never released and is still returned.
    pub fn into_inner(mut self) -> Result<S> {
        if self.closed && !self.keep_open {
            return Err(WriteError::Disposed(DISPOSED_NAME));
        }
        self.closed = true;
        self.sink.take().ok_or(WriteError::Disposed(DISPOSED_NAME))
    }

    /// Close the writer, and the sink unless `keep_open` is set.
    ///
    /// Calling this more than once is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if !self.begin_close() {
            return Ok(());
        }
        match self.sink.as_mut() {
            Some(sink) if !self.keep_open => sink.close(),
            _ => Ok(()),
        }
    }

    /// Mark the writer closed. Returns `false` if it already was.
    fn begin_close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        tracing::debug!(keep_open = self.keep_open, "closing indented writer");
        true
    }

    #[inline]
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(WriteError::Disposed(DISPOSED_NAME))
        } else {
            Ok(())
        }
    }

    /// Split borrows of the state and the sink, or fail if closed.
    #[inline]
    fn parts(&mut self) -> Result<(&mut IndentState, &mut S)> {
        match self.sink.as_mut() {
            Some(sink) if !self.closed => Ok((&mut self.state, sink)),
            _ => Err(WriteError::Disposed(DISPOSED_NAME)),
        }
    }
}

impl<S: TextSink> IndentedWriter<S> {
    /// Write a single character.
    ///
    /// `'\r'` is dropped and `'\n'` ends the line with the configured
    /// terminator.
    pub fn write_char(&mut self, c: char) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        write_char(state, sink, c, terminator)
    }

    /// Write a string, indenting after every embedded newline.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        write_segments(state, sink, s, terminator)
    }

    /// Write a character buffer.
    pub fn write_chars(&mut self, buf: &[char]) -> Result<()> {
        self.ensure_open()?;
        self.write_str(&collect_chars(buf))
    }

    /// Write `count` characters of `buf` starting at `index`.
    pub fn write_chars_at(&mut self, buf: &[char], index: usize, count: usize) -> Result<()> {
        self.ensure_open()?;
        let chars = char_range(buf, index, count)?;
        self.write_str(&collect_chars(chars))
    }

    /// Write formatted arguments. Backs the `write!` macro.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.ensure_open()?;
        match args.as_str() {
            Some(s) => self.write_str(s),
            None => self.write_str(&render(args)?),
        }
    }

    /// Write any displayable value: numbers, booleans, identifiers...
    pub fn write_value<T: Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.ensure_open()?;
        self.write_str(&render(format_args!("{value}"))?)
    }

    /// End the current line.
    pub fn write_line(&mut self) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        end_line(state, sink, terminator)
    }

    pub fn write_line_char(&mut self, c: char) -> Result<()> {
        self.write_char(c)?;
        self.write_line()
    }

    pub fn write_line_str(&mut self, s: &str) -> Result<()> {
        self.write_str(s)?;
        self.write_line()
    }

    pub fn write_line_chars(&mut self, buf: &[char]) -> Result<()> {
        self.write_chars(buf)?;
        self.write_line()
    }

    pub fn write_line_chars_at(&mut self, buf: &[char], index: usize, count: usize) -> Result<()> {
        self.write_chars_at(buf, index, count)?;
        self.write_line()
    }

    pub fn write_line_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_fmt(args)?;
        self.write_line()
    }

    pub fn write_line_value<T: Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.write_value(value)?;
        self.write_line()
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        let (_, sink) = self.parts()?;
        sink.flush()
    }
}

impl<S: Close> Drop for IndentedWriter<S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        tracing::debug!("indented writer dropped while open, releasing sink");
        if let Err(err) = self.close() {
            tracing::warn!(%err, "failed to release sink on drop");
        }
    }
}

impl<S: Close> Close for IndentedWriter<S> {
    fn close(&mut self) -> Result<()> {
        IndentedWriter::close(self)
    }
}

impl<S: TextSink> TextSink for IndentedWriter<S> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        IndentedWriter::write_str(self, s)
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        IndentedWriter::write_char(self, c)
    }

    fn flush(&mut self) -> Result<()> {
        IndentedWriter::flush(self)
    }
}

impl<S: TextSink> fmt::Write for IndentedWriter<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        IndentedWriter::write_str(self, s).map_err(fmt_error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        IndentedWriter::write_char(self, c).map_err(fmt_error)
    }
}

/// `fmt::Write` cannot carry our error, so log it before it is lost.
fn fmt_error(err: WriteError) -> fmt::Error {
    tracing::debug!(%err, "indented write failed inside fmt::Write");
    fmt::Error
}

/// Format `args` into a fresh string, surfacing `Display` failures.
fn render(args: fmt::Arguments<'_>) -> Result<String> {
    let mut text = String::new();
    fmt::write(&mut text, args)?;
    Ok(text)
}

fn collect_chars(buf: &[char]) -> String {
    buf.iter().collect()
}

/// Bounds-checked `buf[index..index + count]`.
fn char_range(buf: &[char], index: usize, count: usize) -> Result<&[char]> {
    index
        .checked_add(count)
        .and_then(|end| buf.get(index..end))
        .ok_or(WriteError::RangeOutOfBounds {
            index,
            count,
            len: buf.len(),
        })
}

fn emit_indent<S: TextSink + ?Sized>(state: &mut IndentState, sink: &mut S) -> Result<()> {
    if let Some(prefix) = state.indent_due()? {
        if !prefix.is_empty() {
            sink.write_str(prefix)?;
        }
        state.indent_emitted();
    }
    Ok(())
}

fn emit_indent_for_line<S: TextSink + ?Sized>(state: &mut IndentState, sink: &mut S) -> Result<()> {
    if let Some(prefix) = state.indent_due_for_line()? {
        if !prefix.is_empty() {
            sink.write_str(prefix)?;
        }
        state.indent_emitted();
    }
    Ok(())
}

fn end_line<S: TextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    terminator: LineTerminator,
) -> Result<()> {
    emit_indent_for_line(state, sink)?;
    sink.write_str(terminator.as_str())?;
    state.line_started();
    Ok(())
}

fn write_char<S: TextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    c: char,
    terminator: LineTerminator,
) -> Result<()> {
    match classify(c) {
        CharClass::Discard => Ok(()),
        CharClass::LineEnd => end_line(state, sink, terminator),
        CharClass::Content => {
            emit_indent(state, sink)?;
            sink.write_char(c)
        }
    }
}

fn write_segments<S: TextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    text: &str,
    terminator: LineTerminator,
) -> Result<()> {
    for segment in segments(text) {
        match segment {
            Segment::Text(run) => {
                emit_indent(state, sink)?;
                sink.write_str(run)?;
            }
            Segment::LineEnd => end_line(state, sink, terminator)?,
        }
    }
    Ok(())
}
