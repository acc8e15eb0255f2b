//! Suspending mirror of the blocking write surface.
//!
//! Each method makes the same sink calls, in the same order, as its blocking
//! twin, and applies the same state transitions. State only changes after the
//! awaited sink call has completed, so a dropped future never leaves the line
//! bookkeeping half-updated.

use std::fmt::{self, Display};

use super::{char_range, collect_chars, render, IndentedWriter};
use crate::config::LineTerminator;
use crate::error::Result;
use crate::sink::AsyncTextSink;
use crate::state::{classify, segments, CharClass, IndentState, Segment};

impl<S: AsyncTextSink> IndentedWriter<S> {
    pub async fn write_char_async(&mut self, c: char) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        write_char(state, sink, c, terminator).await
    }

    pub async fn write_str_async(&mut self, s: &str) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        write_segments(state, sink, s, terminator).await
    }

    pub async fn write_chars_async(&mut self, buf: &[char]) -> Result<()> {
        self.ensure_open()?;
        self.write_str_async(&collect_chars(buf)).await
    }

    pub async fn write_chars_at_async(
        &mut self,
        buf: &[char],
        index: usize,
        count: usize,
    ) -> Result<()> {
        self.ensure_open()?;
        let chars = char_range(buf, index, count)?;
        self.write_str_async(&collect_chars(chars)).await
    }

    /// Write formatted arguments, e.g. `w.write_fmt_async(format_args!(..))`.
    pub async fn write_fmt_async(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.ensure_open()?;
        let text = match args.as_str() {
            Some(s) => s.to_owned(),
            None => render(args)?,
        };
        self.write_str_async(&text).await
    }

    pub async fn write_value_async<T: Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.ensure_open()?;
        let text = render(format_args!("{value}"))?;
        self.write_str_async(&text).await
    }

    pub async fn write_line_async(&mut self) -> Result<()> {
        let terminator = self.line_terminator;
        let (state, sink) = self.parts()?;
        end_line(state, sink, terminator).await
    }

    pub async fn write_line_char_async(&mut self, c: char) -> Result<()> {
        self.write_char_async(c).await?;
        self.write_line_async().await
    }

    pub async fn write_line_str_async(&mut self, s: &str) -> Result<()> {
        self.write_str_async(s).await?;
        self.write_line_async().await
    }

    pub async fn write_line_chars_async(&mut self, buf: &[char]) -> Result<()> {
        self.write_chars_async(buf).await?;
        self.write_line_async().await
    }

    pub async fn write_line_chars_at_async(
        &mut self,
        buf: &[char],
        index: usize,
        count: usize,
    ) -> Result<()> {
        self.write_chars_at_async(buf, index, count).await?;
        self.write_line_async().await
    }

    pub async fn write_line_fmt_async(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_fmt_async(args).await?;
        self.write_line_async().await
    }

    pub async fn write_line_value_async<T: Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.write_value_async(value).await?;
        self.write_line_async().await
    }

    pub async fn flush_async(&mut self) -> Result<()> {
        let (_, sink) = self.parts()?;
        sink.flush_async().await
    }

    /// Close the writer, awaiting the sink's own shutdown unless `keep_open`
    /// is set. Calling this more than once is a no-op.
    pub async fn close_async(&mut self) -> Result<()> {
        if !self.begin_close() {
            return Ok(());
        }
        match self.sink.as_mut() {
            Some(sink) if !self.keep_open => sink.close_async().await,
            _ => Ok(()),
        }
    }
}

impl<S: AsyncTextSink> AsyncTextSink for IndentedWriter<S> {
    async fn write_str_async(&mut self, s: &str) -> Result<()> {
        IndentedWriter::write_str_async(self, s).await
    }

    async fn write_char_async(&mut self, c: char) -> Result<()> {
        IndentedWriter::write_char_async(self, c).await
    }

    async fn flush_async(&mut self) -> Result<()> {
        IndentedWriter::flush_async(self).await
    }

    async fn close_async(&mut self) -> Result<()> {
        IndentedWriter::close_async(self).await
    }
}

async fn emit_indent<S: AsyncTextSink + ?Sized>(state: &mut IndentState, sink: &mut S) -> Result<()> {
    if let Some(prefix) = state.indent_due()? {
        if !prefix.is_empty() {
            sink.write_str_async(prefix).await?;
        }
        state.indent_emitted();
    }
    Ok(())
}

async fn emit_indent_for_line<S: AsyncTextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
) -> Result<()> {
    if let Some(prefix) = state.indent_due_for_line()? {
        if !prefix.is_empty() {
            sink.write_str_async(prefix).await?;
        }
        state.indent_emitted();
    }
    Ok(())
}

async fn end_line<S: AsyncTextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    terminator: LineTerminator,
) -> Result<()> {
    emit_indent_for_line(state, sink).await?;
    sink.write_str_async(terminator.as_str()).await?;
    state.line_started();
    Ok(())
}

async fn write_char<S: AsyncTextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    c: char,
    terminator: LineTerminator,
) -> Result<()> {
    match classify(c) {
        CharClass::Discard => Ok(()),
        CharClass::LineEnd => end_line(state, sink, terminator).await,
        CharClass::Content => {
            emit_indent(state, sink).await?;
            sink.write_char_async(c).await
        }
    }
}

async fn write_segments<S: AsyncTextSink + ?Sized>(
    state: &mut IndentState,
    sink: &mut S,
    text: &str,
    terminator: LineTerminator,
) -> Result<()> {
    for segment in segments(text) {
        match segment {
            Segment::Text(run) => {
                emit_indent(state, sink).await?;
                sink.write_str_async(run).await?;
            }
            Segment::LineEnd => end_line(state, sink, terminator).await?,
        }
    }
    Ok(())
}
