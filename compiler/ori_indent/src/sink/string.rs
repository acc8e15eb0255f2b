//! In-memory sink that tracks whether it has been closed.

use super::{AsyncTextSink, Close, TextSink};
use crate::error::{Result, WriteError};

/// String-backed sink with an explicit closed state.
///
/// Unlike a bare `String`, writes after [`Close::close`] fail with
/// [`WriteError::Disposed`]. The collected text stays readable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringSink {
    buffer: String,
    closed: bool,
}

impl StringSink {
    /// Create an empty, open sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            closed: false,
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Length of the collected text in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether [`Close::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Take the collected text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(WriteError::Disposed("StringSink"))
        } else {
            Ok(())
        }
    }
}

impl Close for StringSink {
    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

impl TextSink for StringSink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.ensure_open()?;
        self.buffer.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        self.ensure_open()?;
        self.buffer.push(c);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.ensure_open()
    }
}

impl AsyncTextSink for StringSink {
    async fn write_str_async(&mut self, s: &str) -> Result<()> {
        self.write_str(s)
    }

    async fn write_char_async(&mut self, c: char) -> Result<()> {
        self.write_char(c)
    }

    async fn flush_async(&mut self) -> Result<()> {
        self.flush()
    }
}
