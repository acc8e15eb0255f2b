//! Blocking byte-writer adapter.

use std::io::Write;

use super::{Close, TextSink};
use crate::error::{Result, WriteError};

/// Text sink over any [`std::io::Write`], encoding as UTF-8.
///
/// Closing flushes the writer and marks the sink disposed. The writer itself
/// is released when the sink is dropped or taken back with [`Self::into_inner`].
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(WriteError::Disposed("IoSink"))
        } else {
            Ok(())
        }
    }
}

impl<W: Write> Close for IoSink<W> {
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write> TextSink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.ensure_open()?;
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.inner.flush()?;
        Ok(())
    }
}
