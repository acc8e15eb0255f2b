//! Suspending byte-writer adapter over tokio.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{AsyncTextSink, Close};
use crate::error::{Result, WriteError};

/// Text sink over any [`tokio::io::AsyncWrite`], encoding as UTF-8.
///
/// Prefer [`AsyncTextSink::close_async`], which shuts the writer down. The
/// blocking [`Close::close`] cannot wait for that handshake; it only marks the
/// sink disposed and leaves the rest to the writer's own drop.
#[derive(Debug)]
pub struct AsyncIoSink<W: AsyncWrite + Unpin> {
    inner: W,
    closed: bool,
}

impl<W: AsyncWrite + Unpin> AsyncIoSink<W> {
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
            Err(WriteError::Disposed("AsyncIoSink"))
        } else {
            Ok(())
        }
    }
}

impl<W: AsyncWrite + Unpin> Close for AsyncIoSink<W> {
    fn close(&mut self) -> Result<()> {
        if !self.closed {
            tracing::debug!("async sink closed without shutdown");
            self.closed = true;
        }
        Ok(())
    }
}

impl<W: AsyncWrite + Unpin> AsyncTextSink for AsyncIoSink<W> {
    async fn write_str_async(&mut self, s: &str) -> Result<()> {
        self.ensure_open()?;
        self.inner.write_all(s.as_bytes()).await?;
        Ok(())
    }

    async fn flush_async(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.inner.flush().await?;
        Ok(())
    }

    async fn close_async(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.shutdown().await?;
        Ok(())
    }
}
