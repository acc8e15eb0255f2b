//! Character Sinks
//!
//! Destinations that accept text. An [`IndentedWriter`](crate::IndentedWriter)
//! forwards to a sink and is itself a sink, so writers can be stacked.
//!
//! # Traits
//!
//! - [`Close`]: release the sink. Shared by both write surfaces.
//! - [`TextSink`]: blocking writes.
//! - [`AsyncTextSink`]: suspending writes. Suspension may only happen inside
//!   the returned futures.
//!
//! # Implementations
//!
//! - `String`: in-memory, closing is a no-op.
//! - [`StringSink`]: in-memory with disposal tracking.
//! - [`IoSink`]: any `std::io::Write`, UTF-8 encoded.
//! - [`AsyncIoSink`]: any `tokio::io::AsyncWrite`, UTF-8 encoded.
//! - `&mut T` for any of the above, for sinks the caller keeps ownership of.

use std::future::Future;

use crate::error::Result;

mod async_io;
mod io;
mod string;

pub use async_io::AsyncIoSink;
pub use io::IoSink;
pub use string::StringSink;

/// Release of a sink's resources.
///
/// Implementations must be idempotent: closing twice is not an error.
pub trait Close {
    /// Release the sink. Later writes should fail.
    fn close(&mut self) -> Result<()>;
}

/// Blocking text destination.
pub trait TextSink: Close {
    /// Write a string slice.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Write a single character.
    fn write_char(&mut self, c: char) -> Result<()> {
        self.write_str(c.encode_utf8(&mut [0; 4]))
    }

    /// Push buffered output to its destination.
    fn flush(&mut self) -> Result<()>;
}

/// Suspending text destination.
///
/// Mirrors [`TextSink`] one method at a time.
pub trait AsyncTextSink: Close {
    /// Write a string slice.
    fn write_str_async(&mut self, s: &str) -> impl Future<Output = Result<()>>;

    /// Write a single character.
    fn write_char_async(&mut self, c: char) -> impl Future<Output = Result<()>> {
        async move {
            let mut buf = [0; 4];
            self.write_str_async(c.encode_utf8(&mut buf)).await
        }
    }

    /// Push buffered output to its destination.
    fn flush_async(&mut self) -> impl Future<Output = Result<()>>;

    /// Release the sink, waiting for any shutdown handshake.
    ///
    /// Defaults to the blocking [`Close::close`].
    fn close_async(&mut self) -> impl Future<Output = Result<()>> {
        async move { self.close() }
    }
}

impl Close for String {
    #[inline]
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl TextSink for String {
    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> Result<()> {
        self.push(c);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl AsyncTextSink for String {
    async fn write_str_async(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }

    async fn write_char_async(&mut self, c: char) -> Result<()> {
        self.push(c);
        Ok(())
    }

    async fn flush_async(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Close + ?Sized> Close for &mut T {
    #[inline]
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> Result<()> {
        (**self).write_char(c)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: AsyncTextSink + ?Sized> AsyncTextSink for &mut T {
    async fn write_str_async(&mut self, s: &str) -> Result<()> {
        (**self).write_str_async(s).await
    }

    async fn write_char_async(&mut self, c: char) -> Result<()> {
        (**self).write_char_async(c).await
    }

    async fn flush_async(&mut self) -> Result<()> {
        (**self).flush_async().await
    }

    async fn close_async(&mut self) -> Result<()> {
        (**self).close_async().await
    }
}

#[cfg(test)]
mod tests;
