//! Ori Indent
//!
//! Indentation-aware text writing for code generators, debug dumps and
//! structured logs.
//!
//! # Architecture
//!
//! [`IndentedWriter`] decorates a character sink. It tracks whether the next
//! character starts a new line and, if so, writes the current indentation
//! first. Callers adjust a single indent level instead of prefixing lines by
//! hand.
//!
//! - Newlines embedded in bulk text are turned into line ends, so a single
//!   `write_str("a\nb")` indents both lines.
//! - `'\r'` is dropped; the configured terminator (`"\n"` or `"\r\n"`) is
//!   written for every line end.
//! - Blocking and suspending (`_async`) methods make identical sink calls.
//!
//! # Modules
//!
//! - [`config`]: writer configuration and line terminators
//! - [`error`]: the shared error type
//! - [`sink`]: sink traits and bundled sinks
//! - [`writer`]: the decorator itself
//!
//! # Tracing
//!
//! Lifecycle events are logged through `tracing`. Enable them with
//! `RUST_LOG=ori_indent=debug` after calling [`init_tracing`].

pub mod config;
pub mod error;
pub mod sink;
mod state;
pub mod writer;

pub use config::{IndentConfig, LineTerminator, ValidConfig, DEFAULT_INDENT_UNIT};
pub use error::{ErrorKind, Result, WriteError};
pub use sink::{AsyncIoSink, AsyncTextSink, Close, IoSink, StringSink, TextSink};
pub use writer::{IndentGuard, IndentedWriter};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this at the start of tests or binaries to enable tracing output.
/// Enable with `RUST_LOG=ori_indent=debug` or `RUST_LOG=ori_indent=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
