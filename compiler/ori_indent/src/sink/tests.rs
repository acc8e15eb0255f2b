use std::io;

use pretty_assertions::assert_eq;

use super::*;
use crate::error::WriteError;

#[test]
fn string_collects_text() {
    let mut sink = String::new();
    assert!(TextSink::write_str(&mut sink, "abc").is_ok());
    assert!(TextSink::write_char(&mut sink, 'd').is_ok());
    assert!(TextSink::flush(&mut sink).is_ok());
    assert!(sink.close().is_ok());
    assert_eq!(sink, "abcd");
}

#[test]
fn string_sink_rejects_writes_after_close() {
    let mut sink = StringSink::new();
    assert!(sink.write_str("open").is_ok());
    assert!(sink.close().is_ok());
    assert!(sink.is_closed());
    assert!(matches!(
        sink.write_char('x'),
        Err(WriteError::Disposed("StringSink"))
    ));
    assert!(matches!(sink.flush(), Err(WriteError::Disposed(_))));
    assert_eq!(sink.as_str(), "open");
}

#[test]
fn string_sink_close_is_idempotent() {
    let mut sink = StringSink::with_capacity(16);
    assert!(sink.is_empty());
    assert!(sink.close().is_ok());
    assert!(sink.close().is_ok());
    assert_eq!(sink.len(), 0);
}

#[test]
fn borrowed_sink_forwards_close() {
    let mut owned = StringSink::new();
    {
        let mut borrowed: &mut StringSink = &mut owned;
        assert!(TextSink::write_str(&mut borrowed, "x").is_ok());
        assert!(Close::close(&mut borrowed).is_ok());
    }
    assert!(owned.is_closed());
    assert_eq!(owned.into_string(), "x");
}

#[test]
fn io_sink_encodes_utf8() {
    let mut sink = IoSink::new(Vec::new());
    assert!(sink.write_str("a→").is_ok());
    assert!(sink.write_char('é').is_ok());
    assert!(sink.flush().is_ok());
    assert_eq!(sink.get_ref().as_slice(), "a→é".as_bytes());
}

#[test]
fn io_sink_close_marks_disposed() {
    let mut sink = IoSink::new(Vec::new());
    assert!(sink.close().is_ok());
    assert!(sink.is_closed());
    assert!(matches!(
        sink.write_str("late"),
        Err(WriteError::Disposed("IoSink"))
    ));
    assert!(sink.close().is_ok());
    assert!(sink.into_inner().is_empty());
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn io_sink_propagates_io_errors() {
    let mut sink = IoSink::new(BrokenPipe);
    match sink.write_str("x") {
        Err(WriteError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[tokio::test]
async fn async_string_sink() {
    let mut sink = StringSink::new();
    assert!(sink.write_str_async("ab").await.is_ok());
    assert!(sink.write_char_async('c').await.is_ok());
    assert!(sink.flush_async().await.is_ok());
    assert!(sink.close_async().await.is_ok());
    assert!(sink.is_closed());
    assert!(sink.write_str_async("d").await.is_err());
    assert_eq!(sink.as_str(), "abc");
}

#[tokio::test]
async fn async_io_sink_writes_and_shuts_down() {
    let mut sink = AsyncIoSink::new(Vec::<u8>::new());
    assert!(sink.write_str_async("x→").await.is_ok());
    assert!(sink.write_char_async('y').await.is_ok());
    assert!(sink.flush_async().await.is_ok());
    assert!(sink.close_async().await.is_ok());
    assert!(sink.is_closed());
    assert!(matches!(
        sink.write_str_async("z").await,
        Err(WriteError::Disposed("AsyncIoSink"))
    ));
    assert!(sink.close_async().await.is_ok());
    assert_eq!(sink.into_inner(), "x→y".as_bytes());
}

#[tokio::test]
async fn async_io_sink_blocking_close() {
    let mut sink = AsyncIoSink::new(Vec::<u8>::new());
    assert!(sink.close().is_ok());
    assert!(sink.write_char_async('a').await.is_err());
    assert!(sink.get_ref().is_empty());
}
