//! Tests for the `tracing` feature.
//!
//! Rebuilding the bucket array emits a `debug` event and an ignored rehash
//! request emits a `trace` event. These tests capture the formatted output
//! of a subscriber and check which events were emitted.

use chainset::chained::{ChainedHashSet, RehashError};
use rstest::rstest;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// A writer that appends into a shared buffer.
#[derive(Default, Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    fn lock(&self) -> io::Result<MutexGuard<'_, Vec<u8>>> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::other("buffer lock poisoned"))
    }

    fn contents(&self) -> String {
        String::from_utf8(self.lock().unwrap().clone()).unwrap()
    }

    fn clear(&self) {
        self.lock().unwrap().clear();
    }
}

impl Write for BufferWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.lock()?.write(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MakeWriter<'_> for BufferWriter {
    type Writer = Self;

    fn make_writer(&self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_output<F: FnOnce(&BufferWriter)>(test: F) {
    let writer = BufferWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || test(&writer));
}

#[rstest]
fn test_growth_emits_debug_event() {
    with_captured_output(|output| {
        let set: ChainedHashSet<i32> = (0..100).collect();
        assert_eq!(set.bucket_count(), 128);

        let logs = output.contents();
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("rehashed chained hash set"));
        assert!(logs.contains("from=64 to=128 len=64"));
        // One event per growth step: 0 -> 1 -> 2 -> ... -> 128.
        assert_eq!(logs.matches("rehashed chained hash set").count(), 8);
        assert!(!logs.contains("rehash request ignored"));
    });
}

#[rstest]
fn test_explicit_rehash_emits_debug_event() {
    with_captured_output(|output| {
        let mut set: ChainedHashSet<i32> = (0..10).collect();
        output.clear();

        set.rehash(40);

        assert_eq!(set.bucket_count(), 40);
        assert!(output.contents().contains("from=16 to=40 len=10"));
    });
}

#[rstest]
fn test_rejected_rehash_emits_trace_event() {
    with_captured_output(|output| {
        let mut set: ChainedHashSet<i32> = (0..10).collect();
        output.clear();

        assert_eq!(
            set.try_rehash(3),
            Err(RehashError::InsufficientBuckets {
                len: 10,
                requested: 3,
                minimum: 10
            })
        );
        assert_eq!(set.bucket_count(), 16);

        let logs = output.contents();
        assert!(logs.contains("TRACE"));
        assert!(logs.contains("rehash request ignored"));
        assert!(logs.contains("3 buckets cannot hold 10 elements"));
        assert!(!logs.contains("rehashed chained hash set"));
    });
}

#[rstest]
fn test_unchanged_rehash_emits_trace_event() {
    with_captured_output(|output| {
        let mut set: ChainedHashSet<i32> = (0..10).collect();
        output.clear();

        set.rehash(16);

        let logs = output.contents();
        assert!(logs.contains("rehash request ignored"));
        assert!(logs.contains("set already has 16 buckets"));
    });
}
