//! Shared sinks for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink that can be cloned and inspected after logging.
///
/// With `chunk` set, each `write` call accepts at most that many bytes and
/// yields the thread, so an unguarded writer would interleave records.
#[derive(Clone, Default)]
pub struct SharedBuf {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
    chunk: Option<usize>,
}

#[allow(dead_code)]
impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunked(chunk: usize) -> Self {
        Self {
            chunk: Some(chunk),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    /// Number of flushes, i.e. completed records.
    pub fn records(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.chunk.map_or(buf.len(), |c| c.min(buf.len()));
        self.bytes.lock().unwrap().extend_from_slice(&buf[..n]);
        if self.chunk.is_some() {
            std::thread::yield_now();
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Sink that rejects every write.
#[allow(dead_code)]
pub struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
