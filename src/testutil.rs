//! Shared test utilities
//!
//! Capture-backed stream and view constructors used by unit and integration
//! tests to assert on rendered output.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::views::{Streams, View};

/// Handle to a capture buffer fed by a [`Streams`] writer.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }

    /// Captured output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buf) = self.buf.lock() {
            buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Streams whose output and error writers append to separate capture buffers.
#[must_use]
pub fn capture_streams() -> (Streams, CapturedOutput, CapturedOutput) {
    let out = CapturedOutput::default();
    let err = CapturedOutput::default();
    let streams = Streams::from_writers(
        Box::new(CaptureWriter {
            buf: Arc::clone(&out.buf),
        }),
        Box::new(CaptureWriter {
            buf: Arc::clone(&err.buf),
        }),
    );
    (streams, out, err)
}

/// A color-disabled [`View`] backed by capture buffers, for plain-text
/// assertions.
#[must_use]
pub fn test_view() -> (View, CapturedOutput, CapturedOutput) {
    let (streams, out, err) = capture_streams();
    (View::new(streams, false), out, err)
}
