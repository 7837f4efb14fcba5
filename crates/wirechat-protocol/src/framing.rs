//! Newline-delimited record framing.
//!
//! The framer consumes raw byte chunks as the transport delivers them and
//! yields complete newline-terminated records, trimmed of surrounding
//! whitespace. Partial data is buffered until its newline arrives; chunk
//! boundaries never change which records come out.
//!
//! Oversized records (more than [`MAX_RECORD_SIZE`] bytes, newline
//! included) are dropped with a diagnostic. The oversized prefix is
//! discarded as it streams in rather than buffered in full, and framing
//! resumes at the byte after the terminating newline, so a hostile or
//! buggy peer cannot desynchronize the stream or grow the buffer without
//! bound.

use tracing::warn;

use crate::MAX_RECORD_SIZE;

/// Splits a byte stream into newline-delimited records.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
    /// Bytes already discarded from the record currently being skipped.
    discarded: usize,
    /// Whether the current record is being skipped as oversized.
    skipping: bool,
}

impl LineFramer {
    /// Creates an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes from the transport.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Returns the next complete record, trimmed of surrounding
    /// whitespace, or `None` when no full record is buffered yet.
    ///
    /// Empty-after-trim records and oversized records are consumed here
    /// and never surface.
    pub fn next_record(&mut self) -> Option<Vec<u8>> {
        loop {
            let Some(pos) = self.buf.iter().position(|&b| b == b'\n') else {
                // No newline yet. Once the partial record alone can no
                // longer fit the bound, drop it now instead of buffering.
                if self.discarded + self.buf.len() >= MAX_RECORD_SIZE {
                    self.discarded += self.buf.len();
                    self.buf.clear();
                    self.skipping = true;
                }
                return None;
            };

            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let size = self.discarded + line.len();
            let skipped = self.skipping;
            self.discarded = 0;
            self.skipping = false;

            if skipped || size > MAX_RECORD_SIZE {
                warn!(size, max = MAX_RECORD_SIZE, "dropping oversized record");
                continue;
            }

            let trimmed = line.trim_ascii();
            if trimmed.is_empty() {
                continue;
            }
            return Some(trimmed.to_vec());
        }
    }

    /// Iterator over the records currently extractable from the buffer.
    pub fn records(&mut self) -> Records<'_> {
        Records { framer: self }
    }

    /// Number of buffered bytes awaiting a newline.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

/// Draining iterator returned by [`LineFramer::records`].
#[derive(Debug)]
pub struct Records<'a> {
    framer: &'a mut LineFramer,
}

impl Iterator for Records<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        self.framer.next_record()
    }
}
