//! NMEA sentence framer
//!
//! Turns a byte stream arriving one byte at a time into discrete sentence
//! buffers. A sentence starts at `$` and ends at a line feed. The buffer has a
//! fixed capacity; a stream that misbehaves (noise before `$`, oversized
//! sentences, a `$` in the middle of a sentence) is resynchronized at the next
//! `$` and the anomaly is latched in a sticky failure flag.

use crate::transport::ByteSource;
use std::time::{Duration, Instant};

/// Fixed sentence buffer capacity, terminator included
pub const SENTENCE_CAPACITY: usize = 256;

/// Framer position in the byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramerState {
    WaitingForStart,
    CollectingSentence,
    SentenceReady,
}

/// Sentence boundary state machine over a fixed-capacity buffer.
///
/// Single writer: only [`SentenceFramer::intake`] mutates the buffer. The
/// consumer reads a ready sentence through [`SentenceFramer::sentence`] and
/// must call [`SentenceFramer::clear`] before feeding more bytes, or the next
/// non-`$` byte is treated as a stale-buffer anomaly.
pub struct SentenceFramer {
    buf: [u8; SENTENCE_CAPACITY],
    len: usize,
    state: FramerState,
    fail: bool,
}

impl Default for SentenceFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceFramer {
    pub fn new() -> Self {
        Self {
            buf: [0u8; SENTENCE_CAPACITY],
            len: 0,
            state: FramerState::WaitingForStart,
            fail: false,
        }
    }

    /// Feed one byte through the state machine. Never blocks.
    pub fn intake(&mut self, c: u8) {
        match self.state {
            FramerState::WaitingForStart => {
                if c == b'$' {
                    self.start_collecting_sentence();
                    self.state = FramerState::CollectingSentence;
                } else {
                    // Stream is not synchronized to a sentence boundary.
                    self.fail = true;
                }
            }
            FramerState::CollectingSentence => {
                // Overflow check runs before the byte is stored, reserving
                // room for a terminator. The overflowing byte is dropped and
                // the partial sentence discarded; resynchronize at the next $.
                if self.len >= SENTENCE_CAPACITY - 2 {
                    self.fail = true;
                    self.len = 0;
                    self.state = FramerState::WaitingForStart;
                } else if c == b'$' {
                    // A $ mid-sentence means the previous sentence was cut
                    // short. Restart collection from this $; the new sentence
                    // is still worth capturing.
                    self.start_collecting_sentence();
                    self.fail = true;
                } else {
                    self.buf[self.len] = c;
                    self.len += 1;

                    if c == b'\n' {
                        self.state = FramerState::SentenceReady;
                    }
                }
            }
            FramerState::SentenceReady => {
                if c == b'$' {
                    // Consumer never read the previous sentence. Newest wins.
                    self.start_collecting_sentence();
                    self.state = FramerState::CollectingSentence;
                } else {
                    self.state = FramerState::WaitingForStart;
                    self.len = 0;
                    self.fail = true;
                }
            }
        }
    }

    /// Poll a transport for one byte and feed it through [`Self::intake`].
    /// No-op when no byte is available. Never blocks.
    pub fn poll<T: ByteSource>(&mut self, source: &mut T) {
        if !source.available() {
            return;
        }
        let c = source.read_byte();
        self.intake(c);
    }

    /// The completed sentence, only while one is ready
    pub fn sentence(&self) -> Option<&[u8]> {
        if self.state == FramerState::SentenceReady {
            Some(&self.buf[..self.len])
        } else {
            None
        }
    }

    /// True iff a complete sentence is waiting to be read
    pub fn sentence_available(&self) -> bool {
        self.state == FramerState::SentenceReady
    }

    /// Number of bytes in the ready sentence, 0 otherwise
    pub fn sentence_len(&self) -> usize {
        if self.state == FramerState::SentenceReady {
            self.len
        } else {
            0
        }
    }

    /// Drop the current sentence and go back to waiting for a `$`.
    ///
    /// Call this after processing a ready sentence so it is not seen twice.
    pub fn clear(&mut self) {
        self.len = 0;
        self.state = FramerState::WaitingForStart;
    }

    /// Sticky anomaly flag. Remains set until [`Self::reset_failed`] so the
    /// caller can detect "something went wrong since I last checked".
    pub fn failed(&self) -> bool {
        self.fail
    }

    pub fn reset_failed(&mut self) {
        self.fail = false;
    }

    /// Blocking wait for a complete sentence, polling the transport until one
    /// is ready or `timeout` elapses. Returns true when a sentence is
    /// available.
    pub fn wait_for_sentence<T: ByteSource>(&mut self, source: &mut T, timeout: Duration) -> bool {
        let start = Instant::now();

        loop {
            self.poll(source);
            if self.sentence_available() {
                return true;
            }

            if start.elapsed() >= timeout {
                return false;
            }
        }
    }

    fn start_collecting_sentence(&mut self) {
        self.buf[0] = b'$';
        self.len = 1;
    }
}
