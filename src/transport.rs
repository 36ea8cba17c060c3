//! Transport boundary for GPS serial links
//!
//! The framer and the startup handshake talk to the physical link through
//! these traits so the protocol core stays independent of the actual serial
//! device. A polling step calls [`ByteSource::available`] and
//! [`ByteSource::read_byte`] at most once each and never assumes more than
//! one byte is buffered.

use crate::error::Result;

/// Non-blocking, one-byte-at-a-time reader side of a GPS link
pub trait ByteSource {
    /// True when at least one byte can be read without blocking
    fn available(&mut self) -> bool;

    /// Read one byte. Only call when [`Self::available`] returned true.
    fn read_byte(&mut self) -> u8;
}

/// Writer side of a GPS link, needed by the module startup handshake
pub trait GpsPort: ByteSource {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Write a command followed by CR LF, the NMEA line terminator
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_bytes(line.as_bytes())?;
        self.write_bytes(b"\r\n")
    }
}

/// In-memory byte source over a captured stream. Used by the file/bytes parse
/// entry points and by tests.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn available(&mut self) -> bool {
        self.pos < self.data.len()
    }

    fn read_byte(&mut self) -> u8 {
        let b = self.data[self.pos];
        self.pos += 1;
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_drains_in_order() {
        let mut source = SliceSource::new(b"$G");
        assert!(source.available());
        assert_eq!(source.read_byte(), b'$');
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.read_byte(), b'G');
        assert!(!source.available());
    }
}
