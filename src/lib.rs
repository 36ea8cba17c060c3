//! GGA Parser Library
//!
//! A Rust library for reconstructing validated position fixes from NMEA 0183
//! byte streams, the text protocol GPS receivers speak over a serial link.
//! The protocol core is a three-stage chain: a fixed-capacity sentence framer,
//! an XOR checksum validator, and a typed decoder for the GGA position-fix
//! sentence. Around it sit the pieces a complete receiver pipeline needs:
//! a transport boundary, a module startup handshake, a message watchdog,
//! display formatting, and capture export.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable fix export in JSON format
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Parse a captured NMEA stream and access the decoded fixes:
//! ```rust
//! use gga_parser::parse_nmea_bytes;
//!
//! let capture = b"$GPGGA,153903.000,3854.8669,N,09445.3785,W,1,03,2.37,180.1,M,-30.1,M,,*5F\r\n";
//! let log = parse_nmea_bytes(capture, false).unwrap();
//! println!("Decoded {} fixes", log.fixes.len());
//! assert!(log.fixes[0].has_fix);
//! ```
//!
//! Frame a live byte stream one byte at a time:
//! ```rust
//! use gga_parser::{parse_gga, verify, SentenceFramer};
//!
//! let mut framer = SentenceFramer::new();
//! for &byte in b"$GPGGA,153845.307,,,,,0,00,,,M,,M,,*72\r\n".iter() {
//!     framer.intake(byte);
//! }
//! let sentence = framer.sentence().unwrap();
//! assert!(verify(sentence));
//! let fix = parse_gga(sentence).unwrap();
//! framer.clear();
//! assert!(!fix.has_fix);
//! ```
//!
//! # Public API
//!
//! ## Protocol Core
//! - [`SentenceFramer`] - Byte-stream to sentence-buffer state machine
//! - [`verify`] - NMEA XOR checksum validation
//! - [`parse_gga`] - Typed GGA sentence decoding
//! - [`split_next`] - Comma-delimited field extraction
//!
//! ## Capture Parsing
//! - [`parse_nmea_file`] - Parse an NMEA capture file
//! - [`parse_nmea_bytes`] - Parse NMEA data from memory
//! - [`decode_verified`] - Checksum-then-decode composition for one sentence
//!
//! ## Data Types
//! - [`GpsFix`] - One decoded position-fix record
//! - [`GpsLog`] - Complete parsed capture with fixes and counters
//! - [`ParseStats`] - Per-capture parse counters
//!
//! ## Link Management
//! - [`ByteSource`] / [`GpsPort`] - Transport boundary traits
//! - [`startup`] - MTK3339 module configuration handshake
//! - [`MessageWatchdog`] - Dead-link detection timer
//!
//! ## Export and Display
//! - [`export_log`] - Export a parsed capture to the enabled formats
//! - [`format_lat_ddmm`] / [`format_lon_ddmm`] - Degree/minute display text

// Module declarations
pub mod error;
pub mod export;
pub mod format;
pub mod parser;
pub mod startup;
pub mod transport;
pub mod types;
pub mod watchdog;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use format::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use transport::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
pub use watchdog::MessageWatchdog;

// Re-export Result type for convenience
pub use anyhow::Result;
