//! Whole-capture parsing entry points
//!
//! Drive the framer, checksum validator, and GGA decoder over a captured
//! NMEA byte stream and collect decoded fixes plus counters. The chain is the
//! same one a live control loop runs: transport bytes, framer, sentence
//! buffer, decoder.

use crate::error::GpsError;
use crate::parser::{checksum, gga, SentenceFramer};
use crate::types::{GpsLog, ParseStats};
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Parse an NMEA capture file into decoded GGA records
pub fn parse_nmea_file(file_path: &Path, debug: bool) -> Result<GpsLog> {
    if debug {
        println!("=== PARSING NMEA FILE ===");
        let metadata = std::fs::metadata(file_path)?;
        println!("File size: {} bytes", metadata.len());
    }

    let file_data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read NMEA file: {:?}", file_path))?;

    parse_nmea_bytes(&file_data, debug)
}

/// Parse NMEA data from memory into decoded GGA records.
///
/// Sentences that fail checksum verification are counted and dropped. GGA
/// sentences that fail typed decoding are counted and dropped. Sentences of
/// other types are counted and skipped. Framing anomalies are drained from
/// the framer's sticky flag into a counter per byte.
pub fn parse_nmea_bytes(data: &[u8], debug: bool) -> Result<GpsLog> {
    if debug {
        println!("=== PARSING NMEA DATA ===");
        println!("Data size: {} bytes", data.len());
    }

    let mut framer = SentenceFramer::new();
    let mut stats = ParseStats {
        bytes: data.len(),
        ..ParseStats::default()
    };
    let mut fixes = Vec::new();

    for &byte in data {
        framer.intake(byte);

        if framer.failed() {
            stats.framing_faults += 1;
            framer.reset_failed();
        }

        let sentence = match framer.sentence() {
            Some(s) => s,
            None => continue,
        };
        stats.sentences += 1;

        if !checksum::verify(sentence) {
            stats.checksum_failures += 1;
            if debug {
                println!(
                    "Checksum failure: {}",
                    String::from_utf8_lossy(sentence).trim_end()
                );
            }
            framer.clear();
            continue;
        }

        if !sentence.starts_with(gga::GGA_TAG) {
            stats.other_sentences += 1;
            framer.clear();
            continue;
        }
        stats.gga_sentences += 1;

        match gga::parse_gga(sentence) {
            Ok(fix) => fixes.push(fix),
            Err(err) => {
                stats.decode_failures += 1;
                if debug {
                    println!("Decode failure: {}", err);
                }
            }
        }
        framer.clear();
    }

    if debug {
        println!(
            "Parsed {} sentences: {} GGA, {} other, {} checksum failures, {} framing faults",
            stats.sentences,
            stats.gga_sentences,
            stats.other_sentences,
            stats.checksum_failures,
            stats.framing_faults
        );
    }

    Ok(GpsLog { stats, fixes })
}

/// Decode one framed sentence with checksum verification up front.
///
/// The convenience composition for callers that care about integrity; the
/// two steps stay independently callable for callers that do not.
pub fn decode_verified(sentence: &[u8]) -> std::result::Result<crate::types::GpsFix, GpsError> {
    if !checksum::verify(sentence) {
        return Err(GpsError::ChecksumMismatch);
    }
    gga::parse_gga(sentence)
}
