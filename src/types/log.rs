use crate::types::GpsFix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters accumulated while parsing one NMEA capture
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseStats {
    /// Total bytes fed through the framer
    pub bytes: usize,
    /// Complete sentences surfaced by the framer
    pub sentences: usize,
    /// Sentences carrying the $GPGGA tag
    pub gga_sentences: usize,
    /// Sentences with some other tag (RMC, GSV, proprietary, ...)
    pub other_sentences: usize,
    /// Sentences rejected by checksum verification
    pub checksum_failures: usize,
    /// GGA sentences that failed typed decoding
    pub decode_failures: usize,
    /// Framer anomalies: unsynchronized bytes, overflows, mid-sentence resyncs
    pub framing_faults: usize,
}

/// Complete result of parsing one NMEA capture
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsLog {
    pub stats: ParseStats,
    /// Every successfully decoded GGA record, valid fix or not, in stream order
    pub fixes: Vec<GpsFix>,
}

impl GpsLog {
    /// Check if the capture produced at least one valid position fix
    pub fn has_fix_data(&self) -> bool {
        self.fixes.iter().any(|f| f.has_fix)
    }

    /// Number of records with a valid position
    pub fn valid_fix_count(&self) -> usize {
        self.fixes.iter().filter(|f| f.has_fix).count()
    }

    /// First record with a valid position, if any
    pub fn first_valid_fix(&self) -> Option<&GpsFix> {
        self.fixes.iter().find(|f| f.has_fix)
    }

    /// UTC span covered by the capture, in seconds, from the first to the
    /// last record with a non-zero timestamp. None when fewer than two
    /// timestamped records exist or the capture crosses midnight.
    pub fn time_span_seconds(&self) -> Option<u32> {
        let mut stamped = self.fixes.iter().filter(|f| f.timestamp != 0);
        let first = stamped.next()?.seconds_of_day();
        let last = stamped.last()?.seconds_of_day();
        last.checked_sub(first)
    }
}
