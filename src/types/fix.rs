#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decoded GGA position fix.
///
/// Produced fresh by each decode call; callers own the copy. Coordinates are
/// signed decimal degrees (south and west negative). When `has_fix` is false
/// both coordinates are 0 regardless of what was parsed; the remaining fields
/// keep whatever best-effort values the sentence carried.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsFix {
    /// True iff both latitude and longitude fields were present and non-empty
    pub has_fix: bool,
    /// UTC time of fix as HHMMSS; 0 when the time field held fewer than 6 digits
    pub timestamp: u32,
    /// Decimal degrees, south negative; 0 when no fix
    pub latitude: f64,
    /// Decimal degrees, west negative; 0 when no fix
    pub longitude: f64,
    /// Satellites used in the fix; 0 when the field was empty
    pub satellite_count: u32,
    /// Horizontal dilution of precision; 0.0 when the field was empty
    pub horizontal_dilution: f64,
    /// Altitude above mean sea level, meters; 0.0 when the field was empty
    pub altitude_msl: f64,
    /// Geoid separation (WGS-84 ellipsoid offset), meters; 0.0 when the field was empty
    pub altitude_wgs84: f64,
}

impl GpsFix {
    /// UTC time of fix as seconds since midnight, derived from the HHMMSS field.
    pub fn seconds_of_day(&self) -> u32 {
        let hours = self.timestamp / 10_000;
        let minutes = (self.timestamp / 100) % 100;
        let seconds = self.timestamp % 100;
        hours * 3600 + minutes * 60 + seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_of_day_splits_hhmmss() {
        let fix = GpsFix {
            timestamp: 153_903,
            ..GpsFix::default()
        };
        assert_eq!(fix.seconds_of_day(), 15 * 3600 + 39 * 60 + 3);
    }

    #[test]
    fn default_fix_is_zeroed() {
        let fix = GpsFix::default();
        assert!(!fix.has_fix);
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.satellite_count, 0);
    }
}
