//! GGA sentence decoding
//!
//! Splits a framed `$GPGGA` sentence into comma-delimited fields and converts
//! them into a typed [`GpsFix`]. Field extraction copies into fixed-size
//! buffers so decoding keeps the same bounded-memory discipline as the
//! framer. Individual empty or malformed fields degrade to zero values; only
//! a wrong message tag or an invalid hemisphere letter fails the whole
//! decode.

use crate::error::{GpsError, Result};
use crate::types::GpsFix;

/// Message tag the decoder accepts
pub const GGA_TAG: &[u8] = b"$GPGGA";

/// Buffer size sufficient for DDDMM.MMMM-style coordinate fields
pub const COORD_FIELD_SIZE: usize = 16;

/// Copy the next comma-delimited field from `input` into `dst`.
///
/// Bytes are copied until a comma, the end of `input`, or `dst` is full,
/// whichever comes first; truncation is silent. Returns the number of bytes
/// written and the remainder of `input` positioned just past the comma, or
/// `None` when no comma was found (the normal end-of-fields condition, not an
/// error).
pub fn split_next<'a>(input: &'a [u8], dst: &mut [u8]) -> (usize, Option<&'a [u8]>) {
    let mut written = 0;

    for (idx, &b) in input.iter().enumerate() {
        if b == b',' {
            return (written, Some(&input[idx + 1..]));
        }
        if written < dst.len() {
            dst[written] = b;
            written += 1;
        }
    }

    (written, None)
}

/// Decode a complete GGA sentence into a [`GpsFix`].
///
/// The sentence must carry the `$GPGGA` tag; any other tag aborts with
/// [`GpsError::InvalidSentence`]. A hemisphere letter outside N/S (latitude)
/// or E/W (longitude) aborts with [`GpsError::InvalidDirection`]. Everything
/// else is best effort: absent position fields clear `has_fix`, absent
/// numeric fields decode as zero. Checksum verification is a separate,
/// caller-composed step.
pub fn parse_gga(message: &[u8]) -> Result<GpsFix> {
    let mut fields = FieldCursor::new(message);
    let mut fix = GpsFix::default();

    // Field 0: message tag. Anything else is not ours to decode.
    let mut tag = [0u8; 8];
    let tag_len = fields.next(&mut tag);
    if &tag[..tag_len] != GGA_TAG {
        return Err(GpsError::InvalidSentence(
            String::from_utf8_lossy(&tag[..tag_len]).into_owned(),
        ));
    }

    // Field 1: UTC time, HHMMSS.sss. Fewer than 6 leading digits decodes as 0.
    let mut time = [0u8; COORD_FIELD_SIZE];
    let time_len = fields.next(&mut time);
    fix.timestamp = parse_timestamp(&time[..time_len]).unwrap_or(0);

    // Fields 2-3: latitude DDMM.MMMM plus N/S hemisphere.
    let mut coord = [0u8; COORD_FIELD_SIZE];
    let lat_len = fields.next(&mut coord);
    let mut dir = [0u8; 4];
    let dir_len = fields.next(&mut dir);
    let latitude = parse_coordinate(&coord[..lat_len], &dir[..dir_len], 2, b'N', b'S')?;

    // Fields 4-5: longitude DDDMM.MMMM plus E/W hemisphere.
    let lon_len = fields.next(&mut coord);
    let dir_len = fields.next(&mut dir);
    let longitude = parse_coordinate(&coord[..lon_len], &dir[..dir_len], 3, b'E', b'W')?;

    // Field 6: fix quality indicator. The record's validity is derived from
    // the coordinate fields themselves, so this is skipped.
    let mut small = [0u8; COORD_FIELD_SIZE];
    fields.next(&mut small);

    // Field 7: satellites in use.
    let len = fields.next(&mut small);
    fix.satellite_count = parse_u32_lenient(&small[..len]);

    // Field 8: horizontal dilution of precision.
    let len = fields.next(&mut small);
    fix.horizontal_dilution = parse_f64_lenient(&small[..len]);

    // Fields 9-10: altitude above mean sea level plus its units.
    let len = fields.next(&mut small);
    fix.altitude_msl = parse_f64_lenient(&small[..len]);
    fields.next(&mut small);

    // Fields 11-12: geoid separation (WGS-84 offset) plus its units.
    let len = fields.next(&mut small);
    fix.altitude_wgs84 = parse_f64_lenient(&small[..len]);

    // A fix is all-or-nothing across the two coordinates. One axis alone is
    // not a position, so neither value survives.
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            fix.latitude = lat;
            fix.longitude = lon;
            fix.has_fix = true;
        }
        _ => {
            fix.latitude = 0.0;
            fix.longitude = 0.0;
            fix.has_fix = false;
        }
    }

    Ok(fix)
}

/// Cursor over the remaining comma-delimited fields of one sentence.
///
/// Once the sentence runs out of commas, every further read yields an empty
/// field, which is how receivers legitimately omit trailing fields.
struct FieldCursor<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> FieldCursor<'a> {
    fn new(message: &'a [u8]) -> Self {
        Self {
            rest: Some(message),
        }
    }

    fn next(&mut self, dst: &mut [u8]) -> usize {
        match self.rest {
            Some(input) => {
                let (written, rest) = split_next(input, dst);
                self.rest = rest;
                written
            }
            None => 0,
        }
    }
}

/// Parse an HHMMSS timestamp from the leading digits of the UTC time field.
/// None when fewer than 6 digits are present.
fn parse_timestamp(field: &[u8]) -> Option<u32> {
    if field.len() < 6 {
        return None;
    }

    let mut value = 0u32;
    for &b in &field[..6] {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Some(value)
}

/// Convert a DDMM.MMMM-style coordinate plus hemisphere letter to signed
/// decimal degrees.
///
/// `deg_digits` is the length of the whole-degrees prefix (2 for latitude, 3
/// for longitude). Returns `Ok(None)`, meaning "no fix on this axis", when
/// the coordinate text is shorter than the degree prefix or the hemisphere
/// field is empty. A hemisphere letter other than `positive`/`negative` is a
/// hard decode failure.
fn parse_coordinate(
    coord: &[u8],
    dir: &[u8],
    deg_digits: usize,
    positive: u8,
    negative: u8,
) -> Result<Option<f64>> {
    let sign = match dir {
        [] => None,
        [d] if *d == positive => Some(1.0),
        [d] if *d == negative => Some(-1.0),
        _ => return Err(GpsError::InvalidDirection(dir[0] as char)),
    };

    if coord.len() < deg_digits {
        return Ok(None);
    }
    let sign = match sign {
        Some(s) => s,
        None => return Ok(None),
    };

    let degrees = parse_f64_lenient(&coord[..deg_digits]);
    let minutes = parse_f64_lenient(&coord[deg_digits..]);

    Ok(Some(sign * (degrees + minutes / 60.0)))
}

/// Best-effort text-to-float conversion with C `atof` semantics: optional
/// sign, digits, optional fraction; parsing stops at the first invalid byte
/// and an empty prefix yields 0.
pub fn parse_f64_lenient(field: &[u8]) -> f64 {
    let mut idx = 0;
    let mut sign = 1.0;

    match field.first() {
        Some(b'-') => {
            sign = -1.0;
            idx += 1;
        }
        Some(b'+') => idx += 1,
        _ => {}
    }

    let mut value = 0.0;
    while idx < field.len() && field[idx].is_ascii_digit() {
        value = value * 10.0 + f64::from(field[idx] - b'0');
        idx += 1;
    }

    if idx < field.len() && field[idx] == b'.' {
        idx += 1;
        let mut scale = 0.1;
        while idx < field.len() && field[idx].is_ascii_digit() {
            value += scale * f64::from(field[idx] - b'0');
            scale /= 10.0;
            idx += 1;
        }
    }

    sign * value
}

/// Best-effort text-to-integer conversion: leading digits only, empty or
/// non-numeric prefixes yield 0.
pub fn parse_u32_lenient(field: &[u8]) -> u32 {
    let mut value = 0u32;
    for &b in field {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIX_SENTENCE: &[u8] =
        b"$GPGGA,153903.000,3854.8669,N,09445.3785,W,1,03,2.37,180.1,M,-30.1,M,,*5F";
    const NO_FIX_SENTENCE: &[u8] = b"$GPGGA,153845.307,,,,,0,00,,,M,,M,,*72\r\n";

    #[test]
    fn split_next_walks_fields() {
        let mut dst = [0u8; 8];

        let (n, rest) = split_next(b"abc,def", &mut dst);
        assert_eq!(&dst[..n], b"abc");
        let rest = rest.unwrap();

        let (n, rest) = split_next(rest, &mut dst);
        assert_eq!(&dst[..n], b"def");
        assert!(rest.is_none());
    }

    #[test]
    fn split_next_handles_empty_fields() {
        let mut dst = [0u8; 8];

        let (n, rest) = split_next(b",,x", &mut dst);
        assert_eq!(n, 0);
        let (n, rest) = split_next(rest.unwrap(), &mut dst);
        assert_eq!(n, 0);
        let (n, rest) = split_next(rest.unwrap(), &mut dst);
        assert_eq!(&dst[..n], b"x");
        assert!(rest.is_none());
    }

    #[test]
    fn split_next_truncates_silently_but_keeps_cursor() {
        let mut dst = [0u8; 4];

        let (n, rest) = split_next(b"0123456789,tail", &mut dst);
        assert_eq!(&dst[..n], b"0123");
        // The cursor still resumes after the comma, past the truncated bytes.
        let (n, rest) = split_next(rest.unwrap(), &mut dst);
        assert_eq!(&dst[..n], b"tail");
        assert!(rest.is_none());
    }

    #[test]
    fn decodes_reference_fix_sentence() {
        let fix = parse_gga(FIX_SENTENCE).unwrap();

        assert!(fix.has_fix);
        assert_eq!(fix.timestamp, 153903);
        assert!((fix.latitude - (38.0 + 54.8669 / 60.0)).abs() < 1e-9);
        assert!((fix.longitude - -(94.0 + 45.3785 / 60.0)).abs() < 1e-9);
        assert_eq!(fix.satellite_count, 3);
        assert!((fix.horizontal_dilution - 2.37).abs() < 1e-9);
        assert!((fix.altitude_msl - 180.1).abs() < 1e-9);
        assert!((fix.altitude_wgs84 - -30.1).abs() < 1e-9);
    }

    #[test]
    fn decodes_no_fix_sentence_as_zeroed_position() {
        let fix = parse_gga(NO_FIX_SENTENCE).unwrap();

        assert!(!fix.has_fix);
        assert_eq!(fix.timestamp, 153845);
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.satellite_count, 0);
        assert_eq!(fix.horizontal_dilution, 0.0);
        assert_eq!(fix.altitude_msl, 0.0);
    }

    #[test]
    fn rejects_wrong_message_tag() {
        let err = parse_gga(b"$GPRMC,153903.000,A,3854.8669,N*11").unwrap_err();
        assert!(matches!(err, GpsError::InvalidSentence(_)));
    }

    #[test]
    fn rejects_invalid_hemisphere_letter() {
        let err =
            parse_gga(b"$GPGGA,153903.000,3854.8669,Q,09445.3785,W,1,03,2.37,180.1,M,-30.1,M,,*00")
                .unwrap_err();
        assert!(matches!(err, GpsError::InvalidDirection('Q')));
    }

    #[test]
    fn one_sided_coordinate_clears_both_axes() {
        // Latitude present, longitude empty: neither survives.
        let fix = parse_gga(b"$GPGGA,153903.000,3854.8669,N,,,1,05,2.37,180.1,M,-30.1,M,,*00")
            .unwrap();
        assert!(!fix.has_fix);
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        // Best-effort fields are untouched by the missing fix.
        assert_eq!(fix.satellite_count, 5);
    }

    #[test]
    fn short_time_field_decodes_as_zero() {
        let fix = parse_gga(b"$GPGGA,1539,,,,,0,00,,,M,,M,,*00").unwrap();
        assert_eq!(fix.timestamp, 0);
    }

    #[test]
    fn truncated_sentence_yields_empty_trailing_fields() {
        let fix = parse_gga(b"$GPGGA,153903.000,3854.8669").unwrap();
        assert!(!fix.has_fix);
        assert_eq!(fix.timestamp, 153903);
        assert_eq!(fix.satellite_count, 0);
        assert_eq!(fix.altitude_msl, 0.0);
    }

    #[test]
    fn decode_is_idempotent_over_the_same_buffer() {
        let first = parse_gga(FIX_SENTENCE).unwrap();
        let second = parse_gga(FIX_SENTENCE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lenient_float_parsing_matches_atof() {
        assert_eq!(parse_f64_lenient(b""), 0.0);
        assert_eq!(parse_f64_lenient(b"abc"), 0.0);
        assert_eq!(parse_f64_lenient(b"12"), 12.0);
        assert!((parse_f64_lenient(b"-30.1") - -30.1).abs() < 1e-9);
        assert!((parse_f64_lenient(b"2.37xyz") - 2.37).abs() < 1e-9);
        assert!((parse_f64_lenient(b"+4.5") - 4.5).abs() < 1e-9);
    }

    #[test]
    fn lenient_int_parsing_stops_at_first_invalid_byte() {
        assert_eq!(parse_u32_lenient(b""), 0);
        assert_eq!(parse_u32_lenient(b"03"), 3);
        assert_eq!(parse_u32_lenient(b"12ab"), 12);
        assert_eq!(parse_u32_lenient(b"x7"), 0);
    }
}
