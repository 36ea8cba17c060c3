//! NMEA checksum verification
//!
//! A sentence has the shape `$<payload>*HH` where `HH` is the hex XOR of
//! every byte strictly between `$` and `*`. Verification is independent of
//! the GGA decoder; callers compose the two as policy dictates.

/// Compute and compare the checksum of a framed sentence.
///
/// Returns false, never errors, when the message is empty, does not start
/// with `$`, has no `*`, or has fewer than two bytes after the `*`. The scan
/// stops at an embedded NUL byte if one occurs before the end of the slice,
/// since captured buffers may be over-sized. Hex digits are case-insensitive
/// and non-hex characters decode as 0.
pub fn verify(message: &[u8]) -> bool {
    if message.is_empty() || message[0] != b'$' {
        return false;
    }

    // Bound the scan at a NUL terminator or the slice end, whichever first.
    let end = message
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(message.len());

    let mut computed = 0u8;
    let mut star = None;
    for (idx, &b) in message[1..end].iter().enumerate() {
        if b == b'*' {
            star = Some(idx + 1);
            break;
        }
        computed ^= b;
    }

    // No checksum delimiter means the check fails.
    let star = match star {
        Some(idx) => idx,
        None => return false,
    };

    // Exactly one byte of checksum follows as two hex nibbles.
    if star + 2 >= end {
        return false;
    }
    let msb = hex_to_int(message[star + 1]);
    let lsb = hex_to_int(message[star + 2]);
    let declared = (msb << 4) | lsb;

    computed == declared
}

/// Lenient nibble decode: unknown characters carry value 0
fn hex_to_int(val: u8) -> u8 {
    match val {
        b'0'..=b'9' => val - b'0',
        b'a'..=b'f' => val - b'a' + 10,
        b'A'..=b'F' => val - b'A' + 10,
        _ => 0,
    }
}
