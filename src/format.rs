//! Degree/minute display formatting
//!
//! Stateless numeric-to-text helpers owned by the display side of the system:
//! decimal degrees in, `±DDD MM.MMMM`-style text out. The hemisphere wrappers
//! follow the decoder's sign convention (north and east positive).

/// Format a latitude as `N`/`S` plus degrees and minutes, e.g. `N38 54.8669`.
/// None when outside [-90, 90].
pub fn format_lat_ddmm(deg: f64) -> Option<String> {
    if !(-90.0..=90.0).contains(&deg) {
        return None;
    }

    let hemisphere = if deg < 0.0 { 'S' } else { 'N' };
    Some(format!("{}{}", hemisphere, format_deg_ddmm(deg.abs())?))
}

/// Format a longitude as `E`/`W` plus zero-padded 3-digit degrees and
/// minutes, e.g. `W094 45.3785`. None when outside [-180, 180].
pub fn format_lon_ddmm(deg: f64) -> Option<String> {
    if !(-180.0..=180.0).contains(&deg) {
        return None;
    }

    let hemisphere = if deg < 0.0 { 'W' } else { 'E' };
    let abs_deg = deg.abs();

    let whole = abs_deg.trunc() as u32;
    let minutes = (abs_deg - abs_deg.trunc()) * 60.0;
    Some(format!("{}{:03} {:07.4}", hemisphere, whole, minutes))
}

/// Format signed decimal degrees as `-DDD MM.MMMM` with 4-decimal minutes.
/// None when outside [-180, 180].
pub fn format_deg_ddmm(deg: f64) -> Option<String> {
    if !(-180.0..=180.0).contains(&deg) {
        return None;
    }

    let abs_deg = deg.abs();
    let whole = abs_deg.trunc() as u32;
    let minutes = (abs_deg - abs_deg.trunc()) * 60.0;

    let sign = if deg < 0.0 { "-" } else { "" };
    Some(format!("{}{} {:07.4}", sign, whole, minutes))
}
