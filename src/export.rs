//! Export functionality for decoded GPS fixes
//!
//! Writes parsed captures to CSV, GPX, and JSON files. Export is a consumer
//! of [`GpsLog`]; nothing here feeds back into the protocol core.

use crate::types::GpsLog;
use crate::Result;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub gpx: bool,
    pub json: bool,
    /// Directory for output files; defaults to the input file's directory
    pub output_dir: Option<String>,
}

/// Paths produced by an export run
#[derive(Debug, Default)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub gpx_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

/// Compute the output path for one export format, keeping the input's file
/// stem and swapping in the format extension.
pub fn compute_export_path(
    input_path: &Path,
    output_dir: &Option<String>,
    extension: &str,
) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("gps_log");

    let dir = match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    dir.join(format!("{}.{}", stem, extension))
}

/// Run every export format enabled in `options` for one parsed capture
pub fn export_log(log: &GpsLog, input_path: &Path, options: &ExportOptions) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    #[cfg(feature = "csv")]
    if options.csv {
        report.csv_path = Some(export_to_csv(log, input_path, options)?);
    }

    if options.gpx {
        report.gpx_path = Some(export_to_gpx(log, input_path, options)?);
    }

    #[cfg(feature = "json")]
    if options.json {
        report.json_path = Some(export_to_json(log, input_path, options)?);
    }

    Ok(report)
}

/// Export every decoded record to CSV, one row per GGA sentence
#[cfg(feature = "csv")]
pub fn export_to_csv(log: &GpsLog, input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let path = compute_export_path(input_path, &options.output_dir, "csv");

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    writer.write_record([
        "time",
        "hasFix",
        "latitude",
        "longitude",
        "satellites",
        "hdop",
        "altitudeMSL",
        "geoidSeparation",
    ])?;

    for fix in &log.fixes {
        writer.write_record([
            format!("{:06}", fix.timestamp),
            u8::from(fix.has_fix).to_string(),
            format!("{:.7}", fix.latitude),
            format!("{:.7}", fix.longitude),
            fix.satellite_count.to_string(),
            format!("{:.2}", fix.horizontal_dilution),
            format!("{:.1}", fix.altitude_msl),
            format!("{:.1}", fix.altitude_wgs84),
        ])?;
    }

    writer.flush()?;
    Ok(path)
}

/// Export the valid fixes to a GPX 1.1 track
pub fn export_to_gpx(log: &GpsLog, input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let path = compute_export_path(input_path, &options.output_dir, "gpx");

    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create GPX file: {:?}", path))?;

    let track_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("gps_log");

    writeln!(file, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        file,
        r#"<gpx version="1.1" creator="gga_parser" xmlns="http://www.topografix.com/GPX/1/1">"#
    )?;
    writeln!(file, "  <trk>")?;
    writeln!(file, "    <name>{}</name>", track_name)?;
    writeln!(file, "    <trkseg>")?;

    for fix in log.fixes.iter().filter(|f| f.has_fix) {
        writeln!(
            file,
            r#"      <trkpt lat="{:.7}" lon="{:.7}">"#,
            fix.latitude, fix.longitude
        )?;
        writeln!(file, "        <ele>{:.1}</ele>", fix.altitude_msl)?;
        writeln!(file, "        <sat>{}</sat>", fix.satellite_count)?;
        writeln!(file, "        <hdop>{:.2}</hdop>", fix.horizontal_dilution)?;
        writeln!(file, "      </trkpt>")?;
    }

    writeln!(file, "    </trkseg>")?;
    writeln!(file, "  </trk>")?;
    writeln!(file, "</gpx>")?;

    Ok(path)
}

/// Export every decoded record as a JSON array
#[cfg(feature = "json")]
pub fn export_to_json(log: &GpsLog, input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let path = compute_export_path(input_path, &options.output_dir, "json");

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create JSON file: {:?}", path))?;
    serde_json::to_writer_pretty(file, &log.fixes)
        .with_context(|| format!("Failed to write JSON file: {:?}", path))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_swaps_extension_and_keeps_stem() {
        let path = compute_export_path(Path::new("/captures/drive1.nmea"), &None, "csv");
        assert_eq!(path, PathBuf::from("/captures/drive1.csv"));
    }

    #[test]
    fn export_path_honors_output_dir() {
        let path = compute_export_path(
            Path::new("/captures/drive1.nmea"),
            &Some("/tmp/out".to_string()),
            "gpx",
        );
        assert_eq!(path, PathBuf::from("/tmp/out/drive1.gpx"));
    }
}
