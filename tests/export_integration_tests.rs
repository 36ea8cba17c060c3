use gga_parser::{export_log, parse_nmea_bytes, ExportOptions};
use std::fs;

/// Integration tests for export output written through the public API.

const CAPTURE: &[u8] = b"$GPGGA,153845.307,,,,,0,00,,,M,,M,,*72\r\n\
    $GPGGA,153903.000,3854.8669,N,09445.3785,W,1,03,2.37,180.1,M,-30.1,M,,*5F\r\n";

#[cfg(feature = "csv")]
#[test]
fn csv_export_writes_one_row_per_decoded_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drive.nmea");
    fs::write(&input, CAPTURE).unwrap();

    let log = parse_nmea_bytes(CAPTURE, false).unwrap();
    let options = ExportOptions {
        csv: true,
        ..ExportOptions::default()
    };

    let report = export_log(&log, &input, &options).unwrap();
    let csv_path = report.csv_path.expect("CSV export should produce a path");
    assert!(report.gpx_path.is_none());

    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per record");

    let header_fields = lines[0].split(',').count();
    for (i, line) in lines.iter().enumerate().skip(1) {
        assert_eq!(
            line.split(',').count(),
            header_fields,
            "row {} has inconsistent field count: {}",
            i,
            line
        );
    }

    // No-fix record keeps zeroed coordinates, valid record keeps parsed ones.
    assert!(lines[1].starts_with("153845,0,0.0000000,0.0000000"));
    assert!(lines[2].starts_with("153903,1,38.9144483,-94.7563083"));
}

#[test]
fn gpx_export_only_contains_valid_fixes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drive.nmea");
    fs::write(&input, CAPTURE).unwrap();

    let log = parse_nmea_bytes(CAPTURE, false).unwrap();
    let options = ExportOptions {
        gpx: true,
        ..ExportOptions::default()
    };

    let report = export_log(&log, &input, &options).unwrap();
    let gpx_path = report.gpx_path.expect("GPX export should produce a path");

    let content = fs::read_to_string(&gpx_path).unwrap();
    assert!(content.starts_with("<?xml"));
    assert_eq!(content.matches("<trkpt").count(), 1);
    assert!(content.contains(r#"lat="38.9144483""#));
    assert!(content.contains(r#"lon="-94.7563083""#));
    assert!(content.contains("<sat>3</sat>"));
}

#[test]
fn export_honors_output_dir() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("drive.nmea");
    fs::write(&input, CAPTURE).unwrap();

    let log = parse_nmea_bytes(CAPTURE, false).unwrap();
    let options = ExportOptions {
        gpx: true,
        output_dir: Some(output_dir.path().to_string_lossy().into_owned()),
        ..ExportOptions::default()
    };

    let report = export_log(&log, &input, &options).unwrap();
    let gpx_path = report.gpx_path.unwrap();
    assert_eq!(gpx_path.parent().unwrap(), output_dir.path());
}

#[cfg(feature = "json")]
#[test]
fn json_export_round_trips_through_serde() {
    use gga_parser::GpsFix;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drive.nmea");
    fs::write(&input, CAPTURE).unwrap();

    let log = parse_nmea_bytes(CAPTURE, false).unwrap();
    let options = ExportOptions {
        json: true,
        ..ExportOptions::default()
    };

    let report = export_log(&log, &input, &options).unwrap();
    let json_path = report.json_path.expect("JSON export should produce a path");

    let content = fs::read_to_string(&json_path).unwrap();
    let fixes: Vec<GpsFix> = serde_json::from_str(&content).unwrap();
    assert_eq!(fixes.len(), log.fixes.len());
    assert_eq!(fixes[1], log.fixes[1]);
}
