//! CSV Export Example
//!
//! Parses an NMEA capture file and exports every decoded GGA record to a CSV
//! file next to the input (or into an optional output directory).

use gga_parser::{export_log, parse_nmea_file, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: csv_export <capture.nmea> [output_dir]");
        println!("Example: csv_export drive.nmea ./output");
        std::process::exit(1);
    });

    let output_dir = std::env::args().nth(2);

    let export_opts = ExportOptions {
        csv: true,
        gpx: false,
        json: false,
        output_dir,
    };

    println!("Parsing: {}", input_file);
    let log = parse_nmea_file(Path::new(&input_file), false)?;

    println!("\nCapture Information:");
    println!("  Sentences: {}", log.stats.sentences);
    println!("  GGA records: {}", log.fixes.len());
    println!("  Valid fixes: {}", log.valid_fix_count());
    if let Some(span) = log.time_span_seconds() {
        println!("  Time span: {}s", span);
    }

    println!("\nExporting to CSV...");
    let report = export_log(&log, Path::new(&input_file), &export_opts)?;
    if let Some(path) = report.csv_path {
        println!("Exported to: {}", path.display());
    }

    Ok(())
}
