//! GPX Export Example
//!
//! Parses an NMEA capture file and exports the valid position fixes as a GPX
//! 1.1 track, ready for any mapping tool.

use gga_parser::{export_log, parse_nmea_file, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: gpx_export <capture.nmea> [output_dir]");
        std::process::exit(1);
    });

    let export_opts = ExportOptions {
        csv: false,
        gpx: true,
        json: false,
        output_dir: std::env::args().nth(2),
    };

    let log = parse_nmea_file(Path::new(&input_file), false)?;

    if !log.has_fix_data() {
        println!("No valid fixes in {}; nothing to export.", input_file);
        return Ok(());
    }

    let report = export_log(&log, Path::new(&input_file), &export_opts)?;
    if let Some(path) = report.gpx_path {
        println!(
            "Exported {} track points to: {}",
            log.valid_fix_count(),
            path.display()
        );
    }

    Ok(())
}
