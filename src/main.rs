use anyhow::Result;
use clap::{Arg, Command};
use gga_parser::{
    export_log, format_lat_ddmm, format_lon_ddmm, parse_nmea_file, ExportOptions, GpsLog,
};
use std::path::{Path, PathBuf};

fn build_command() -> Command {
    Command::new("GGA Parser")
        .version(concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VERGEN_GIT_SHA"),
            ")"
        ))
        .about("Read and parse NMEA 0183 GPS capture files. Exports decoded GGA fixes to CSV by default (optionally GPX/JSON).")
        .arg(
            Arg::new("files")
                .help("NMEA capture files to parse. Supports .nmea, .txt and .log extensions (case-insensitive) and globbing.")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("gpx")
                .long("gpx")
                .help("Export valid fixes to GPX XML track files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export decoded fixes to JSON files (requires the 'json' build feature)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-csv")
                .long("no-csv")
                .help("Skip the default CSV export and only print the parse summary")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Expand CLI path arguments, interpreting glob metacharacters where present
fn expand_input_paths(patterns: &[&String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            match glob::glob(pattern) {
                Ok(paths) => {
                    for entry in paths.flatten() {
                        files.push(entry);
                    }
                }
                Err(e) => {
                    eprintln!("Warning: Invalid glob pattern '{}': {}", pattern, e);
                }
            }
        } else {
            files.push(PathBuf::from(pattern));
        }
    }

    files
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_ascii_lowercase();
            ext_lower == "nmea" || ext_lower == "txt" || ext_lower == "log"
        })
        .unwrap_or(false)
}

fn print_summary(log: &GpsLog) {
    println!(
        "  Sentences: {} ({} GGA, {} other)",
        log.stats.sentences, log.stats.gga_sentences, log.stats.other_sentences
    );
    if log.stats.checksum_failures > 0 || log.stats.decode_failures > 0 {
        println!(
            "  Rejected: {} checksum, {} decode",
            log.stats.checksum_failures, log.stats.decode_failures
        );
    }
    if log.stats.framing_faults > 0 {
        println!("  Framing faults: {}", log.stats.framing_faults);
    }
    println!(
        "  Fixes: {} decoded, {} with valid position",
        log.fixes.len(),
        log.valid_fix_count()
    );

    if let Some(span) = log.time_span_seconds() {
        println!("  Time span: {}s", span);
    }

    if let Some(fix) = log.first_valid_fix() {
        let lat = format_lat_ddmm(fix.latitude).unwrap_or_else(|| "?".to_string());
        let lon = format_lon_ddmm(fix.longitude).unwrap_or_else(|| "?".to_string());
        println!(
            "  First fix: {} {} ({} sats, hdop {:.2})",
            lat, lon, fix.satellite_count, fix.horizontal_dilution
        );
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let export_gpx = matches.get_flag("gpx");
    let export_json = matches.get_flag("json");
    let skip_csv = matches.get_flag("no-csv");
    let output_dir = matches.get_one::<String>("output-dir").cloned();

    // Check if no files were provided and show help
    let file_patterns: Vec<&String> = match matches.get_many::<String>("files") {
        Some(files) => files.collect(),
        None => {
            build_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    if export_json && !cfg!(feature = "json") {
        eprintln!("Warning: --json ignored; rebuild with the 'json' feature enabled.");
    }

    let export_options = ExportOptions {
        csv: !skip_csv,
        gpx: export_gpx,
        json: export_json,
        output_dir,
    };

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    let input_files = expand_input_paths(&file_patterns);

    let mut valid_paths = Vec::new();
    for path in input_files {
        if !path.exists() {
            eprintln!("Warning: File does not exist: {path:?}");
            continue;
        }

        if !has_supported_extension(&path) {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
            eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
            continue;
        }

        valid_paths.push(path);
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid NMEA capture files found to process.");
        eprintln!("Supported extensions: .nmea, .txt, .log (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;

    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match parse_nmea_file(path, debug) {
            Ok(log) => {
                print_summary(&log);

                match export_log(&log, path, &export_options) {
                    Ok(report) => {
                        if let Some(p) = report.csv_path {
                            println!("  Exported CSV: {}", p.display());
                        }
                        if let Some(p) = report.gpx_path {
                            println!("  Exported GPX: {}", p.display());
                        }
                        if let Some(p) = report.json_path {
                            println!("  Exported JSON: {}", p.display());
                        }
                    }
                    Err(e) => {
                        eprintln!("  Export failed: {e}");
                    }
                }

                processed_files += 1;
            }
            Err(e) => {
                eprintln!("  Failed to parse {filename}: {e}");
            }
        }
    }

    if processed_files == 0 {
        std::process::exit(1);
    }

    if debug {
        println!("\nProcessed {processed_files} file(s)");
    }

    Ok(())
}
