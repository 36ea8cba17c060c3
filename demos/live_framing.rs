//! Live Framing Example
//!
//! Shows the byte-at-a-time control loop a live serial link would run: poll
//! the transport, frame, checksum-verify, decode, kick the watchdog. An
//! in-memory byte source stands in for the serial device.

use gga_parser::{parse_gga, verify, MessageWatchdog, SentenceFramer, SliceSource};
use std::time::Duration;

const CAPTURE: &[u8] = b"$GPGGA,153845.307,,,,,0,00,,,M,,M,,*72\r\n\
    garbage between sentences\
    $GPGGA,153903.000,3854.8669,N,09445.3785,W,1,03,2.37,180.1,M,-30.1,M,,*5F\r\n";

fn main() {
    let mut source = SliceSource::new(CAPTURE);
    let mut framer = SentenceFramer::new();
    let mut watchdog = MessageWatchdog::new(Duration::from_secs(10));

    while source.remaining() > 0 || framer.sentence_available() {
        framer.poll(&mut source);

        if framer.failed() {
            println!("(framing anomaly latched; stream resynchronized)");
            framer.reset_failed();
        }

        let Some(sentence) = framer.sentence() else {
            continue;
        };

        if !verify(sentence) {
            println!("checksum failure, dropping sentence");
            framer.clear();
            continue;
        }

        match parse_gga(sentence) {
            Ok(fix) if fix.has_fix => {
                watchdog.kick();
                println!(
                    "fix at {:06}: {:.6}, {:.6} ({} sats)",
                    fix.timestamp, fix.latitude, fix.longitude, fix.satellite_count
                );
            }
            Ok(fix) => {
                watchdog.kick();
                println!("no fix yet at {:06}", fix.timestamp);
            }
            Err(err) => println!("decode failure: {err}"),
        }
        framer.clear();
    }

    if watchdog.is_expired() {
        println!("link looks dead; startup handshake should be re-run");
    }
}
