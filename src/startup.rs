//! MTK3339 module startup handshake
//!
//! Blocking, message-by-message configuration of the GPS module before normal
//! framing begins: wait for the pair of announcements the chipset sends on
//! power-up, then switch it to GGA-only output at a fixed interval and
//! require the exact acknowledgement sentence for each command. Lines are
//! collected with a bare CR/LF-stripping reader, not the sentence framer,
//! since the acknowledgements are compared as whole strings.

use crate::error::{GpsError, Result};
use crate::transport::GpsPort;
use std::time::{Duration, Instant};

/// Per-step timeout used by [`init`]
pub const SETUP_TIMEOUT: Duration = Duration::from_millis(2000);

/// Largest startup/acknowledgement line the collector keeps
const LINE_CAPACITY: usize = 32;

const MTK_STARTUP_010: &str = "$PMTK010,001*2E";
const MTK_STARTUP_011: &str = "$PMTK011,MTKGPS*08";

/// Select GGA as the only emitted sentence type
const MTK_CMD_314: &str = "$PMTK314,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0*29";
const MTK_ACK_314: &str = "$PMTK001,314,3*36";

/// Emit a fix every 5 seconds
const MTK_CMD_220: &str = "$PMTK220,5000*1B";
const MTK_ACK_220: &str = "$PMTK001,220,3*30";

/// Run the full startup sequence against a freshly powered module.
///
/// Blocks until the module has announced itself and acknowledged both
/// configuration commands, or a step times out.
pub fn init<P: GpsPort>(port: &mut P) -> Result<()> {
    init_with_timeout(port, SETUP_TIMEOUT)
}

/// [`init`] with a caller-chosen per-step timeout
pub fn init_with_timeout<P: GpsPort>(port: &mut P, timeout: Duration) -> Result<()> {
    if !wait_for_startup_messages(port, timeout) {
        return Err(GpsError::Startup(
            "startup announcements not received".into(),
        ));
    }

    port.write_line(MTK_CMD_314)?;
    if !wait_for_exact_msg(port, MTK_ACK_314, timeout) {
        return Err(GpsError::ConfigRejected("PMTK314 did not ACK".into()));
    }

    port.write_line(MTK_CMD_220)?;
    if !wait_for_exact_msg(port, MTK_ACK_220, timeout) {
        return Err(GpsError::ConfigRejected("PMTK220 did not ACK".into()));
    }

    Ok(())
}

/// Collect one line from the port, stripping CR and LF so the result compares
/// directly against the acknowledgement literals. Stops at a line feed, the
/// buffer capacity, or the timeout. Blocking.
fn collect_message<P: GpsPort>(port: &mut P, timeout: Duration) -> String {
    let mut line = String::new();
    let start = Instant::now();

    while start.elapsed() < timeout {
        if !port.available() {
            continue;
        }
        let c = port.read_byte();

        if c != b'\n' && c != b'\r' && line.len() < LINE_CAPACITY {
            line.push(c as char);
        }

        if c == b'\n' {
            break;
        }
    }

    line
}

/// Wait for both power-up announcements, in any order. The module also sends
/// sentences outside the documented set at startup; those are skipped.
fn wait_for_startup_messages<P: GpsPort>(port: &mut P, timeout: Duration) -> bool {
    let mut found_flags = 0u8;
    let start = Instant::now();

    while start.elapsed() < timeout {
        let line = collect_message(port, timeout);

        if line == MTK_STARTUP_010 {
            found_flags |= 1;
        } else if line == MTK_STARTUP_011 {
            found_flags |= 2;
        }

        if found_flags == 3 {
            return true;
        }
    }

    false
}

/// Wait for one exact sentence, skipping everything else until the timeout
fn wait_for_exact_msg<P: GpsPort>(port: &mut P, msg: &str, timeout: Duration) -> bool {
    let start = Instant::now();

    while start.elapsed() < timeout {
        if collect_message(port, timeout) == msg {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ByteSource;

    /// Scripted port: replays a canned receive stream and records writes.
    struct ScriptedPort {
        rx: Vec<u8>,
        pos: usize,
        tx: Vec<u8>,
    }

    impl ScriptedPort {
        fn new(rx: &str) -> Self {
            Self {
                rx: rx.as_bytes().to_vec(),
                pos: 0,
                tx: Vec::new(),
            }
        }

        fn sent(&self) -> String {
            String::from_utf8_lossy(&self.tx).into_owned()
        }
    }

    impl ByteSource for ScriptedPort {
        fn available(&mut self) -> bool {
            self.pos < self.rx.len()
        }

        fn read_byte(&mut self) -> u8 {
            let b = self.rx[self.pos];
            self.pos += 1;
            b
        }
    }

    impl GpsPort for ScriptedPort {
        fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
            self.tx.extend_from_slice(bytes);
            Ok(())
        }
    }

    const SHORT: Duration = Duration::from_millis(50);

    #[test]
    fn full_handshake_succeeds() {
        let mut port = ScriptedPort::new(
            "$PMTK011,MTKGPS*08\r\n\
             $PMTK010,001*2E\r\n\
             $GPGGA,,,,,,0,00,,,M,,M,,*66\r\n\
             $PMTK001,314,3*36\r\n\
             $PMTK001,220,3*30\r\n",
        );

        init_with_timeout(&mut port, SHORT).unwrap();
        assert_eq!(
            port.sent(),
            format!("{}\r\n{}\r\n", MTK_CMD_314, MTK_CMD_220)
        );
    }

    #[test]
    fn missing_announcement_is_a_startup_error() {
        let mut port = ScriptedPort::new("$PMTK011,MTKGPS*08\r\n");

        let err = init_with_timeout(&mut port, SHORT).unwrap_err();
        assert!(matches!(err, GpsError::Startup(_)));
        // No configuration is attempted before the module announces itself.
        assert!(port.sent().is_empty());
    }

    #[test]
    fn missing_ack_is_a_config_error() {
        let mut port = ScriptedPort::new(
            "$PMTK010,001*2E\r\n\
             $PMTK011,MTKGPS*08\r\n\
             $GPGGA,,,,,,0,00,,,M,,M,,*66\r\n",
        );

        let err = init_with_timeout(&mut port, SHORT).unwrap_err();
        assert!(matches!(err, GpsError::ConfigRejected(_)));
    }

    #[test]
    fn collect_message_strips_line_endings() {
        let mut port = ScriptedPort::new("$PMTK010,001*2E\r\nrest");
        let line = collect_message(&mut port, SHORT);
        assert_eq!(line, "$PMTK010,001*2E");
    }
}
