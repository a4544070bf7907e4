use std::time::Duration;

use derive_more::Display;
use log::{debug, warn};
use serial_core::prelude::*;

use chesslink_core::{Command, Connection};

use crate::serial_transport::SerialTransport;

/// Read timeout used while probing; silent ports shouldn't stall the sweep
/// for long.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// A human-presentable serial port identifier, e.g. `/dev/ttyUSB0` or `COM3`.
///
/// Candidates are supplied by a system port enumerator outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct PortId(pub String);

impl From<&str> for PortId {
    fn from(name: &str) -> Self {
        PortId(name.to_owned())
    }
}

/// Probes candidate serial ports for a responding board.
///
/// Each candidate is opened with the caller-provided `open` function
/// (typically `serial::open`), configured for board communication, and asked
/// for its firmware version. Candidates that complete a well-formed version
/// exchange are returned in candidate order; every port is closed again
/// before returning, so callers reopen the chosen port for real use.
///
/// Per-candidate failures are logged and skipped rather than aborting the
/// sweep, and finding no board at all is a valid outcome, not an error.
///
/// # Examples
///
/// ```no_run
/// use chesslink_serial::{probe_ports, PortId};
///
/// let candidates = vec![PortId::from("/dev/ttyUSB0"), PortId::from("/dev/ttyUSB1")];
/// let found = probe_ports(candidates, |id| serial::open(&id.0));
/// match found.first() {
///     Some(port) => println!("Board found at {}", port),
///     None => println!("No board found."),
/// }
/// ```
pub fn probe_ports<I, F, P>(candidates: I, mut open: F) -> Vec<PortId>
where
    I: IntoIterator<Item = PortId>,
    F: FnMut(&PortId) -> serial_core::Result<P>,
    P: SerialPort,
{
    let mut found = Vec::new();
    for candidate in candidates {
        debug!("Probing {}", candidate);

        let port = match open(&candidate) {
            Ok(port) => port,
            Err(e) => {
                warn!("Couldn't open {}: {}", candidate, e);
                continue;
            }
        };
        let transport = match SerialTransport::with_timeout(port, PROBE_TIMEOUT) {
            Ok(transport) => transport,
            Err(e) => {
                warn!("Couldn't configure {}: {}", candidate, e);
                continue;
            }
        };

        // Any well-formed version reply counts as a match, whatever the
        // payload says.
        let mut connection = Connection::new(transport);
        match connection.exchange(&Command::version()) {
            Ok(payload) => {
                debug!("Board with version payload {:?} at {}", payload, candidate);
                found.push(candidate);
            }
            Err(e) => debug!("No board at {}: {}", candidate, e),
        }
        // The port handle drops here; probing never leaves a port open.
    }
    found
}
