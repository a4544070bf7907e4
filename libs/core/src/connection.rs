use std::io;

use log::{debug, warn};
use thiserror::Error;

use crate::command::Command;
use crate::frame::{self, FrameError};
use crate::link::Transport;

/// Errors arising from a command/reply exchange with a board.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProtocolError {
    /// Failed reading or writing on the underlying transport.
    #[error("Failed reading/writing on the board link")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Reply was truncated or failed checksum validation.
    ///
    /// The reply must be discarded; no automatic retry is performed.
    #[error("Malformed reply")]
    Malformed {
        /// What was wrong with the reply bytes.
        #[from]
        source: FrameError,
    },

    /// Reply did not carry the marker expected for the command.
    #[error("Unexpected reply: expected marker {expected:?}, got {actual:?}")]
    UnexpectedReply {
        /// The marker the command table expects.
        expected: char,

        /// The marker actually received.
        actual: char,
    },

    /// Version reply payload did not contain numeric version fields.
    #[error("Version reply payload {payload:?} did not contain numeric version fields")]
    BadVersion {
        /// The reply payload as received.
        payload: String,
    },
}

/// A live command/reply session over a [`Transport`].
///
/// One request is in flight at a time and each call is a single attempt:
/// a malformed reply is reported, not retried. Stale bytes left over from a
/// previous exchange are discarded before every send.
///
/// Exchanges are logged using the [`log`] crate for debugging purposes.
/// Consuming binaries typically use the [`env_logger`] crate and can be run
/// with the `RUST_LOG=debug` environment variable to watch the traffic go by.
///
/// # Examples
///
/// ```no_run
/// use chesslink_core::{Connection, Transport};
/// # use std::io;
/// # struct SilentLink;
/// # impl Transport for SilentLink {
/// #     fn write(&mut self, bytes: &[u8]) -> io::Result<usize> { Ok(bytes.len()) }
/// #     fn read(&mut self, _buffer: &mut [u8]) -> io::Result<usize> { Ok(0) }
/// #     fn discard_input(&mut self) -> io::Result<()> { Ok(()) }
/// # }
/// # fn open_transport() -> SilentLink { SilentLink }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut connection = Connection::new(open_transport());
/// println!("firmware {}", connection.version()?);
/// println!("raw squares: {}", connection.raw_position()?);
/// #
/// # Ok(()) }
/// ```
///
/// [`log`]: https://crates.io/crates/log
/// [`env_logger`]: https://crates.io/crates/env_logger
#[derive(Debug)]
pub struct Connection<T: Transport> {
    transport: T,
}

impl<T: Transport> Connection<T> {
    /// Creates a new `Connection` over an open transport.
    pub fn new(transport: T) -> Self {
        Connection { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the connection and returns the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Sends a command without waiting for its reply.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Io`] if the transport fails.
    pub fn send(&mut self, command: &Command) -> Result<(), ProtocolError> {
        self.transport.discard_input()?;
        let bytes = frame::encode(command.text())?;
        let written = self.transport.write(&bytes)?;
        debug!("Sent {:?} as {} frame bytes", command.text(), written);
        Ok(())
    }

    /// Performs one command/reply cycle and returns the reply payload.
    ///
    /// Exactly the command's expected reply length is read, bounded by the
    /// transport's timeout policy. The returned payload excludes the reply
    /// marker and the two checksum digits.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Io`] if the transport fails,
    /// [`ProtocolError::Malformed`] if the reply is short or fails its
    /// checksum, and [`ProtocolError::UnexpectedReply`] if the reply marker
    /// doesn't match the command table.
    pub fn exchange(&mut self, command: &Command) -> Result<String, ProtocolError> {
        self.send(command)?;
        let raw = self.read_reply(command.reply_length())?;
        let reply = frame::decode(&raw)?;
        debug!("Reply {:?}", reply);

        let marker = reply.chars().next().unwrap_or_default();
        if marker != command.reply_marker() {
            return Err(ProtocolError::UnexpectedReply {
                expected: command.reply_marker(),
                actual: marker,
            });
        }
        Ok(reply[1..reply.len() - 2].to_string())
    }

    /// Requests the board's firmware version, e.g. `"1.0"`.
    ///
    /// # Errors
    ///
    /// In addition to the [`exchange`] errors, returns
    /// [`ProtocolError::BadVersion`] if the reply payload isn't two numeric
    /// two-digit fields.
    ///
    /// [`exchange`]: #method.exchange
    pub fn version(&mut self) -> Result<String, ProtocolError> {
        let payload = self.exchange(&Command::version())?;
        parse_version(&payload)
    }

    /// Requests the raw 64-character occupancy payload.
    ///
    /// Square ordering is the device's own; decode it with
    /// `Position::from_raw`.
    pub fn raw_position(&mut self) -> Result<String, ProtocolError> {
        self.exchange(&Command::status())
    }

    /// Reads exactly `length` bytes, looping over short transport reads.
    ///
    /// A read of 0 means the transport gave up waiting, which ends the
    /// attempt; the truncated reply is reported as such.
    fn read_reply(&mut self, length: usize) -> Result<Vec<u8>, ProtocolError> {
        let mut buffer = vec![0u8; length];
        let mut filled = 0;
        while filled < length {
            let count = self.transport.read(&mut buffer[filled..])?;
            if count == 0 {
                break;
            }
            filled += count;
        }
        if filled < length {
            warn!("Short reply: expected {} bytes, got {}", length, filled);
            return Err(FrameError::TooShort {
                expected: length,
                actual: filled,
            }
            .into());
        }
        Ok(buffer)
    }
}

/// Extracts the `"<major>.<minor>"` string from a version reply payload.
///
/// The payload carries two-digit major and minor fields; a `"0100"` payload
/// is version `"1.0"`.
fn parse_version(payload: &str) -> Result<String, ProtocolError> {
    let bad = || ProtocolError::BadVersion {
        payload: payload.to_string(),
    };
    if payload.len() != 4 || !payload.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    let major: u8 = payload[..2].parse().map_err(|_| bad())?;
    let minor: u8 = payload[2..].parse().map_err(|_| bad())?;
    Ok(format!("{}.{}", major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Transport that queues one canned reply per write and records traffic.
    ///
    /// Bytes placed in `pending` before an exchange simulate stale input
    /// from an interrupted earlier exchange.
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        pending: VecDeque<u8>,
        replies: VecDeque<Vec<u8>>,
        written: Vec<Vec<u8>>,
        discarded: usize,
    }

    impl ScriptedTransport {
        fn replying(reply: Vec<u8>) -> Self {
            let mut transport = ScriptedTransport::default();
            transport.replies.push_back(reply);
            transport
        }
    }

    impl Transport for ScriptedTransport {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.written.push(bytes.to_vec());
            if let Some(reply) = self.replies.pop_front() {
                self.pending.extend(reply);
            }
            Ok(bytes.len())
        }

        fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
            let mut count = 0;
            while count < buffer.len() {
                match self.pending.pop_front() {
                    Some(byte) => {
                        buffer[count] = byte;
                        count += 1;
                    }
                    None => break,
                }
            }
            Ok(count)
        }

        fn discard_input(&mut self) -> io::Result<()> {
            self.discarded += self.pending.len();
            self.pending.clear();
            Ok(())
        }
    }

    /// Transport whose reads always fail.
    #[derive(Debug)]
    struct BrokenTransport;

    impl Transport for BrokenTransport {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            Ok(bytes.len())
        }

        fn read(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "Dummy I/O error"))
        }

        fn discard_input(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn version_exchange() {
        let transport = ScriptedTransport::replying(frame::encode("v0100").unwrap());
        let mut connection = Connection::new(transport);

        assert_eq!("1.0", connection.version().unwrap());
        assert_eq!(
            vec![frame::encode("V").unwrap()],
            connection.transport().written
        );
    }

    #[test]
    fn stale_input_discarded_before_send() {
        let mut transport = ScriptedTransport::replying(frame::encode("v0314").unwrap());
        transport.pending.extend(b"leftover junk");
        let mut connection = Connection::new(transport);

        assert_eq!("3.14", connection.version().unwrap());
        assert_eq!(13, connection.transport().discarded);
    }

    #[test]
    fn raw_position_exchange() {
        let raw = ".".repeat(64);
        let transport = ScriptedTransport::replying(frame::encode(&format!("s{}", raw)).unwrap());
        let mut connection = Connection::new(transport);

        assert_eq!(raw, connection.raw_position().unwrap());
    }

    #[test]
    fn short_reply_is_malformed() {
        let mut reply = frame::encode("v0100").unwrap();
        reply.truncate(3);
        let mut connection = Connection::new(ScriptedTransport::replying(reply));

        let error = connection.version().unwrap_err();
        assert!(matches!(
            error,
            ProtocolError::Malformed {
                source: FrameError::TooShort { expected: 7, actual: 3 },
            }
        ));
    }

    #[test]
    fn corrupted_checksum_is_malformed() {
        let mut reply = frame::encode("v0100").unwrap();
        reply[1] ^= 0x02;
        let mut connection = Connection::new(ScriptedTransport::replying(reply));

        let error = connection.version().unwrap_err();
        assert!(matches!(
            error,
            ProtocolError::Malformed {
                source: FrameError::BadChecksum { .. },
            }
        ));
    }

    #[test]
    fn wrong_marker_is_unexpected_reply() {
        let reply = frame::encode("s0100").unwrap();
        let mut connection = Connection::new(ScriptedTransport::replying(reply));

        let error = connection.version().unwrap_err();
        assert!(matches!(
            error,
            ProtocolError::UnexpectedReply { expected: 'v', actual: 's' }
        ));
    }

    #[test]
    fn read_failure_is_io() {
        let mut connection = Connection::new(BrokenTransport);
        let error = connection.version().unwrap_err();
        assert!(matches!(error, ProtocolError::Io { .. }));
    }

    #[test]
    fn version_payload_parsing() {
        assert_eq!("1.0", parse_version("0100").unwrap());
        assert_eq!("3.14", parse_version("0314").unwrap());
        assert_eq!("12.7", parse_version("1207").unwrap());

        assert!(matches!(
            parse_version("01x0").unwrap_err(),
            ProtocolError::BadVersion { .. }
        ));
        assert!(matches!(
            parse_version("010").unwrap_err(),
            ProtocolError::BadVersion { .. }
        ));
    }
}
