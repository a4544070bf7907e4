use std::io::{self, Read, Write};
use std::time::Duration;

use log::debug;
use serial_core::prelude::*;

use chesslink_core::Transport;

use crate::errors::ConnectionError;
use crate::serial_port;

/// Read timeout applied by [`SerialTransport::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait for residual bytes when draining the input buffer.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(10);

/// An implementation of [`Transport`] that talks to a board over a serial
/// port.
///
/// Reads are bounded by the port timeout; a read that times out reports a
/// short result rather than an error, which the protocol layer treats as a
/// truncated reply.
///
/// # Examples
///
/// ```no_run
/// use chesslink_core::Connection;
/// use chesslink_serial::SerialTransport;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let port = serial::open("/dev/ttyUSB0")?;
/// let transport = SerialTransport::new(port)?;
/// let mut connection = Connection::new(transport);
/// println!("firmware {}", connection.version()?);
/// #
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct SerialTransport<P: SerialPort> {
    port: P,
}

impl<P: SerialPort> SerialTransport<P> {
    /// Creates a new `SerialTransport`, configuring the port for board
    /// communication (8N1 38400 baud) with a default 5-second read timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Configuration`] if the serial port cannot
    /// be configured.
    pub fn new(port: P) -> Result<Self, ConnectionError> {
        Self::with_timeout(port, DEFAULT_TIMEOUT)
    }

    /// Creates a new `SerialTransport` with a specific read timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Configuration`] if the serial port cannot
    /// be configured.
    pub fn with_timeout(mut port: P, timeout: Duration) -> Result<Self, ConnectionError> {
        serial_port::configure_port(&mut port, timeout)?;
        Ok(SerialTransport { port })
    }

    /// Returns a reference to the underlying serial port.
    pub fn port(&self) -> &P {
        &self.port
    }
}

impl<P: SerialPort> Transport for SerialTransport<P> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.port.write_all(bytes)?;
        self.port.flush()?;
        Ok(bytes.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        match self.port.read(buffer) {
            Ok(count) => Ok(count),
            Err(ref e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn discard_input(&mut self) -> io::Result<()> {
        // Drain whatever is already buffered under a short timeout, then
        // restore the configured one.
        let timeout = self.port.timeout();
        self.port.set_timeout(DRAIN_TIMEOUT).map_err(io::Error::from)?;

        let mut discarded = 0;
        let mut scratch = [0u8; 32];
        let drained = loop {
            match self.port.read(&mut scratch) {
                Ok(0) => break Ok(()),
                Ok(count) => discarded += count,
                Err(ref e) if e.kind() == io::ErrorKind::TimedOut => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        self.port.set_timeout(timeout).map_err(io::Error::from)?;
        if discarded > 0 {
            debug!("Discarded {} stale bytes before send", discarded);
        }
        drained
    }
}
