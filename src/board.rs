use log::warn;
use thiserror::Error;

use crate::core::{
    Command, CommandError, Connection, Position, PositionError, ProtocolError, Transport,
};

/// Errors related to [`Board`] operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BoardError {
    /// The session is not connected; the command was not sent.
    ///
    /// Reported after [`Board::disconnect`] or after a link failure has
    /// ended the session.
    #[error("Not connected to a board")]
    NotConnected,

    /// A command/reply exchange failed.
    #[error("Exchange with the board failed")]
    Protocol {
        /// The underlying protocol error.
        #[from]
        source: ProtocolError,
    },

    /// The board reported a position payload that couldn't be decoded.
    #[error("Couldn't decode the reported board position")]
    Position {
        /// The underlying decode error.
        #[from]
        source: PositionError,
    },

    /// The command could not be constructed.
    #[error("Invalid command")]
    Command {
        /// The underlying command error.
        #[from]
        source: CommandError,
    },
}

/// A session with a single board over an exclusively owned [`Transport`].
///
/// The session is connected on creation and becomes disconnected after
/// [`disconnect`] or after any I/O-level failure, at which point the
/// transport has been released and every operation reports
/// [`BoardError::NotConnected`]. A malformed or unexpected reply does *not*
/// end the session: the reply is discarded and the caller decides whether to
/// try the command again.
///
/// # Examples
///
/// ```
/// use chesslink::Board;
/// use chesslink_testing::VirtualBoard;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut board = Board::new(VirtualBoard::new());
/// println!("firmware {}", board.version()?);
/// println!("{}", board.position()?);
/// board.disconnect();
/// #
/// # Ok(()) }
/// ```
///
/// Driving real hardware instead:
///
/// ```no_run
/// use chesslink::{Board, SerialTransport};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let port = serial::open("/dev/ttyUSB0")?;
/// let mut board = Board::new(SerialTransport::new(port)?);
/// println!("{}", board.position()?);
/// #
/// # Ok(()) }
/// ```
///
/// [`disconnect`]: #method.disconnect
#[derive(Debug)]
pub struct Board<T: Transport> {
    connection: Option<Connection<T>>,
}

impl<T: Transport> Board<T> {
    /// Creates a connected session over an open transport.
    pub fn new(transport: T) -> Self {
        Board {
            connection: Some(Connection::new(transport)),
        }
    }

    /// Returns whether the session is still connected.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Ends the session, releasing the transport.
    ///
    /// Safe to call repeatedly; operations after this report
    /// [`BoardError::NotConnected`].
    pub fn disconnect(&mut self) {
        self.connection = None;
    }

    /// Returns a mutable reference to the transport, if still connected.
    ///
    /// Useful in tests for poking at a virtual board mid-session.
    pub fn transport_mut(&mut self) -> Option<&mut T> {
        self.connection.as_mut().map(Connection::transport_mut)
    }

    /// Requests the board's firmware version, e.g. `"1.0"`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotConnected`] if the session has ended, or a
    /// wrapped [`ProtocolError`] if the exchange failed.
    pub fn version(&mut self) -> Result<String, BoardError> {
        self.run(|connection| connection.version())
    }

    /// Reads the current occupancy of all 64 squares.
    ///
    /// # Errors
    ///
    /// In addition to the [`version`] errors, returns
    /// [`BoardError::Position`] if the payload contains a character outside
    /// the piece table. No partial position is ever produced.
    ///
    /// [`version`]: #method.version
    pub fn position(&mut self) -> Result<Position, BoardError> {
        let raw = self.run(|connection| connection.raw_position())?;
        Ok(Position::from_raw(&raw)?)
    }

    /// Lights LEDs according to a raw pattern argument string.
    ///
    /// Pattern semantics are firmware-defined; this call frames the
    /// arguments and confirms the board acknowledged them, nothing more.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Command`] if the pattern cannot be framed, plus
    /// the [`version`] errors.
    ///
    /// [`version`]: #method.version
    pub fn leds(&mut self, pattern: &str) -> Result<(), BoardError> {
        let command = Command::leds(pattern)?;
        let _ = self.run(|connection| connection.exchange(&command))?;
        Ok(())
    }

    /// Extinguishes all LEDs.
    pub fn leds_off(&mut self) -> Result<(), BoardError> {
        let _ = self.run(|connection| connection.exchange(&Command::leds_off()))?;
        Ok(())
    }

    /// Performs one raw command/reply exchange, returning the reply payload.
    ///
    /// Useful for commands whose payloads this crate does not interpret,
    /// such as the `W`/`R` register pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslink::{Board, Command};
    /// use chesslink_testing::VirtualBoard;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let mut board = Board::new(VirtualBoard::new());
    /// let reply = board.command(&Command::new("R02")?)?;
    /// assert_eq!("0200", reply);
    /// #
    /// # Ok(()) }
    /// ```
    pub fn command(&mut self, command: &Command) -> Result<String, BoardError> {
        self.run(|connection| connection.exchange(command))
    }

    /// Runs one protocol operation, ending the session if the link itself
    /// failed.
    ///
    /// Protocol-level failures (malformed or unexpected replies) leave the
    /// session connected.
    fn run<R>(
        &mut self,
        operation: impl FnOnce(&mut Connection<T>) -> Result<R, ProtocolError>,
    ) -> Result<R, BoardError> {
        let connection = self.connection.as_mut().ok_or(BoardError::NotConnected)?;
        match operation(connection) {
            Err(e @ ProtocolError::Io { .. }) => {
                warn!("Link failure, ending session: {}", e);
                self.connection = None;
                Err(e.into())
            }
            result => result.map_err(BoardError::from),
        }
    }
}
