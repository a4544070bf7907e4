use std::collections::VecDeque;
use std::io;

use log::{debug, warn};

use chesslink_core::{frame, Position, Transport};

/// Firmware version the virtual board reports.
const VERSION_MAJOR: u8 = 1;
const VERSION_MINOR: u8 = 0;

/// Mock implementation of a sensory board on the far end of a [`Transport`].
///
/// `VirtualBoard` implements [`Transport`] by playing the board's role
/// itself: frames written to it are decoded and answered with correctly
/// framed replies, which subsequent reads return. While most likely not a
/// 100% accurate rendition of the firmware, it is sufficient for exercising
/// the full protocol stack without hardware.
///
/// Like real hardware, it stays silent on malformed or unrecognized traffic,
/// so the host sees a short read rather than an error reply.
///
/// Commands and replies are logged using the [`log`] crate for debugging
/// purposes. Consuming binaries typically use the [`env_logger`] crate and
/// can be run with the `RUST_LOG=debug` environment variable to watch the
/// traffic go by.
///
/// # Examples
///
/// ```
/// use chesslink_core::Connection;
/// use chesslink_testing::VirtualBoard;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut connection = Connection::new(VirtualBoard::new());
/// assert_eq!("1.0", connection.version()?);
/// #
/// # Ok(()) }
/// ```
///
/// [`Transport`]: ../chesslink_core/trait.Transport.html
/// [`log`]: https://crates.io/crates/log
/// [`env_logger`]: https://crates.io/crates/env_logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualBoard {
    position: Position,
    replies: VecDeque<u8>,
    registers: [u8; 256],
    leds_lit: bool,
}

impl VirtualBoard {
    /// Creates a board holding the standard starting position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslink_testing::VirtualBoard;
    /// let board = VirtualBoard::new();
    /// assert!(!board.leds_lit());
    /// ```
    pub fn new() -> Self {
        Self::with_position(Position::starting())
    }

    /// Creates a board holding the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslink_core::Position;
    /// use chesslink_testing::VirtualBoard;
    ///
    /// let board = VirtualBoard::with_position(Position::new());
    /// ```
    pub fn with_position(position: Position) -> Self {
        VirtualBoard {
            position,
            replies: VecDeque::new(),
            registers: [0; 256],
            leds_lit: false,
        }
    }

    /// Returns the position currently on the board.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Replaces the position on the board, as if pieces were moved.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns whether any LEDs are currently lit.
    pub fn leds_lit(&self) -> bool {
        self.leds_lit
    }

    /// Decodes one incoming frame and queues the appropriate reply.
    fn handle_frame(&mut self, raw: &[u8]) {
        let decoded = match frame::decode(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Vboard ignoring malformed frame: {}", e);
                return;
            }
        };
        let message = &decoded[..decoded.len() - 2];
        debug!("Vboard command: {:?}", message);

        let reply = match message.chars().next() {
            Some('V') => Some(format!("v{:02}{:02}", VERSION_MAJOR, VERSION_MINOR)),
            Some('S') => Some(format!("s{}", self.position.to_raw())),
            Some('L') => {
                self.leds_lit = true;
                Some("l".to_owned())
            }
            Some('X') => {
                self.leds_lit = false;
                Some("x".to_owned())
            }
            Some('W') => self.write_register(&message[1..]),
            Some('R') => self.read_register(&message[1..]),
            _ => {
                warn!("Vboard ignoring unknown command {:?}", message);
                None
            }
        };

        if let Some(reply) = reply {
            debug!("Vboard reply: {:?}", reply);
            match frame::encode(&reply) {
                Ok(bytes) => self.replies.extend(bytes),
                Err(e) => warn!("Vboard couldn't frame reply {:?}: {}", reply, e),
            }
        }
    }

    /// Handles `W<addr><value>`: stores a register byte and echoes the
    /// arguments back, the way the firmware acknowledges a write.
    fn write_register(&mut self, args: &str) -> Option<String> {
        if args.len() != 4 {
            return None;
        }
        let address = u8::from_str_radix(&args[..2], 16).ok()?;
        let value = u8::from_str_radix(&args[2..], 16).ok()?;
        self.registers[usize::from(address)] = value;
        Some(format!("w{}", args))
    }

    /// Handles `R<addr>`: reports the stored register byte.
    fn read_register(&self, args: &str) -> Option<String> {
        if args.len() != 2 {
            return None;
        }
        let address = u8::from_str_radix(args, 16).ok()?;
        Some(format!("r{}{:02X}", args, self.registers[usize::from(address)]))
    }
}

impl Default for VirtualBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for VirtualBoard {
    /// Accepts one outgoing frame and queues the board's reply, if any.
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.handle_frame(bytes);
        Ok(bytes.len())
    }

    /// Returns queued reply bytes; 0 once the reply is exhausted.
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let mut count = 0;
        while count < buffer.len() {
            match self.replies.pop_front() {
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
        self.replies.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chesslink_core::{Command, Connection, Piece, ProtocolError};

    #[test]
    fn full_protocol_walkthrough() {
        let mut connection = Connection::new(VirtualBoard::new());

        // Version and initial position.
        assert_eq!("1.0", connection.version().unwrap());
        let position = Position::from_raw(&connection.raw_position().unwrap()).unwrap();
        assert_eq!(Position::starting(), position);

        // Light LEDs, then extinguish them.
        let reply = connection.exchange(&Command::leds("50C4C4").unwrap()).unwrap();
        assert_eq!("", reply);
        assert!(connection.transport().leds_lit());

        let reply = connection.exchange(&Command::leds_off()).unwrap();
        assert_eq!("", reply);
        assert!(!connection.transport().leds_lit());

        // Registers: a write echoes its arguments, a read reports the byte.
        let reply = connection.exchange(&Command::new("W02A5").unwrap()).unwrap();
        assert_eq!("02A5", reply);
        let reply = connection.exchange(&Command::new("R02").unwrap()).unwrap();
        assert_eq!("02A5", reply);
    }

    #[test]
    fn position_changes_are_reported() {
        let mut board = VirtualBoard::new();
        let mut position = Position::starting();
        position.set(4, 1, Piece::Empty);
        position.set(4, 3, Piece::WhitePawn);
        board.set_position(position);

        let mut connection = Connection::new(board);
        let reported = Position::from_raw(&connection.raw_position().unwrap()).unwrap();
        assert_eq!(Piece::WhitePawn, reported.get(4, 3));
        assert_eq!(Piece::Empty, reported.get(4, 1));
    }

    #[test]
    fn unread_register_reads_as_zero() {
        let mut connection = Connection::new(VirtualBoard::new());
        let reply = connection.exchange(&Command::new("R7F").unwrap()).unwrap();
        assert_eq!("7F00", reply);
    }

    #[test]
    fn malformed_register_args_get_no_reply() {
        let mut connection = Connection::new(VirtualBoard::new());
        let error = connection.exchange(&Command::new("W02").unwrap()).unwrap_err();
        assert!(matches!(error, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn malformed_frame_gets_no_reply() {
        let mut board = VirtualBoard::new();
        let mut raw = frame::encode("V").unwrap();
        raw[0] ^= 0x01;
        assert_eq!(raw.len(), Transport::write(&mut board, &raw).unwrap());

        let mut buffer = [0u8; 7];
        assert_eq!(0, Transport::read(&mut board, &mut buffer).unwrap());
    }

    #[test]
    fn unknown_command_gets_no_reply() {
        let mut board = VirtualBoard::new();
        let raw = frame::encode("Z12").unwrap();
        assert_eq!(raw.len(), Transport::write(&mut board, &raw).unwrap());

        let mut buffer = [0u8; 3];
        assert_eq!(0, Transport::read(&mut board, &mut buffer).unwrap());
    }
}
