//! A library for interacting with Millennium-style sensory chessboards over
//! a serial link.
//!
//! Provides a way to find the port hosting a board, connect to it, read the
//! occupancy of its 64 squares as a logical position, and drive its square
//! LEDs. No move validation or chess logic is provided; you are responsible
//! for interpreting the positions yourself.
//!
//! Tested against ChessLink-generation boards reporting firmware 1.x.
//! Intended only for hobbyist and educational purposes. Not affiliated with
//! the board manufacturer in any way.
//!
//! # Examples
//!
//! ```no_run
//! use chesslink::{probe_ports, Board, PortId, SerialTransport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // Find a responsive board among the system's candidate ports.
//! let candidates = vec![PortId::from("/dev/ttyUSB0"), PortId::from("/dev/ttyUSB1")];
//! let found = probe_ports(candidates, |id| serial::open(&id.0));
//! let port_id = found.first().ok_or("no board found")?;
//!
//! // Probing closes its ports again, so reopen the winner for real use.
//! let port = serial::open(&port_id.0)?;
//! let mut board = Board::new(SerialTransport::new(port)?);
//!
//! println!("firmware {}", board.version()?);
//! println!("{}", board.position()?);
//!
//! board.disconnect();
//! #
//! # Ok(()) }
//! ```
//!
//! # Sub-crates
//!
//! In addition to the high-level API of [`Board`], several lower-level
//! components are provided that can be combined for more specialized
//! use-cases.
//!
//! - [`chesslink-core`] \(re-exported as `core`\) contains the basic types
//!   describing the wire protocol, and is useful if you want to frame
//!   commands yourself or provide a custom [`Transport`].
//! - [`chesslink-serial`] \(re-exported as `serial`\) contains the serial
//!   port configuration, the [`SerialTransport`] implementation, and port
//!   probing.
//! - [`chesslink-testing`] contains a virtual board, useful for testing and
//!   debugging without hardware.
//!
//! [`Board`]: struct.Board.html
//! [`chesslink-core`]: https://docs.rs/chesslink-core
//! [`chesslink-serial`]: https://docs.rs/chesslink-serial
//! [`chesslink-testing`]: https://docs.rs/chesslink-testing
//! [`Transport`]: trait.Transport.html
//! [`SerialTransport`]: struct.SerialTransport.html
#![doc(html_root_url = "https://docs.rs/chesslink/0.1.0")]
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    missing_docs,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub use chesslink_core as core;
pub use chesslink_serial as serial;

mod board;

pub use self::board::{Board, BoardError};

pub use crate::core::{Command, Connection, Piece, Position, Transport};
pub use crate::serial::{probe_ports, PortId, SerialTransport};
