//! Core protocol types for communicating with Millennium-style sensory
//! chessboards.
//!
//! For the basic task of board communication, you likely want to use the
//! high-level API in the `chesslink` crate instead.
//!
//! However, `chesslink-core` is useful for crates that want to interact with
//! the wire protocol at a lower level, or that want to provide their own
//! [`Transport`] implementations for use by `chesslink`.
//!
//! Tested against ChessLink-generation boards reporting firmware 1.x.
//! Intended only for hobbyist and educational purposes. Not affiliated with
//! the board manufacturer in any way.
//!
//! # Examples
//!
//! ```
//! use chesslink_core::{frame, Command, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // Frame the version request the way it goes onto the wire:
//! // checksum digits appended, then odd parity folded into each high bit.
//! let command = Command::version();
//! assert_eq!(vec![0xD6, 0xB5, 0xB6], frame::encode(command.text())?);
//!
//! // Replies come back the same way.
//! let reply = frame::decode(&frame::encode("v0100")?)?;
//! assert!(reply.starts_with('v'));
//!
//! // A status reply's 64-character payload decodes into a logical grid.
//! let position = Position::from_raw(&".".repeat(64))?;
//! println!("{}", position);
//! #
//! # Ok(()) }
//! ```
#![doc(html_root_url = "https://docs.rs/chesslink-core/0.1.0")]
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

pub mod frame;

mod command;
mod connection;
mod link;
mod piece;
mod position;

pub use self::command::{Command, CommandError};
pub use self::connection::{Connection, ProtocolError};
pub use self::frame::FrameError;
pub use self::link::Transport;
pub use self::piece::Piece;
pub use self::position::{Position, PositionError};
