//! Tools for testing and debugging Millennium-style chessboard
//! communications.
//!
//! For the basic task of board communication, you likely want to use the
//! high-level API in the `chesslink` crate instead.
//!
//! This crate isn't directly related to controlling a real board, but
//! provides a helpful diagnostic tool: [`VirtualBoard`] is a mock
//! implementation of a board that speaks the full wire protocol, letting the
//! rest of the stack be exercised without hardware.
//!
//! Intended only for hobbyist and educational purposes. Not affiliated with
//! the board manufacturer in any way.
//!
//! # Examples
//!
//! ```
//! use chesslink_core::{Connection, Position};
//! use chesslink_testing::VirtualBoard;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // A virtual board starts out with the pieces set up for a new game.
//! let mut connection = Connection::new(VirtualBoard::new());
//! assert_eq!("1.0", connection.version()?);
//!
//! let position = Position::from_raw(&connection.raw_position()?)?;
//! assert_eq!(Position::starting(), position);
//! #
//! # Ok(()) }
//! ```
//!
//! [`VirtualBoard`]: struct.VirtualBoard.html
#![doc(html_root_url = "https://docs.rs/chesslink-testing/0.1.0")]
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

mod virtual_board;

pub use self::virtual_board::VirtualBoard;
