//! Serial-port transport and board discovery for Millennium-style sensory
//! chessboards.
//!
//! For the basic task of board communication, you likely want to use the
//! high-level API in the `chesslink` crate instead.
//!
//! However, you can use the [`configure_port`] function to set a serial port
//! up appropriately if you're doing custom lower-level communication, and
//! [`probe_ports`] to find which system port, if any, hosts a responsive
//! board.
//!
//! Intended only for hobbyist and educational purposes. Not affiliated with
//! the board manufacturer in any way.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! let mut port = serial::open("/dev/ttyUSB0")?;
//! chesslink_serial::configure_port(&mut port, Duration::from_secs(5))?;
//! // Now ready for communication with a board (8N1 38400 baud).
//! #
//! # Ok(()) }
//! ```
//!
//! [`configure_port`]: fn.configure_port.html
//! [`probe_ports`]: fn.probe_ports.html
#![doc(html_root_url = "https://docs.rs/chesslink-serial/0.1.0")]
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

mod errors;
mod probe;
mod serial_port;
mod serial_transport;

pub use self::errors::ConnectionError;
pub use self::probe::{probe_ports, PortId};
pub use self::serial_port::configure_port;
pub use self::serial_transport::SerialTransport;
