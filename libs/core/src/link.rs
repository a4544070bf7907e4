use std::fmt::{self, Debug, Formatter};
use std::io;

/// Abstraction over a byte-oriented, point-to-point link to a board.
///
/// Typically `SerialTransport` from `chesslink-serial` or `VirtualBoard`
/// from `chesslink-testing` are sufficient, and you do not need to implement
/// this yourself.
///
/// All calls are blocking; any timeout policy belongs to the implementation.
/// A read that runs out of patience reports a short result rather than an
/// error, and the protocol layer decides what a truncated reply means.
///
/// # Examples
///
/// Implementing a custom transport that is never ready:
///
/// ```
/// use std::io;
/// use chesslink_core::Transport;
///
/// struct SilentLink;
///
/// impl Transport for SilentLink {
///     fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
///         Ok(bytes.len())
///     }
///
///     fn read(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
///         Ok(0) // nothing ever arrives
///     }
///
///     fn discard_input(&mut self) -> io::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Transport {
    /// Writes the buffer to the link, returning how many bytes went out.
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Reads up to `buffer.len()` bytes, returning how many were read.
    ///
    /// Short reads are allowed; returning 0 means no further bytes arrived
    /// within the implementation's timeout policy.
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize>;

    /// Discards any bytes already buffered on the receive side.
    ///
    /// Called before every send so that stale bytes from an earlier,
    /// possibly interrupted exchange are never mistaken for the new reply.
    fn discard_input(&mut self) -> io::Result<()>;
}

// Provide a Debug representation so types that contain trait objects can derive Debug.
impl Debug for dyn Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<Transport trait>")
    }
}
