use std::time::Duration;

use serial_core as serial;
use serial_core::prelude::*;

use crate::errors::ConnectionError;

/// Configures the given serial port appropriately for board communication.
///
/// The boards expect 8N1 format at 38400 baud with no flow control. Note
/// that hardware parity stays off: the protocol folds its own parity bit
/// into each data byte's high bit (see `chesslink-core`'s frame encoding).
/// Also sets the provided timeout value, which bounds every read.
///
/// # Errors
///
/// Returns [`ConnectionError::Configuration`] if the underlying serial port
/// reports an error.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut port = serial::open("/dev/ttyUSB0")?;
/// chesslink_serial::configure_port(&mut port, Duration::from_secs(5))?;
/// // Now ready for communication with a board (8N1 38400 baud).
/// #
/// # Ok(()) }
/// ```
pub fn configure_port<P: SerialPort>(port: &mut P, timeout: Duration) -> Result<(), ConnectionError> {
    port.reconfigure(&|settings| {
        settings.set_baud_rate(serial::Baud38400)?;
        settings.set_char_size(serial::Bits8);
        settings.set_parity(serial::ParityNone);
        settings.set_stop_bits(serial::Stop1);
        settings.set_flow_control(serial::FlowNone);
        Ok(())
    })?;
    port.set_timeout(timeout)?;
    Ok(())
}
