use thiserror::Error;

/// Errors related to opening and configuring the serial link to a board.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConnectionError {
    /// The serial port could not be opened.
    #[error("Couldn't open serial port")]
    Open {
        /// The underlying serial error.
        source: serial_core::Error,
    },

    /// The serial port could not be configured for board communication.
    #[error("Couldn't configure serial port")]
    Configuration {
        /// The underlying serial error.
        #[from]
        source: serial_core::Error,
    },
}
