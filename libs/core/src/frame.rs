//! Wire framing: XOR checksum plus per-byte odd-parity packing.

use thiserror::Error;

/// Errors related to encoding/decoding protocol frames.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FrameError {
    /// Message contained a character outside the 7-bit ASCII range.
    ///
    /// The parity encoding only has room for 7 data bits per byte, so wider
    /// characters cannot be represented on the wire.
    #[error("Character {character:?} is outside the 7-bit ASCII range and cannot be framed")]
    NonAscii {
        /// The offending character.
        character: char,
    },

    /// Frame was shorter than expected.
    ///
    /// Also reported when a frame is too short to carry its own checksum
    /// (fewer than 3 characters).
    #[error("Frame was {actual} bytes: expected {expected}")]
    TooShort {
        /// The expected byte count.
        expected: usize,

        /// The actual byte count received.
        actual: usize,
    },

    /// Frame checksum didn't match the checksum computed over its payload.
    #[error("Frame checksum for {frame:?} didn't match: declared {declared}, computed {computed}")]
    BadChecksum {
        /// The decoded frame characters.
        frame: String,

        /// The two checksum hex digits declared by the frame.
        declared: String,

        /// The two checksum hex digits computed from the payload.
        computed: String,
    },
}

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// Computes the XOR checksum over a message's 7-bit character codes.
pub fn checksum(message: &str) -> u8 {
    message.bytes().fold(0, |acc, byte| acc ^ (byte & 0x7F))
}

/// Renders a checksum as the two uppercase hex digits used on the wire.
pub fn checksum_hex(value: u8) -> [char; 2] {
    [
        HEX_DIGITS[(value >> 4) as usize] as char,
        HEX_DIGITS[(value & 0x0F) as usize] as char,
    ]
}

/// Encodes a message into its wire form.
///
/// The message's XOR checksum is appended as two uppercase hex digits, then
/// every character is packed into one byte whose high bit carries odd parity
/// over the whole byte.
///
/// # Errors
///
/// Returns [`FrameError::NonAscii`] if the message contains a character with
/// a code of 128 or above. The reference firmware tooling silently masked
/// such characters to 7 bits; rejecting them instead surfaces what would
/// otherwise be a corrupted command.
///
/// # Examples
///
/// ```
/// use chesslink_core::frame;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let bytes = frame::encode("V")?;
/// assert_eq!(vec![0xD6, 0xB5, 0xB6], bytes);
/// #
/// # Ok(()) }
/// ```
pub fn encode(message: &str) -> Result<Vec<u8>, FrameError> {
    if let Some(character) = message.chars().find(|c| !c.is_ascii()) {
        return Err(FrameError::NonAscii { character });
    }

    let [high, low] = checksum_hex(checksum(message));
    let mut output = Vec::with_capacity(message.len() + 2);
    for character in message.chars().chain([high, low]) {
        output.push(add_parity(character as u8));
    }
    Ok(output)
}

/// Decodes a raw reply into its characters, verifying the embedded checksum.
///
/// The high (parity) bit of every byte is stripped; parity is not
/// independently re-verified, since the embedded checksum is authoritative.
/// On success all characters are returned, checksum digits included, so the
/// caller's length accounting matches the on-wire reply length.
///
/// # Errors
///
/// Returns [`FrameError::TooShort`] if fewer than 3 characters remain (no
/// room for a checksum) and [`FrameError::BadChecksum`] if the two trailing
/// hex digits don't match the checksum computed over the preceding
/// characters. Either way the reply must be discarded by the caller.
///
/// # Examples
///
/// ```
/// use chesslink_core::frame;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let reply = frame::decode(&frame::encode("v0100")?)?;
/// assert_eq!("v010077", reply);
/// #
/// # Ok(()) }
/// ```
pub fn decode(raw: &[u8]) -> Result<String, FrameError> {
    let frame: String = raw.iter().map(|&byte| (byte & 0x7F) as char).collect();
    if frame.len() < 3 {
        return Err(FrameError::TooShort {
            expected: 3,
            actual: frame.len(),
        });
    }

    let (payload, declared) = frame.split_at(frame.len() - 2);
    let computed: String = checksum_hex(checksum(payload)).iter().collect();
    if declared != computed {
        return Err(FrameError::BadChecksum {
            frame: frame.clone(),
            declared: declared.to_string(),
            computed,
        });
    }

    Ok(frame)
}

/// Packs a 7-bit value into a byte whose high bit carries odd parity.
///
/// The total number of 1-bits across all 8 bits is always odd.
fn add_parity(byte: u8) -> u8 {
    let data = byte & 0x7F;
    if data.count_ones() % 2 == 0 {
        data | 0x80
    } else {
        data
    }
}
