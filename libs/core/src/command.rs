use thiserror::Error;

/// Errors related to constructing [`Command`]s.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum CommandError {
    /// Command text was empty.
    #[error("Command text was empty")]
    Empty,

    /// Command letter is not part of the protocol.
    #[error("Command letter {letter:?} is not part of the protocol")]
    UnknownCommand {
        /// The unrecognized first character.
        letter: char,
    },

    /// Command text contained a character outside the 7-bit ASCII range.
    #[error("Command character {character:?} is outside the 7-bit ASCII range")]
    NonAscii {
        /// The offending character.
        character: char,
    },
}

/// A validated board command: a mnemonic letter plus optional arguments.
///
/// Every command letter has a fixed reply shape, known before the command is
/// sent: the board answers with the lowercase marker and a fixed total byte
/// count (marker and two checksum digits included). The table is fixed by
/// the board firmware; deviating from it breaks interoperability with real
/// hardware.
///
/// | Command | Reply marker | Reply length |
/// |---------|--------------|--------------|
/// | `V`     | `v`          | 7            |
/// | `S`     | `s`          | 67           |
/// | `L`     | `l`          | 3            |
/// | `X`     | `x`          | 3            |
/// | `W`     | `w`          | 7            |
/// | `R`     | `r`          | 7            |
///
/// # Examples
///
/// ```
/// use chesslink_core::Command;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let command = Command::new("S")?;
/// assert_eq!('s', command.reply_marker());
/// assert_eq!(67, command.reply_length());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    text: String,
    reply_marker: char,
    reply_length: usize,
}

impl Command {
    /// Creates a `Command` from raw command text.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Empty`] for empty text,
    /// [`CommandError::NonAscii`] if any character cannot be framed, and
    /// [`CommandError::UnknownCommand`] if the first character is not in the
    /// command table.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslink_core::Command;
    ///
    /// let command = Command::new("L50C4").unwrap();
    /// assert_eq!("L50C4", command.text());
    ///
    /// assert!(Command::new("Z").is_err());
    /// ```
    pub fn new<S: Into<String>>(text: S) -> Result<Self, CommandError> {
        let text = text.into();
        let letter = text.chars().next().ok_or(CommandError::Empty)?;
        if let Some(character) = text.chars().find(|c| !c.is_ascii()) {
            return Err(CommandError::NonAscii { character });
        }
        let (reply_marker, reply_length) =
            reply_expectation(letter).ok_or(CommandError::UnknownCommand { letter })?;
        Ok(Command {
            text,
            reply_marker,
            reply_length,
        })
    }

    /// The firmware version request (`V`).
    pub fn version() -> Self {
        Command {
            text: "V".to_owned(),
            reply_marker: 'v',
            reply_length: 7,
        }
    }

    /// The board occupancy request (`S`).
    pub fn status() -> Self {
        Command {
            text: "S".to_owned(),
            reply_marker: 's',
            reply_length: 67,
        }
    }

    /// A lighting command (`L` plus a raw pattern argument string).
    ///
    /// Pattern semantics are firmware-defined and not interpreted here.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NonAscii`] if the pattern cannot be framed.
    pub fn leds(pattern: &str) -> Result<Self, CommandError> {
        Command::new(format!("L{}", pattern))
    }

    /// The extinguish-all-LEDs command (`X`).
    pub fn leds_off() -> Self {
        Command {
            text: "X".to_owned(),
            reply_marker: 'x',
            reply_length: 3,
        }
    }

    /// Returns the command text as sent (before framing).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the marker character expected at the start of the reply.
    pub fn reply_marker(&self) -> char {
        self.reply_marker
    }

    /// Returns the total reply length in bytes, checksum digits included.
    pub fn reply_length(&self) -> usize {
        self.reply_length
    }
}

/// Reply marker and total reply length for a command letter.
fn reply_expectation(letter: char) -> Option<(char, usize)> {
    match letter {
        'V' => Some(('v', 7)),
        'S' => Some(('s', 67)),
        'L' => Some(('l', 3)),
        'X' => Some(('x', 3)),
        'W' => Some(('w', 7)),
        'R' => Some(('r', 7)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("V", 'v', 7)]
    #[test_case("S", 's', 67)]
    #[test_case("L50", 'l', 3)]
    #[test_case("X", 'x', 3)]
    #[test_case("W0203", 'w', 7)]
    #[test_case("R02", 'r', 7)]
    fn reply_table(text: &str, marker: char, length: usize) {
        let command = Command::new(text).unwrap();
        assert_eq!(marker, command.reply_marker());
        assert_eq!(length, command.reply_length());
        assert_eq!(text, command.text());
    }

    #[test]
    fn constructors_match_table() {
        assert_eq!(Command::new("V").unwrap(), Command::version());
        assert_eq!(Command::new("S").unwrap(), Command::status());
        assert_eq!(Command::new("X").unwrap(), Command::leds_off());
        assert_eq!(Command::new("L50C4").unwrap(), Command::leds("50C4").unwrap());
    }

    #[test]
    fn unknown_letter_rejected() {
        let error = Command::new("Z").unwrap_err();
        assert!(matches!(error, CommandError::UnknownCommand { letter: 'Z' }));
    }

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(Command::new("").unwrap_err(), CommandError::Empty));
    }

    #[test]
    fn non_ascii_rejected() {
        let error = Command::new("L♟").unwrap_err();
        assert!(matches!(error, CommandError::NonAscii { character: '♟' }));
    }
}
