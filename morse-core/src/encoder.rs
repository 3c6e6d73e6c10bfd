//! Text to Morse encoding

use core::fmt;
use core::str::Chars;
use heapless::String;

use crate::code_table;
use crate::types::GAP;

/// Errors from fixed-capacity encoding
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer too small for the encoded message
    CapacityExceeded { required: usize, capacity: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::CapacityExceeded { required, capacity } => write!(
                f,
                "encoded message needs {} bytes, buffer holds {}",
                required, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Streaming encoder yielding the encoded characters of a message
///
/// Each letter yields its pattern; every character at or above `' '`
/// (letters, spaces, punctuation, digits) is followed by one `' '`.
/// Control characters yield nothing.
#[derive(Clone, Debug)]
pub struct Encoder<'a> {
    message: Chars<'a>,
    pattern: Chars<'static>,
    separator: bool,
}

impl<'a> Encoder<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message: message.chars(),
            pattern: "".chars(),
            separator: false,
        }
    }
}

impl Iterator for Encoder<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.pattern.next() {
                return Some(c);
            }
            if self.separator {
                self.separator = false;
                return Some(GAP);
            }

            let c = self.message.next()?.to_ascii_uppercase();
            self.pattern = code_table::pattern(c).unwrap_or("").chars();
            self.separator = c >= ' ';
        }
    }
}

impl core::iter::FusedIterator for Encoder<'_> {}

/// Exact length of the encoded form of `message`
pub fn encoded_len(message: &str) -> usize {
    Encoder::new(message).count()
}

/// Encode `message` into any `fmt::Write` sink
pub fn encode_into<W: fmt::Write>(message: &str, out: &mut W) -> fmt::Result {
    for c in Encoder::new(message) {
        out.write_char(c)?;
    }
    Ok(())
}

/// Encode `message` into a fixed-capacity string
///
/// Fails without writing anything if the result does not fit in `N` bytes.
pub fn encode<const N: usize>(message: &str) -> Result<String<N>, EncodeError> {
    let required = encoded_len(message);
    let overflow = EncodeError::CapacityExceeded {
        required,
        capacity: N,
    };
    if required > N {
        return Err(overflow);
    }

    let mut encoded = String::new();
    for c in Encoder::new(message) {
        encoded.push(c).map_err(|_| overflow)?;
    }
    Ok(encoded)
}

/// Encode `message` into a growable string
#[cfg(feature = "std")]
pub fn encode_to_string(message: &str) -> std::string::String {
    Encoder::new(message).collect()
}
