//! Core data types for the Morse beacon

/// Character used for a dot in an encoded message
pub const DOT: char = '.';
/// Character used for a dash in an encoded message
pub const DASH: char = '-';
/// Separator appended after every printable input character
pub const GAP: char = ' ';

/// Morse signalling symbols
///
/// The gap between the dots and dashes of one letter has no token of its
/// own; it comes from the rest that follows every symbol.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short light pulse
    Dot,
    /// Long light pulse
    Dash,
    /// Dark pause after each encoded character
    Gap,
}

impl Symbol {
    /// Parse an encoded character, `None` for anything outside `.- `
    pub const fn from_char(c: char) -> Option<Symbol> {
        match c {
            DOT => Some(Symbol::Dot),
            DASH => Some(Symbol::Dash),
            GAP => Some(Symbol::Gap),
            _ => None,
        }
    }
}
