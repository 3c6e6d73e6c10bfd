//! Letter to dot/dash lookup

/// International Morse patterns for `A`..=`Z`, indexed by `letter - 'A'`
pub const CODE_TABLE: [&str; 26] = [
    ".-",   // A
    "-...", // B
    "-.-.", // C
    "-..",  // D
    ".",    // E
    "..-.", // F
    "--.",  // G
    "....", // H
    "..",   // I
    ".---", // J
    "-.-",  // K
    ".-..", // L
    "--",   // M
    "-.",   // N
    "---",  // O
    ".--.", // P
    "--.-", // Q
    ".-.",  // R
    "...",  // S
    "-",    // T
    "..-",  // U
    "...-", // V
    ".--",  // W
    "-..-", // X
    "-.--", // Y
    "--..", // Z
];

/// Pattern for an uppercase ASCII letter
///
/// Lowercase letters return `None`; callers uppercase first.
pub fn pattern(letter: char) -> Option<&'static str> {
    if letter.is_ascii_uppercase() {
        CODE_TABLE.get(letter as usize - 'A' as usize).copied()
    } else {
        None
    }
}
