//! Fixed mapping between the supported alphabet and small integer codes.
//!
//! Codes are kept small on purpose, so that the red channel of a carrier pixel
//! only moves by a few steps. The value `0` never is a valid code, it stands for
//! "no character" and is therefore modelled as `None`.

use std::num::NonZeroU8;

/// All supported characters, the position in this list plus one is the code.
const ALPHABET: [char; 35] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', ' ', '.', ',', '!', '"', '\'', '?', '\n', '\t',
];

/// A code of a single character, always within `1..=35`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Code(NonZeroU8);

impl Code {
    /// the raw value that is added to a red channel
    pub fn value(self) -> u8 {
        self.0.get()
    }
}

impl From<Code> for u8 {
    fn from(code: Code) -> Self {
        code.value()
    }
}

/// Bidirectional lookup between characters and codes.
///
/// ```rust
/// use stegano_delta_core::CodeTable;
///
/// let code = CodeTable::code_of('h').expect("h is part of the alphabet");
/// assert_eq!(code.value(), 8);
/// assert_eq!(CodeTable::char_of(8), Some('h'));
/// assert_eq!(CodeTable::code_of('#'), None);
/// assert_eq!(CodeTable::char_of(0), None);
/// ```
pub struct CodeTable;

impl CodeTable {
    pub const ALPHABET: &'static [char] = &ALPHABET;

    /// number of supported characters
    pub const fn len() -> usize {
        ALPHABET.len()
    }

    /// Returns the code of a lowercase character, `None` if it is not supported.
    /// Uppercase letters are not folded here, that happens on the whole message.
    pub fn code_of(c: char) -> Option<Code> {
        let code = match c {
            'a'..='z' => c as u8 - b'a' + 1,
            ' ' => 27,
            '.' => 28,
            ',' => 29,
            '!' => 30,
            '"' => 31,
            '\'' => 32,
            '?' => 33,
            '\n' => 34,
            '\t' => 35,
            _ => return None,
        };

        NonZeroU8::new(code).map(Code)
    }

    /// Returns the character for a code, `None` for `0` and for anything above `35`.
    pub fn char_of(code: u8) -> Option<char> {
        let idx = (code as usize).checked_sub(1)?;
        ALPHABET.get(idx).copied()
    }
}
