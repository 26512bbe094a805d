use log::debug;

use crate::code_table::{Code, CodeTable};

/// A text message, prepared for hiding.
///
/// Every character of the lowercased text occupies one slot, characters outside
/// of the alphabet keep their slot but carry no code.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    codes: Vec<Option<Code>>,
}

impl Message {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new message from the given text, case folded to lowercase.
    pub fn from_text(text: &str) -> Self {
        let message = Self {
            codes: text.to_lowercase().chars().map(CodeTable::code_of).collect(),
        };
        let unmapped = message.unmapped_count();
        if unmapped > 0 {
            debug!("{unmapped} of {} characters are not part of the alphabet", message.len());
        }

        message
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[Option<Code>] {
        &self.codes
    }

    /// the code at the given linear index, `None` if unmapped or out of bounds
    pub fn code_at(&self, k: usize) -> Option<Code> {
        self.codes.get(k).copied().flatten()
    }

    pub fn unmapped_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_none()).count()
    }

    /// Renders the message back to text, unmapped characters are dropped.
    pub fn to_text(&self) -> String {
        self.codes
            .iter()
            .flatten()
            .filter_map(|c| CodeTable::char_of(c.value()))
            .collect()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
