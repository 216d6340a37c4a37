//! Bounded guess input line.

use arrayvec::ArrayString;

use crate::types::MAX_GUESS_LEN;

/// Text typed so far. Characters past the capacity are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLine {
    buf: ArrayString<MAX_GUESS_LEN>,
}

impl GuessLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the character did not fit.
    pub fn insert(&mut self, ch: char) -> bool {
        self.buf.try_push(ch).is_ok()
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.buf.pop()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_and_clears() {
        let mut line = GuessLine::new();
        for c in "Neo".chars() {
            assert!(line.insert(c));
        }
        assert_eq!(line.as_str(), "Neo");
        assert_eq!(line.backspace(), Some('o'));
        assert_eq!(line.as_str(), "Ne");
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.backspace(), None);
    }

    #[test]
    fn drops_input_past_capacity() {
        let mut line = GuessLine::new();
        for _ in 0..MAX_GUESS_LEN {
            assert!(line.insert('a'));
        }
        assert!(!line.insert('b'));
        assert_eq!(line.len(), MAX_GUESS_LEN);
    }
}
