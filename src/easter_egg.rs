//! Keyboard sequence detector for the hidden page.

/// ↑ ↑ ↓ ↓ ← → ← → m a x
pub const MAX_CODE: [&str; 11] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "m",
    "a",
    "x",
];

/// Tracks progress through a fixed key sequence.
#[derive(Debug, Clone)]
pub struct KeySequence {
    keys: &'static [&'static str],
    matched: usize,
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::new(&MAX_CODE)
    }
}

impl KeySequence {
    pub fn new(keys: &'static [&'static str]) -> Self {
        Self { keys, matched: 0 }
    }

    pub fn progress(&self) -> usize {
        self.matched
    }

    /// Feed one `KeyboardEvent.key`. Returns true when the sequence completes.
    ///
    /// A wrong key drops all progress, even if it would start the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        if self.keys[self.matched] == key {
            self.matched += 1;
            if self.matched == self.keys.len() {
                self.matched = 0;
                return true;
            }
        } else {
            self.matched = 0;
        }
        false
    }
}
