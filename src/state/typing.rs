//! Typing effect: reveals a target string one character per tick.
//!
//! The engine is clock-free; the widget drives [`TypingEffect::tick`] from a
//! `util::ticker::Ticker` and drops the ticker once the reveal completes.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Progressive reveal of a target string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingEffect {
    target: String,
    /// Byte offset of the revealed prefix, always on a char boundary.
    revealed: usize,
}

impl TypingEffect {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into(), revealed: 0 }
    }

    /// Reset to an empty prefix of a new target.
    pub fn restart(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.revealed = 0;
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.target[..self.revealed]
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.target.len()
    }

    /// Reveal one more character. Returns `false` once nothing is left.
    pub fn tick(&mut self) -> bool {
        match self.target[self.revealed..].chars().next() {
            Some(ch) => {
                self.revealed += ch.len_utf8();
                true
            }
            None => false,
        }
    }
}
