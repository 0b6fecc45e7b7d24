//! Timed character-by-character text reveal for the hero tagline.
//!
//! The reveal is a pure function of elapsed time: the caller supplies a
//! clock (frame time), which keeps the effect deterministic and
//! testable.

/// Reveals a fixed text one character per `char_interval` seconds.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_interval: f64,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, char_interval: f64) -> Self {
        Self {
            text: text.into(),
            char_interval,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The prefix visible after `elapsed` seconds, cut on a character
    /// boundary.
    pub fn visible(&self, elapsed: f64) -> &str {
        if self.char_interval <= 0.0 {
            return &self.text;
        }
        if elapsed <= 0.0 {
            return "";
        }
        let shown = (elapsed / self.char_interval) as usize;
        match self.text.char_indices().nth(shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self, elapsed: f64) -> bool {
        self.visible(elapsed).len() == self.text.len()
    }
}
