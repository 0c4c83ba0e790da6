use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerState {
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedBox {
    Timer,
    StartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerSize {
    #[default]
    Normal,
    Large,
}

/// Single-line editable text. `cursor` is a byte offset that always sits on
/// a char boundary of `value`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text with the cursor placed after the last character.
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_owned(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(width) = self.width_before() {
            self.cursor -= width;
            self.value.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.width_after().is_some() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor -= self.width_before().unwrap_or(0);
    }

    pub fn move_right(&mut self) {
        self.cursor += self.width_after().unwrap_or(0);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn width_before(&self) -> Option<usize> {
        self.value[..self.cursor].chars().next_back().map(char::len_utf8)
    }

    fn width_after(&self) -> Option<usize> {
        self.value[self.cursor..].chars().next().map(char::len_utf8)
    }
}
