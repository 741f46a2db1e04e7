use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::display_width;

use super::keymap::TextEdit;

/// Single-line editable buffer. `caret` is a byte offset that always sits on
/// a grapheme boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    caret: usize,
    char_limit: usize,
}

impl TextInput {
    /// Buffer holding `value` with the caret at the end
    pub fn new(value: &str, char_limit: usize) -> Self {
        let value: String = value.chars().take(char_limit).collect();
        let caret = value.len();
        TextInput {
            value,
            caret,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position in terminal cells
    pub fn caret_col(&self) -> usize {
        display_width(&self.value[..self.caret])
    }

    /// Apply an edit. Returns true if the text changed.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => self.insert(c),
            TextEdit::Backspace => match prev_boundary(&self.value, self.caret) {
                Some(start) => self.delete_range(start, self.caret),
                None => false,
            },
            TextEdit::DeleteForward => match next_boundary(&self.value, self.caret) {
                Some(end) => self.delete_range(self.caret, end),
                None => false,
            },
            TextEdit::DeleteWordBack => {
                let start = word_left(&self.value, self.caret);
                self.delete_range(start, self.caret)
            }
            TextEdit::CaretLeft => {
                if let Some(pos) = prev_boundary(&self.value, self.caret) {
                    self.caret = pos;
                }
                false
            }
            TextEdit::CaretRight => {
                if let Some(pos) = next_boundary(&self.value, self.caret) {
                    self.caret = pos;
                }
                false
            }
            TextEdit::WordLeft => {
                self.caret = word_left(&self.value, self.caret);
                false
            }
            TextEdit::WordRight => {
                self.caret = word_right(&self.value, self.caret);
                false
            }
            TextEdit::Home => {
                self.caret = 0;
                false
            }
            TextEdit::End => {
                self.caret = self.value.len();
                false
            }
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.value.chars().count() >= self.char_limit {
            return false;
        }
        self.value.insert(self.caret, c);
        self.caret += c.len_utf8();
        // a combining mark may have merged into the previous grapheme
        self.caret = snap_to_boundary(&self.value, self.caret);
        true
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        self.value.drain(start..end);
        self.caret = start;
        true
    }
}

fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let step = s[offset..].graphemes(true).next().map_or(0, str::len);
    Some(offset + step)
}

fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset].grapheme_indices(true).next_back().map(|(i, _)| i)
}

fn snap_to_boundary(s: &str, offset: usize) -> usize {
    s.grapheme_indices(true)
        .map(|(i, g)| i + g.len())
        .find(|&end| end >= offset)
        .unwrap_or(s.len())
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `offset`, skipping blanks first
fn word_left(s: &str, offset: usize) -> usize {
    let mut pos = offset;
    let mut seen_word = false;
    for (i, g) in s[..offset].grapheme_indices(true).rev() {
        if is_blank(g) {
            if seen_word {
                break;
            }
        } else {
            seen_word = true;
        }
        pos = i;
    }
    pos
}

/// Start of the next word right of `offset`
fn word_right(s: &str, offset: usize) -> usize {
    let mut left_word = false;
    for (i, g) in s[offset..].grapheme_indices(true) {
        if is_blank(g) {
            left_word = true;
        } else if left_word {
            return offset + i;
        }
    }
    s.len()
}
