//! In-memory text control used outside an interactive editor.

use super::engine::TextInput;

/// A plain text value with a selection and a focus flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    selection: (usize, usize),
    focused: bool,
}

impl TextBuffer {
    /// A buffer with the caret at the end of `value`.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.chars().count();
        Self {
            value,
            selection: (end, end),
            focused: false,
        }
    }

    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.selection = (start, end);
        self
    }

    /// Replace the displayed value, as a host re-render would.
    ///
    /// The selection is clamped to the new length.
    pub fn render(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let len = self.value.chars().count();
        self.selection = (self.selection.0.min(len), self.selection.1.min(len));
    }

    pub fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl TextInput for TextBuffer {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = (start, end);
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
