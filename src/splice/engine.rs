//! Splice computation and deferred caret restoration.

use tracing::debug;

/// Result of splicing a literal into a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// The buffer after insertion.
    pub text: String,
    /// Caret position (in characters) just past the inserted literal.
    pub caret: usize,
}

/// Replace `buffer[start..end]` (character offsets) with `literal`.
///
/// When `start == end` this is a pure insertion at the caret. The caret
/// afterwards is `start + literal.chars().count()`.
///
/// Callers must pass `start <= end <= buffer.chars().count()`; a selection
/// outside the buffer is a caller bug.
pub fn splice(buffer: &str, start: usize, end: usize, literal: &str) -> Splice {
    debug_assert!(start <= end, "selection start {} after end {}", start, end);
    debug_assert!(
        end <= buffer.chars().count(),
        "selection end {} past buffer length",
        end
    );

    let head = byte_offset(buffer, start);
    let tail = byte_offset(buffer, end);

    let mut text = String::with_capacity(buffer.len() - (tail - head) + literal.len());
    text.push_str(&buffer[..head]);
    text.push_str(literal);
    text.push_str(&buffer[tail..]);

    Splice {
        text,
        caret: start + literal.chars().count(),
    }
}

/// Byte offset of the character at `index`, or the buffer length at the end.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(b, _)| b)
}

/// A text control that can receive inserted literals.
pub trait TextInput {
    /// The value currently displayed by the control.
    fn value(&self) -> &str;

    /// Current selection as `(start, end)` character offsets.
    fn selection(&self) -> (usize, usize);

    /// Move the selection (a collapsed selection is a caret).
    fn set_selection(&mut self, start: usize, end: usize);

    /// Give the control input focus.
    fn focus(&mut self);
}

/// Holds a caret restoration until the host has rendered the new value.
///
/// The host calls [`CaretScheduler::after_commit`] once the committed value
/// is displayed. Only the most recent request is kept.
#[derive(Debug, Default)]
pub struct CaretScheduler {
    pending: Option<usize>,
}

impl CaretScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a caret restoration for the next commit.
    pub fn schedule(&mut self, caret: usize) {
        self.pending = Some(caret);
    }

    /// Caret position waiting for the next commit, if any.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Run the queued restoration against the re-rendered control.
    ///
    /// Returns the caret that was restored.
    pub fn after_commit(&mut self, target: &mut dyn TextInput) -> Option<usize> {
        let caret = self.pending.take()?;
        target.set_selection(caret, caret);
        target.focus();
        debug!(caret, "restored caret after commit");
        Some(caret)
    }
}

/// Insert `literal` over the target's current selection.
///
/// The spliced value is passed to `commit` and the caret restoration is
/// queued on `scheduler`. With no target this does nothing: `commit` is not
/// called and `None` is returned.
pub fn insert_at_selection<F>(
    target: Option<&dyn TextInput>,
    literal: &str,
    scheduler: &mut CaretScheduler,
    commit: F,
) -> Option<usize>
where
    F: FnOnce(String),
{
    let target = target?;
    let (start, end) = target.selection();
    let Splice { text, caret } = splice(target.value(), start, end, literal);

    commit(text);
    scheduler.schedule(caret);
    Some(caret)
}
