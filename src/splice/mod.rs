//! Cursor-accurate text insertion for prompt editors.
//!
//! The engine is split in two:
//!
//! - [`splice`]: the pure buffer transformation (insert at the caret or
//!   replace the selected span) plus the caret position after it.
//! - [`insert_at_selection`] + [`CaretScheduler`]: the host-facing seam.
//!   The new value is handed to the host's commit callback, and restoring
//!   the caret is queued until the host reports that the committed value
//!   has been rendered into the control.
//!
//! All indices are character offsets, matching how text controls report
//! selections, never byte offsets.

mod buffer;
mod engine;


pub use buffer::TextBuffer;
pub use engine::{CaretScheduler, Splice, TextInput, insert_at_selection, splice};
