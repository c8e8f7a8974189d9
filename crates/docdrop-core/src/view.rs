//! Pure mapping from [`SelectionState`] to what the widget displays.

use crate::selection::{PreviewKind, SelectionState};

/// Prompt shown in the drop zone when nothing is selected.
pub const DROP_PROMPT: &str = "Drag and drop a file here or click to select a file";

/// Thumbnail shown next to a selected file's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail<'a> {
    /// Inline image loaded from the given reference.
    Image(&'a str),
    /// Placeholder document glyph.
    Glyph,
}

/// The single view the widget shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Empty drop zone prompt.
    Prompt,
    /// File-info row with a remove control.
    FileInfo {
        /// Name of the selected file.
        file_name: &'a str,
        /// Thumbnail beside the name.
        thumbnail: Thumbnail<'a>,
    },
    /// Error text for the last rejected file.
    Error {
        /// User-facing rejection message.
        message: String,
    },
}

/// Map a selection state to its view.
#[must_use]
pub fn render(state: &SelectionState) -> View<'_> {
    match state {
        SelectionState::Empty => View::Prompt,
        SelectionState::Selected { file_name, preview } => View::FileInfo {
            file_name,
            thumbnail: match preview {
                PreviewKind::Image(source) => Thumbnail::Image(source.as_str()),
                PreviewKind::Generic => Thumbnail::Glyph,
            },
        },
        SelectionState::Rejected { reason } => View::Error {
            message: reason.to_string(),
        },
    }
}
