//! Selection state machine for the single-file upload widget.
//!
//! [`Selection`] owns the only mutable state of the widget. It is driven
//! by two operations, [`Selection::handle_candidate_files`] and
//! [`Selection::remove_file`], and queried by [`Selection::submit`] and
//! the view model in [`crate::view`].
//!
//! Platform access is injected through two traits so the machine runs
//! headless in tests:
//!
//! - [`PreviewStore`] allocates and revokes preview references
//!   (object URLs in the browser).
//! - [`InputControl`] clears the retained value of the file input.
//!
//! A [`PreviewSource`] cannot be cloned and [`PreviewStore::revoke`]
//! takes it by value, so every allocated preview is released exactly
//! once: when superseded, when removed, or when the machine is dropped.

use std::mem;

use crate::constraints::Constraints;
use crate::document::DocumentType;
use crate::validate::{CandidateFile, Rejection, validate};

/// Notice shown when submitting without a selected file.
pub const NO_SELECTION_NOTICE: &str = "Please select a document for upload.";

/// Notice shown after a successful submission.
pub const SUBMITTED_NOTICE: &str = "Documents submitted successfully!";

/// A revocable reference to a selected file's bytes, e.g. an object URL.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewSource(String);

impl PreviewSource {
    /// Wrap a platform reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as a string, suitable for an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the source and return the raw reference.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// How a selected file is previewed.
#[derive(Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Inline thumbnail backed by a revocable reference.
    Image(PreviewSource),
    /// Static placeholder glyph; no bytes are referenced.
    Generic,
}

/// The widget's current selection.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No file selected and no error.
    #[default]
    Empty,
    /// A file passed validation.
    Selected {
        /// Name of the selected file.
        file_name: String,
        /// Preview of the selected file.
        preview: PreviewKind,
    },
    /// The last attempted selection failed validation.
    Rejected {
        /// Why the file was rejected.
        reason: Rejection,
    },
}

/// Errors from allocating a preview reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// The platform did not supply the file's bytes.
    #[error("file contents unavailable for preview")]
    Unavailable,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Browser(String),
}

/// Allocates and releases preview references.
pub trait PreviewStore {
    /// Platform handle used to reach the file's bytes.
    type Source;

    /// Allocate a preview reference for an accepted image file.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError`] if the reference cannot be created.
    fn create(
        &mut self,
        file: &CandidateFile,
        source: &Self::Source,
    ) -> Result<PreviewSource, PreviewError>;

    /// Release a reference previously returned by [`Self::create`].
    fn revoke(&mut self, preview: PreviewSource);
}

/// Handle to the file input control owned by the widget.
pub trait InputControl {
    /// Clear the control's retained value so picking the same file again
    /// is reported as a change.
    fn clear(&mut self);
}

/// A file offered to the widget together with its platform source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<S> {
    /// Metadata used for validation.
    pub file: CandidateFile,
    /// Platform handle passed to [`PreviewStore::create`].
    pub source: S,
}

impl<S> Candidate<S> {
    /// Pair metadata with its source.
    #[must_use]
    pub const fn new(file: CandidateFile, source: S) -> Self {
        Self { file, source }
    }
}

/// Marks one selection attempt, issued by [`Selection::begin`].
///
/// Only the most recent ticket may change the state. Holding a ticket
/// across an await lets a slower, older attempt be discarded once a newer
/// selection or removal has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result of [`Selection::handle_candidate_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file list was empty; nothing changed.
    Unchanged,
    /// A newer attempt or a removal superseded this one; nothing changed.
    Stale,
    /// The first file was accepted and is now selected.
    Selected {
        /// Set when an image preview could not be allocated and the
        /// generic glyph is used instead.
        preview_error: Option<PreviewError>,
    },
    /// The first file was rejected.
    Rejected(Rejection),
}

/// Error returned by [`Selection::submit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// No file is currently selected.
    #[error("Please select a document for upload.")]
    NoSelection,
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Name of the submitted file.
    pub file_name: String,
    /// Document type chosen in the dropdown.
    pub document_type: DocumentType,
}

impl Submission {
    /// Notice shown to the user after submitting.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        SUBMITTED_NOTICE
    }
}

/// Single-file selection state machine.
pub struct Selection<P: PreviewStore, I: InputControl> {
    constraints: Constraints,
    state: SelectionState,
    previews: P,
    input: I,
    latest: u64,
}

impl<P: PreviewStore, I: InputControl> Selection<P, I> {
    /// Create an empty selection.
    pub fn new(constraints: Constraints, previews: P, input: I) -> Self {
        Self {
            constraints,
            state: SelectionState::Empty,
            previews,
            input,
            latest: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Constraints applied to candidate files.
    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Name of the selected file, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Selected { file_name, .. } => Some(file_name.as_str()),
            SelectionState::Empty | SelectionState::Rejected { .. } => None,
        }
    }

    /// Start a selection attempt, superseding any outstanding ticket.
    pub const fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent attempt.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Validate and select the first of `files` as a fresh attempt.
    ///
    /// Shorthand for [`Self::begin`] followed by [`Self::complete`], for
    /// callers that do not await between the two.
    pub fn handle_candidate_files<C>(&mut self, files: C) -> Outcome
    where
        C: IntoIterator<Item = Candidate<P::Source>>,
    {
        let ticket = self.begin();
        self.complete(ticket, files)
    }

    /// Validate and select the first of `files` for the attempt `ticket`.
    ///
    /// A stale ticket leaves the state untouched. So does an empty list.
    /// Any entries after the first are ignored. On acceptance the previous
    /// preview is released before a new one is allocated; on rejection the
    /// previous selection is released and replaced by the rejection reason.
    pub fn complete<C>(&mut self, ticket: Ticket, files: C) -> Outcome
    where
        C: IntoIterator<Item = Candidate<P::Source>>,
    {
        if !self.is_current(ticket) {
            return Outcome::Stale;
        }
        let Some(candidate) = files.into_iter().next() else {
            return Outcome::Unchanged;
        };

        if let Err(reason) = validate(&candidate.file, &self.constraints) {
            self.set_state(SelectionState::Rejected {
                reason: reason.clone(),
            });
            return Outcome::Rejected(reason);
        }

        self.set_state(SelectionState::Empty);

        let mut preview_error = None;
        let preview = if candidate.file.is_image() {
            match self.previews.create(&candidate.file, &candidate.source) {
                Ok(source) => PreviewKind::Image(source),
                Err(e) => {
                    preview_error = Some(e);
                    PreviewKind::Generic
                }
            }
        } else {
            PreviewKind::Generic
        };

        self.set_state(SelectionState::Selected {
            file_name: candidate.file.name,
            preview,
        });
        Outcome::Selected { preview_error }
    }

    /// Drop the current selection or error and clear the input control.
    ///
    /// Calling this on an empty selection is a no-op apart from clearing
    /// the input again. Any attempt still in flight becomes stale.
    pub fn remove_file(&mut self) {
        self.begin();
        self.set_state(SelectionState::Empty);
        self.input.clear();
    }

    /// Check that a file is selected and build the submission.
    ///
    /// Does not change the state.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NoSelection`] unless a file is selected.
    pub fn submit(&self, document_type: DocumentType) -> Result<Submission, SubmitError> {
        self.file_name()
            .map(|name| Submission {
                file_name: name.to_owned(),
                document_type,
            })
            .ok_or(SubmitError::NoSelection)
    }

    /// Release any held preview and return to [`SelectionState::Empty`].
    ///
    /// Used when the widget unmounts; dropping the machine has the same
    /// effect, and doing both releases the preview only once.
    pub fn teardown(&mut self) {
        self.set_state(SelectionState::Empty);
    }

    /// Replace the state, revoking the outgoing image preview.
    fn set_state(&mut self, next: SelectionState) {
        let previous = mem::replace(&mut self.state, next);
        if let SelectionState::Selected {
            preview: PreviewKind::Image(source),
            ..
        } = previous
        {
            self.previews.revoke(source);
        }
    }
}

impl<P: PreviewStore, I: InputControl> Drop for Selection<P, I> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<P: PreviewStore, I: InputControl> std::fmt::Debug for Selection<P, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("constraints", &self.constraints)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
