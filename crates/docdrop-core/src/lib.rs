//! docdrop-core: Validation and selection state for a single-file
//! document upload widget (sans-IO).
//!
//! A candidate file flows through:
//! validate -> selection state machine -> view model.
//!
//! This crate has **no browser dependencies**. Preview allocation and
//! input-control access are injected through the [`PreviewStore`] and
//! [`InputControl`] traits; the browser implementations live in
//! `docdrop-io`.

pub mod constraints;
pub mod document;
pub mod selection;
pub mod validate;
pub mod view;

pub use constraints::{Constraints, ConstraintsError};
pub use document::DocumentType;
pub use selection::{
    Candidate, InputControl, Outcome, PreviewError, PreviewKind, PreviewSource, PreviewStore,
    Selection, SelectionState, SubmitError, Submission, Ticket,
};
pub use validate::{CandidateFile, Rejection, validate};
pub use view::{Thumbnail, View, render};
