//! docdrop-io: Browser I/O and Dioxus component library.
//!
//! Handles object-URL previews, the file input handle, blocking notices,
//! and analytics events, and provides the upload widget component for
//! the docdrop web application.

pub mod analytics;
pub mod components;
pub mod input;
pub mod notice;
pub mod preview;

pub use components::{DocumentTypeSelect, DocumentUpload, FileInfoRow};
pub use input::FileInputHandle;
pub use preview::BlobPreviewStore;
