//! Dioxus UI components for docdrop.
//!
//! Provides the single-file upload widget with its drop zone, the
//! file-info row shown for a selected file, and the document-type
//! dropdown.

mod document_type;
mod file_info;
mod upload;

pub use document_type::DocumentTypeSelect;
pub use file_info::FileInfoRow;
pub use upload::DocumentUpload;
