//! Image previews backed by Blob object URLs.
//!
//! The bytes of an accepted image are wrapped in a `Blob` tagged with the
//! file's MIME type and exposed through `URL.createObjectURL`. The URL
//! stays alive until the selection state machine hands it back to
//! [`BlobPreviewStore::revoke`].
//!
//! All browser calls require a `wasm32-unknown-unknown` target.

use docdrop_core::{CandidateFile, PreviewError, PreviewSource, PreviewStore};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// [`PreviewStore`] that allocates Blob object URLs.
///
/// The source is the file's bytes, or `None` when they were not read
/// (non-image files, or a failed read).
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobPreviewStore;

impl PreviewStore for BlobPreviewStore {
    type Source = Option<Vec<u8>>;

    fn create(
        &mut self,
        file: &CandidateFile,
        source: &Self::Source,
    ) -> Result<PreviewSource, PreviewError> {
        let bytes = source.as_deref().ok_or(PreviewError::Unavailable)?;
        let url = bytes_to_blob_url(bytes, &file.mime_type).map_err(browser_error)?;
        Ok(PreviewSource::new(url))
    }

    fn revoke(&mut self, preview: PreviewSource) {
        revoke_blob_url(preview.as_str());
    }
}

/// Wrap `bytes` in a Blob of type `mime_type` and return its object URL.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, JsValue> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    web_sys::Url::create_object_url_with_blob(&blob)
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

fn browser_error(value: JsValue) -> PreviewError {
    PreviewError::Browser(format!("{value:?}"))
}
