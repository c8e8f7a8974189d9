//! Single-file document upload widget with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use docdrop_core::view::DROP_PROMPT;
use docdrop_core::{
    Candidate, CandidateFile, Constraints, DocumentType, Outcome, Selection, Thumbnail, View,
    render, validate,
};

use super::{DocumentTypeSelect, FileInfoRow};
use crate::analytics;
use crate::input::FileInputHandle;
use crate::notice;
use crate::preview::BlobPreviewStore;

/// Selection state machine wired to the browser collaborators.
type BrowserSelection = Selection<BlobPreviewStore, FileInputHandle>;

/// Props for the [`DocumentUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DocumentUploadProps {
    /// Size and format limits; defaults to 4.5 MB PDF/JPEG/PNG.
    #[props(default)]
    constraints: Constraints,
}

/// Document-type dropdown, drop zone, and submit button.
///
/// A file chosen with the picker or dropped on the zone is validated and,
/// if accepted, shown as a file-info row; otherwise the rejection reason
/// is shown under the zone. Only the first file of a multi-file drop is
/// considered. Image previews are revoked when replaced, removed, or when
/// the component unmounts.
#[component]
pub fn DocumentUpload(props: DocumentUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut document_type = use_signal(DocumentType::default);
    let input_element = use_signal(|| None);
    let mut input = FileInputHandle::new(input_element);
    let mut selection: Signal<BrowserSelection> = use_signal(move || {
        Selection::new(props.constraints.clone(), BlobPreviewStore, input)
    });

    use_drop(move || {
        selection.write().teardown();
    });

    // Read and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths. Bytes are read only for images that already
    // pass validation, since nothing else needs them. The ticket is taken
    // before any await so a slow read cannot overwrite a newer selection.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let ticket = selection.write().begin();
        let meta = CandidateFile::new(
            file.name(),
            file.size(),
            file.content_type().unwrap_or_default(),
        );
        debug!(
            name = %meta.name,
            size = meta.size_bytes,
            mime = %meta.mime_type,
            extra = files.len() - 1,
            "candidate file"
        );

        let wants_bytes =
            meta.is_image() && validate(&meta, selection.peek().constraints()).is_ok();
        let source = if wants_bytes {
            match file.read_bytes().await {
                Ok(bytes) => Some(bytes.to_vec()),
                Err(e) => {
                    warn!("failed to read {} for preview: {e}", meta.name);
                    None
                }
            }
        } else {
            None
        };

        let outcome = selection
            .write()
            .complete(ticket, [Candidate::new(meta, source)]);
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Stale => debug!("discarding superseded selection"),
            Outcome::Selected { preview_error } => {
                if let Some(e) = preview_error {
                    warn!("showing generic preview: {e}");
                }
                analytics::track_selection(true);
            }
            Outcome::Rejected(reason) => {
                info!("file rejected: {reason}");
                analytics::track_selection(false);
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let on_remove = move |()| {
        selection.write().remove_file();
    };

    let on_submit = move |_| {
        let result = selection.peek().submit(document_type());
        let message = match result {
            Ok(submission) => {
                info!(
                    file = %submission.file_name,
                    document_type = %submission.document_type,
                    "documents submitted"
                );
                analytics::track_submission(submission.document_type);
                submission.notice().to_owned()
            }
            Err(e) => e.to_string(),
        };
        if let Err(e) = notice::show(&message) {
            warn!("failed to show notice {message:?}: {e}");
        }
    };

    let accept = selection.peek().constraints().accept_attribute();

    // Materialize the view so no borrow of the signal outlives this block.
    let (file_row, error) = {
        let sel = selection.read();
        match render(sel.state()) {
            View::Prompt => (None, None),
            View::FileInfo {
                file_name,
                thumbnail,
            } => {
                let url = match thumbnail {
                    Thumbnail::Image(url) => Some(url.to_owned()),
                    Thumbnail::Glyph => None,
                };
                (Some((file_name.to_owned(), url)), None)
            }
            View::Error { message } => (None, Some(message)),
        }
    };

    let border_class = if dragging() {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };

    rsx! {
        DocumentTypeSelect {
            selected: document_type(),
            on_change: move |t| document_type.set(t),
        }

        input {
            r#type: "file",
            accept: "{accept}",
            class: "hidden",
            onmounted: move |evt| input.attach_mounted(&evt),
            onchange: handle_files,
        }

        div {
            class: "relative border-2 border-dashed rounded-lg p-5 mb-2 text-center cursor-pointer transition-colors {border_class}",
            role: "button",
            aria_label: "Choose a document to upload",
            ondragover: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(false);
            },
            ondrop: handle_drop,
            onclick: move |_| input.open_picker(),

            if let Some((file_name, thumbnail_url)) = file_row {
                FileInfoRow {
                    file_name: file_name,
                    thumbnail_url: thumbnail_url,
                    on_remove: on_remove,
                }
            } else {
                span { class: "inline-block text-[var(--muted)] mb-1",
                    Icon { icon: LdUpload, width: 24, height: 24 }
                }
                p { class: "text-[var(--text-secondary)]", "{DROP_PROMPT}" }
            }
        }

        if let Some(ref message) = error {
            p { class: "text-[var(--text-error)] mt-2", "{message}" }
        }

        button {
            r#type: "button",
            class: "mt-4 px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded cursor-pointer text-white font-medium transition-colors",
            onclick: on_submit,
            "Submit"
        }
    }
}
