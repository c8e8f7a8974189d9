//! Row describing the selected file, with a remove control.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdX};

/// Props for the [`FileInfoRow`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileInfoRowProps {
    /// Name of the selected file.
    file_name: String,
    /// Object URL of an image thumbnail; `None` shows a document glyph.
    thumbnail_url: Option<String>,
    /// Called when the remove control is clicked.
    on_remove: EventHandler<()>,
}

/// Thumbnail or glyph, file name, and a "Delete" control.
///
/// Clicks on the remove control do not propagate, so they never reopen
/// the file picker of the surrounding drop zone.
#[component]
pub fn FileInfoRow(props: FileInfoRowProps) -> Element {
    let on_remove = props.on_remove;

    rsx! {
        div {
            class: "mt-2 flex items-center justify-between border border-[var(--border)] rounded p-2 bg-[var(--surface-muted)]",
            div { class: "flex items-center gap-2 min-w-0",
                if let Some(ref url) = props.thumbnail_url {
                    img {
                        src: "{url}",
                        alt: "File Preview",
                        class: "max-w-[100px] max-h-[100px] rounded object-contain",
                    }
                } else {
                    span { class: "text-[var(--text-secondary)]",
                        Icon { icon: LdFileText, width: 32, height: 32 }
                    }
                }
                span { class: "truncate", "{props.file_name}" }
            }
            button {
                r#type: "button",
                class: "flex items-center gap-1 ml-2 text-[var(--text-error)] cursor-pointer",
                aria_label: "Remove {props.file_name}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_remove.call(());
                },
                Icon { icon: LdX, width: 16, height: 16 }
                "Delete"
            }
        }
    }
}
