//! Document-type dropdown.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use docdrop_core::DocumentType;

/// Props for the [`DocumentTypeSelect`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DocumentTypeSelectProps {
    /// Currently selected type.
    selected: DocumentType,
    /// Called when the user picks a different type.
    on_change: EventHandler<DocumentType>,
}

/// Labeled `<select>` listing [`DocumentType::ALL`].
#[component]
pub fn DocumentTypeSelect(props: DocumentTypeSelectProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div { class: "flex items-center justify-center gap-2 mb-3",
            label { r#for: "identity-document-type", class: "text-sm",
                "Select Document Type:"
            }
            select {
                id: "identity-document-type",
                class: "border border-[var(--border)] rounded px-2 py-1 bg-[var(--surface)]",
                value: "{props.selected.value()}",
                onchange: move |e| match e.value().parse::<DocumentType>() {
                    Ok(t) => on_change.call(t),
                    Err(err) => warn!("ignoring document type change: {err}"),
                },
                for t in DocumentType::ALL {
                    option {
                        value: "{t.value()}",
                        selected: t == props.selected,
                        "{t.label()}"
                    }
                }
            }
        }
    }
}
