use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use docdrop_core::Constraints;
use docdrop_io::DocumentUpload;

/// Tailwind's in-browser compiler; generates utilities for the classes
/// used by the components at runtime.
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Simple Analytics loader; defines the global `sa_event` used by
/// `docdrop_io::analytics`.
const SIMPLE_ANALYTICS_JS: &str = "https://scripts.simpleanalyticscdn.com/latest.js";

/// Optional constraint overrides, compiled in from the environment at
/// build time as a JSON object (e.g. `{"max_size_bytes": 2097152}`).
const CONSTRAINTS_JSON: Option<&str> = option_env!("DOCDROP_CONSTRAINTS");

fn main() {
    dioxus::launch(app);
}

/// Parse the compiled-in constraint overrides, falling back to defaults
/// when they are malformed or leave an allow-list empty.
fn load_constraints(json: Option<&str>) -> Constraints {
    let Some(json) = json else {
        return Constraints::default();
    };
    let constraints: Constraints = match serde_json::from_str(json) {
        Ok(constraints) => constraints,
        Err(e) => {
            warn!("ignoring invalid DOCDROP_CONSTRAINTS: {e}");
            return Constraints::default();
        }
    };
    if let Err(e) = constraints.check() {
        warn!("ignoring DOCDROP_CONSTRAINTS: {e}");
        return Constraints::default();
    }
    constraints
}

/// Root application component: page shell around the upload widget.
fn app() -> Element {
    let constraints = use_hook(|| load_constraints(CONSTRAINTS_JSON));

    rsx! {
        script { src: TAILWIND_BROWSER }
        style { dangerous_inner_html: include_str!("../assets/theme.css") }
        script { src: SIMPLE_ANALYTICS_JS }

        div { class: "min-h-screen bg-(--bg) text-(--text) flex items-center justify-center p-6",
            div { class: "w-full max-w-[700px] bg-(--card) p-5 rounded-lg shadow text-center",
                // Header
                header { class: "mb-5",
                    h2 { class: "text-2xl font-semibold", "Document Upload" }
                    p { class: "text-(--text-secondary)",
                        "We just need a little more information from you."
                    }
                }

                // Identity verification section
                section { class: "mb-5",
                    h3 { class: "text-lg font-semibold mb-1", "Identity Verification" }
                    p { class: "text-(--text-secondary) mb-3",
                        "Please upload one document from each section below for verification."
                    }
                    DocumentUpload { constraints: constraints }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_uses_defaults() {
        assert_eq!(load_constraints(None), Constraints::default());
    }

    #[test]
    fn overrides_are_applied() {
        let c = load_constraints(Some(r#"{"accepted_extensions": ["pdf"]}"#));
        assert_eq!(c.accepted_extensions, vec!["pdf".to_owned()]);
        assert_eq!(c.max_size_bytes, Constraints::default().max_size_bytes);
    }

    #[test]
    fn empty_extension_list_falls_back_to_defaults() {
        let c = load_constraints(Some(r#"{"accepted_extensions": []}"#));
        assert_eq!(c, Constraints::default());
        assert_eq!(c.format_list().to_string(), "PDF, JPG, JPEG, or PNG");
    }

    #[test]
    fn empty_mime_list_falls_back_to_defaults() {
        let c = load_constraints(Some(r#"{"accepted_mime_types": []}"#));
        assert_eq!(c, Constraints::default());
    }

    #[test]
    fn analytics_loader_is_served_over_https() {
        assert!(SIMPLE_ANALYTICS_JS.starts_with("https://scripts.simpleanalyticscdn.com/"));
        assert!(SIMPLE_ANALYTICS_JS.ends_with(".js"));
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        assert_eq!(load_constraints(Some("not json")), Constraints::default());
    }
}
