//! Integration test: drive the selection state machine through the
//! user-facing scenarios with counting fakes for the browser handles.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use docdrop_core::selection::NO_SELECTION_NOTICE;
use docdrop_core::{
    Candidate, CandidateFile, Constraints, DocumentType, InputControl, Outcome, PreviewError,
    PreviewKind, PreviewSource, PreviewStore, Rejection, Selection, SelectionState, Thumbnail,
    View, render,
};

const MB: u64 = 1024 * 1024;

#[derive(Debug, Default)]
struct Counters {
    next_id: u32,
    live: Vec<String>,
    revoked: Vec<String>,
    clears: usize,
}

struct CountingStore(Rc<RefCell<Counters>>);

impl PreviewStore for CountingStore {
    /// Stand-in for the file bytes.
    type Source = Vec<u8>;

    fn create(
        &mut self,
        file: &CandidateFile,
        _source: &Vec<u8>,
    ) -> Result<PreviewSource, PreviewError> {
        let mut c = self.0.borrow_mut();
        c.next_id += 1;
        let url = format!("blob:test/{}/{}", c.next_id, file.name);
        c.live.push(url.clone());
        Ok(PreviewSource::new(url))
    }

    fn revoke(&mut self, preview: PreviewSource) {
        let url = preview.into_inner();
        let mut c = self.0.borrow_mut();
        let before = c.live.len();
        c.live.retain(|u| *u != url);
        assert_eq!(c.live.len() + 1, before, "revoked unknown preview {url}");
        c.revoked.push(url);
    }
}

struct CountingInput(Rc<RefCell<Counters>>);

impl InputControl for CountingInput {
    fn clear(&mut self) {
        self.0.borrow_mut().clears += 1;
    }
}

type Widget = Selection<CountingStore, CountingInput>;

fn widget() -> (Widget, Rc<RefCell<Counters>>) {
    let counters = Rc::new(RefCell::new(Counters::default()));
    let sel = Selection::new(
        Constraints::default(),
        CountingStore(Rc::clone(&counters)),
        CountingInput(Rc::clone(&counters)),
    );
    (sel, counters)
}

fn candidate(name: &str, size_bytes: u64, mime: &str) -> Candidate<Vec<u8>> {
    Candidate::new(CandidateFile::new(name, size_bytes, mime), Vec::new())
}

#[test]
fn scenario_a_png_is_selected_with_image_preview() {
    let (mut sel, counters) = widget();
    let outcome = sel.handle_candidate_files([candidate("id.png", 2 * MB, "image/png")]);
    assert_eq!(
        outcome,
        Outcome::Selected {
            preview_error: None
        }
    );

    let SelectionState::Selected { file_name, preview } = sel.state() else {
        panic!("expected Selected, got {:?}", sel.state());
    };
    assert_eq!(file_name, "id.png");
    assert!(matches!(preview, PreviewKind::Image(_)));
    assert_eq!(counters.borrow().live.len(), 1);

    let view = render(sel.state());
    assert!(matches!(
        view,
        View::FileInfo {
            file_name: "id.png",
            thumbnail: Thumbnail::Image(_),
        }
    ));
}

#[test]
fn scenario_b_large_pdf_is_rejected_for_size() {
    let (mut sel, _) = widget();
    sel.handle_candidate_files([candidate("scan.pdf", 5 * MB, "application/pdf")]);
    let SelectionState::Rejected { reason } = sel.state() else {
        panic!("expected Rejected, got {:?}", sel.state());
    };
    assert!(matches!(reason, Rejection::OversizeFile { .. }));
    assert_eq!(reason.to_string(), "File size should not exceed 4.5MB.");
}

#[test]
fn scenario_c_text_file_is_rejected_for_format() {
    let (mut sel, _) = widget();
    sel.handle_candidate_files([candidate("notes.txt", MB, "text/plain")]);
    assert_eq!(
        render(sel.state()),
        View::Error {
            message: "Invalid file format. Please upload a PDF, JPG, JPEG, or PNG file.".into(),
        }
    );
}

#[test]
fn scenario_d_submit_without_selection_is_blocked() {
    let (sel, _) = widget();
    let err = sel.submit(DocumentType::default()).unwrap_err();
    assert_eq!(err.to_string(), NO_SELECTION_NOTICE);
    assert_eq!(*sel.state(), SelectionState::Empty);
}

#[test]
fn scenario_e_remove_releases_preview_exactly_once() {
    let (mut sel, counters) = widget();
    sel.handle_candidate_files([candidate("id.png", 2 * MB, "image/png")]);
    sel.remove_file();
    assert_eq!(*sel.state(), SelectionState::Empty);
    sel.remove_file();
    drop(sel);

    let c = counters.borrow();
    assert!(c.live.is_empty());
    assert_eq!(c.revoked.len(), 1);
    assert_eq!(c.clears, 2);
}

#[test]
fn scenario_f_pdf_uses_generic_preview_without_allocation() {
    let (mut sel, counters) = widget();
    sel.handle_candidate_files([candidate("pan.pdf", MB, "application/pdf")]);
    assert_eq!(
        *sel.state(),
        SelectionState::Selected {
            file_name: "pan.pdf".into(),
            preview: PreviewKind::Generic,
        }
    );
    assert_eq!(counters.borrow().next_id, 0);
}

#[test]
fn unmount_with_selection_releases_preview() {
    let (mut sel, counters) = widget();
    sel.handle_candidate_files([candidate("a.jpg", MB, "image/jpeg")]);
    drop(sel);
    assert!(counters.borrow().live.is_empty());
    assert_eq!(counters.borrow().revoked.len(), 1);
}

#[test]
fn mixed_sequence_never_leaks_and_state_is_exclusive() {
    let (mut sel, counters) = widget();
    let steps: Vec<Candidate<Vec<u8>>> = vec![
        candidate("a.png", MB, "image/png"),
        candidate("b.jpg", MB, "image/jpg"),
        candidate("c.gif", MB, "image/gif"),
        candidate("d.jpeg", MB, "image/jpeg"),
        candidate("e.pdf", MB, "application/pdf"),
        candidate("f.png", 10 * MB, "image/png"),
        candidate("g.png", 0, "image/png"),
    ];
    for step in steps {
        let name = step.file.name.clone();
        match sel.handle_candidate_files([step]) {
            Outcome::Selected { .. } => {
                assert_eq!(sel.file_name(), Some(name.as_str()));
                assert!(!matches!(render(sel.state()), View::Error { .. }));
            }
            Outcome::Rejected(_) => {
                assert_eq!(sel.file_name(), None);
                assert!(matches!(render(sel.state()), View::Error { .. }));
            }
            Outcome::Unchanged | Outcome::Stale => {
                panic!("single-file list must change state")
            }
        }
        // At most the current image preview is live.
        assert!(counters.borrow().live.len() <= 1);
    }
    sel.teardown();
    assert!(counters.borrow().live.is_empty());
    // a, b, d, and g allocated previews; each was released once.
    assert_eq!(counters.borrow().revoked.len(), 4);
}

#[test]
fn slow_image_read_does_not_override_later_pick() {
    let (mut sel, counters) = widget();
    // Drop a PNG whose bytes are still being read...
    let png = sel.begin();
    // ...then pick a PDF, which needs no read and lands first.
    let pdf = sel.begin();
    sel.complete(pdf, [candidate("b.pdf", MB, "application/pdf")]);
    let late = sel.complete(png, [candidate("a.png", 4 * MB, "image/png")]);

    assert_eq!(late, Outcome::Stale);
    assert_eq!(sel.file_name(), Some("b.pdf"));
    assert_eq!(counters.borrow().next_id, 0);
}
