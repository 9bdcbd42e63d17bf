use super::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Minimal document: element ids in document order, grouped by container.
#[derive(Default)]
struct FakeDoc {
    children: RefCell<HashMap<&'static str, Vec<&'static str>>>,
    detached: RefCell<Vec<&'static str>>,
    focused: RefCell<Option<&'static str>>,
    focus_calls: Cell<usize>,
}

impl FakeDoc {
    fn with_container(container: &'static str, items: &[&'static str]) -> Self {
        let doc = Self::default();
        doc.children.borrow_mut().insert(container, items.to_vec());
        doc
    }

    fn set_focus(&self, id: &'static str) {
        *self.focused.borrow_mut() = Some(id);
    }

    fn focused(&self) -> Option<&'static str> {
        *self.focused.borrow()
    }
}

impl FocusHost for &FakeDoc {
    type Element = &'static str;

    fn active_element(&self) -> Option<Self::Element> {
        self.focused()
    }

    fn focusable_within(&self, container: &Self::Element) -> Vec<Self::Element> {
        self.children.borrow().get(*container).cloned().unwrap_or_default()
    }

    fn focus(&self, element: &Self::Element) {
        self.focus_calls.set(self.focus_calls.get() + 1);
        *self.focused.borrow_mut() = Some(*element);
    }

    fn is_attached(&self, element: &Self::Element) -> bool {
        !self.detached.borrow().contains(element)
    }
}

// =============================================================
// Activation
// =============================================================

#[test]
fn auto_focus_moves_to_first_focusable() {
    let doc = FakeDoc::with_container("dialog", &["a", "b", "c"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);

    trap.activate("dialog", FocusTrapOptions::modal());

    assert!(trap.is_active());
    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn without_auto_focus_focus_stays_put() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);

    trap.activate("dialog", FocusTrapOptions { restore_focus: true, ..FocusTrapOptions::default() });

    assert_eq!(doc.focused(), Some("trigger"));
}

#[test]
fn empty_container_leaves_focus_and_tab_is_inert() {
    let doc = FakeDoc::with_container("dialog", &[]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);

    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(doc.focused(), Some("trigger"));
    assert_eq!(doc.focus_calls.get(), 0);
    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
    assert_eq!(trap.handle_key("Tab", true), KeyAction::PassThrough);
    assert_eq!(doc.focused(), Some("trigger"));
}

// =============================================================
// Tab wrapping
// =============================================================

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let doc = FakeDoc::with_container("dialog", &["a", "b", "c"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(trap.handle_key("Tab", true), KeyAction::Wrapped);
    assert_eq!(doc.focused(), Some("c"));
}

#[test]
fn tab_on_last_wraps_to_first() {
    let doc = FakeDoc::with_container("dialog", &["a", "b", "c"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    doc.set_focus("c");

    assert_eq!(trap.handle_key("Tab", false), KeyAction::Wrapped);
    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn tab_in_the_middle_passes_through() {
    let doc = FakeDoc::with_container("dialog", &["a", "b", "c"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    doc.set_focus("b");

    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
    assert_eq!(trap.handle_key("Tab", true), KeyAction::PassThrough);
    assert_eq!(doc.focused(), Some("b"));
}

#[test]
fn tab_on_first_and_shift_tab_on_last_pass_through() {
    let doc = FakeDoc::with_container("dialog", &["a", "b", "c"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
    doc.set_focus("c");
    assert_eq!(trap.handle_key("Tab", true), KeyAction::PassThrough);
}

#[test]
fn single_focusable_wraps_onto_itself() {
    let doc = FakeDoc::with_container("dialog", &["only"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(trap.handle_key("Tab", false), KeyAction::Wrapped);
    assert_eq!(trap.handle_key("Tab", true), KeyAction::Wrapped);
    assert_eq!(doc.focused(), Some("only"));
}

#[test]
fn focusable_set_is_recomputed_per_key() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    doc.set_focus("b");
    doc.children.borrow_mut().insert("dialog", vec!["a", "b", "c"]);

    // "b" is no longer last once "c" exists.
    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
    doc.set_focus("c");
    assert_eq!(trap.handle_key("Tab", false), KeyAction::Wrapped);
    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn other_keys_pass_through() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(trap.handle_key("Enter", false), KeyAction::PassThrough);
    assert_eq!(trap.handle_key("ArrowDown", true), KeyAction::PassThrough);
}

#[test]
fn inactive_trap_passes_everything_through() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    doc.set_focus("b");
    let trap = FocusTrap::new(&doc);

    assert!(!trap.is_active());
    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
    assert_eq!(doc.focused(), Some("b"));
}

// =============================================================
// Escape
// =============================================================

#[test]
fn escape_invokes_handler_and_keeps_trap_active() {
    let doc = FakeDoc::with_container("dialog", &["a"]);
    let hits = Rc::new(Cell::new(0));
    let hits_in_handler = Rc::clone(&hits);
    let mut trap = FocusTrap::new(&doc);
    trap.activate(
        "dialog",
        FocusTrapOptions::modal().on_escape(move || hits_in_handler.set(hits_in_handler.get() + 1)),
    );

    assert_eq!(trap.handle_key("Escape", false), KeyAction::Escaped);
    assert_eq!(hits.get(), 1);
    assert!(trap.is_active());
}

#[test]
fn escape_without_handler_passes_through() {
    let doc = FakeDoc::with_container("dialog", &["a"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    assert_eq!(trap.handle_key("Escape", false), KeyAction::PassThrough);
}

// =============================================================
// Deactivation
// =============================================================

#[test]
fn deactivate_restores_previous_focus() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    assert_eq!(doc.focused(), Some("a"));

    trap.deactivate();

    assert!(!trap.is_active());
    assert_eq!(doc.focused(), Some("trigger"));
}

#[test]
fn deactivate_without_restore_leaves_focus() {
    let doc = FakeDoc::with_container("dialog", &["a"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions { auto_focus: true, ..FocusTrapOptions::default() });

    trap.deactivate();

    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn deactivate_skips_detached_previous_element() {
    let doc = FakeDoc::with_container("dialog", &["a"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    doc.detached.borrow_mut().push("trigger");

    trap.deactivate();

    assert_eq!(doc.focused(), Some("a"));
}

#[test]
fn deactivate_twice_is_noop() {
    let doc = FakeDoc::with_container("dialog", &["a"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());

    trap.deactivate();
    doc.set_focus("elsewhere");
    trap.deactivate();

    assert_eq!(doc.focused(), Some("elsewhere"));
}

#[test]
fn tab_after_deactivate_passes_through() {
    let doc = FakeDoc::with_container("dialog", &["a", "b"]);
    let mut trap = FocusTrap::new(&doc);
    trap.activate("dialog", FocusTrapOptions::modal());
    trap.deactivate();
    doc.set_focus("b");

    assert_eq!(trap.handle_key("Tab", false), KeyAction::PassThrough);
}

#[test]
fn reactivation_restores_before_switching_container() {
    let doc = FakeDoc::with_container("menu", &["m1", "m2"]);
    doc.children.borrow_mut().insert("dialog", vec!["d1"]);
    doc.set_focus("trigger");
    let mut trap = FocusTrap::new(&doc);

    trap.activate("menu", FocusTrapOptions::modal());
    trap.activate("dialog", FocusTrapOptions::modal());
    assert_eq!(doc.focused(), Some("d1"));

    trap.deactivate();
    assert_eq!(doc.focused(), Some("trigger"));
}

// =============================================================
// Focusable predicate
// =============================================================

fn candidate(tag: &str) -> FocusCandidate<'_> {
    FocusCandidate { tag, ..FocusCandidate::default() }
}

#[test]
fn form_controls_are_focusable() {
    for tag in ["button", "textarea", "input", "select"] {
        assert!(is_focusable(&candidate(tag)), "{tag} should be focusable");
    }
}

#[test]
fn anchors_need_href() {
    assert!(!is_focusable(&candidate("a")));
    assert!(is_focusable(&FocusCandidate { has_href: true, ..candidate("a") }));
}

#[test]
fn tabindex_must_be_non_negative() {
    assert!(!is_focusable(&candidate("div")));
    assert!(is_focusable(&FocusCandidate { tabindex: Some(0), ..candidate("div") }));
    assert!(is_focusable(&FocusCandidate { tabindex: Some(3), ..candidate("span") }));
    assert!(!is_focusable(&FocusCandidate { tabindex: Some(-1), ..candidate("div") }));
}

#[test]
fn disabled_elements_are_excluded() {
    assert!(!is_focusable(&FocusCandidate { disabled: true, ..candidate("button") }));
    assert!(!is_focusable(&FocusCandidate { disabled: true, tabindex: Some(0), ..candidate("div") }));
}

#[test]
fn options_debug_hides_handler() {
    let options = FocusTrapOptions::modal().on_escape(|| {});
    let debug = format!("{options:?}");
    assert!(debug.contains("on_escape: true"));
}
