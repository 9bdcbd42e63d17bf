//! Keyboard focus containment for dialogs and menus.
//!
//! While active, a [`FocusTrap`] keeps Tab and Shift+Tab cycling inside a
//! container's focusable descendants and, on deactivation, hands focus back to
//! whatever held it before. The document itself sits behind [`FocusHost`] so
//! the state machine runs against the DOM in the browser and against an
//! in-memory tree in tests.
//!
//! STATE MACHINE
//! =============
//! `Inactive -> Active` on [`FocusTrap::activate`], `Active -> Inactive` on
//! [`FocusTrap::deactivate`]. Deactivating twice is a no-op. Activating an
//! already active trap deactivates it first, restoring focus, then starts over.
//!
//! The focusable set is recomputed on every key press because the container's
//! contents can change between interactions.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use std::fmt;
use std::rc::Rc;

/// CSS selector for candidates that [`is_focusable`] then filters.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button, textarea, input, select, [tabindex]";

/// The facts about an element that decide whether it can take focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusCandidate<'a> {
    /// Lowercase tag name, e.g. `"button"`.
    pub tag: &'a str,
    pub has_href: bool,
    /// Parsed `tabindex` attribute, if present and numeric.
    pub tabindex: Option<i32>,
    pub disabled: bool,
}

/// Anchors with `href`, form controls, or anything with a non-negative
/// `tabindex`, provided the element is not disabled.
#[must_use]
pub fn is_focusable(candidate: &FocusCandidate<'_>) -> bool {
    if candidate.disabled {
        return false;
    }
    let by_tag = match candidate.tag {
        "a" => candidate.has_href,
        "button" | "textarea" | "input" | "select" => true,
        _ => false,
    };
    by_tag || candidate.tabindex.is_some_and(|t| t >= 0)
}

/// Document access needed by the trap.
pub trait FocusHost {
    type Element: Clone + PartialEq;

    /// The element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// Focusable descendants of `container`, in document order.
    fn focusable_within(&self, container: &Self::Element) -> Vec<Self::Element>;

    fn focus(&self, element: &Self::Element);

    /// Whether `element` is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;
}

/// Activation options.
#[derive(Clone, Default)]
pub struct FocusTrapOptions {
    /// Move focus to the first focusable descendant on activation.
    pub auto_focus: bool,
    /// Return focus to the previously focused element on deactivation.
    pub restore_focus: bool,
    /// Invoked on Escape. The trap stays active; the caller decides whether to close.
    pub on_escape: Option<Rc<dyn Fn()>>,
}

impl FocusTrapOptions {
    /// `auto_focus` and `restore_focus` both enabled, no Escape handler.
    #[must_use]
    pub fn modal() -> Self {
        Self { auto_focus: true, restore_focus: true, on_escape: None }
    }

    #[must_use]
    pub fn on_escape(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_escape = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for FocusTrapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTrapOptions")
            .field("auto_focus", &self.auto_focus)
            .field("restore_focus", &self.restore_focus)
            .field("on_escape", &self.on_escape.is_some())
            .finish()
    }
}

/// What the trap did with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Focus was wrapped; the caller must prevent the browser default.
    Wrapped,
    /// Escape was delivered to the `on_escape` handler.
    Escaped,
    /// Not handled; let the event through unchanged.
    PassThrough,
}

struct ActiveTrap<E> {
    container: E,
    restore_to: Option<E>,
    options: FocusTrapOptions,
}

pub struct FocusTrap<H: FocusHost> {
    host: H,
    active: Option<ActiveTrap<H::Element>>,
}

impl<H: FocusHost> FocusTrap<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host, active: None }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start containing focus within `container`.
    pub fn activate(&mut self, container: H::Element, options: FocusTrapOptions) {
        if self.active.is_some() {
            self.deactivate();
        }

        let restore_to = if options.restore_focus {
            self.host.active_element()
        } else {
            None
        };

        if options.auto_focus {
            if let Some(first) = self.host.focusable_within(&container).first() {
                self.host.focus(first);
            }
        }

        self.active = Some(ActiveTrap { container, restore_to, options });
    }

    /// Apply trap rules to a key press. Inactive traps pass everything through.
    pub fn handle_key(&self, key: &str, shift: bool) -> KeyAction {
        let Some(active) = &self.active else {
            return KeyAction::PassThrough;
        };

        match key {
            "Tab" => self.wrap_tab(&active.container, shift),
            "Escape" | "Esc" => match &active.options.on_escape {
                Some(handler) => {
                    handler();
                    KeyAction::Escaped
                }
                None => KeyAction::PassThrough,
            },
            _ => KeyAction::PassThrough,
        }
    }

    /// Stop containing focus and restore the previous focus if requested.
    pub fn deactivate(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        if !active.options.restore_focus {
            return;
        }
        if let Some(previous) = active.restore_to {
            if self.host.is_attached(&previous) {
                self.host.focus(&previous);
            }
        }
    }

    fn wrap_tab(&self, container: &H::Element, shift: bool) -> KeyAction {
        let focusable = self.host.focusable_within(container);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return KeyAction::PassThrough;
        };
        let current = self.host.active_element();

        if shift && current.as_ref() == Some(first) {
            self.host.focus(last);
            return KeyAction::Wrapped;
        }
        if !shift && current.as_ref() == Some(last) {
            self.host.focus(first);
            return KeyAction::Wrapped;
        }
        KeyAction::PassThrough
    }
}
