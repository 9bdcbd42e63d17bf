//! Temporary `display: none` for elements excluded from a capture.

/// Read/write access to an element's inline `display` value.
///
/// An empty string means no inline value is set.
pub trait DisplayStyle {
    fn display(&self) -> String;
    fn set_display(&self, value: &str);
}

/// Hides elements while alive and puts their inline `display` back on drop.
///
/// Restoration runs on every exit path, including early returns through `?`.
#[must_use = "elements are restored as soon as the guard is dropped"]
pub struct HiddenElements<T: DisplayStyle> {
    saved: Vec<(T, String)>,
}

impl<T: DisplayStyle> HiddenElements<T> {
    pub fn new() -> Self {
        Self { saved: Vec::new() }
    }

    pub fn hide(&mut self, element: T) {
        let original = element.display();
        element.set_display("none");
        self.saved.push((element, original));
    }

    pub fn hide_all(&mut self, elements: impl IntoIterator<Item = T>) {
        for element in elements {
            self.hide(element);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl<T: DisplayStyle> Default for HiddenElements<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DisplayStyle> Drop for HiddenElements<T> {
    fn drop(&mut self) {
        // Reverse order: an element matched by two selectors ends on its first recorded value.
        while let Some((element, original)) = self.saved.pop() {
            element.set_display(&original);
        }
    }
}
