//! Document Title Surface

use crate::constants::APP_TITLE_SUFFIX;
use std::cell::RefCell;
use std::rc::Rc;

/// Format the full document title for a page title
pub fn document_title(page_title: &str) -> String {
    format!("{page_title} - {APP_TITLE_SUFFIX}")
}

/// External display slot for the document title (e.g. a window title bar)
pub trait TitleSurface {
    fn set_title(&mut self, title: &str);
}

#[derive(Debug, Default)]
struct TitleSlot {
    current: Option<String>,
    dirty: bool,
}

/// Title slot shared between the store and whoever displays it
///
/// The store writes into it; the window shell drains pending changes with
/// [`SharedTitle::take_pending`] on its next render.
#[derive(Debug, Clone, Default)]
pub struct SharedTitle {
    slot: Rc<RefCell<TitleSlot>>,
}

impl SharedTitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last title written, if any
    pub fn current(&self) -> Option<String> {
        self.slot.borrow().current.clone()
    }

    /// Take the title if it changed since the last call
    pub fn take_pending(&self) -> Option<String> {
        let mut slot = self.slot.borrow_mut();
        if !slot.dirty {
            return None;
        }
        slot.dirty = false;
        slot.current.clone()
    }
}

impl TitleSurface for SharedTitle {
    fn set_title(&mut self, title: &str) {
        let mut slot = self.slot.borrow_mut();
        slot.current = Some(title.to_string());
        slot.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_product_suffix() {
        assert_eq!(document_title("Analytics"), "Analytics - Kuwait Social AI");
    }

    #[test]
    fn pending_title_is_taken_once() {
        let title = SharedTitle::new();
        let mut writer = title.clone();
        assert_eq!(title.take_pending(), None);

        writer.set_title("Posts - Kuwait Social AI");
        assert_eq!(title.take_pending().as_deref(), Some("Posts - Kuwait Social AI"));
        assert_eq!(title.take_pending(), None);
        assert_eq!(title.current().as_deref(), Some("Posts - Kuwait Social AI"));
    }
}
