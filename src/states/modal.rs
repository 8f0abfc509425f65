//! Modals
//!
//! Stacked overlays. The store only tracks identity, a type tag and an
//! opaque property bag; the view layer decides what to render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Modal identity, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModalId(pub u64);

type CloseHandler = Box<dyn FnOnce()>;

/// Modal request, before the store assigns an identity
pub struct NewModal {
    pub modal_type: String,
    pub props: Map<String, Value>,
    on_close: Option<CloseHandler>,
}

impl NewModal {
    pub fn new(modal_type: impl Into<String>) -> Self {
        Self {
            modal_type: modal_type.into(),
            props: Map::new(),
            on_close: None,
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Callback fired once when the modal leaves the stack
    pub fn on_close(mut self, handler: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for NewModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewModal")
            .field("modal_type", &self.modal_type)
            .field("props", &self.props)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// An open modal
pub struct Modal {
    pub id: ModalId,
    pub modal_type: String,
    pub props: Map<String, Value>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    pub(crate) fn from_request(id: ModalId, request: NewModal) -> Self {
        Self {
            id,
            modal_type: request.modal_type,
            props: request.props,
            on_close: request.on_close,
        }
    }

    pub fn has_close_handler(&self) -> bool {
        self.on_close.is_some()
    }

    /// Consume the modal, firing its close handler
    pub(crate) fn close(self) {
        if let Some(handler) = self.on_close {
            handler();
        }
    }
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("modal_type", &self.modal_type)
            .field("props", &self.props)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn close_fires_handler() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let modal = Modal::from_request(
            ModalId(1),
            NewModal::new("confirm-delete")
                .prop("postId", 42)
                .on_close(move || counter.set(counter.get() + 1)),
        );

        assert!(modal.has_close_handler());
        assert_eq!(modal.props.get("postId"), Some(&Value::from(42)));
        modal.close();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn close_without_handler_is_quiet() {
        let modal = Modal::from_request(ModalId(2), NewModal::new("preview"));
        assert!(!modal.has_close_handler());
        modal.close();
    }
}
