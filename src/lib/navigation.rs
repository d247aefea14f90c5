//! Full-page navigation used after logout so no in-memory state survives.

use std::{cell::RefCell, rc::Rc};

pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Sets `window.location.href`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window()
            && window.location().set_href(path).is_err()
        {
            tracing::warn!(path, "Failed to navigate");
        }
    }
}

/// Records redirects instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
