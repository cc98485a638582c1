use anyhow::anyhow;
use leptos::logging::warn;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use super::{DocumentScroller, HistoryUpdater, LocationAssigner};

/// The real `window`, when there is one.
#[derive(Clone)]
pub struct BrowserWindow(Window);

impl BrowserWindow {
    /// `None` outside a browser (server rendering, native tests).
    pub fn current() -> Option<Self> {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        web_sys::window().map(Self)
    }
}

impl DocumentScroller for BrowserWindow {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(el) = self.0.document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };

        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

impl HistoryUpdater for BrowserWindow {
    fn replace_hash(&self, hash: &str) {
        if let Ok(history) = self.0.history() {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(hash)) {
                warn!("history.replaceState({hash}) rejected: {e:?}");
            }
        }
    }
}

impl LocationAssigner for BrowserWindow {
    fn assign(&self, path: &str) -> anyhow::Result<()> {
        self.0
            .location()
            .assign(path)
            .map_err(|e| anyhow!("location.assign({path}) rejected: {e:?}"))
    }
}
