use super::state::ClickTarget;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The element that counts as "inside" the desktop dropdown.
///
/// The trigger and the panel both live under the registered element, so a
/// click on either is inside.
#[derive(Clone, Copy)]
pub struct DropdownRegion {
    node: NodeRef<Div>,
}

impl DropdownRegion {
    pub fn new() -> Self {
        Self {
            node: NodeRef::new(),
        }
    }

    pub fn node_ref(&self) -> NodeRef<Div> {
        self.node
    }

    pub fn classify(&self, target: Option<web_sys::EventTarget>) -> ClickTarget {
        let Some(region) = self.node.get_untracked() else {
            return ClickTarget::Unknown;
        };
        let Some(node) = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return ClickTarget::Unknown;
        };
        if region.contains(Some(&node)) {
            ClickTarget::Inside
        } else {
            ClickTarget::Outside
        }
    }
}

impl Default for DropdownRegion {
    fn default() -> Self {
        Self::new()
    }
}
