use std::sync::{Arc, Mutex};

use crate::dom::{ElementLocator, MemoryDom, NodeId};

use super::providers::ProviderDescriptor;

/// Everything the overlay renders for one provider. Built fresh on every
/// show, so a new provider always fully replaces the prior visual state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupContent {
    pub variant: String,
    pub logo_key: String,
    pub title: String,
    pub subtitle: String,
}

impl PopupContent {
    pub fn for_provider(provider: &ProviderDescriptor) -> Self {
        Self {
            variant: provider.visual_variant.to_owned(),
            logo_key: provider.key.to_owned(),
            title: format!("Cancel {}", provider.full_name),
            subtitle: provider.tagline.to_owned(),
        }
    }
}

/// Rendering side of the popup. The controller drives this; implementations
/// only mutate presentation state and never make decisions.
pub trait PopupSurface: Send + Sync {
    fn apply(&self, content: &PopupContent);
    fn set_visible(&self, visible: bool);
    fn set_scroll_locked(&self, locked: bool);
}

/// Surface bound to the conventional overlay element ids
/// (`providerPopup`, `popupContent`, `popupLogo`, `popupTitle`,
/// `popupSubtitle`). Elements missing from the document are skipped; the
/// surface never fails.
#[derive(Clone, Debug)]
pub struct DomPopupSurface {
    dom: MemoryDom,
    overlay: Option<NodeId>,
    content: Option<NodeId>,
    logo: Option<NodeId>,
    title: Option<NodeId>,
    subtitle: Option<NodeId>,
    body: Option<NodeId>,
}

impl DomPopupSurface {
    pub fn bind(dom: MemoryDom) -> Self {
        let body = dom
            .document_order()
            .into_iter()
            .find(|node| dom.tag(*node) == "body");
        Self {
            overlay: dom.by_id("providerPopup"),
            content: dom.by_id("popupContent"),
            logo: dom.by_id("popupLogo"),
            title: dom.by_id("popupTitle"),
            subtitle: dom.by_id("popupSubtitle"),
            body,
            dom,
        }
    }
}

impl PopupSurface for DomPopupSurface {
    fn apply(&self, content: &PopupContent) {
        if let Some(node) = self.content {
            // Replaces the whole class list so no prior variant lingers.
            self.dom
                .set_attr(node, "class", format!("popup {}", content.variant));
        }
        if let Some(node) = self.logo {
            self.dom.set_attr(node, "data-provider", &content.logo_key);
        }
        if let Some(node) = self.title {
            self.dom.set_text(node, &content.title);
        }
        if let Some(node) = self.subtitle {
            self.dom.set_text(node, &content.subtitle);
        }
    }

    fn set_visible(&self, visible: bool) {
        if let Some(node) = self.overlay {
            if visible {
                self.dom.add_class(node, "active");
            } else {
                self.dom.remove_class(node, "active");
            }
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(node) = self.body {
            if locked {
                self.dom.set_attr(node, "style", "overflow: hidden");
            } else {
                self.dom.remove_attr(node, "style");
            }
        }
    }
}

/// Test surface recording the last applied content and toggles.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<RecordingSurfaceState>>,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurfaceState {
    pub content: Option<PopupContent>,
    pub visible: bool,
    pub scroll_locked: bool,
    pub applied: Vec<PopupContent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecordingSurfaceState {
        self.state.lock().unwrap().clone()
    }
}

impl PopupSurface for RecordingSurface {
    fn apply(&self, content: &PopupContent) {
        let mut state = self.state.lock().unwrap();
        state.content = Some(content.clone());
        state.applied.push(content.clone());
    }

    fn set_visible(&self, visible: bool) {
        self.state.lock().unwrap().visible = visible;
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.state.lock().unwrap().scroll_locked = locked;
    }
}
