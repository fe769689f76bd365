//! In-memory element tree implementing [`ElementLocator`].
//!
//! Pages are assembled element by element with [`ElementSpec`] builders.
//! Mutation methods cover what the effects layer needs: text, attributes,
//! and class toggles.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::locator::ElementLocator;
use super::types::NodeId;

/// Declarative description of one element, consumed by [`MemoryDom::insert`].
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[derive(Debug)]
struct NodeData {
    spec: ElementSpec,
    parent: Option<NodeId>,
    offset_top: i64,
}

#[derive(Debug, Default)]
struct DomTree {
    nodes: Vec<NodeData>,
}

/// Cloneable handle to a shared in-memory document.
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    inner: Arc<Mutex<DomTree>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element under `parent` (or at the root) and returns its handle.
    pub fn insert(&self, parent: Option<NodeId>, spec: ElementSpec) -> NodeId {
        let mut tree = self.inner.lock().unwrap();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(NodeData {
            spec,
            parent,
            offset_top: 0,
        });
        id
    }

    pub fn set_text(&self, node: NodeId, text: impl Into<String>) {
        self.inner.lock().unwrap().nodes[node.0].spec.text = text.into();
    }

    pub fn set_attr(&self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().unwrap().nodes[node.0]
            .spec
            .attrs
            .insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, node: NodeId, name: &str) {
        self.inner.lock().unwrap().nodes[node.0].spec.attrs.remove(name);
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        let mut tree = self.inner.lock().unwrap();
        let classes = &mut tree.nodes[node.0].spec.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&self, node: NodeId, class: &str) {
        self.inner.lock().unwrap().nodes[node.0]
            .spec
            .classes
            .retain(|c| c != class);
    }

    pub fn set_offset_top(&self, node: NodeId, pixels: i64) {
        self.inner.lock().unwrap().nodes[node.0].offset_top = pixels;
    }
}

impl ElementLocator for MemoryDom {
    fn document_order(&self) -> Vec<NodeId> {
        (0..self.inner.lock().unwrap().nodes.len())
            .map(NodeId)
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.lock().unwrap().nodes[node.0].parent
    }

    fn tag(&self, node: NodeId) -> String {
        self.inner.lock().unwrap().nodes[node.0].spec.tag.clone()
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.inner.lock().unwrap().nodes[node.0].spec.id.clone()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.inner.lock().unwrap().nodes[node.0]
            .spec
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.inner.lock().unwrap().nodes[node.0]
            .spec
            .attrs
            .get(name)
            .cloned()
    }

    fn text(&self, node: NodeId) -> String {
        self.inner.lock().unwrap().nodes[node.0].spec.text.clone()
    }

    fn offset_top(&self, node: NodeId) -> i64 {
        self.inner.lock().unwrap().nodes[node.0].offset_top
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::PageLocation;
    use super::*;

    #[test]
    fn ancestry_runs_from_node_to_root() {
        let dom = MemoryDom::new();
        let root = dom.insert(None, ElementSpec::new("body"));
        let section = dom.insert(Some(root), ElementSpec::new("section"));
        let link = dom.insert(Some(section), ElementSpec::new("a"));

        assert_eq!(dom.ancestry(link), vec![link, section, root]);
        assert_eq!(dom.descendants(root), vec![section, link]);
    }

    #[test]
    fn by_id_finds_first_match() {
        let dom = MemoryDom::new();
        let root = dom.insert(None, ElementSpec::new("body"));
        let popup = dom.insert(Some(root), ElementSpec::new("div").id("providerPopup"));

        assert_eq!(dom.by_id("providerPopup"), Some(popup));
        assert_eq!(dom.by_id("missing"), None);
    }

    #[test]
    fn location_priority_prefers_header_over_cta() {
        let dom = MemoryDom::new();
        let root = dom.insert(None, ElementSpec::new("body"));
        // Nested inside both a cta band and a nav; header family wins.
        let band = dom.insert(Some(root), ElementSpec::new("div").class("cta-band"));
        let nav = dom.insert(Some(band), ElementSpec::new("nav"));
        let link = dom.insert(Some(nav), ElementSpec::new("a"));

        assert_eq!(dom.detect_location(link), PageLocation::Header);
    }

    #[test]
    fn location_defaults_to_page_content() {
        let dom = MemoryDom::new();
        let root = dom.insert(None, ElementSpec::new("body"));
        let link = dom.insert(Some(root), ElementSpec::new("a"));
        assert_eq!(dom.detect_location(link), PageLocation::PageContent);
    }

    #[test]
    fn modal_class_counts_as_popup_location() {
        let dom = MemoryDom::new();
        let root = dom.insert(None, ElementSpec::new("body"));
        let modal = dom.insert(Some(root), ElementSpec::new("div").class("modal"));
        let link = dom.insert(Some(modal), ElementSpec::new("a"));
        assert_eq!(dom.detect_location(link), PageLocation::Popup);
    }

    #[test]
    fn class_toggles_affect_queries() {
        let dom = MemoryDom::new();
        let item = dom.insert(None, ElementSpec::new("div").class("faq-item"));
        dom.add_class(item, "open");
        assert!(dom.has_class(item, "open"));
        dom.add_class(item, "open");
        dom.remove_class(item, "open");
        assert!(!dom.has_class(item, "open"));
    }
}
