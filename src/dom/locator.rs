use super::types::{NodeId, PageLocation};

/// Read access to the page's element tree.
///
/// This is the seam between the instrumentation layer and whatever document
/// representation the host provides. [`super::MemoryDom`] is the shipped
/// implementation; a wasm host can adapt a live document behind the same
/// trait. Implementations return owned values so locks or FFI handles never
/// leak into callers.
pub trait ElementLocator: Send + Sync {
    /// Every element handle in document order.
    fn document_order(&self) -> Vec<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn tag(&self, node: NodeId) -> String;

    fn element_id(&self, node: NodeId) -> Option<String>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    fn text(&self, node: NodeId) -> String;

    /// Vertical offset of the element from the document top, in pixels.
    fn offset_top(&self, node: NodeId) -> i64;

    fn href(&self, node: NodeId) -> Option<String> {
        self.attr(node, "href")
    }

    /// The node itself followed by its ancestors up to the root.
    fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|candidate| *candidate != node && self.ancestry(*candidate).contains(&node))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|node| self.element_id(*node).as_deref() == Some(id))
    }

    /// Classifies where `node` sits on the page. Ancestor markers are tested
    /// in fixed priority order; first match wins, `page_content` otherwise.
    fn detect_location(&self, node: NodeId) -> PageLocation {
        let chain = self.ancestry(node);
        let any = |matches: &dyn Fn(NodeId) -> bool| chain.iter().copied().any(matches);

        if any(&|n| self.has_class(n, "header") || self.tag(n) == "nav") {
            PageLocation::Header
        } else if any(&|n| self.has_class(n, "footer")) {
            PageLocation::Footer
        } else if any(&|n| self.has_class(n, "popup") || self.has_class(n, "modal")) {
            PageLocation::Popup
        } else if any(&|n| self.has_class(n, "hero")) {
            PageLocation::Hero
        } else if any(&|n| self.has_class(n, "cta-section") || self.has_class(n, "cta-band")) {
            PageLocation::CtaSection
        } else {
            PageLocation::PageContent
        }
    }
}
