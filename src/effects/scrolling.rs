use crate::dom::{ElementLocator, NodeId};

/// Fixed sticky-header height subtracted from every scroll target.
pub const HEADER_HEIGHT: i64 = 80;

/// A smooth-scroll destination the host should animate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub top: i64,
}

/// Resolves a same-page fragment link to a scroll destination.
///
/// Returns `None` for non-fragment hrefs, the bare `#` link, and fragments
/// that do not resolve to an element; the host leaves those to default
/// navigation.
pub fn resolve_fragment(
    dom: &dyn ElementLocator,
    href: &str,
    header_height: i64,
) -> Option<ScrollRequest> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let target = dom.by_id(fragment)?;
    Some(ScrollRequest {
        target,
        top: (dom.offset_top(target) - header_height).max(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDom};

    fn dom_with_section() -> (MemoryDom, NodeId) {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let section = dom.insert(Some(body), ElementSpec::new("section").id("pricing"));
        dom.set_offset_top(section, 1200);
        (dom, section)
    }

    #[test]
    fn fragment_resolves_with_header_offset() {
        let (dom, section) = dom_with_section();
        let request = resolve_fragment(&dom, "#pricing", HEADER_HEIGHT).unwrap();
        assert_eq!(request.target, section);
        assert_eq!(request.top, 1120);
    }

    #[test]
    fn unresolved_fragment_is_a_noop() {
        let (dom, _) = dom_with_section();
        assert_eq!(resolve_fragment(&dom, "#missing", HEADER_HEIGHT), None);
        assert_eq!(resolve_fragment(&dom, "#", HEADER_HEIGHT), None);
        assert_eq!(resolve_fragment(&dom, "/pricing", HEADER_HEIGHT), None);
    }

    #[test]
    fn target_above_the_header_clamps_to_top() {
        let (dom, section) = dom_with_section();
        dom.set_offset_top(section, 40);
        let request = resolve_fragment(&dom, "#pricing", HEADER_HEIGHT).unwrap();
        assert_eq!(request.top, 0);
    }
}
