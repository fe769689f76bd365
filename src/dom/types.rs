use std::fmt;

/// Opaque handle to an element inside an [`super::ElementLocator`].
/// Handles are only meaningful against the locator that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Where on the page an element sits, derived from its ancestry.
///
/// Classification tests ancestor markers in a fixed priority order (header,
/// footer, popup, hero, CTA section) and the first match wins;
/// `PageContent` is the default when nothing matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLocation {
    Header,
    Footer,
    Popup,
    Hero,
    CtaSection,
    PageContent,
}

impl PageLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            PageLocation::Header => "header",
            PageLocation::Footer => "footer",
            PageLocation::Popup => "popup",
            PageLocation::Hero => "hero",
            PageLocation::CtaSection => "cta_section",
            PageLocation::PageContent => "page_content",
        }
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
