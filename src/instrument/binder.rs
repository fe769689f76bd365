use std::collections::BTreeMap;

use crate::dom::{ElementLocator, NodeId};
use crate::logger::Logger;
use crate::page::PageContext;

use super::events::DomainEvent;

const FAQ_TOGGLE_CLASS: &str = "faq-question";
const CTA_CLASS: &str = "cta-button";
const FORM_FIELD_TAGS: [&str; 3] = ["input", "textarea", "select"];
const FALLBACK_FORM_NAME: &str = "unnamed_form";

#[derive(Clone, Debug)]
struct FormBinding {
    node: NodeId,
    name: String,
    started: bool,
}

/// One-time scan of the document that wires interaction tracking to the
/// elements already on the page.
///
/// `scan` builds lookup tables for every trackable element; afterwards the
/// host forwards raw interaction notifications to `handle_click`,
/// `handle_focus`, and `handle_submit`, which translate them into
/// [`DomainEvent`]s. Elements inserted after the scan are not tracked.
#[derive(Clone, Debug)]
pub struct Binder {
    phone_links: BTreeMap<NodeId, String>,
    faq_toggles: BTreeMap<NodeId, usize>,
    outbound_links: BTreeMap<NodeId, String>,
    cta_buttons: BTreeMap<NodeId, String>,
    forms: Vec<FormBinding>,
    field_owner: BTreeMap<NodeId, usize>,
    logger: Logger,
}

impl Binder {
    pub fn scan(dom: &dyn ElementLocator, page: &PageContext) -> Self {
        let logger = Logger::new("sitetag/instrument");
        let mut phone_links = BTreeMap::new();
        let mut faq_toggles = BTreeMap::new();
        let mut outbound_links = BTreeMap::new();
        let mut cta_buttons = BTreeMap::new();
        let mut forms = Vec::new();
        let mut field_owner = BTreeMap::new();

        let mut faq_index = 0;
        for node in dom.document_order() {
            if let Some(href) = dom.href(node) {
                if let Some(number) = href.strip_prefix("tel:") {
                    phone_links.insert(node, number.to_owned());
                } else if page.is_outbound(&href) {
                    outbound_links.insert(node, href);
                }
            }

            if dom.has_class(node, FAQ_TOGGLE_CLASS) {
                faq_index += 1;
                faq_toggles.insert(node, faq_index);
            }

            if dom.has_class(node, CTA_CLASS) {
                let cta_type = dom
                    .attr(node, "data-cta-type")
                    .unwrap_or_else(|| "button".to_owned());
                cta_buttons.insert(node, cta_type);
            }

            if dom.tag(node) == "form" {
                let name = dom
                    .element_id(node)
                    .or_else(|| dom.attr(node, "name"))
                    .unwrap_or_else(|| FALLBACK_FORM_NAME.to_owned());
                let index = forms.len();
                for field in dom.descendants(node) {
                    if FORM_FIELD_TAGS.contains(&dom.tag(field).as_str()) {
                        field_owner.insert(field, index);
                    }
                }
                forms.push(FormBinding {
                    node,
                    name,
                    started: false,
                });
            }
        }

        logger.debug(&format!(
            "bound {} phone, {} faq, {} outbound, {} cta, {} forms",
            phone_links.len(),
            faq_toggles.len(),
            outbound_links.len(),
            cta_buttons.len(),
            forms.len()
        ));

        Self {
            phone_links,
            faq_toggles,
            outbound_links,
            cta_buttons,
            forms,
            field_owner,
            logger,
        }
    }

    /// Resolves a click anywhere inside a tracked element. The target's
    /// ancestry is walked so clicks on nested markup still match, the way a
    /// bubbled event reaches the listener's element.
    pub fn handle_click(&self, dom: &dyn ElementLocator, target: NodeId) -> Option<DomainEvent> {
        for node in dom.ancestry(target) {
            if let Some(number) = self.phone_links.get(&node) {
                return Some(DomainEvent::PhoneClicked {
                    phone_number: number.clone(),
                    location: click_location(dom, node),
                });
            }
            if let Some(index) = self.faq_toggles.get(&node) {
                return Some(DomainEvent::FaqToggled {
                    question_text: dom.text(node).trim().to_owned(),
                    question_index: *index,
                });
            }
            if let Some(url) = self.outbound_links.get(&node) {
                return Some(DomainEvent::OutboundClicked {
                    url: url.clone(),
                    link_text: dom.text(node),
                });
            }
            if let Some(cta_type) = self.cta_buttons.get(&node) {
                return Some(DomainEvent::CtaClicked {
                    cta_text: dom.text(node).trim().to_owned(),
                    cta_location: click_location(dom, node),
                    cta_type: cta_type.clone(),
                });
            }
        }
        None
    }

    /// Marks the owning form as started on the first field focus. Later
    /// focuses on the same form return `None`.
    pub fn handle_focus(&mut self, field: NodeId) -> Option<DomainEvent> {
        let index = *self.field_owner.get(&field)?;
        let form = &mut self.forms[index];
        if form.started {
            return None;
        }
        form.started = true;
        self.logger.debug(&format!("form \"{}\" started", form.name));
        Some(DomainEvent::FormStarted {
            form_name: form.name.clone(),
        })
    }

    pub fn handle_submit(&self, form: NodeId) -> Option<DomainEvent> {
        let binding = self.forms.iter().find(|candidate| candidate.node == form)?;
        Some(DomainEvent::FormSubmitted {
            form_name: binding.name.clone(),
        })
    }

    pub fn tracked_forms(&self) -> usize {
        self.forms.len()
    }

    pub fn tracked_faqs(&self) -> usize {
        self.faq_toggles.len()
    }
}

/// A `data-location` attribute wins over structural detection.
fn click_location(dom: &dyn ElementLocator, node: NodeId) -> String {
    dom.attr(node, "data-location")
        .unwrap_or_else(|| dom.detect_location(node).as_str().to_owned())
}
