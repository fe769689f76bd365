use std::time::Duration;

use crate::dom::{ElementLocator, MemoryDom, NodeId};

/// How long the confirmation state stays on screen before the form resets.
pub const CONFIRMATION_RESET_DELAY: Duration = Duration::from_secs(2);

const FIELD_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Result of a simulated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the form shows its confirmation state until the
    /// host fires the scheduled reset.
    Accepted,
    /// Required fields left empty, flagged with the `invalid` class.
    Invalid(Vec<NodeId>),
}

/// Client-side form handling with no network request. Validation messaging
/// is advisory: invalid fields get a visual flag, nothing throws or logs.
#[derive(Clone, Debug)]
pub struct MockSubmit {
    dom: MemoryDom,
}

impl MockSubmit {
    pub fn new(dom: MemoryDom) -> Self {
        Self { dom }
    }

    /// Simulates submitting `form` in place of default submission.
    pub fn submit(&self, form: NodeId) -> SubmitOutcome {
        let mut invalid = Vec::new();
        for field in self.required_fields(form) {
            let value = self.dom.attr(field, "value").unwrap_or_default();
            if value.trim().is_empty() {
                self.dom.add_class(field, "invalid");
                invalid.push(field);
            } else {
                self.dom.remove_class(field, "invalid");
            }
        }

        if !invalid.is_empty() {
            return SubmitOutcome::Invalid(invalid);
        }

        self.dom.add_class(form, "submitted");
        SubmitOutcome::Accepted
    }

    /// Clears the confirmation state and empties every field. The host calls
    /// this [`CONFIRMATION_RESET_DELAY`] after an accepted submission.
    pub fn reset(&self, form: NodeId) {
        self.dom.remove_class(form, "submitted");
        for field in self.fields(form) {
            self.dom.set_attr(field, "value", "");
            self.dom.remove_class(field, "invalid");
        }
    }

    fn fields(&self, form: NodeId) -> Vec<NodeId> {
        self.dom
            .descendants(form)
            .into_iter()
            .filter(|node| FIELD_TAGS.contains(&self.dom.tag(*node).as_str()))
            .collect()
    }

    fn required_fields(&self, form: NodeId) -> Vec<NodeId> {
        self.fields(form)
            .into_iter()
            .filter(|node| self.dom.attr(*node, "required").is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementSpec;

    fn contact_form(dom: &MemoryDom) -> (NodeId, NodeId, NodeId) {
        let body = dom.insert(None, ElementSpec::new("body"));
        let form = dom.insert(Some(body), ElementSpec::new("form").id("contact"));
        let name = dom.insert(
            Some(form),
            ElementSpec::new("input").attr("required", "").attr("value", ""),
        );
        let note = dom.insert(
            Some(form),
            ElementSpec::new("textarea").attr("required", ""),
        );
        (form, name, note)
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let dom = MemoryDom::new();
        let (form, name, note) = contact_form(&dom);
        let handler = MockSubmit::new(dom.clone());

        assert_eq!(handler.submit(form), SubmitOutcome::Invalid(vec![name, note]));
        assert!(dom.has_class(name, "invalid"));
        assert!(!dom.has_class(form, "submitted"));
    }

    #[test]
    fn filled_form_is_accepted_and_resets() {
        let dom = MemoryDom::new();
        let (form, name, note) = contact_form(&dom);
        dom.set_attr(name, "value", "Ada");
        dom.set_attr(note, "value", "Cancel my service");
        let handler = MockSubmit::new(dom.clone());

        assert_eq!(handler.submit(form), SubmitOutcome::Accepted);
        assert!(dom.has_class(form, "submitted"));

        handler.reset(form);
        assert!(!dom.has_class(form, "submitted"));
        assert_eq!(dom.attr(name, "value").as_deref(), Some(""));
    }

    #[test]
    fn fixing_a_field_clears_its_flag_on_resubmit() {
        let dom = MemoryDom::new();
        let (form, name, note) = contact_form(&dom);
        let handler = MockSubmit::new(dom.clone());

        handler.submit(form);
        dom.set_attr(name, "value", "Ada");
        let outcome = handler.submit(form);

        assert_eq!(outcome, SubmitOutcome::Invalid(vec![note]));
        assert!(!dom.has_class(name, "invalid"));
        assert!(dom.has_class(note, "invalid"));
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let dom = MemoryDom::new();
        let (form, name, note) = contact_form(&dom);
        dom.set_attr(name, "value", "   ");
        dom.set_attr(note, "value", "ok");
        let handler = MockSubmit::new(dom.clone());

        assert_eq!(handler.submit(form), SubmitOutcome::Invalid(vec![name]));
    }
}
