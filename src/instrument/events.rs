use crate::analytics::{EventSink, TrackEvents};

/// A user interaction recognized by the [`super::Binder`], carrying the data
/// an emission needs and nothing about how it was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainEvent {
    PhoneClicked {
        phone_number: String,
        location: String,
    },
    /// First focus on any field of a form. Fired once per form per page view.
    FormStarted { form_name: String },
    FormSubmitted { form_name: String },
    FaqToggled {
        question_text: String,
        /// 1-based position of the question on the page.
        question_index: usize,
    },
    OutboundClicked { url: String, link_text: String },
    CtaClicked {
        cta_text: String,
        cta_location: String,
        cta_type: String,
    },
}

/// Routes a recognized interaction to its fixed event emission.
pub fn dispatch(event: &DomainEvent, sink: &dyn EventSink) {
    match event {
        DomainEvent::PhoneClicked {
            phone_number,
            location,
        } => sink.track_phone_click(phone_number, location),
        DomainEvent::FormStarted { form_name } => sink.track_form_start(form_name),
        DomainEvent::FormSubmitted { form_name } => sink.track_form_submit(form_name, true),
        DomainEvent::FaqToggled {
            question_text,
            question_index,
        } => sink.track_faq_expand(question_text, *question_index),
        DomainEvent::OutboundClicked { url, link_text } => {
            sink.track_outbound_click(url, link_text)
        }
        DomainEvent::CtaClicked {
            cta_text,
            cta_location,
            cta_type,
        } => sink.track_cta_click(cta_text, cta_location, cta_type),
    }
}
