mod accordion;
mod counter;
mod fade;
mod form;
mod scrolling;

pub use accordion::AccordionGroup;
pub use counter::{
    format_count, CounterAnimation, CounterRegistry, COUNTER_DURATION, COUNTER_FRAME,
    COUNTER_TRIGGER_RATIO,
};
pub use fade::{FadeInObserver, Reveal, FADE_HIDDEN_OFFSET_PX, FADE_STAGGER, FADE_THRESHOLD};
pub use form::{MockSubmit, SubmitOutcome, CONFIRMATION_RESET_DELAY};
pub use scrolling::{resolve_fragment, ScrollRequest, HEADER_HEIGHT};
