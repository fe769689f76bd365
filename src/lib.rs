//! `sitetag` models the client-side behavior of a marketing website as a
//! deterministic, host-driven engine: analytics events flow into a
//! tag-management data layer, campaign attribution is captured once per
//! session, a popup rotation controller cycles promotional overlays, and
//! page effects (accordions, smooth scroll, fade-ins, counters) are exposed
//! as pure state machines.
//!
//! There is no real DOM. Browser facilities are modeled behind narrow seams
//! ([`dom::ElementLocator`] for the document, [`attribution::SessionStore`]
//! for session storage, [`engage::Clock`] and [`popup::TimerQueue`] for
//! timers), each with an in-memory implementation, so every behavior is
//! unit-testable without a browser.
//!
//! [`runtime::initialize_page`] wires the pieces together the way a page
//! bootstrap would, and returns a [`runtime::PageRuntime`] whose notification
//! methods (`on_click`, `on_scroll`, `on_tick`, ...) the host event loop
//! drives.

pub mod analytics;
pub mod attribution;
pub mod dom;
pub mod effects;
pub mod engage;
pub mod instrument;
pub mod logger;
pub mod page;
pub mod popup;
pub mod runtime;
pub mod structured_data;
