mod binder;
mod events;

pub use binder::Binder;
pub use events::{dispatch, DomainEvent};
