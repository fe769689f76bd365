mod types;

pub use types::{Environment, PageContext, PageContextError};
