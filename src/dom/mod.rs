mod locator;
mod memory;
mod types;

pub use locator::ElementLocator;
pub use memory::{ElementSpec, MemoryDom};
pub use types::{NodeId, PageLocation};
