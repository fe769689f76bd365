mod config;
mod page;

pub use config::PageConfig;
pub use page::{initialize_page, initialize_page_with, PageRuntime};
