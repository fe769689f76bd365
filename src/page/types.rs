use std::fmt;

use url::Url;

/// Runtime environment, decided once when the page context is built.
///
/// Components that behave differently in local development (the analytics
/// diagnostic trace) branch on the value captured at construction rather than
/// re-checking the host at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Production,
    LocalDevelopment,
}

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Snapshot of the page a visitor landed on: path, title, and the full URL
/// including any query string. Immutable for the lifetime of the page view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    url: Url,
    title: String,
}

impl PageContext {
    pub fn new(url: &str, title: impl Into<String>) -> Result<Self, PageContextError> {
        let url = Url::parse(url).map_err(|err| PageContextError::InvalidUrl {
            url: url.to_string(),
            source: err,
        })?;
        Ok(Self {
            url,
            title: title.into(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn page_url(&self) -> &str {
        self.url.as_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn environment(&self) -> Environment {
        if LOCAL_HOSTS.contains(&self.hostname()) {
            Environment::LocalDevelopment
        } else {
            Environment::Production
        }
    }

    /// True when `href` points at a different origin than this page.
    pub fn is_outbound(&self, href: &str) -> bool {
        match Url::parse(href) {
            Ok(target) => match (target.host_str(), self.url.host_str()) {
                (Some(target_host), Some(own_host)) => target_host != own_host,
                _ => false,
            },
            // Relative or malformed hrefs stay on the current origin.
            Err(_) => false,
        }
    }
}

#[derive(Debug)]
pub enum PageContextError {
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

impl fmt::Display for PageContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageContextError::InvalidUrl { url, source } => {
                write!(f, "invalid page url \"{url}\": {source}")
            }
        }
    }
}

impl std::error::Error for PageContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageContextError::InvalidUrl { source, .. } => Some(source),
        }
    }
}
