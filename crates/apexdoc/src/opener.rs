use crate::error::{ApexDocError, Result};

/// Hands a URL to something that can display it.
pub trait Opener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform handler, or a named browser application.
/// The launched process is detached and not waited on.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::debug!(url, browser = ?self.browser, "Opening documentation page");
        let launched = match &self.browser {
            Some(app) => open::with_detached(url, app),
            None => open::that_detached(url),
        };
        launched.map_err(|source| ApexDocError::Launch {
            url: url.to_string(),
            source,
        })
    }
}
