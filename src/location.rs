use super::*;

/// The address a page is served at, standing in for the browser `location`
/// object so the rewrite logic is testable without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
  hostname: String,
  path: String,
}

impl PageLocation {
  pub fn hostname(&self) -> &str {
    &self.hostname
  }

  pub fn new(hostname: impl Into<String>, path: impl Into<String>) -> Self {
    Self {
      hostname: hostname.into(),
      path: path.into(),
    }
  }

  /// The site origin as a URL, used to resolve relative link targets.
  pub(crate) fn origin(&self) -> Result<Url> {
    let raw = format!("https://{}/", self.hostname);

    Url::parse(&raw).map_err(|source| Error::InvalidHostname {
      hostname: self.hostname.clone(),
      source,
    })
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub(crate) fn prefix(&self) -> SitePrefix {
    SitePrefix::resolve(&self.hostname, &self.path)
  }
}
