use super::*;

/// The root-absolute path prefix under which the current site is served.
///
/// `/` for root-served sites, `/<project>/` for GitHub Pages project sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePrefix(String);

impl SitePrefix {
  /// Joins a site-relative path (no leading slash) under the prefix.
  pub(crate) fn apply(&self, site_relative: &str) -> String {
    format!("{}{site_relative}", self.0)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_root(&self) -> bool {
    self.0 == "/"
  }

  /// Derives the prefix from the hostname and path a page is served at.
  ///
  /// Total over all inputs: anything that is not a GitHub Pages project
  /// site, or has an empty path, resolves to the root prefix.
  pub fn resolve(hostname: &str, path: &str) -> Self {
    if !re::GITHUB_PAGES_HOST.is_match(hostname) {
      return Self::root();
    }

    match path.split('/').find(|segment| !segment.is_empty()) {
      Some(project) => Self(format!("/{project}/")),
      None => Self::root(),
    }
  }

  pub fn root() -> Self {
    Self(String::from("/"))
  }

  /// Strips the prefix, returning the site-relative remainder.
  pub(crate) fn strip<'a>(&self, value: &'a str) -> Option<&'a str> {
    value.strip_prefix(self.0.as_str())
  }
}

impl fmt::Display for SitePrefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn github_pages_host_uses_first_path_segment() {
    assert_eq!(
      SitePrefix::resolve("user.github.io", "/repo/page.html").as_str(),
      "/repo/"
    );
    assert_eq!(
      SitePrefix::resolve("user.github.io", "/repo/menu/index.html").as_str(),
      "/repo/"
    );
  }

  #[test]
  fn custom_domain_resolves_to_root() {
    assert_eq!(
      SitePrefix::resolve("example.com", "/page.html").as_str(),
      "/"
    );
  }

  #[test]
  fn empty_path_resolves_to_root() {
    assert!(SitePrefix::resolve("user.github.io", "").is_root());
    assert!(SitePrefix::resolve("user.github.io", "/").is_root());
  }

  #[test]
  fn strip_is_segment_safe() {
    let prefix = SitePrefix::resolve("user.github.io", "/repo/index.html");

    assert_eq!(prefix.strip("/repo/a.css"), Some("a.css"));
    assert_eq!(prefix.strip("/repository/a.css"), None);
    assert_eq!(prefix.strip("https://example.com/"), None);
  }
}
