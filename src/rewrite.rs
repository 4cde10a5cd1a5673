use super::*;

/// Classification of a raw `href`/`src` attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
  /// Absolute `http(s)` URL on a foreign host.
  Absolute,
  /// Empty value.
  Empty,
  /// In-page fragment reference (`#...`).
  Fragment,
  /// Absolute `http(s)` URL on a configured legacy project host.
  LegacyCrossSite,
  /// Carries a non-navigational scheme: `mailto:`, `tel:`, `data:`,
  /// `javascript:` and anything else that is not `http(s)`.
  Opaque,
  /// Protocol-relative URL (`//host/...`).
  ProtocolRelative,
  /// Relative path (`./...`, `../...` or a bare segment).
  Relative,
  /// Root-absolute path (`/...`).
  RootAbsolute,
}

pub fn classify(value: &str, legacy_hosts: &[String]) -> UrlKind {
  if value.is_empty() {
    return UrlKind::Empty;
  }

  if value.starts_with('#') {
    return UrlKind::Fragment;
  }

  if value.starts_with("//") {
    return UrlKind::ProtocolRelative;
  }

  if re::URL_SCHEME.is_match(value) {
    return match Url::parse(value) {
      Ok(url) if matches!(url.scheme(), "http" | "https") => {
        if url
          .host_str()
          .is_some_and(|host| is_legacy_host(host, legacy_hosts))
        {
          UrlKind::LegacyCrossSite
        } else {
          UrlKind::Absolute
        }
      }
      _ => UrlKind::Opaque,
    };
  }

  if value.starts_with('/') {
    return UrlKind::RootAbsolute;
  }

  UrlKind::Relative
}

/// Rewrites a single attribute value to be root-absolute under `prefix`.
///
/// Returns the input unchanged for values that must not be touched
/// (fragments, external URLs, non-navigational schemes) and for values
/// already under the prefix, so the rewrite is idempotent.
pub fn rewrite_url<'a>(
  value: &'a str,
  prefix: &SitePrefix,
  legacy_hosts: &[String],
) -> Cow<'a, str> {
  match classify(value, legacy_hosts) {
    UrlKind::Absolute
    | UrlKind::Empty
    | UrlKind::Fragment
    | UrlKind::Opaque
    | UrlKind::ProtocolRelative => Cow::Borrowed(value),
    UrlKind::LegacyCrossSite => {
      remap_legacy(value, prefix).map_or(Cow::Borrowed(value), Cow::Owned)
    }
    UrlKind::RootAbsolute => {
      if value.starts_with(prefix.as_str()) {
        Cow::Borrowed(value)
      } else {
        Cow::Owned(prefix.apply(&value[1..]))
      }
    }
    UrlKind::Relative => Cow::Owned(prefix.apply(strip_relative_segments(value))),
  }
}

fn is_legacy_host(host: &str, legacy_hosts: &[String]) -> bool {
  legacy_hosts
    .iter()
    .any(|legacy| legacy.eq_ignore_ascii_case(host))
}

/// Remaps a cross-project link by discarding the old project segment and
/// rebasing the remainder under the current prefix.
fn remap_legacy(value: &str, prefix: &SitePrefix) -> Option<String> {
  let url = Url::parse(value).ok()?;

  let remainder = url
    .path()
    .split('/')
    .filter(|segment| !segment.is_empty())
    .skip(1)
    .collect::<Vec<_>>()
    .join("/");

  let mut rewritten = prefix.apply(&remainder);

  if let Some(query) = url.query() {
    rewritten.push('?');
    rewritten.push_str(query);
  }

  if let Some(fragment) = url.fragment() {
    rewritten.push('#');
    rewritten.push_str(fragment);
  }

  Some(rewritten)
}

fn strip_relative_segments(value: &str) -> &str {
  let mut rest = value;

  loop {
    if let Some(stripped) = rest.strip_prefix("./") {
      rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix("../") {
      rest = stripped;
    } else {
      return rest;
    }
  }
}
