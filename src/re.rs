use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static GITHUB_PAGES_HOST: LazyLock<Regex> =
  re!(r"(?i).*\.github\.io");

pub(crate) static INDEX_HTML_SUFFIX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"/index\.html$").unwrap());

pub(crate) static URL_SCHEME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").unwrap());
