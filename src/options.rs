#[derive(Debug, Clone)]
pub struct NormalizerOptions {
  /// Attributes whose values are rewritten.
  pub attributes: Vec<String>,
  pub collect_assets: bool,
  /// Hosts whose absolute links are remapped into this site.
  pub legacy_hosts: Vec<String>,
  pub mark_nav: bool,
}

impl Default for NormalizerOptions {
  fn default() -> Self {
    Self {
      attributes: vec![String::from("href"), String::from("src")],
      collect_assets: true,
      legacy_hosts: Vec::new(),
      mark_nav: true,
    }
  }
}

impl NormalizerOptions {
  #[must_use]
  pub fn builder() -> NormalizerOptionsBuilder {
    NormalizerOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct NormalizerOptionsBuilder {
  inner: NormalizerOptions,
}

impl NormalizerOptionsBuilder {
  #[must_use]
  pub fn attributes<I, S>(self, attributes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: NormalizerOptions {
        attributes: attributes.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> NormalizerOptions {
    self.inner
  }

  #[must_use]
  pub fn collect_assets(self, collect_assets: bool) -> Self {
    Self {
      inner: NormalizerOptions {
        collect_assets,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn legacy_hosts<I, S>(self, legacy_hosts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: NormalizerOptions {
        legacy_hosts: legacy_hosts.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn mark_nav(self, mark_nav: bool) -> Self {
    Self {
      inner: NormalizerOptions {
        mark_nav,
        ..self.inner
      },
    }
  }
}
