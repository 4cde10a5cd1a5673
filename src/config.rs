use super::*;

/// Per-deployment settings, loadable from a TOML file.
///
/// Everything is optional; unset keys leave the defaults (or CLI flags)
/// alone. The legacy host list is additive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  pub hostname: Option<String>,
  pub base_path: Option<String>,
  #[serde(default)]
  pub legacy_hosts: Vec<String>,
  pub attributes: Option<Vec<String>>,
}

impl SiteConfig {
  /// Overlays the config onto a set of options.
  pub fn apply(&self, options: NormalizerOptions) -> NormalizerOptions {
    let mut options = options;

    if let Some(attributes) = &self.attributes {
      options.attributes = attributes.clone();
    }

    options
      .legacy_hosts
      .extend(self.legacy_hosts.iter().cloned());

    options
  }

  pub fn load(path: &Path) -> Result<Self> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(toml::from_str(&raw)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loads_partial_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");

    fs::write(
      &path,
      r#"
        hostname = "user.github.io"
        legacy_hosts = ["user.github.io"]
      "#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();

    assert_eq!(config.hostname.as_deref(), Some("user.github.io"));
    assert_eq!(config.base_path, None);
    assert_eq!(config.legacy_hosts, vec!["user.github.io"]);
    assert_eq!(config.attributes, None);
  }

  #[test]
  fn apply_extends_legacy_hosts_and_replaces_attributes() {
    let config = SiteConfig {
      hostname: None,
      base_path: None,
      legacy_hosts: vec![String::from("user.github.io")],
      attributes: Some(vec![String::from("href")]),
    };

    let options = config.apply(NormalizerOptions::default());

    assert_eq!(options.attributes, vec!["href"]);
    assert_eq!(options.legacy_hosts, vec!["user.github.io"]);
  }

  #[test]
  fn missing_file_is_a_config_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
      SiteConfig::load(&dir.path().join("absent.toml")),
      Err(Error::ConfigRead { .. })
    ));
  }
}
