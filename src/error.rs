use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to read config from `{path}`: {source}")]
  ConfigRead {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("invalid config: {source}")]
  ConfigParse {
    #[from]
    source: toml::de::Error,
  },
  #[error("invalid hostname `{hostname}`: {source}")]
  InvalidHostname {
    hostname: String,
    source: url::ParseError,
  },
}
