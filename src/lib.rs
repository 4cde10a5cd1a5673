use {
  crate::{
    context::Context,
    document::Document,
    pipeline::Pipeline,
    stage::{CollectAssetsStage, MarkCurrentNavStage, RewriteUrlsStage, Stage},
  },
  regex::Regex,
  serde::{Deserialize, Serialize},
  std::{borrow::Cow, fmt, fs, mem, path::Path, sync::LazyLock},
  url::Url,
};

pub use crate::{
  config::SiteConfig,
  error::Error,
  location::PageLocation,
  normalizer::{Normalized, Normalizer},
  options::{NormalizerOptions, NormalizerOptionsBuilder},
  prefix::SitePrefix,
  report::{AssetRef, RewriteReport},
  rewrite::{UrlKind, classify, rewrite_url},
};

mod config;
mod context;
mod document;
mod error;
mod location;
mod normalizer;
mod options;
mod pipeline;
mod prefix;
mod re;
mod report;
mod rewrite;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
