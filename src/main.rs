use {
  anyhow::{Context, bail},
  clap::Parser,
  pagebase::{Normalized, Normalizer, NormalizerOptions, PageLocation, SiteConfig},
  std::{
    fs,
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::EnvFilter,
  walkdir::WalkDir,
};

#[derive(Parser)]
#[command(name = "pagebase")]
#[command(
  about = "Rewrite static-site URLs to work under a project subpath",
  long_about = None
)]
struct Arguments {
  /// HTML file or site directory to process
  #[arg(value_name = "PATH")]
  input: PathBuf,

  /// Hostname the site is served from
  #[arg(long, value_name = "HOST")]
  hostname: Option<String>,

  /// Path at which the site root is served
  #[arg(long, value_name = "PATH")]
  base_path: Option<String>,

  /// Legacy project host whose links are remapped into this site
  #[arg(long = "legacy-host", value_name = "HOST")]
  legacy_hosts: Vec<String>,

  /// Attribute to rewrite (defaults to href and src)
  #[arg(long = "attribute", value_name = "NAME")]
  attributes: Vec<String>,

  /// TOML deployment config
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Rewrite files in place instead of printing to stdout
  #[arg(long)]
  write: bool,

  /// Print a JSON report of the pass
  #[arg(long)]
  report: bool,

  /// Warn about asset references with no file under the site directory
  #[arg(long)]
  check_assets: bool,
}

#[derive(serde::Serialize)]
struct FileReport {
  path: PathBuf,
  #[serde(flatten)]
  report: pagebase::RewriteReport,
}

impl Arguments {
  fn run(self) -> Result {
    let config = match &self.config {
      Some(path) => SiteConfig::load(path)?,
      None => SiteConfig::default(),
    };

    let hostname = self
      .hostname
      .clone()
      .or_else(|| config.hostname.clone())
      .unwrap_or_else(|| String::from("localhost"));

    let base_path = normalize_base_path(
      self
        .base_path
        .clone()
        .or_else(|| config.base_path.clone())
        .as_deref()
        .unwrap_or("/"),
    );

    let mut options = config.apply(NormalizerOptions::default());
    options.legacy_hosts.extend(self.legacy_hosts.iter().cloned());

    if !self.attributes.is_empty() {
      options.attributes = self.attributes.clone();
    }

    let files = collect_inputs(&self.input)?;

    if files.is_empty() {
      bail!("no HTML files found under `{}`", self.input.display());
    }

    let single_file = self.input.is_file();

    if !single_file && !self.write && !self.report && !self.check_assets {
      bail!("pass --write, --report, or --check-assets to process a directory");
    }

    let site_root = if single_file {
      self.input.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
      self.input.clone()
    };

    let mut reports = Vec::new();

    for (file, relative) in &files {
      let html = fs::read_to_string(file)
        .with_context(|| format!("failed to read file from `{}`", file.display()))?;

      let location =
        PageLocation::new(hostname.clone(), page_path(&base_path, relative));

      let mut normalizer = Normalizer::new(&html, location, options.clone());

      let normalized = normalizer
        .run()
        .with_context(|| format!("failed to normalize `{}`", file.display()))?;

      if self.check_assets {
        warn_missing_assets(&site_root, file, &normalized);
      }

      if self.write {
        if normalized.report.rewritten > 0 || normalized.report.nav_marked > 0 {
          fs::write(file, &normalized.html).with_context(|| {
            format!("failed to write `{}`", file.display())
          })?;

          tracing::info!(
            path = %file.display(),
            rewritten = normalized.report.rewritten,
            "updated"
          );
        }
      } else if single_file && !self.report {
        println!("{}", normalized.html);
      }

      reports.push(FileReport {
        path: file.clone(),
        report: normalized.report,
      });
    }

    if self.report {
      println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
  }
}

fn collect_inputs(input: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
  if input.is_file() {
    let name = input.file_name().map(PathBuf::from).unwrap_or_default();

    return Ok(vec![(input.to_path_buf(), name)]);
  }

  let mut files = Vec::new();

  for entry in WalkDir::new(input) {
    let entry = entry?;

    if entry.file_type().is_file()
      && entry.path().extension().is_some_and(|ext| ext == "html")
    {
      let relative = entry.path().strip_prefix(input)?.to_path_buf();

      files.push((entry.path().to_path_buf(), relative));
    }
  }

  files.sort();

  Ok(files)
}

fn normalize_base_path(raw: &str) -> String {
  let trimmed = raw.trim_matches('/');

  if trimmed.is_empty() {
    String::from("/")
  } else {
    format!("/{trimmed}/")
  }
}

fn page_path(base_path: &str, relative: &Path) -> String {
  let segments = relative
    .components()
    .map(|component| component.as_os_str().to_string_lossy())
    .collect::<Vec<_>>();

  format!("{base_path}{}", segments.join("/"))
}

fn warn_missing_assets(site_root: &Path, file: &Path, normalized: &Normalized) {
  for asset in &normalized.report.assets {
    let target = site_root.join(&asset.site_path);

    if !target.exists() {
      tracing::warn!(
        page = %file.display(),
        asset = %asset.url,
        "missing asset"
      );
    }
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_writer(std::io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
