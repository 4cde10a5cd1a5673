use super::*;

/// The rewritten document plus the pass summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
  pub html: String,
  pub report: RewriteReport,
}

/// Applies the URL rewrite pipeline to one parsed document.
pub struct Normalizer {
  html: dom_query::Document,
  location: PageLocation,
  options: NormalizerOptions,
}

impl Normalizer {
  pub fn new(
    html: &str,
    location: PageLocation,
    options: NormalizerOptions,
  ) -> Self {
    Self {
      html: dom_query::Document::from(html),
      location,
      options,
    }
  }

  /// The prefix every rewrite in this document resolves against.
  pub fn prefix(&self) -> SitePrefix {
    self.location.prefix()
  }

  pub fn run(&mut self) -> Result<Normalized> {
    let context = Context::new(&self.html, &self.location, &self.options);

    let mut context = Pipeline::with_default_stages(context).run()?;

    let report = context.take_report();

    tracing::debug!(
      path = self.location.path(),
      examined = report.examined,
      rewritten = report.rewritten,
      "normalized document"
    );

    Ok(Normalized {
      html: self.html.html().to_string(),
      report,
    })
  }
}
