use super::*;

pub(crate) struct Context<'a> {
  html: &'a dom_query::Document,
  location: &'a PageLocation,
  options: &'a NormalizerOptions,
  prefix: SitePrefix,
  report: RewriteReport,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&self) -> Document<'_> {
    Document::new(self.html)
  }

  pub(crate) fn location(&self) -> &PageLocation {
    self.location
  }

  pub(crate) fn new(
    html: &'a dom_query::Document,
    location: &'a PageLocation,
    options: &'a NormalizerOptions,
  ) -> Self {
    Self {
      html,
      location,
      options,
      prefix: location.prefix(),
      report: RewriteReport::default(),
    }
  }

  pub(crate) fn options(&self) -> &NormalizerOptions {
    self.options
  }

  pub(crate) fn prefix(&self) -> &SitePrefix {
    &self.prefix
  }

  pub(crate) fn report_mut(&mut self) -> &mut RewriteReport {
    &mut self.report
  }

  pub(crate) fn take_report(&mut self) -> RewriteReport {
    mem::take(&mut self.report)
  }
}
