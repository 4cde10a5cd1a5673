use super::*;

/// Rewrites link and asset attributes to be root-absolute under the site
/// prefix. Each element is processed independently; values that match no
/// rewrite pattern are skipped, never an error.
pub struct RewriteUrlsStage;

impl Stage for RewriteUrlsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let attributes = context.options().attributes.clone();
    let legacy_hosts = context.options().legacy_hosts.clone();
    let prefix = context.prefix().clone();

    let mut examined = 0;
    let mut rewritten = 0;
    let mut legacy_remapped = 0;

    for attribute in &attributes {
      let (seen, changed) =
        context.document().rewrite_attribute(attribute, |value| {
          let legacy =
            classify(value, &legacy_hosts) == UrlKind::LegacyCrossSite;

          match rewrite_url(value, &prefix, &legacy_hosts) {
            Cow::Borrowed(_) => None,
            Cow::Owned(new_value) => {
              if legacy {
                legacy_remapped += 1;
              }

              Some(new_value)
            }
          }
        });

      examined += seen;
      rewritten += changed;
    }

    let report = context.report_mut();

    report.examined += examined;
    report.rewritten += rewritten;
    report.legacy_remapped += legacy_remapped;

    Ok(())
  }
}
