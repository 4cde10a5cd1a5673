use super::*;

/// Records root-absolute `src` references, prefix stripped back to a
/// site-relative path, so callers can verify the files exist on disk.
/// Runs after the rewrite pass; external and `data:` sources never carry
/// the prefix and are skipped naturally.
pub struct CollectAssetsStage;

impl Stage for CollectAssetsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if !context.options().collect_assets {
      return Ok(());
    }

    let prefix = context.prefix().clone();
    let mut assets = Vec::new();

    context.document().visit_attribute("src", |value| {
      let Some(remainder) = prefix.strip(value) else {
        return;
      };

      let site_path = remainder
        .split(['?', '#'])
        .next()
        .unwrap_or(remainder)
        .to_string();

      if site_path.is_empty() {
        return;
      }

      assets.push(AssetRef {
        url: value.to_string(),
        site_path,
      });
    });

    context.report_mut().assets.extend(assets);

    Ok(())
  }
}
