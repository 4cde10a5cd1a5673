use super::*;

/// Marks navigation links pointing at the current page with
/// `aria-current="page"`. Both sides of the comparison have a trailing
/// `/index.html` stripped so `/menu/` and `/menu/index.html` agree.
pub struct MarkCurrentNavStage;

impl Stage for MarkCurrentNavStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if !context.options().mark_nav {
      return Ok(());
    }

    let origin = context.location().origin()?;

    let here = re::INDEX_HTML_SUFFIX
      .replace(context.location().path(), "")
      .into_owned();

    let marked =
      context
        .document()
        .mark_links("nav a", "aria-current", "page", |href| {
          let Ok(target) = origin.join(href) else {
            return false;
          };

          re::INDEX_HTML_SUFFIX.replace(target.path(), "").as_ref() == here
        });

    context.report_mut().nav_marked += marked;

    Ok(())
  }
}
