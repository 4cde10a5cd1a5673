use super::*;

pub(crate) struct Document<'a> {
  document: &'a dom_query::Document,
}

impl<'a> Document<'a> {
  /// Sets `attribute` to `value` on every element matched by `selector`
  /// whose `href` satisfies `should_mark`. Returns the number marked.
  pub(crate) fn mark_links<F>(
    &self,
    selector: &str,
    attribute: &str,
    value: &str,
    mut should_mark: F,
  ) -> usize
  where
    F: FnMut(&str) -> bool,
  {
    let mut marked = 0;

    for mut element in self.document.select(selector).iter() {
      let Some(href) = element.attr("href") else {
        continue;
      };

      if should_mark(&href) {
        element.set_attr(attribute, value);
        marked += 1;
      }
    }

    marked
  }

  pub(crate) fn new(document: &'a dom_query::Document) -> Self {
    Self { document }
  }

  /// Applies `transform` to every element carrying `attribute`, writing the
  /// value back when it returns a replacement. Returns (examined, changed).
  pub(crate) fn rewrite_attribute<F>(
    &self,
    attribute: &str,
    mut transform: F,
  ) -> (usize, usize)
  where
    F: FnMut(&str) -> Option<String>,
  {
    let mut examined = 0;
    let mut changed = 0;

    for mut element in self.document.select(&format!("[{attribute}]")).iter() {
      let Some(value) = element.attr(attribute) else {
        continue;
      };

      examined += 1;

      if let Some(rewritten) = transform(&value) {
        element.set_attr(attribute, &rewritten);
        changed += 1;
      }
    }

    (examined, changed)
  }

  /// Invokes `visit` with every value of `attribute` in document order.
  pub(crate) fn visit_attribute<F>(&self, attribute: &str, mut visit: F)
  where
    F: FnMut(&str),
  {
    for element in self.document.select(&format!("[{attribute}]")).iter() {
      if let Some(value) = element.attr(attribute) {
        visit(&value);
      }
    }
  }
}
