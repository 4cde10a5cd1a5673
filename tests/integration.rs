use {
  dom_query::Document,
  pagebase::{Normalized, Normalizer, NormalizerOptions, PageLocation},
  pretty_assertions::assert_eq,
};

const PAGE: &str = r##"
<html>
  <head>
    <link rel="stylesheet" href="/_assets/css/site.css">
    <script src="/_assets/js/site.js"></script>
  </head>
  <body>
    <nav>
      <a href="/index.html">Home</a>
      <a href="/menu/index.html">Menu</a>
    </nav>
    <a id="up" href="../menu/index.html">Menu (relative)</a>
    <a id="external" href="https://example.com/page.html">External</a>
    <a id="mail" href="mailto:hello@example.com">Mail</a>
    <a id="anchor" href="#top">Top</a>
    <a id="legacy" href="https://user.github.io/other-repo/page.html">Old</a>
    <img id="logo" src="/_assets/img/logo.png">
  </body>
</html>
"##;

fn attr(html: &str, selector: &str, attribute: &str) -> String {
  Document::from(html)
    .select(selector)
    .attr(attribute)
    .map(|value| value.to_string())
    .unwrap_or_default()
}

fn options() -> NormalizerOptions {
  NormalizerOptions::builder()
    .legacy_hosts(["user.github.io"])
    .build()
}

fn normalize(hostname: &str, path: &str) -> Normalized {
  let mut normalizer =
    Normalizer::new(PAGE, PageLocation::new(hostname, path), options());

  normalizer.run().expect("normalization should succeed")
}

#[test]
fn rewrites_root_absolute_urls_under_the_project_prefix() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(
    attr(&normalized.html, "link", "href"),
    "/repo/_assets/css/site.css"
  );
  assert_eq!(
    attr(&normalized.html, "script", "src"),
    "/repo/_assets/js/site.js"
  );
  assert_eq!(
    attr(&normalized.html, "#logo", "src"),
    "/repo/_assets/img/logo.png"
  );
}

#[test]
fn normalizes_relative_urls_to_root_absolute() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(attr(&normalized.html, "#up", "href"), "/repo/menu/index.html");
}

#[test]
fn leaves_external_and_non_navigational_urls_alone() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(
    attr(&normalized.html, "#external", "href"),
    "https://example.com/page.html"
  );
  assert_eq!(
    attr(&normalized.html, "#mail", "href"),
    "mailto:hello@example.com"
  );
  assert_eq!(attr(&normalized.html, "#anchor", "href"), "#top");
}

#[test]
fn remaps_legacy_cross_site_links_into_this_site() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(attr(&normalized.html, "#legacy", "href"), "/repo/page.html");
  assert_eq!(normalized.report.legacy_remapped, 1);
}

#[test]
fn custom_domains_keep_root_absolute_urls() {
  let normalized = normalize("example.com", "/menu/index.html");

  assert_eq!(attr(&normalized.html, "link", "href"), "/_assets/css/site.css");
  assert_eq!(attr(&normalized.html, "#up", "href"), "/menu/index.html");
}

#[test]
fn marks_the_current_nav_link() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(normalized.report.nav_marked, 1);
  assert_eq!(
    attr(&normalized.html, "a[aria-current=page]", "href"),
    "/repo/menu/index.html"
  );
}

#[test]
fn collects_site_relative_asset_references() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  let site_paths = normalized
    .report
    .assets
    .iter()
    .map(|asset| asset.site_path.as_str())
    .collect::<Vec<_>>();

  assert_eq!(site_paths, vec!["_assets/js/site.js", "_assets/img/logo.png"]);
}

#[test]
fn reports_pass_counts() {
  let normalized = normalize("user.github.io", "/repo/menu/index.html");

  assert_eq!(normalized.report.examined, 10);
  assert_eq!(normalized.report.rewritten, 7);
}

#[test]
fn a_second_pass_is_the_identity() {
  let first = normalize("user.github.io", "/repo/menu/index.html");

  let mut normalizer = Normalizer::new(
    &first.html,
    PageLocation::new("user.github.io", "/repo/menu/index.html"),
    options(),
  );

  let second = normalizer.run().expect("second pass should succeed");

  assert_eq!(second.html, first.html);
  assert_eq!(second.report.rewritten, 0);
  assert_eq!(second.report.legacy_remapped, 0);
}
