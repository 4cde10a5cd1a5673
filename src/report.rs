use super::*;

/// Summary of one normalization pass over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
  pub examined: usize,
  pub rewritten: usize,
  pub legacy_remapped: usize,
  pub nav_marked: usize,
  pub assets: Vec<AssetRef>,
}

/// A root-absolute asset reference found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
  /// The attribute value as written into the document.
  pub url: String,
  /// The same reference relative to the site root, prefix stripped.
  pub site_path: String,
}
