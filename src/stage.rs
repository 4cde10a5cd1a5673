use super::*;

mod collect_assets;
mod mark_current_nav;
mod rewrite_urls;

pub use {
  collect_assets::CollectAssetsStage, mark_current_nav::MarkCurrentNavStage,
  rewrite_urls::RewriteUrlsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
