use super::*;

mod collect_slider_images;
mod compose_recovery;
mod extract_article;
mod normalize_lazy_images;
mod remove_overlays;

pub use {
  collect_slider_images::CollectSliderImagesStage,
  compose_recovery::ComposeRecoveryStage,
  extract_article::ExtractArticleStage,
  normalize_lazy_images::NormalizeLazyImagesStage,
  remove_overlays::RemoveOverlaysStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
