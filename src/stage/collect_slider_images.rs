use super::*;

/// Recovers slider images from the clone once an article was extracted.
pub struct CollectSliderImagesStage;

impl Stage for CollectSliderImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if context.article().is_none() {
      return Ok(());
    }

    let recovered = collect(context.html(), context.base_url());

    debug!(images = recovered.len(), "collected slider images");

    context.set_recovered(recovered);

    Ok(())
  }
}
