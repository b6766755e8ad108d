use super::*;

/// Removes non-content overlays, such as embedded player chrome.
pub struct RemoveOverlaysStage;

impl Stage for RemoveOverlaysStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let selectors = &context.options().overlay_selectors;

    let mut document = context.document();

    let removed = selectors
      .iter()
      .map(|selector| document.remove_elements(selector))
      .sum::<usize>();

    debug!(removed, "removed overlay elements");

    Ok(())
  }
}
