use super::*;

/// Makes lazily loaded and background images visible to the extractor.
///
/// Every `img` gets its best real source written to `src`. Elements that only
/// show images through an inline `background-image` receive one synthetic
/// `img` child per background layer.
pub struct NormalizeLazyImagesStage;

impl Stage for NormalizeLazyImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let base_url = context.base_url();

    let document = context.document();

    let rewritten = Self::rewrite_image_sources(&document, base_url);

    let synthesized = Self::synthesize_background_images(&document, base_url);

    debug!(rewritten, synthesized, "normalized lazy images");

    Ok(())
  }
}

impl NormalizeLazyImagesStage {
  pub(crate) const BACKGROUND_MARKER: &'static str = "data-clipper-background";

  fn rewrite_image_sources(document: &Document<'_>, base_url: &Url) -> usize {
    let images = document.select("img");

    let mut rewritten = 0;

    for node in images.nodes() {
      if let Some(url) = first_valid_source(node, base_url) {
        node.set_attr("src", &url);
        rewritten += 1;
      }
    }

    rewritten
  }

  fn synthesize_background_images(
    document: &Document<'_>,
    base_url: &Url,
  ) -> usize {
    let elements = document.select(slider::BACKGROUND_SELECTOR);

    let mut synthesized = 0;

    for node in elements.nodes() {
      if node.node_name().as_deref() == Some("img")
        || Selection::from(node.clone()).select("img").length() > 0
      {
        continue;
      }

      for url in candidate::background_sources(node, base_url) {
        let image = document.new_element("img");

        image.set_attr("src", &url);
        image.set_attr("alt", "");
        image.set_attr(Self::BACKGROUND_MARKER, "true");

        node.append_child(&image);

        synthesized += 1;
      }
    }

    synthesized
  }
}
