use super::*;

/// Carousel widgets whose slides hold the article's images.
pub(crate) const CONTAINER_SELECTOR: &str = concat!(
  ".media-container, .swiper, .swiper-container, .slick-slider, ",
  ".owl-carousel, .carousel, .splide, .glide, .flickity-slider"
);

/// Classes carousel libraries put on slides duplicated for infinite looping.
pub(crate) const CLONE_MARKERS: &[&str] = &[
  "swiper-slide-duplicate",
  "slick-cloned",
  "cloned",
  "splide__slide--clone",
  "glide__slide--clone",
  "is-clone",
];

pub(crate) const BACKGROUND_SELECTOR: &str =
  "[style*=\"background-image\" i]";

static CANDIDATE_SELECTOR: LazyLock<String> = LazyLock::new(|| {
  format!(
    "img, {}, {BACKGROUND_SELECTOR}",
    *candidate::LAZY_ATTRIBUTE_SELECTOR
  )
});

/// Recovers slider images in document order.
///
/// Containers are visited once each, in document order. Inside a container
/// every image-bearing descendant contributes its resolved URLs unless it sits
/// in a cloned slide. A URL keeps the position of its first discovery.
pub fn collect(document: &dom_query::Document, base_url: &Url) -> RecoveredSequence {
  let mut sequence = RecoveredSequence::default();

  let mut visited: HashSet<NodeId> = HashSet::new();

  let mut index = 0;

  let containers = document.select(CONTAINER_SELECTOR);

  for container in containers.nodes() {
    if !visited.insert(container.id) {
      continue;
    }

    let candidates =
      Selection::from(container.clone()).select(CANDIDATE_SELECTOR.as_str());

    for node in candidates.nodes() {
      if is_cloned_slide(node) {
        continue;
      }

      for url in node_sources(node, base_url) {
        if sequence.push(ImageCandidate { index, url }) {
          debug!(index, "recovered slider image");
        }

        index += 1;
      }
    }
  }

  sequence
}

fn has_clone_marker(node: &NodeRef<'_>) -> bool {
  node.attr("class").is_some_and(|class| {
    class
      .split_whitespace()
      .any(|name| CLONE_MARKERS.contains(&name))
  })
}

fn is_cloned_slide(node: &NodeRef<'_>) -> bool {
  let mut current = Some(node.clone());

  while let Some(node) = current {
    if has_clone_marker(&node) {
      return true;
    }

    current = node.parent();
  }

  false
}

fn node_sources(node: &NodeRef<'_>, base_url: &Url) -> Vec<String> {
  if node.node_name().as_deref() == Some("img") {
    return first_valid_source(node, base_url).into_iter().collect();
  }

  let background = candidate::background_sources(node, base_url);

  if !background.is_empty() {
    return background;
  }

  first_valid_source(node, base_url).into_iter().collect()
}
