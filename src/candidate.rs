use super::*;

/// An attribute that may hold an image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageSource {
  /// The attribute value is a single URL.
  Single(&'static str),
  /// The attribute value is a responsive source set; its first entry wins.
  SrcSet(&'static str),
}

impl ImageSource {
  pub(crate) fn attribute(self) -> &'static str {
    match self {
      Self::Single(name) | Self::SrcSet(name) => name,
    }
  }

  fn candidate(self, value: &str) -> Option<&str> {
    match self {
      Self::Single(_) => Some(value),
      Self::SrcSet(_) => first_srcset_url(value),
    }
  }

  fn is_lazy(self) -> bool {
    self.attribute().starts_with("data-")
  }
}

/// Attributes consulted for an image's real source, most specific first.
pub(crate) const IMAGE_SOURCES: &[ImageSource] = &[
  ImageSource::Single("data-original"),
  ImageSource::Single("data-origin"),
  ImageSource::Single("data-actualsrc"),
  ImageSource::Single("data-lazy-src"),
  ImageSource::Single("data-echo"),
  ImageSource::Single("data-image"),
  ImageSource::Single("data-url"),
  ImageSource::Single("data-src"),
  ImageSource::Single("data-lazy"),
  ImageSource::SrcSet("data-srcset"),
  ImageSource::SrcSet("srcset"),
  ImageSource::Single("src"),
];

/// Attribute selector matching elements that carry any lazy-load attribute.
pub(crate) static LAZY_ATTRIBUTE_SELECTOR: LazyLock<String> =
  LazyLock::new(|| {
    IMAGE_SOURCES
      .iter()
      .filter(|source| source.is_lazy())
      .map(|source| format!("[{}]", source.attribute()))
      .collect::<Vec<_>>()
      .join(", ")
  });

/// Returns whether a raw attribute value could reference a durable image.
pub fn is_plausible_image_reference(value: &str) -> bool {
  let value = resolve::strip_quotes(value);

  !value.is_empty()
    && !re::EPHEMERAL_SCHEME.is_match(value)
    && !re::PLACEHOLDER_TOKEN.is_match(value)
}

/// Resolves the best image URL for a node from its source attributes.
///
/// Attributes are consulted in priority order; the first whose value is a
/// plausible image reference and resolves to a non-empty URL is returned.
pub fn first_valid_source(node: &NodeRef<'_>, base_url: &Url) -> Option<String> {
  IMAGE_SOURCES.iter().find_map(|source| {
    let value = node.attr(source.attribute())?;

    let candidate = source.candidate(&value)?;

    if !is_plausible_image_reference(candidate) {
      return None;
    }

    Some(resolve(candidate, base_url)).filter(|url| !url.is_empty())
  })
}

/// Resolves every plausible `background-image` reference of a node's inline
/// style, in layer order.
pub(crate) fn background_sources(
  node: &NodeRef<'_>,
  base_url: &Url,
) -> Vec<String> {
  let Some(style) = node.attr("style") else {
    return Vec::new();
  };

  background_image_urls(&style)
    .into_iter()
    .filter(|reference| is_plausible_image_reference(reference))
    .map(|reference| resolve(&reference, base_url))
    .filter(|url| !url.is_empty())
    .collect()
}

/// A resolved image URL and the traversal index it was discovered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
  pub index: usize,
  pub url: String,
}

/// Image URLs in first-discovery order, each present once.
#[derive(Debug, Clone, Default)]
pub struct RecoveredSequence {
  candidates: Vec<ImageCandidate>,
  seen: HashSet<String>,
}

impl RecoveredSequence {
  pub fn candidates(&self) -> &[ImageCandidate] {
    &self.candidates
  }

  pub fn is_empty(&self) -> bool {
    self.candidates.is_empty()
  }

  pub fn len(&self) -> usize {
    self.candidates.len()
  }

  /// Appends a candidate unless its URL was already recovered.
  pub fn push(&mut self, candidate: ImageCandidate) -> bool {
    if candidate.url.is_empty() || !self.seen.insert(candidate.url.clone()) {
      return false;
    }

    self.candidates.push(candidate);

    true
  }

  pub fn urls(&self) -> impl Iterator<Item = &str> {
    self
      .candidates
      .iter()
      .map(|candidate| candidate.url.as_str())
  }
}
