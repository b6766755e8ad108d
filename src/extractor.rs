use super::*;

/// Settings handed to an [`Extractor`] for one document.
#[derive(Debug, Clone, Copy)]
pub struct ExtractorOptions<'a> {
  pub base_url: &'a Url,
  pub keep_classes: bool,
}

/// The main content found by an [`Extractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
  pub content: String,
  pub title: Option<String>,
}

/// A boilerplate-removal algorithm.
///
/// Returns `None` when the document has no usable content. Implementations
/// must not rely on mutating the document they are given.
pub trait Extractor {
  fn extract(
    &self,
    document: &dom_query::Document,
    options: &ExtractorOptions<'_>,
  ) -> Option<ExtractedContent>;
}

impl<F> Extractor for F
where
  F: Fn(&dom_query::Document, &ExtractorOptions<'_>) -> Option<ExtractedContent>,
{
  fn extract(
    &self,
    document: &dom_query::Document,
    options: &ExtractorOptions<'_>,
  ) -> Option<ExtractedContent> {
    self(document, options)
  }
}

/// Extracts content with the `dom_smoothie` readability port.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityExtractor;

impl Extractor for ReadabilityExtractor {
  fn extract(
    &self,
    document: &dom_query::Document,
    options: &ExtractorOptions<'_>,
  ) -> Option<ExtractedContent> {
    let config = dom_smoothie::Config {
      keep_classes: options.keep_classes,
      ..Default::default()
    };

    let mut readability = dom_smoothie::Readability::new(
      document.html().to_string(),
      Some(options.base_url.as_str()),
      Some(config),
    )
    .map_err(|error| debug!(%error, "readability rejected document"))
    .ok()?;

    let article = readability
      .parse()
      .map_err(|error| debug!(%error, "readability found no article"))
      .ok()?;

    if article.text_content.trim().is_empty() {
      return None;
    }

    Some(ExtractedContent {
      content: article.content.to_string(),
      title: Some(article.title).filter(|title| !title.trim().is_empty()),
    })
  }
}
