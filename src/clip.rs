use super::*;

/// The result of clipping one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
  /// Whether the extractor failed and the raw page body was used instead.
  pub degraded: bool,
  /// The HTML fragment handed to the markup serializer.
  pub html: String,
  /// Recovered slider image URLs, in document order.
  pub images: Vec<String>,
  pub markdown: String,
  /// Name of the site profile that was applied.
  pub profile: String,
  pub title: Option<String>,
}
