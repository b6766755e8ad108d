use super::*;

/// Turns an HTML fragment into the portable output markup.
pub trait MarkupSerializer {
  fn serialize(&self, html: &str) -> String;
}

impl<F> MarkupSerializer for F
where
  F: Fn(&str) -> String,
{
  fn serialize(&self, html: &str) -> String {
    self(html)
  }
}

/// Converts HTML to Markdown with `htmd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSerializer;

impl MarkupSerializer for MarkdownSerializer {
  fn serialize(&self, html: &str) -> String {
    htmd::convert(html).unwrap_or_else(|error| {
      warn!(%error, "markdown conversion failed, keeping html");
      html.to_string()
    })
  }
}
