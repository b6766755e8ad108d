use super::*;

/// Replaces the images of an article fragment with recovered ones.
///
/// With no recovered URLs the fragment is returned unchanged. Otherwise every
/// `img` and `picture` element is dropped and each URL is appended, in order,
/// as its own paragraph.
pub fn compose<I, S>(article_html: &str, urls: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut urls = urls.into_iter().peekable();

  if urls.peek().is_none() {
    return article_html.to_string();
  }

  let document = dom_query::Document::from(
    format!("<html><body>{article_html}</body></html>").as_str(),
  );

  document.select("img, picture").remove();

  let mut html = document.select("body").inner_html().to_string();

  for url in urls {
    html.push_str(&image_block(url.as_ref()));
  }

  html
}

fn escape_attribute(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());

  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(ch),
    }
  }

  escaped
}

fn image_block(url: &str) -> String {
  format!("<p><img src=\"{}\" alt=\"\"></p>", escape_attribute(url))
}
