use super::*;

/// Resolves a raw attribute or CSS value against the page base URL.
///
/// Surrounding whitespace and one layer of quotes are stripped first. An
/// empty value yields an empty string. Values that cannot be joined onto the
/// base URL are returned cleaned but otherwise untouched.
pub fn resolve(raw: &str, base_url: &Url) -> String {
  let cleaned = strip_quotes(raw);

  if cleaned.is_empty() {
    return String::new();
  }

  base_url
    .join(cleaned)
    .map_or_else(|_| cleaned.to_string(), |url| url.to_string())
}

/// Returns the URL of the first entry in a `srcset` value.
pub fn first_srcset_url(srcset: &str) -> Option<&str> {
  srcset
    .split(',')
    .map(str::trim)
    .find(|candidate| !candidate.is_empty())
    .and_then(|candidate| candidate.split_whitespace().next())
}

/// Extracts every `url(...)` reference from the `background-image`
/// declarations of an inline style.
pub fn background_image_urls(style: &str) -> Vec<String> {
  re::BACKGROUND_IMAGE_DECLARATION
    .captures_iter(style)
    .flat_map(|declaration| {
      re::CSS_URL_FUNCTION
        .captures_iter(&declaration["value"])
        .map(|reference| strip_quotes(&reference["reference"]).to_string())
        .collect::<Vec<_>>()
    })
    .filter(|reference| !reference.is_empty())
    .collect()
}

pub(crate) fn strip_quotes(raw: &str) -> &str {
  let trimmed = raw.trim();

  let trimmed = trimmed
    .strip_prefix(['\'', '"'])
    .unwrap_or(trimmed);

  trimmed
    .strip_suffix(['\'', '"'])
    .unwrap_or(trimmed)
    .trim()
}
