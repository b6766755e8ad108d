use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static BACKGROUND_IMAGE_DECLARATION: LazyLock<Regex> =
  LazyLock::new(|| {
    Regex::new(concat!(
      r"(?i)(?:^|;)\s*background-image\s*:\s*",
      r"(?P<value>(?:url\([^)]*\)|[^;])*)"
    ))
    .unwrap()
  });

pub(crate) static CSS_URL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)url\(\s*(?P<reference>[^)]*?)\s*\)").unwrap()
});

pub(crate) static EPHEMERAL_SCHEME: LazyLock<Regex> =
  re!(r"(?is)(?:data|blob)\s*:.*");

pub(crate) static PLACEHOLDER_TOKEN: LazyLock<Regex> =
  re!(r"(?i)(?:true|false|null|undefined)");

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn background_image_declaration_ignores_other_properties() {
    let captures = BACKGROUND_IMAGE_DECLARATION
      .captures("color: red; background-image: url(a.jpg); margin: 0")
      .expect("declaration should match");

    assert_eq!(&captures["value"], "url(a.jpg)");

    assert!(
      !BACKGROUND_IMAGE_DECLARATION
        .is_match("background: url(a.jpg); border-image: url(b.png)")
    );
  }

  #[test]
  fn background_image_declaration_keeps_semicolons_inside_urls() {
    let captures = BACKGROUND_IMAGE_DECLARATION
      .captures("background-image: url(data:image/png;base64,AA), url(b.jpg); color: red")
      .expect("declaration should match");

    assert_eq!(
      &captures["value"],
      "url(data:image/png;base64,AA), url(b.jpg)"
    );
  }

  #[test]
  fn background_image_declaration_is_case_insensitive() {
    assert!(BACKGROUND_IMAGE_DECLARATION.is_match("Background-Image:url(x)"));
  }

  #[test]
  fn css_url_function_captures_each_layer() {
    assert_eq!(
      CSS_URL_FUNCTION
        .captures_iter("url('a.png'), url( b.png ), URL(\"c.png\")")
        .map(|captures| captures["reference"].to_string())
        .collect::<Vec<_>>(),
      vec!["'a.png'", "b.png", "\"c.png\""]
    );
  }

  #[test]
  fn ephemeral_scheme_matches_data_and_blob() {
    assert!(EPHEMERAL_SCHEME.is_match("data:image/gif;base64,R0lGOD"));
    assert!(EPHEMERAL_SCHEME.is_match("BLOB:https://example.com/uuid"));
    assert!(!EPHEMERAL_SCHEME.is_match("https://example.com/data:1"));
  }

  #[test]
  fn placeholder_token_requires_whole_value() {
    assert!(PLACEHOLDER_TOKEN.is_match("TRUE"));
    assert!(PLACEHOLDER_TOKEN.is_match("undefined"));
    assert!(!PLACEHOLDER_TOKEN.is_match("nullable.jpg"));
    assert!(!PLACEHOLDER_TOKEN.is_match("/true.png"));
  }
}
