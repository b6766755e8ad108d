use super::*;

static BUILTIN_PROFILES: LazyLock<Vec<SiteProfile>> = LazyLock::new(|| {
  vec![SiteProfile {
    name: "xiaohongshu".into(),
    pattern: Some(
      Regex::new(r"(?i)^https?://(?:www\.)?xiaohongshu\.com/").unwrap(),
    ),
    normalize_images: true,
    recover_sliders: true,
  }]
});

static FALLBACK_PROFILE: LazyLock<SiteProfile> =
  LazyLock::new(SiteProfile::fallback);

/// Image recovery behavior for pages whose URL matches a pattern.
#[derive(Debug, Clone)]
pub struct SiteProfile {
  pub name: String,
  pub normalize_images: bool,
  pub pattern: Option<Regex>,
  pub recover_sliders: bool,
}

impl SiteProfile {
  pub(crate) const FALLBACK_NAME: &'static str = "default";

  /// The built-in profile table.
  #[must_use]
  pub fn builtin() -> Vec<SiteProfile> {
    BUILTIN_PROFILES.clone()
  }

  /// The profile used when no table row matches; it enables nothing.
  #[must_use]
  pub fn fallback() -> Self {
    Self {
      name: Self::FALLBACK_NAME.into(),
      normalize_images: false,
      pattern: None,
      recover_sliders: false,
    }
  }

  fn matches(&self, page_url: &str) -> bool {
    self
      .pattern
      .as_ref()
      .is_some_and(|pattern| pattern.is_match(page_url))
  }

  pub fn new(
    name: impl Into<String>,
    pattern: &str,
    normalize_images: bool,
    recover_sliders: bool,
  ) -> Result<Self> {
    Ok(Self {
      name: name.into(),
      normalize_images,
      pattern: Some(Regex::new(pattern)?),
      recover_sliders,
    })
  }
}

/// Returns the first profile whose pattern matches `page_url`, or the
/// fallback profile.
pub fn select_profile<'a>(
  page_url: &str,
  profiles: &'a [SiteProfile],
) -> &'a SiteProfile {
  profiles
    .iter()
    .find(|profile| profile.matches(page_url))
    .unwrap_or(&*FALLBACK_PROFILE)
}

pub(crate) fn profile_by_name<'a>(
  name: &str,
  profiles: &'a [SiteProfile],
) -> Option<&'a SiteProfile> {
  if name == SiteProfile::FALLBACK_NAME {
    return Some(&*FALLBACK_PROFILE);
  }

  profiles.iter().find(|profile| profile.name == name)
}
