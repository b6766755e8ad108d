use super::*;

/// Elements stripped from every clone before extraction.
pub(crate) const DEFAULT_OVERLAY_SELECTORS: &[&str] = &["#skPlayer"];

#[derive(Debug, Clone)]
pub struct ClipOptions {
  pub force_profile: Option<String>,
  pub keep_classes: bool,
  pub overlay_selectors: Vec<String>,
  pub profiles: Vec<SiteProfile>,
}

impl Default for ClipOptions {
  fn default() -> Self {
    Self {
      force_profile: None,
      keep_classes: true,
      overlay_selectors: DEFAULT_OVERLAY_SELECTORS
        .iter()
        .map(ToString::to_string)
        .collect(),
      profiles: SiteProfile::builtin(),
    }
  }
}

impl ClipOptions {
  #[must_use]
  pub fn builder() -> ClipOptionsBuilder {
    ClipOptionsBuilder::default()
  }

  /// Checks that configured selectors parse and a forced profile exists.
  pub(crate) fn validate(&self) -> Result {
    if let Some(selector) = self
      .overlay_selectors
      .iter()
      .find(|selector| Matcher::new(selector).is_err())
    {
      return Err(Error::InvalidSelector(selector.clone()));
    }

    if let Some(name) = &self.force_profile
      && !self.profiles.iter().any(|profile| profile.name == *name)
      && name != SiteProfile::FALLBACK_NAME
    {
      return Err(Error::UnknownProfile(name.clone()));
    }

    Ok(())
  }
}

#[derive(Default)]
pub struct ClipOptionsBuilder {
  inner: ClipOptions,
}

impl ClipOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ClipOptions {
    self.inner
  }

  #[must_use]
  pub fn force_profile(self, force_profile: Option<String>) -> Self {
    Self {
      inner: ClipOptions {
        force_profile,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn keep_classes(self, keep_classes: bool) -> Self {
    Self {
      inner: ClipOptions {
        keep_classes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn overlay_selectors<I, S>(self, selectors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ClipOptions {
        overlay_selectors: selectors.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn profiles<I>(self, profiles: I) -> Self
  where
    I: IntoIterator<Item = SiteProfile>,
  {
    Self {
      inner: ClipOptions {
        profiles: profiles.into_iter().collect(),
        ..self.inner
      },
    }
  }
}
