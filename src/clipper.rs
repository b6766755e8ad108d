use super::*;

/// Clips the main content of pages into portable markup.
///
/// A `Clipper` holds only configuration and its collaborators; every call to
/// [`Clipper::clip`] works on a private copy of the document it is given.
pub struct Clipper {
  extractor: Box<dyn Extractor>,
  options: ClipOptions,
  serializer: Box<dyn MarkupSerializer>,
}

impl Clipper {
  /// Clips `document`, resolving relative references against `page_url`.
  ///
  /// The input document is never modified. Missing article content is not an
  /// error: the clip falls back to the page body and is marked degraded.
  pub fn clip(
    &self,
    document: &dom_query::Document,
    page_url: &str,
  ) -> Result<Clip> {
    let base_url = Url::parse(page_url)?;

    let profile = self.profile_for(&base_url)?;

    let markup = document.html();

    let mut clone = dom_query::Document::from(&*markup);

    debug!(
      elements = Document::new(&mut clone).element_count(),
      profile = %profile.name,
      "cloned document"
    );

    let context = Context::new(clone, &base_url, &self.options, profile);

    let pipeline =
      Pipeline::with_profile_stages(context, self.extractor.as_ref());

    debug!(stages = pipeline.stage_count(), "running pipeline");

    let context = pipeline.run()?;

    let (mut clone, article, recovered) = context.into_parts();

    let (html, title, degraded) = match article {
      Some(article) => (article.content, article.title, false),
      None => (Document::new(&mut clone).body_html(), None, true),
    };

    Ok(Clip {
      degraded,
      markdown: self.serializer.serialize(&html),
      html,
      images: recovered.urls().map(String::from).collect(),
      profile: profile.name.clone(),
      title,
    })
  }

  /// Parses `html` and clips it.
  pub fn clip_html(&self, html: &str, page_url: &str) -> Result<Clip> {
    self.clip(&dom_query::Document::from(html), page_url)
  }

  pub fn new(options: ClipOptions) -> Result<Self> {
    options.validate()?;

    Ok(Self {
      extractor: Box::new(ReadabilityExtractor),
      options,
      serializer: Box::new(MarkdownSerializer),
    })
  }

  pub fn options(&self) -> &ClipOptions {
    &self.options
  }

  fn profile_for(&self, base_url: &Url) -> Result<&SiteProfile> {
    match &self.options.force_profile {
      Some(name) => profile::profile_by_name(name, &self.options.profiles)
        .ok_or_else(|| Error::UnknownProfile(name.clone())),
      None => Ok(select_profile(base_url.as_str(), &self.options.profiles)),
    }
  }

  #[must_use]
  pub fn with_extractor(self, extractor: impl Extractor + 'static) -> Self {
    Self {
      extractor: Box::new(extractor),
      ..self
    }
  }

  #[must_use]
  pub fn with_serializer(
    self,
    serializer: impl MarkupSerializer + 'static,
  ) -> Self {
    Self {
      serializer: Box::new(serializer),
      ..self
    }
  }
}
