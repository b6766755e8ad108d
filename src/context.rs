use super::*;

pub(crate) struct Context<'a> {
  article: Option<ExtractedContent>,
  base_url: &'a Url,
  html: dom_query::Document,
  options: &'a ClipOptions,
  profile: &'a SiteProfile,
  recovered: RecoveredSequence,
}

impl<'a> Context<'a> {
  pub(crate) fn article(&self) -> Option<&ExtractedContent> {
    self.article.as_ref()
  }

  pub(crate) fn article_mut(&mut self) -> Option<&mut ExtractedContent> {
    self.article.as_mut()
  }

  pub(crate) fn base_url(&self) -> &'a Url {
    self.base_url
  }

  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut self.html)
  }

  pub(crate) fn html(&self) -> &dom_query::Document {
    &self.html
  }

  pub(crate) fn into_parts(
    self,
  ) -> (dom_query::Document, Option<ExtractedContent>, RecoveredSequence) {
    (self.html, self.article, self.recovered)
  }

  pub(crate) fn new(
    html: dom_query::Document,
    base_url: &'a Url,
    options: &'a ClipOptions,
    profile: &'a SiteProfile,
  ) -> Self {
    Self {
      article: None,
      base_url,
      html,
      options,
      profile,
      recovered: RecoveredSequence::default(),
    }
  }

  pub(crate) fn options(&self) -> &'a ClipOptions {
    self.options
  }

  pub(crate) fn profile(&self) -> &'a SiteProfile {
    self.profile
  }

  pub(crate) fn recovered(&self) -> &RecoveredSequence {
    &self.recovered
  }

  pub(crate) fn set_article(&mut self, article: Option<ExtractedContent>) {
    self.article = article;
  }

  pub(crate) fn set_recovered(&mut self, recovered: RecoveredSequence) {
    self.recovered = recovered;
  }
}
