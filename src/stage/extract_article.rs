use super::*;

/// Hands the prepared clone to the content extractor.
pub struct ExtractArticleStage<'a> {
  extractor: &'a dyn Extractor,
}

impl Stage for ExtractArticleStage<'_> {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = ExtractorOptions {
      base_url: context.base_url(),
      keep_classes: context.options().keep_classes,
    };

    let article = self.extractor.extract(context.html(), &options);

    match &article {
      Some(article) => {
        debug!(length = article.content.len(), "extracted article content");
      }
      None => warn!(
        url = %context.base_url(),
        "no article content found, falling back to page body"
      ),
    }

    context.set_article(article);

    Ok(())
  }
}

impl<'a> ExtractArticleStage<'a> {
  pub fn new(extractor: &'a dyn Extractor) -> Self {
    Self { extractor }
  }
}
