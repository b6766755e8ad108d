use super::*;

/// Rewrites the extracted article with the recovered slider images.
pub struct ComposeRecoveryStage;

impl Stage for ComposeRecoveryStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if context.recovered().is_empty() {
      return Ok(());
    }

    let urls = context
      .recovered()
      .urls()
      .map(String::from)
      .collect::<Vec<_>>();

    if let Some(article) = context.article_mut() {
      article.content = compose(&article.content, &urls);

      debug!(images = urls.len(), "replaced article images");
    }

    Ok(())
  }
}
