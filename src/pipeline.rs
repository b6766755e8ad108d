use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  pub(crate) fn stage_count(&self) -> usize {
    self.stages.len()
  }

  /// Builds the stage list enabled by the context's site profile.
  pub(crate) fn with_profile_stages(
    context: Context<'a>,
    extractor: &'a dyn Extractor,
  ) -> Self {
    let profile = context.profile();

    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(RemoveOverlaysStage));

    if profile.normalize_images {
      pipeline.add_stage(Box::new(NormalizeLazyImagesStage));
    }

    pipeline.add_stage(Box::new(ExtractArticleStage::new(extractor)));

    if profile.recover_sliders {
      pipeline.add_stage(Box::new(CollectSliderImagesStage));
      pipeline.add_stage(Box::new(ComposeRecoveryStage));
    }

    pipeline
  }
}
