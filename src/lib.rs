use {
  context::Context,
  document::Document,
  dom_query::{Matcher, NodeId, NodeRef, Selection},
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Serialize},
  stage::{
    CollectSliderImagesStage, ComposeRecoveryStage, ExtractArticleStage,
    NormalizeLazyImagesStage, RemoveOverlaysStage, Stage,
  },
  std::{
    collections::HashSet,
    sync::LazyLock,
  },
  tracing::{debug, warn},
  url::Url,
};

pub use crate::{
  candidate::{
    ImageCandidate, RecoveredSequence, first_valid_source,
    is_plausible_image_reference,
  },
  clip::Clip,
  clipper::Clipper,
  compose::compose,
  error::Error,
  extractor::{
    ExtractedContent, Extractor, ExtractorOptions, ReadabilityExtractor,
  },
  options::{ClipOptions, ClipOptionsBuilder},
  profile::{SiteProfile, select_profile},
  resolve::{background_image_urls, first_srcset_url, resolve},
  serializer::{MarkdownSerializer, MarkupSerializer},
  slider::collect,
};


mod candidate;
mod clip;
mod clipper;
mod compose;
mod context;
mod document;
mod error;
mod extractor;
mod options;
mod pipeline;
mod profile;
mod re;
mod resolve;
mod serializer;
mod slider;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
