#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid profile pattern: {source}")]
  InvalidPattern {
    #[from]
    source: regex::Error,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("unknown site profile: {0}")]
  UnknownProfile(String),
}
