use super::*;

#[derive(Debug, Parser)]
#[command(name = "clipper")]
#[command(
  about = "Clip the main content of an HTML page to Markdown",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(value_name = "FILE", help = "Path to the HTML file to clip")]
  input: PathBuf,
  #[arg(long, help = "Print the clip as JSON instead of Markdown")]
  json: bool,
  #[arg(
    long,
    value_name = "NAME",
    help = "Apply the named site profile regardless of the page URL"
  )]
  profile: Option<String>,
  #[arg(long, help = "Drop class attributes from the extracted content")]
  strip_classes: bool,
  #[arg(
    long,
    value_name = "URL",
    help = "URL the page was loaded from, used to resolve relative links"
  )]
  url: Option<String>,
}

impl Arguments {
  fn page_url(&self) -> Result<String> {
    if let Some(url) = &self.url {
      return Ok(url.clone());
    }

    let path = fs::canonicalize(&self.input).with_context(|| {
      format!("failed to resolve `{}`", self.input.display())
    })?;

    Url::from_file_path(&path)
      .map(String::from)
      .map_err(|()| anyhow!("cannot express `{}` as a URL", path.display()))
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let options = ClipOptions::builder()
      .keep_classes(!self.strip_classes)
      .force_profile(self.profile.clone())
      .build();

    let clipper = Clipper::new(options).context("invalid clip options")?;

    let clip = clipper
      .clip_html(&html, &self.page_url()?)
      .context("failed to clip page")?;

    if self.json {
      println!("{}", serde_json::to_string_pretty(&clip)?);
    } else {
      println!("{}", clip.markdown);
    }

    Ok(())
  }
}
