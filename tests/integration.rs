use {
  clipper::{
    ClipOptions, Clipper, ExtractedContent, ExtractorOptions, collect, resolve,
  },
  pretty_assertions::assert_eq,
  url::Url,
};

const NOTE_URL: &str = "https://www.xiaohongshu.com/explore/6650a1f2";

const PARAGRAPH: &str = "We took the early ferry across the bay and spent \
  the morning walking the old harbour wall, stopping at every stall that \
  sold grilled fish, sesame bread or the strong sweet tea the fishermen \
  drink before dawn. The light was soft, the water was flat and the gulls \
  were loud enough that nobody bothered to talk. ";

macro_rules! recovery_test {
  (
    name: $name:ident,
    body: $body:expr,
    expected: [$($url:expr),* $(,)?] $(,)?
  ) => {
    paste::paste! {
      #[test]
      fn [<recovers_ $name>]() {
        let document = dom_query::Document::from(
          format!("<html><body>{}</body></html>", $body).as_str(),
        );

        let expected: Vec<&str> = vec![$($url),*];

        assert_eq!(
          collect(&document, &Url::parse(NOTE_URL).unwrap())
            .urls()
            .collect::<Vec<_>>(),
          expected
        );
      }
    }
  };
}

fn no_content(
  _: &dom_query::Document,
  _: &ExtractorOptions,
) -> Option<ExtractedContent> {
  None
}

fn note_page() -> String {
  format!(
    r#"<html>
      <head><title>Harbour morning</title></head>
      <body>
        <div id="skPlayer"><img src="/player/cover.png"></div>
        <div class="note-container">
          <div class="media-container">
            <div class="swiper">
              <div class="swiper-slide swiper-slide-duplicate" data-swiper-slide-index="2">
                <img data-src="https://sns-img.example.com/3.jpg" src="">
              </div>
              <div class="swiper-slide" data-swiper-slide-index="0">
                <img data-src="https://sns-img.example.com/1.jpg" src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
              </div>
              <div class="swiper-slide" data-swiper-slide-index="1">
                <div style="background-image: url(&quot;https://sns-img.example.com/2.jpg&quot;)"></div>
              </div>
              <div class="swiper-slide" data-swiper-slide-index="2">
                <img data-src="https://sns-img.example.com/3.jpg" src="">
              </div>
              <div class="swiper-slide swiper-slide-duplicate" data-swiper-slide-index="0">
                <img data-src="https://sns-img.example.com/1.jpg" src="">
              </div>
            </div>
          </div>
          <article class="note-content">
            <h1>Harbour morning</h1>
            <p>{PARAGRAPH}{PARAGRAPH}</p>
            <p>{PARAGRAPH}{PARAGRAPH}</p>
            <p>{PARAGRAPH}{PARAGRAPH}</p>
          </article>
        </div>
      </body>
    </html>"#
  )
}

recovery_test! {
  name: containers_in_visit_order,
  body: r#"
    <div class="swiper"><img src="/a1.jpg"><img src="/a2.jpg"></div>
    <div class="swiper"><img src="/b1.jpg"><img src="/b2.jpg"></div>
  "#,
  expected: [
    "https://www.xiaohongshu.com/a1.jpg",
    "https://www.xiaohongshu.com/a2.jpg",
    "https://www.xiaohongshu.com/b1.jpg",
    "https://www.xiaohongshu.com/b2.jpg",
  ],
}

recovery_test! {
  name: each_url_once,
  body: r#"
    <div class="swiper"><img src="/a.jpg"><img src="/b.jpg"><img src="/a.jpg"></div>
    <div class="slick-slider"><img src="/b.jpg"><img src="/c.jpg"></div>
  "#,
  expected: [
    "https://www.xiaohongshu.com/a.jpg",
    "https://www.xiaohongshu.com/b.jpg",
    "https://www.xiaohongshu.com/c.jpg",
  ],
}

recovery_test! {
  name: nothing_from_placeholder_literals,
  body: r#"<div class="swiper"><img data-src="true" src=""></div>"#,
  expected: [],
}

recovery_test! {
  name: background_image_urls,
  body: r#"<div class="swiper"><div style="background-image:url('/x.jpg')"></div></div>"#,
  expected: ["https://www.xiaohongshu.com/x.jpg"],
}

recovery_test! {
  name: nothing_from_cloned_slides,
  body: r#"
    <div class="swiper">
      <div class="swiper-slide swiper-slide-duplicate"><img src="/clone.jpg"></div>
    </div>
  "#,
  expected: [],
}

#[test]
fn resolving_absolute_urls_is_idempotent() {
  let base = Url::parse(NOTE_URL).unwrap();

  for url in [
    "https://sns-img.example.com/1.jpg",
    "https://www.xiaohongshu.com/explore/1?xsec=abc",
    "http://example.com/",
  ] {
    assert_eq!(resolve(url, &base), url);
  }
}

#[test]
fn clipping_leaves_the_input_document_untouched() {
  let document = dom_query::Document::from(note_page().as_str());

  let before = document.html().to_string();

  let clipper = Clipper::new(ClipOptions::default())
    .unwrap()
    .with_extractor(no_content);

  clipper.clip(&document, NOTE_URL).unwrap();

  assert_eq!(document.html().to_string(), before);
  assert_eq!(document.select("#skPlayer").length(), 1);
  assert_eq!(document.select("img[data-clipper-background]").length(), 0);
}

#[test]
fn missing_content_falls_back_to_page_body() {
  let clipper = Clipper::new(ClipOptions::default())
    .unwrap()
    .with_extractor(no_content);

  let clip = clipper
    .clip_html(
      "<html><body><div><p>Just a short caption.</p></div></body></html>",
      "https://example.com/caption",
    )
    .unwrap();

  assert!(clip.degraded);
  assert!(clip.markdown.contains("Just a short caption."));
  assert!(clip.images.is_empty());
}

#[test]
fn clips_note_with_recovered_gallery() {
  let clip = Clipper::new(ClipOptions::default())
    .unwrap()
    .clip_html(&note_page(), NOTE_URL)
    .unwrap();

  assert!(!clip.degraded);
  assert_eq!(clip.profile, "xiaohongshu");
  assert_eq!(
    clip.images,
    vec![
      "https://sns-img.example.com/1.jpg",
      "https://sns-img.example.com/2.jpg",
      "https://sns-img.example.com/3.jpg",
    ]
  );

  let positions = clip
    .images
    .iter()
    .map(|url| {
      let image = format!("![]({url})");

      assert_eq!(clip.markdown.matches(&image).count(), 1, "{image}");

      clip.markdown.find(&image).unwrap()
    })
    .collect::<Vec<_>>();

  assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
  assert!(clip.markdown.contains("old harbour wall"));
  assert!(!clip.markdown.contains("player/cover.png"));
}

#[test]
fn other_sites_keep_extractor_images() {
  let clip = Clipper::new(ClipOptions::default())
    .unwrap()
    .clip_html(&note_page(), "https://example.com/notes/harbour")
    .unwrap();

  assert_eq!(clip.profile, "default");
  assert!(clip.images.is_empty());
  assert!(clip.markdown.contains("old harbour wall"));
}
