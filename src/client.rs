use super::*;

pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::LISTING_URL)
  }
}

impl Client {
  const LISTING_URL: &str = "https://news.ycombinator.com/news";

  /// Fetches and parses pages `1..=pages` in page order.
  pub(crate) async fn fetch_documents(
    &self,
    pages: i64,
  ) -> Result<Vec<Document>> {
    let markups = self.fetch_pages(pages).await?;

    Ok(markups.iter().map(|markup| Document::parse(markup)).collect())
  }

  async fn fetch_page(&self, page: i64) -> Result<String> {
    let url = format!("{}?p={page}", self.base_url);

    debug!(%url, "fetching listing page");

    self
      .client
      .get(&url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .with_context(|| format!("failed to fetch listing page {page}"))?
      .text()
      .await
      .with_context(|| format!("failed to read listing page {page}"))
  }

  /// Fetches pages `1..=pages` one after another. Nothing is requested when
  /// `pages` is not positive.
  pub(crate) async fn fetch_pages(&self, pages: i64) -> Result<Vec<String>> {
    if pages <= 0 {
      return Ok(Vec::new());
    }

    stream::iter(1..=pages)
      .then(|page| self.fetch_page(page))
      .try_collect()
      .await
  }

  pub(crate) fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      client: reqwest::Client::new(),
    }
  }
}
