use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "popular-hn",
  about = "List the most upvoted stories on the Hacker News front pages"
)]
pub(crate) struct Arguments {
  /// Number of listing pages to crawl, starting at page 1
  #[arg(allow_negative_numbers = true)]
  pages: Option<i64>,
}

impl Arguments {
  const DEFAULT_PAGES: i64 = 1;

  const MISSING_PAGES_WARNING: &str = "[WARN] Number of pages to crawl has not been specified. Will use the default configuration (1)";

  const USAGE_NOTICE: &str = "[INFO] Usage: 'popular-hn <pages>'";

  pub(crate) fn notices(&self) -> Vec<&'static str> {
    if self.pages.is_some() {
      Vec::new()
    } else {
      vec![Self::USAGE_NOTICE, Self::MISSING_PAGES_WARNING]
    }
  }

  pub(crate) fn page_count(&self) -> i64 {
    self.pages.unwrap_or(Self::DEFAULT_PAGES)
  }
}
