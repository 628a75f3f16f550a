use {super::*, scraper::{ElementRef, Selector}};

/// The subset of a parsed markup element that story extraction relies on.
pub(crate) trait Fragment: Sized {
  fn attribute(&self, name: &str) -> Option<String>;

  fn select_first(&self, selector: &str) -> Result<Option<Self>>;

  fn text_content(&self) -> String;
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
  Selector::parse(selector)
    .map_err(|error| anyhow::anyhow!("invalid selector `{selector}`: {error}"))
}

impl Fragment for ElementRef<'_> {
  fn attribute(&self, name: &str) -> Option<String> {
    self.value().attr(name).map(str::to_string)
  }

  fn select_first(&self, selector: &str) -> Result<Option<Self>> {
    Ok(self.select(&parse_selector(selector)?).next())
  }

  fn text_content(&self) -> String {
    self.text().collect()
  }
}
