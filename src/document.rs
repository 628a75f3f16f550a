use {
  super::*,
  fragment::parse_selector,
  scraper::{ElementRef, Html},
};

/// One parsed listing page.
pub(crate) struct Document {
  html: Html,
}

impl Document {
  const STORY_LINK_SELECTOR: &str = ".titleline > a";

  const SUBTEXT_SELECTOR: &str = ".subtext";

  /// Pairs every story link with its subtext row. The page must render one
  /// subtext row per link.
  pub(crate) fn items(&self) -> Result<Vec<ListingItem<ElementRef>>> {
    let links = self.select_all(Self::STORY_LINK_SELECTOR)?;

    let subtexts = self.select_all(Self::SUBTEXT_SELECTOR)?;

    if links.len() != subtexts.len() {
      bail!(
        "listing has {} story links but {} subtext rows",
        links.len(),
        subtexts.len()
      );
    }

    Ok(
      links
        .into_iter()
        .zip(subtexts)
        .map(|(link, subtext)| ListingItem { link, subtext })
        .collect(),
    )
  }

  /// Items of every document, concatenated in document order.
  pub(crate) fn listing_items(
    documents: &[Document],
  ) -> Result<Vec<ListingItem<ElementRef>>> {
    let mut items = Vec::new();

    for (index, document) in documents.iter().enumerate() {
      items.extend(
        document
          .items()
          .with_context(|| format!("failed to read listing page {}", index + 1))?,
      );
    }

    Ok(items)
  }

  pub(crate) fn parse(markup: &str) -> Self {
    Self {
      html: Html::parse_document(markup),
    }
  }

  fn select_all(&self, selector: &str) -> Result<Vec<ElementRef>> {
    Ok(self.html.select(&parse_selector(selector)?).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(id: u64, title: &str, href: &str, score: Option<&str>) -> String {
    let score = score
      .map(|score| {
        format!(r#"<span class="score" id="score_{id}">{score}</span> by "#)
      })
      .unwrap_or_default();

    format!(
      r#"<tr class="athing submission" id="{id}">
  <td class="title"><span class="rank">{id}.</span></td>
  <td class="title"><span class="titleline"><a href="{href}">{title}</a><span class="sitebit comhead"> (<a href="from?site=example.com"><span class="sitestr">example.com</span></a>)</span></span></td>
</tr>
<tr><td colspan="2"></td><td class="subtext"><span class="subline">{score}<span class="age"><a href="item?id={id}">2 hours ago</a></span></span></td></tr>
<tr class="spacer" style="height:5px"></tr>"#
    )
  }

  fn page(rows: &[String]) -> String {
    format!(
      r#"<html><body><center><table id="hnmain"><tr><td><table>{}</table></td></tr></table></center></body></html>"#,
      rows.concat()
    )
  }

  fn stories(pages: &[String]) -> Vec<Story> {
    let documents = pages
      .iter()
      .map(|markup| Document::parse(markup))
      .collect::<Vec<_>>();

    let items = Document::listing_items(&documents).unwrap();

    rank(extract_stories(&items).unwrap())
  }

  fn story(title: &str, href: &str, votes: u64) -> Story {
    Story {
      href: Some(href.to_string()),
      title: title.to_string(),
      votes: Some(votes),
    }
  }

  #[test]
  fn items_pair_links_with_subtext() {
    let document = Document::parse(&page(&[
      row(1, "A", "/a", Some("150 points")),
      row(2, "B", "/b", Some("50 points")),
    ]));

    let items = document.items().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].link.text_content(), "A");
    assert_eq!(items[1].link.attribute("href"), Some("/b".to_string()));
    assert_eq!(
      items[1]
        .subtext
        .select_first(".score")
        .unwrap()
        .map(|score| score.text_content()),
      Some("50 points".to_string())
    );
  }

  #[test]
  fn items_ignore_site_links() {
    let document =
      Document::parse(&page(&[row(1, "A", "/a", Some("150 points"))]));

    let items = document.items().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].link.attribute("href"), Some("/a".to_string()));
  }

  #[test]
  fn mismatched_rows_are_an_error() {
    let markup = page(&[
      row(1, "A", "/a", Some("150 points")),
      r#"<tr><td class="subtext"><span class="score">10 points</span></td></tr>"#
        .to_string(),
    ]);

    let error = Document::parse(&markup).items().unwrap_err();

    assert_eq!(
      error.to_string(),
      "listing has 1 story links but 2 subtext rows"
    );
  }

  #[test]
  fn listing_items_name_the_misaligned_page() {
    let documents = [
      Document::parse(&page(&[row(1, "A", "/a", Some("150 points"))])),
      Document::parse(&page(&[
        r#"<tr><td class="subtext"><span class="score">10 points</span></td></tr>"#
          .to_string(),
      ])),
    ];

    let error = Document::listing_items(&documents).unwrap_err();

    assert_eq!(error.to_string(), "failed to read listing page 2");
  }

  #[test]
  fn empty_page_has_no_items() {
    assert!(Document::parse(&page(&[])).items().unwrap().is_empty());
  }

  #[test]
  fn scoreless_and_unpopular_items_are_dropped() {
    assert_eq!(
      stories(&[page(&[
        row(1, "A", "/a", Some("150 points")),
        row(2, "B", "/b", Some("50 points")),
        row(3, "C", "/c", None),
      ])]),
      vec![story("A", "/a", 150)]
    );
  }

  #[test]
  fn threshold_is_inclusive() {
    assert_eq!(
      stories(&[page(&[
        row(1, "Hundred", "/100", Some("100 points")),
        row(2, "Ninety-nine", "/99", Some("99 points")),
      ])]),
      vec![story("Hundred", "/100", 100)]
    );
  }

  #[test]
  fn stories_from_several_pages_are_ranked_together() {
    assert_eq!(
      stories(&[
        page(&[row(1, "First", "/1", Some("200 points"))]),
        page(&[row(31, "Second", "/2", Some("300 points"))]),
      ]),
      vec![story("Second", "/2", 300), story("First", "/1", 200)]
    );
  }

  #[test]
  fn entities_in_titles_are_decoded() {
    assert_eq!(
      stories(&[page(&[row(
        1,
        "Rust &amp; Go",
        "https://example.com/?a=1&amp;b=2",
        Some("120 points")
      )])]),
      vec![story("Rust & Go", "https://example.com/?a=1&b=2", 120)]
    );
  }
}
