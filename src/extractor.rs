use super::*;

const SCORE_SELECTOR: &str = ".score";

/// Builds stories from listing items in order. Items without a score, such as
/// job postings, produce no story.
pub(crate) fn extract_stories<F: Fragment>(
  items: &[ListingItem<F>],
) -> Result<Vec<Story>> {
  let mut stories = Vec::with_capacity(items.len());

  for (index, item) in items.iter().enumerate() {
    let title = item.link.text_content();

    let Some(score) = item.subtext.select_first(SCORE_SELECTOR)? else {
      debug!(index, title = %title, "skipping item without score");
      continue;
    };

    let votes = parse_votes(&score.text_content())
      .with_context(|| format!("failed to read votes for `{title}`"))?;

    stories.push(Story {
      href: item.link.attribute("href"),
      title,
      votes: Some(votes),
    });
  }

  Ok(stories)
}
