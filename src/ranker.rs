use super::*;

pub(crate) const POPULARITY_THRESHOLD: u64 = 100;

/// Keeps stories with at least [`POPULARITY_THRESHOLD`] votes.
pub(crate) fn filter_popular(stories: Vec<Story>) -> Vec<Story> {
  stories
    .into_iter()
    .filter(|story| {
      story
        .votes
        .is_some_and(|votes| votes >= POPULARITY_THRESHOLD)
    })
    .collect()
}

pub(crate) fn rank(stories: Vec<Story>) -> Vec<Story> {
  sort_by_votes(filter_popular(stories))
}

/// Orders stories by votes, highest first. Equal votes keep their input order.
pub(crate) fn sort_by_votes(mut stories: Vec<Story>) -> Vec<Story> {
  stories.sort_by(|a, b| b.votes.cmp(&a.votes));
  stories
}
