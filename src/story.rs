use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Story {
  pub(crate) href: Option<String>,
  pub(crate) title: String,
  pub(crate) votes: Option<u64>,
}
