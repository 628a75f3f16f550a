use super::*;

pub(crate) struct Report {
  stories: Vec<Story>,
}

impl Display for Report {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let json =
      serde_json::to_string_pretty(&self.stories).map_err(|_| fmt::Error)?;

    writeln!(f, "{json}")?;

    writeln!(f, "{} popular stories", self.stories.len())
  }
}

impl Report {
  pub(crate) fn new(stories: Vec<Story>) -> Self {
    Self { stories }
  }
}
