use super::*;

/// Parses a score label such as `"123 points"` or `"1 point"`.
pub(crate) fn parse_votes(text: &str) -> Result<u64> {
  let trimmed = text.trim();

  let count = trimmed
    .strip_suffix(" points")
    .or_else(|| trimmed.strip_suffix(" point"))
    .unwrap_or(trimmed);

  count
    .parse::<u64>()
    .with_context(|| format!("invalid score `{text}`"))
}
