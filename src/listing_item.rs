/// A story link and the subtext row rendered beneath it on the same page.
#[derive(Clone, Debug)]
pub(crate) struct ListingItem<F> {
  pub(crate) link: F,
  pub(crate) subtext: F,
}
