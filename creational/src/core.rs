//! Selector keys and the constructor type shared by every menu.

use std::fmt;

/// A selector normalised for case-insensitive lookup.
///
/// Two selectors that differ only in letter case produce equal keys, so a
/// `Menu` can dispatch with a single hash lookup instead of a chain of
/// case-insensitive comparisons.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorKey {
  normalized: String,
}

impl SelectorKey {
  pub fn new(selector: &str) -> Self {
    Self {
      normalized: selector.to_lowercase(),
    }
  }

  pub fn as_str(&self) -> &str {
    &self.normalized
  }
}

impl From<&str> for SelectorKey {
  fn from(selector: &str) -> Self {
    Self::new(selector)
  }
}

impl fmt::Debug for SelectorKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.normalized)
  }
}

impl fmt::Display for SelectorKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.normalized)
  }
}

// Boxed constructor stored per selector.
pub(crate) type Constructor<P> = Box<dyn Fn() -> P + Send + Sync>;
