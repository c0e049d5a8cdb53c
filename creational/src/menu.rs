//! The `Menu` lookup table that backs every factory.

use crate::core::{Constructor, SelectorKey};
use crate::error::{Error, Result};
use dashmap::DashMap;
use std::fmt;

/// A thread-safe table mapping case-insensitive selectors to product constructors.
///
/// Constructors can be registered at any point through a shared reference, so a
/// factory can grow its menu after it has been handed out. The last registration
/// for a given selector wins.
pub struct Menu<P> {
  kind: &'static str,
  entries: DashMap<SelectorKey, Constructor<P>>,
}

impl<P> Menu<P> {
  /// Creates an empty menu. `kind` names the product in diagnostics, e.g. `"burger"`.
  pub fn new(kind: &'static str) -> Self {
    Self {
      kind,
      entries: DashMap::new(),
    }
  }

  /// The product noun used in diagnostics.
  pub fn kind(&self) -> &'static str {
    self.kind
  }

  /// Registers `constructor` under `selector`, replacing any previous entry.
  pub fn register(&self, selector: &str, constructor: impl Fn() -> P + Send + Sync + 'static) {
    let key = SelectorKey::new(selector);
    tracing::trace!(kind = self.kind, selector = %key, "registering menu entry");
    self.entries.insert(key, Box::new(constructor));
  }

  /// Builds the product registered under `selector`.
  ///
  /// An unknown selector is reported as a `warn` event right here and returned
  /// as [`Error::InvalidSelector`]; it is never fatal.
  pub fn create(&self, selector: &str) -> Result<P> {
    let key = SelectorKey::new(selector);
    // The shard stays read-locked while the constructor runs, so a constructor
    // must never register into the menu that is calling it.
    match self.entries.get(&key) {
      Some(entry) => {
        tracing::debug!(kind = self.kind, selector = %key, "creating product");
        Ok((entry.value())())
      }
      None => {
        let err = Error::InvalidSelector {
          kind: self.kind,
          selector: selector.to_owned(),
        };
        tracing::warn!(kind = self.kind, selector, "{}", err);
        Err(err)
      }
    }
  }

  pub fn contains(&self, selector: &str) -> bool {
    self.entries.contains_key(&SelectorKey::new(selector))
  }

  /// Registered selectors in their normalised form, sorted.
  pub fn selectors(&self) -> Vec<String> {
    let mut selectors: Vec<String> = self
      .entries
      .iter()
      .map(|entry| entry.key().as_str().to_owned())
      .collect();
    selectors.sort();
    selectors
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<P> fmt::Debug for Menu<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Menu")
      .field("kind", &self.kind)
      .field("selectors", &self.selectors())
      .finish()
  }
}
