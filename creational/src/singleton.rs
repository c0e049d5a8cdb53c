//! An explicit, init-once slot for process-wide instances.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Holds at most one `T`, constructed lazily on first access.
///
/// The holder moves one way, from uninitialized to initialized. Concurrent
/// first callers of [`get_or_init`](Self::get_or_init) block on the cell's
/// internal lock; exactly one of them runs the initializer and all of them get
/// the same reference back. Once the value is published, reads take no lock.
///
/// A holder is usually a `static`, but tests can own one and
/// [`reset`](Self::reset) it.
///
/// ```
/// use creational_patterns::SingletonHolder;
///
/// static CONFIG: SingletonHolder<String> = SingletonHolder::new();
///
/// let a = CONFIG.get_or_init(|| "loaded".to_string());
/// let b = CONFIG.get_or_init(|| unreachable!());
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(CONFIG.constructions(), 1);
/// ```
pub struct SingletonHolder<T> {
  cell: OnceCell<T>,
  constructions: AtomicUsize,
}

impl<T> SingletonHolder<T> {
  pub const fn new() -> Self {
    Self {
      cell: OnceCell::new(),
      constructions: AtomicUsize::new(0),
    }
  }

  /// Returns the instance, running `init` if no instance exists yet.
  pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
    self.cell.get_or_init(|| {
      self.constructions.fetch_add(1, Ordering::SeqCst);
      tracing::debug!(
        type_name = std::any::type_name::<T>(),
        "constructing singleton"
      );
      init()
    })
  }

  /// Returns the instance if it has been constructed.
  pub fn get(&self) -> Option<&T> {
    self.cell.get()
  }

  pub fn is_initialized(&self) -> bool {
    self.cell.get().is_some()
  }

  /// How many times an initializer has run on this holder.
  pub fn constructions(&self) -> usize {
    self.constructions.load(Ordering::SeqCst)
  }

  /// Takes the instance out, returning the holder to its uninitialized state.
  ///
  /// Requires exclusive access, so a `static` holder can never be reset.
  pub fn reset(&mut self) -> Option<T> {
    self.cell.take()
  }
}

impl<T> Default for SingletonHolder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for SingletonHolder<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SingletonHolder")
      .field("value", &self.cell.get())
      .field("constructions", &self.constructions())
      .finish()
  }
}
