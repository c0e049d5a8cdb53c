//! The process-wide `Singleton` instance and its accessor.

use crate::singleton::SingletonHolder;
use parking_lot::RwLock;

// The one and only instance slot.
// It is filled on first access in a thread-safe manner and never emptied.
static INSTANCE: SingletonHolder<Singleton> = SingletonHolder::new();

const DEFAULT_DATA: &str = "Default";

/// A type with exactly one instance per process.
///
/// The instance cannot be built from outside this module; every caller goes
/// through [`Singleton::instance`], which lives for the rest of the process.
///
/// # Examples
///
/// ```
/// use creational_patterns::Singleton;
///
/// let a = Singleton::instance();
/// let b = Singleton::instance();
/// assert!(std::ptr::eq(a, b));
/// ```
#[derive(Debug)]
pub struct Singleton {
  data: RwLock<String>,
}

impl Singleton {
  fn new() -> Self {
    Self {
      data: RwLock::new(DEFAULT_DATA.to_owned()),
    }
  }

  /// Provides a reference to the process-wide instance, creating it on first use.
  pub fn instance() -> &'static Singleton {
    INSTANCE.get_or_init(Singleton::new)
  }

  /// How many times the instance has been constructed. Never more than one.
  pub fn construction_count() -> usize {
    INSTANCE.constructions()
  }

  pub fn data(&self) -> String {
    self.data.read().clone()
  }

  pub fn set_data(&self, data: impl Into<String>) {
    *self.data.write() = data.into();
  }
}
