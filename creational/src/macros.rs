//! Public macros for ergonomic burger creation and singleton declaration.

/// Creates a burger from a factory, panicking if the selector is unknown.
///
/// Use this where a missing burger is a bug. For the non-panicking form, call
/// `create_burger` directly and handle the `Err`.
///
/// # Panics
///
/// Panics if the factory does not recognise the selector.
///
/// # Examples
///
/// ```
/// use creational_patterns::{burger, BurgerFactory, KingBurger, Bun};
///
/// let king = KingBurger::new();
/// let burger = burger!(king, "premium");
/// assert_eq!(burger.bun(), Bun::Wheat);
/// ```
#[macro_export]
macro_rules! burger {
  ($factory:expr, $selector:expr) => {
    {
      let selector = $selector;
      match $factory.create_burger(selector) {
        ::std::result::Result::Ok(burger) => burger,
        ::std::result::Result::Err(err) => {
          panic!(
            "Failed to create burger for selector '{}': {}",
            selector, err
          )
        }
      }
    }
  };
}

/// Declares an accessor function backed by its own static [`SingletonHolder`].
///
/// The initializer runs at most once per process, on the first call.
///
/// # Examples
///
/// ```
/// use creational_patterns::define_singleton;
///
/// struct Registry {
///   names: Vec<&'static str>,
/// }
///
/// define_singleton! {
///   /// The shared registry.
///   pub fn registry() -> Registry = Registry { names: vec!["basic"] };
/// }
///
/// assert!(std::ptr::eq(registry(), registry()));
/// assert_eq!(registry().names, ["basic"]);
/// ```
///
/// [`SingletonHolder`]: crate::SingletonHolder
#[macro_export]
macro_rules! define_singleton {
  ($(#[$meta:meta])* $vis:vis fn $accessor:ident() -> $ty:ty = $init:expr;) => {
    $(#[$meta])*
    $vis fn $accessor() -> &'static $ty {
      static HOLDER: $crate::SingletonHolder<$ty> = $crate::SingletonHolder::new();
      HOLDER.get_or_init(|| $init)
    }
  };
}
