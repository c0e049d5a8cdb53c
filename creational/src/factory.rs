//! Burger factories: a simple factory and two factory-method implementations.

use crate::error::Result;
use crate::menu::Menu;
use crate::product::{Bun, Burger, Tier};

// Registers every tier for one bun family.
fn burger_menu(bun: Bun) -> Menu<Burger> {
  let menu = Menu::new("burger");
  for tier in Tier::ALL {
    menu.register(tier.selector(), move || Burger::new(tier, bun));
  }
  menu
}

/// A concrete burger factory with no abstraction over it.
///
/// ```
/// use creational_patterns::{SimpleBurgerFactory, Tier};
///
/// let factory = SimpleBurgerFactory::new();
/// let burger = factory.create_burger("Standard").unwrap();
/// assert_eq!(burger.tier(), Tier::Standard);
/// assert!(factory.create_burger("deluxe").is_err());
/// ```
#[derive(Debug)]
pub struct SimpleBurgerFactory {
  menu: Menu<Burger>,
}

impl SimpleBurgerFactory {
  pub fn new() -> Self {
    Self {
      menu: burger_menu(Bun::Plain),
    }
  }

  pub fn create_burger(&self, selector: &str) -> Result<Burger> {
    self.menu.create(selector)
  }
}

impl Default for SimpleBurgerFactory {
  fn default() -> Self {
    Self::new()
  }
}

/// The factory-method abstraction: each implementation decides which burger
/// family a selector maps to.
pub trait BurgerFactory: Send + Sync {
  /// The shop's name, used in logs.
  fn name(&self) -> &str;

  /// Creates the burger for `selector`, matched case-insensitively.
  ///
  /// Returns [`Error::InvalidSelector`](crate::Error::InvalidSelector) for an
  /// unknown selector; the failure is logged where it happens.
  fn create_burger(&self, selector: &str) -> Result<Burger>;
}

/// Bakes every burger on a plain bun.
#[derive(Debug)]
pub struct SinghBurger {
  menu: Menu<Burger>,
}

impl SinghBurger {
  pub fn new() -> Self {
    Self {
      menu: burger_menu(Bun::Plain),
    }
  }

  /// Exposes the menu so new selectors can be added to this shop.
  pub fn menu(&self) -> &Menu<Burger> {
    &self.menu
  }
}

impl Default for SinghBurger {
  fn default() -> Self {
    Self::new()
  }
}

impl BurgerFactory for SinghBurger {
  fn name(&self) -> &str {
    "Singh Burger"
  }

  fn create_burger(&self, selector: &str) -> Result<Burger> {
    self.menu.create(selector)
  }
}

/// Bakes every burger on a wheat bun.
#[derive(Debug)]
pub struct KingBurger {
  menu: Menu<Burger>,
}

impl KingBurger {
  pub fn new() -> Self {
    Self {
      menu: burger_menu(Bun::Wheat),
    }
  }

  pub fn menu(&self) -> &Menu<Burger> {
    &self.menu
  }
}

impl Default for KingBurger {
  fn default() -> Self {
    Self::new()
  }
}

impl BurgerFactory for KingBurger {
  fn name(&self) -> &str {
    "King Burger"
  }

  fn create_burger(&self, selector: &str) -> Result<Burger> {
    self.menu.create(selector)
  }
}
