//! Burger variants.
//!
//! A burger is a plain tagged value: a [`Tier`] crossed with a [`Bun`]. Every
//! combination shares the same shape, so there is one `Burger` type rather than
//! one type per combination.

use std::fmt;

/// The quality tier of a burger. Each tier owns one selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
  Basic,
  Standard,
  Premium,
}

impl Tier {
  /// Every tier, in menu order.
  pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Standard, Tier::Premium];

  /// The selector key that picks this tier.
  pub const fn selector(self) -> &'static str {
    match self {
      Tier::Basic => "basic",
      Tier::Standard => "standard",
      Tier::Premium => "premium",
    }
  }

  pub const fn label(self) -> &'static str {
    match self {
      Tier::Basic => "Basic",
      Tier::Standard => "Standard",
      Tier::Premium => "Premium",
    }
  }

  pub const fn toppings(self) -> &'static str {
    match self {
      Tier::Basic => "bun, patty, and ketchup",
      Tier::Standard => "bun, patty, cheese, and lettuce",
      Tier::Premium => "gourmet bun, premium patty, cheese, lettuce, and secret sauce",
    }
  }
}

/// The bun family a factory bakes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bun {
  /// Refined white flour.
  #[default]
  Plain,
  Wheat,
}

/// A stateless burger value identified by its `(tier, bun)` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burger {
  tier: Tier,
  bun: Bun,
}

impl Burger {
  pub const fn new(tier: Tier, bun: Bun) -> Self {
    Self { tier, bun }
  }

  pub const fn tier(&self) -> Tier {
    self.tier
  }

  pub const fn bun(&self) -> Bun {
    self.bun
  }

  /// The fixed text `prepare` emits.
  pub fn description(&self) -> String {
    format!("Preparing {} with {}!", self, self.tier.toppings())
  }

  /// Prepares the burger by writing its description to stdout.
  pub fn prepare(&self) {
    tracing::debug!(burger = %self, "preparing");
    println!("{}", self.description());
  }
}

impl fmt::Display for Burger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.bun {
      Bun::Plain => write!(f, "{} Burger", self.tier.label()),
      Bun::Wheat => write!(f, "{} Wheat Burger", self.tier.label()),
    }
  }
}
