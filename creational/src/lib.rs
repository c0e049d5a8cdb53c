//! # Creational Patterns
//!
//! Classic creational design patterns, expressed with Rust types instead of
//! class hierarchies.
//!
//! ## Core Concepts
//!
//! - **Burger**: a tagged value (`Tier` x `Bun`) with one capability, `prepare`.
//! - **Menu**: a case-insensitive lookup table from selector to constructor.
//! - **Simple factory**: [`SimpleBurgerFactory`], one concrete factory.
//! - **Factory method**: the [`BurgerFactory`] trait with a plain-bun
//!   ([`SinghBurger`]) and a wheat-bun ([`KingBurger`]) implementation.
//! - **Singleton**: [`SingletonHolder`], an init-once slot, and [`Singleton`],
//!   the process-wide instance built on it.
//! - **Builder**: [`builder::ComputerBuilder`] chains construction steps and a
//!   [`builder::ComputerDirector`] runs them in a standard order.
//! - **Prototype**: [`prototype::Shape`] values are copied from an existing
//!   instance with selected properties overridden.
//!
//! An unknown selector is never fatal: it is logged where it happens and
//! returned as [`Error::InvalidSelector`].
//!
//! ## Quick Start
//!
//! ```
//! use creational_patterns::{BurgerFactory, KingBurger, SinghBurger, Singleton};
//!
//! let shops: [Box<dyn BurgerFactory>; 2] = [Box::new(SinghBurger::new()), Box::new(KingBurger::new())];
//!
//! for shop in &shops {
//!   match shop.create_burger("BASIC") {
//!     Ok(burger) => burger.prepare(),
//!     Err(err) => eprintln!("{}: {}", shop.name(), err),
//!   }
//! }
//!
//! assert!(shops[0].create_burger("deluxe").is_err());
//! assert!(std::ptr::eq(Singleton::instance(), Singleton::instance()));
//! ```

pub mod builder;
mod core;
pub mod dish;
mod error;
mod factory;
mod global;
mod macros;
mod menu;
mod product;
pub mod prototype;
mod singleton;
pub mod telemetry;

pub use crate::core::SelectorKey;
pub use error::{Error, Result};
pub use factory::{BurgerFactory, KingBurger, SimpleBurgerFactory, SinghBurger};
pub use global::Singleton;
pub use menu::Menu;
pub use product::{Bun, Burger, Tier};
pub use singleton::SingletonHolder;
