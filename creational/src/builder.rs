//! Step-by-step construction of a `PersonalComputer`.
//!
//! A [`ComputerBuilder`] exposes one chained method per construction step and a
//! final [`build`](ComputerBuilder::build). A [`ComputerDirector`] knows the
//! order of the steps for a standard configuration but not how any builder
//! carries them out.

use crate::error::{Error, Result};
use std::fmt;

/// The product assembled by a builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalComputer {
  pub processor: String,
  pub memory_gb: u32,
  pub storage_gb: u32,
  pub graphics_card: String,
}

impl fmt::Display for PersonalComputer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "PersonalComputer(processor={}, memory={}GB, storage={}GB, graphicsCard={})",
      self.processor, self.memory_gb, self.storage_gb, self.graphics_card
    )
  }
}

/// Construction steps for a [`PersonalComputer`]. Each step consumes the builder
/// and hands it back so calls can be chained.
pub trait ComputerBuilder: Sized {
  fn processor(self, processor: &str) -> Self;
  fn memory(self, gigabytes: u32) -> Self;
  fn storage(self, gigabytes: u32) -> Self;
  fn graphics_card(self, graphics_card: &str) -> Self;

  /// Finishes the computer.
  ///
  /// Fails with [`Error::MissingPart`] if the processor or memory step never ran.
  fn build(self) -> Result<PersonalComputer>;
}

/// Builds MacBook configurations.
///
/// ```
/// use creational_patterns::builder::{AppleMacBookBuilder, ComputerBuilder};
///
/// let computer = AppleMacBookBuilder::new()
///   .processor("8-core CPU, Apple M2")
///   .memory(16)
///   .build()
///   .unwrap();
/// assert_eq!(computer.storage_gb, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppleMacBookBuilder {
  computer: PersonalComputer,
}

impl AppleMacBookBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  fn validate(&self) -> Result<()> {
    if self.computer.processor.trim().is_empty() {
      return Err(Error::MissingPart { part: "processor" });
    }
    if self.computer.memory_gb == 0 {
      return Err(Error::MissingPart { part: "memory" });
    }
    Ok(())
  }
}

impl ComputerBuilder for AppleMacBookBuilder {
  fn processor(mut self, processor: &str) -> Self {
    self.computer.processor = processor.to_owned();
    self
  }

  fn memory(mut self, gigabytes: u32) -> Self {
    self.computer.memory_gb = gigabytes;
    self
  }

  fn storage(mut self, gigabytes: u32) -> Self {
    self.computer.storage_gb = gigabytes;
    self
  }

  fn graphics_card(mut self, graphics_card: &str) -> Self {
    self.computer.graphics_card = graphics_card.to_owned();
    self
  }

  fn build(self) -> Result<PersonalComputer> {
    self.validate()?;
    tracing::debug!(computer = %self.computer, "built computer");
    Ok(self.computer)
  }
}

/// Drives a builder through the standard configuration.
#[derive(Debug)]
pub struct ComputerDirector<B> {
  builder: B,
}

impl<B: ComputerBuilder> ComputerDirector<B> {
  pub fn new(builder: B) -> Self {
    Self { builder }
  }

  pub fn construct_personal_computer(self) -> Result<PersonalComputer> {
    self
      .builder
      .processor("14-core CPU, Apple M2 Ultra")
      .memory(36)
      .storage(500)
      .graphics_card("xyz")
      .build()
  }
}
