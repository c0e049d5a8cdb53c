//! Shapes created by copying an existing prototype.
//!
//! Building a shape from scratch is treated as the expensive path; new shapes
//! are cloned from one that already exists and only the overridden properties
//! change.

use std::fmt;

/// A shape that can produce copies of itself behind a trait object.
pub trait Shape: fmt::Display + Send + Sync {
  /// An identical copy.
  fn clone_box(&self) -> Box<dyn Shape>;

  /// A copy with a different colour and every other property kept.
  fn recolored(&self, color: &str) -> Box<dyn Shape>;
}

impl Clone for Box<dyn Shape> {
  fn clone(&self) -> Self {
    self.clone_box()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
  color: String,
  radius: u32,
}

impl Circle {
  pub fn new(color: &str, radius: u32) -> Self {
    Self {
      color: color.to_owned(),
      radius,
    }
  }

  pub fn color(&self) -> &str {
    &self.color
  }

  pub fn radius(&self) -> u32 {
    self.radius
  }

  /// Copies this circle, replacing whichever properties are given.
  ///
  /// ```
  /// use creational_patterns::prototype::Circle;
  ///
  /// let red = Circle::new("Red", 3);
  /// assert_eq!(red.copy_with(None, Some(4)), Circle::new("Red", 4));
  /// assert_eq!(red.copy_with(Some("Black"), None), Circle::new("Black", 3));
  /// ```
  pub fn copy_with(&self, color: Option<&str>, radius: Option<u32>) -> Self {
    let mut copy = self.clone();
    if let Some(color) = color {
      copy.color = color.to_owned();
    }
    if let Some(radius) = radius {
      copy.radius = radius;
    }
    tracing::trace!(from = %self, to = %copy, "copied prototype");
    copy
  }
}

impl fmt::Display for Circle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Circle - {}, radius = {}", self.color, self.radius)
  }
}

impl Shape for Circle {
  fn clone_box(&self) -> Box<dyn Shape> {
    Box::new(self.clone())
  }

  fn recolored(&self, color: &str) -> Box<dyn Shape> {
    Box::new(self.copy_with(Some(color), None))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
  color: String,
  width: u32,
  height: u32,
}

impl Rectangle {
  pub fn new(color: &str, width: u32, height: u32) -> Self {
    Self {
      color: color.to_owned(),
      width,
      height,
    }
  }

  pub fn color(&self) -> &str {
    &self.color
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn copy_with(&self, color: Option<&str>, width: Option<u32>, height: Option<u32>) -> Self {
    Self {
      color: color.map_or_else(|| self.color.clone(), str::to_owned),
      width: width.unwrap_or(self.width),
      height: height.unwrap_or(self.height),
    }
  }
}

impl fmt::Display for Rectangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Rectangle - {}, a = {}, b = {}", self.color, self.width, self.height)
  }
}

impl Shape for Rectangle {
  fn clone_box(&self) -> Box<dyn Shape> {
    Box::new(self.clone())
  }

  fn recolored(&self, color: &str) -> Box<dyn Shape> {
    Box::new(self.copy_with(Some(color), None, None))
  }
}
