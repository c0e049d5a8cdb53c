use creational_patterns::prototype::{Circle, Rectangle, Shape};
use creational_patterns::telemetry;

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  let circle = Circle::new("Red", 3);
  println!("Shape: {}", circle);
  println!("Shape: {}", circle.copy_with(None, None));
  println!("Shape: {}", circle.copy_with(Some("Black"), None));
  println!("Shape: {}", circle.copy_with(Some("Black"), Some(4)));
  println!("Shape: {}", circle.copy_with(None, Some(4)));

  let mut shape: Box<dyn Shape> = Box::new(Rectangle::new("Black", 2, 3));
  println!("Shape: {}", shape);
  shape = shape.recolored("Green");
  println!("Shape: {}", shape);

  Ok(())
}
