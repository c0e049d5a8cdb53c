use creational_patterns::{telemetry, SimpleBurgerFactory};

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  let factory = SimpleBurgerFactory::new();

  for selector in ["standard", "deluxe"] {
    match factory.create_burger(selector) {
      Ok(burger) => burger.prepare(),
      // Already reported by the factory; nothing to prepare.
      Err(_) => println!("Skipping '{}'.", selector),
    }
  }

  Ok(())
}
