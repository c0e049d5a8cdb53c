use creational_patterns::{telemetry, BurgerFactory, KingBurger, SinghBurger};

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  let shops: Vec<Box<dyn BurgerFactory>> = vec![Box::new(SinghBurger::new()), Box::new(KingBurger::new())];

  // Same selector, different families.
  for shop in &shops {
    println!("--- {} ---", shop.name());
    for selector in ["basic", "Premium", "deluxe"] {
      if let Ok(burger) = shop.create_burger(selector) {
        burger.prepare();
      }
    }
  }

  Ok(())
}
