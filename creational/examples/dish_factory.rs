use creational_patterns::dish::{self, BurgerDishFactory, Dish, DishFactory, PizzaFactory};
use creational_patterns::telemetry;

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  // Go straight to the factory for the dish you want.
  let factories: [&dyn DishFactory; 2] = [&PizzaFactory, &BurgerDishFactory];
  for factory in factories {
    let dish = factory.create_dish();
    dish.cook();
    dish.serve();
  }

  // Or pick one by name at runtime.
  let menu = dish::menu();
  let dish = menu.create("Pizza")?;
  dish.cook();
  dish.serve();

  Ok(())
}
