//! One-product-per-factory dishes.
//!
//! Each [`DishFactory`] builds exactly one kind of [`Dish`]. New dishes are added
//! by writing a new factory, leaving existing ones untouched. [`menu`] exposes the
//! same dishes behind a selector for callers that pick at runtime.

use crate::menu::Menu;

/// Something a kitchen can cook and serve.
pub trait Dish: Send + Sync {
  fn name(&self) -> &'static str;

  /// The line `cook` emits.
  fn cooking(&self) -> &'static str;

  /// The line `serve` emits.
  fn serving(&self) -> &'static str;

  fn cook(&self) {
    tracing::debug!(dish = self.name(), "cooking");
    println!("{}", self.cooking());
  }

  fn serve(&self) {
    tracing::debug!(dish = self.name(), "serving");
    println!("{}", self.serving());
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pizza;

impl Dish for Pizza {
  fn name(&self) -> &'static str {
    "pizza"
  }

  fn cooking(&self) -> &'static str {
    "Pizza : Cooking - > Cooked"
  }

  fn serving(&self) -> &'static str {
    "Pizza : Serving -> Served"
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Burger;

impl Dish for Burger {
  fn name(&self) -> &'static str {
    "burger"
  }

  fn cooking(&self) -> &'static str {
    "Burger: Cooking -> Cooked"
  }

  fn serving(&self) -> &'static str {
    "Burger: Serving - > Served"
  }
}

/// Creates one kind of dish.
pub trait DishFactory {
  fn create_dish(&self) -> Box<dyn Dish>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PizzaFactory;

impl DishFactory for PizzaFactory {
  fn create_dish(&self) -> Box<dyn Dish> {
    Box::new(Pizza)
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BurgerDishFactory;

impl DishFactory for BurgerDishFactory {
  fn create_dish(&self) -> Box<dyn Dish> {
    Box::new(Burger)
  }
}

/// All dishes behind a case-insensitive selector (`"pizza"`, `"burger"`).
pub fn menu() -> Menu<Box<dyn Dish>> {
  let menu = Menu::new("dish");
  menu.register("pizza", || PizzaFactory.create_dish());
  menu.register("burger", || BurgerDishFactory.create_dish());
  menu
}
