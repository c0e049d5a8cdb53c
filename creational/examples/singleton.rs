use creational_patterns::{telemetry, Singleton};
use std::thread;

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  let addresses: Vec<usize> = thread::scope(|s| {
    let handles: Vec<_> = (0..8)
      .map(|_| s.spawn(|| Singleton::instance() as *const Singleton as usize))
      .collect();
    handles
      .into_iter()
      .map(|h| h.join().expect("accessor thread panicked"))
      .collect()
  });

  println!("Addresses seen by 8 threads: {:x?}", addresses);
  println!("Constructions: {}", Singleton::construction_count());
  assert!(addresses.iter().all(|&addr| addr == addresses[0]));

  let instance = Singleton::instance();
  println!("Initial data: {}", instance.data());
  instance.set_data("Updated from main");
  println!("Data seen through a fresh accessor call: {}", Singleton::instance().data());

  Ok(())
}
