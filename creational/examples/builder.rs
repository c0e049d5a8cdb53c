use creational_patterns::builder::{AppleMacBookBuilder, ComputerBuilder, ComputerDirector};
use creational_patterns::telemetry;

fn main() -> creational_patterns::Result<()> {
  telemetry::init_logging()?;

  let computer = ComputerDirector::new(AppleMacBookBuilder::new()).construct_personal_computer()?;
  println!("{}", computer);

  // Without the director, the client picks the steps itself.
  let custom = AppleMacBookBuilder::new()
    .processor("8-core CPU, Apple M2")
    .memory(16)
    .storage(256)
    .build()?;
  println!("{}", custom);

  // Skipping a required step is reported, not fatal.
  if let Err(err) = AppleMacBookBuilder::new().storage(128).build() {
    println!("{}", err);
  }

  Ok(())
}
