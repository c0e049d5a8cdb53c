use creational_patterns::builder::{
  AppleMacBookBuilder, ComputerBuilder, ComputerDirector, PersonalComputer,
};
use creational_patterns::Error;
use pretty_assertions::assert_eq;

#[test]
fn test_director_builds_the_standard_configuration() {
  let computer = ComputerDirector::new(AppleMacBookBuilder::new())
    .construct_personal_computer()
    .unwrap();

  assert_eq!(
    computer,
    PersonalComputer {
      processor: "14-core CPU, Apple M2 Ultra".to_string(),
      memory_gb: 36,
      storage_gb: 500,
      graphics_card: "xyz".to_string(),
    }
  );
  assert_eq!(
    computer.to_string(),
    "PersonalComputer(processor=14-core CPU, Apple M2 Ultra, memory=36GB, storage=500GB, graphicsCard=xyz)"
  );
}

#[test]
fn test_steps_can_be_chained_in_any_order() {
  let computer = AppleMacBookBuilder::new()
    .graphics_card("Integrated")
    .storage(256)
    .memory(8)
    .processor("8-core CPU, Apple M1")
    .build()
    .unwrap();

  assert_eq!(computer.processor, "8-core CPU, Apple M1");
  assert_eq!(computer.memory_gb, 8);
  assert_eq!(computer.storage_gb, 256);
  assert_eq!(computer.graphics_card, "Integrated");
}

#[test]
fn test_later_step_overrides_earlier_one() {
  let computer = AppleMacBookBuilder::new()
    .processor("old")
    .processor("new")
    .memory(16)
    .memory(32)
    .build()
    .unwrap();

  assert_eq!(computer.processor, "new");
  assert_eq!(computer.memory_gb, 32);
}

#[test]
fn test_build_rejects_missing_parts() {
  assert_eq!(
    AppleMacBookBuilder::new().memory(8).build(),
    Err(Error::MissingPart { part: "processor" })
  );

  let err = AppleMacBookBuilder::new()
    .processor("8-core CPU, Apple M1")
    .build()
    .unwrap_err();
  assert_eq!(err, Error::MissingPart { part: "memory" });
  assert_eq!(err.to_string(), "Cannot build computer: missing memory");
}
