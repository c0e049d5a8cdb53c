use creational_patterns::{Singleton, SingletonHolder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

const CALLERS: usize = 100;

// Runs `CALLERS` threads that all call `access` at once and returns the
// address each of them observed.
fn concurrent_addresses<T: 'static>(access: impl Fn() -> &'static T + Sync) -> Vec<usize> {
  let barrier = &Barrier::new(CALLERS);
  let access = &access;
  thread::scope(|s| {
    let handles: Vec<_> = (0..CALLERS)
      .map(|_| {
        s.spawn(move || {
          barrier.wait();
          access() as *const T as usize
        })
      })
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  })
}

#[test]
fn test_global_instance_is_shared_by_concurrent_callers() {
  let addresses = concurrent_addresses(Singleton::instance);

  assert_eq!(addresses.len(), CALLERS);
  assert!(addresses.iter().all(|&addr| addr == addresses[0]));
  assert!(std::ptr::eq(
    Singleton::instance(),
    addresses[0] as *const Singleton
  ));
  assert_eq!(Singleton::construction_count(), 1);
}

#[test]
fn test_global_instance_carries_shared_data() {
  let instance = Singleton::instance();
  assert_eq!(instance.data(), "Default");

  instance.set_data("changed");
  assert_eq!(Singleton::instance().data(), "changed");
  assert_eq!(Singleton::construction_count(), 1);
}

#[test]
fn test_static_holder_runs_initializer_once_under_concurrency() {
  static INITIALIZER_RUNS: AtomicUsize = AtomicUsize::new(0);
  static HOLDER: SingletonHolder<Vec<u8>> = SingletonHolder::new();

  let addresses = concurrent_addresses(|| {
    HOLDER.get_or_init(|| {
      INITIALIZER_RUNS.fetch_add(1, Ordering::SeqCst);
      // Widen the window in which a broken holder would construct twice.
      thread::sleep(Duration::from_millis(50));
      vec![1, 2, 3]
    })
  });

  assert!(addresses.iter().all(|&addr| addr == addresses[0]));
  assert_eq!(INITIALIZER_RUNS.load(Ordering::SeqCst), 1);
  assert_eq!(HOLDER.constructions(), 1);
  assert_eq!(HOLDER.get(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_owned_holder_is_isolated_and_resettable() {
  let mut holder: SingletonHolder<String> = SingletonHolder::new();
  assert!(!holder.is_initialized());
  assert!(holder.get().is_none());

  let first = holder.get_or_init(|| "first".to_string()) as *const String;
  let again = holder.get_or_init(|| "ignored".to_string()) as *const String;
  assert_eq!(first, again);

  assert_eq!(holder.reset(), Some("first".to_string()));
  assert!(!holder.is_initialized());

  assert_eq!(holder.get_or_init(|| "second".to_string()), "second");
  assert_eq!(holder.constructions(), 2);
}
