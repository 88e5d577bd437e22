use service_locator::{global, locate, Lifecycle};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A global, thread-safe counter to give every constructed tracker a unique ID.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

// One service type per lifecycle, since registrations are keyed by type.
struct SharedTracker {
  id: usize,
}

struct PerCallTracker {
  id: usize,
}

struct StartupTracker {
  id: usize,
}

fn next_id(kind: &str) -> usize {
  let id = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
  println!("Constructing {kind} tracker with id {id}...");
  id
}

fn main() {
  // --- Lazy Singleton (the default) ---
  // This factory will only be called ONCE, at the first resolution.
  global().register(|| SharedTracker {
    id: next_id("lazy shared"),
  });

  // --- Transient ---
  // This factory will be called EVERY time the service is resolved.
  global().register_with(Lifecycle::Transient, || PerCallTracker {
    id: next_id("per-call"),
  });

  // --- Eager Singleton ---
  // This factory runs right now, before `register_with` returns.
  global().register_with(Lifecycle::EagerSingleton, || StartupTracker {
    id: next_id("eager"),
  });
  println!("All registrations done; only the eager tracker exists so far.\n");

  println!("--- Resolving the lazy singleton ---");
  let s1 = locate!(SharedTracker);
  let s2 = locate!(SharedTracker);
  println!("Lazy 1 ID: {}, Lazy 2 ID: {}", s1.id, s2.id);
  assert!(Arc::ptr_eq(&s1, &s2), "shared instances should be identical");
  println!("Lazy singleton instances are the same pointer, as expected.\n");

  println!("--- Resolving transients ---");
  let t1 = locate!(PerCallTracker);
  let t2 = locate!(PerCallTracker);
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert!(
    !Arc::ptr_eq(&t1, &t2),
    "transient instances should be different"
  );
  println!("Transient instances are different pointers, as expected.\n");

  println!("--- Resolving the eager singleton ---");
  let e1 = locate!(StartupTracker);
  println!("Eager ID: {} (id 0: it was built first, during registration)", e1.id);
  assert_eq!(e1.id, 0);
}
