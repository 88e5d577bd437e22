//! Behavior of the three instance lifecycles, including cache invalidation
//! on re-registration.

use pretty_assertions::assert_eq;
use serial_test::serial;
use service_locator::{global, locate, Lifecycle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Fixtures ---

// A service tagged with its construction number, for counting how many times
// a factory really ran.
struct TaggedGreeter {
  tag: usize,
}

// Shared between the re-registration tests below; those are marked #[serial]
// because they mutate the same key on the global registry.
struct ConfigService {
  value: String,
}

// --- Lifecycle Tests ---

#[test]
fn test_transient_builds_a_fresh_instance_per_locate() {
  struct PerCallService {
    serial: usize,
  }
  static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

  // Arrange
  global().register_with(Lifecycle::Transient, || PerCallService {
    serial: CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1,
  });

  // Act
  let first = locate!(PerCallService);
  let second = locate!(PerCallService);

  // Assert: two resolutions, two constructions, two distinct instances.
  assert_eq!(first.serial, 1);
  assert_eq!(second.serial, 2);
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 2);
  assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_lazy_singleton_defers_construction_to_first_locate() {
  struct DeferredService;
  static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

  // Arrange
  global().register(|| {
    CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    DeferredService
  });

  // Assert: registering alone must not run the factory.
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 0);

  // Act
  let _service = locate!(DeferredService);

  // Assert
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_eager_singleton_is_constructed_before_first_locate() {
  // A side-effecting counter inside the factory must already read 1
  // immediately after registration returns.
  struct EagerLogger;
  static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

  // Act
  global().register_with(Lifecycle::EagerSingleton, || {
    CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    EagerLogger
  });

  // Assert: constructed during registration.
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);

  // Locating afterwards serves the cached instance without another build.
  let first = locate!(EagerLogger);
  let second = locate!(EagerLogger);
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
  assert!(Arc::ptr_eq(&first, &second));
}

#[test]
#[serial]
fn test_lazy_singleton_caches_then_transient_rebuilds() {
  // Lazy: three locates, one construction, tag 1 every time. Then switch the
  // same key to Transient with a fresh counter: tags 1, 2, 3.
  static LAZY_BUILDS: AtomicUsize = AtomicUsize::new(0);
  static TRANSIENT_BUILDS: AtomicUsize = AtomicUsize::new(0);

  // Arrange: lazy shared registration.
  global().register_with(Lifecycle::LazySingleton, || TaggedGreeter {
    tag: LAZY_BUILDS.fetch_add(1, Ordering::SeqCst) + 1,
  });

  // Act & Assert: same tag on every resolution, one real construction.
  for _ in 0..3 {
    assert_eq!(locate!(TaggedGreeter).tag, 1);
  }
  assert_eq!(LAZY_BUILDS.load(Ordering::SeqCst), 1);

  // Arrange: re-register the key as transient.
  global().register_with(Lifecycle::Transient, || TaggedGreeter {
    tag: TRANSIENT_BUILDS.fetch_add(1, Ordering::SeqCst) + 1,
  });

  // Act & Assert: every resolution constructs anew.
  assert_eq!(locate!(TaggedGreeter).tag, 1);
  assert_eq!(locate!(TaggedGreeter).tag, 2);
  assert_eq!(locate!(TaggedGreeter).tag, 3);

  global().unregister::<TaggedGreeter>();
}

#[test]
#[serial]
fn test_reregistration_discards_cached_instance() {
  // Arrange: cache an instance under the first recipe.
  global().register(|| ConfigService {
    value: "first".to_string(),
  });
  assert_eq!(locate!(ConfigService).value, "first");

  // Act: replace the registration, same lifecycle.
  global().register(|| ConfigService {
    value: "second".to_string(),
  });

  // Assert: the new factory is authoritative, not the old cached value.
  assert_eq!(locate!(ConfigService).value, "second");

  global().unregister::<ConfigService>();
}

#[test]
#[serial]
fn test_unregister_then_reregister_starts_clean() {
  // Arrange
  global().register(|| ConfigService {
    value: "original".to_string(),
  });
  let original = locate!(ConfigService);
  assert_eq!(original.value, "original");

  // Act
  global().unregister::<ConfigService>();
  global().register(|| ConfigService {
    value: "rebuilt".to_string(),
  });

  // Assert: nothing carried over from before the unregister.
  let rebuilt = locate!(ConfigService);
  assert_eq!(rebuilt.value, "rebuilt");
  assert!(!Arc::ptr_eq(&original, &rebuilt));

  global().unregister::<ConfigService>();
}

#[test]
fn test_eager_replacing_lazy_rebuilds_immediately() {
  struct SwappedService {
    generation: u32,
  }
  static EAGER_BUILDS: AtomicUsize = AtomicUsize::new(0);

  // Arrange: lazy registration, resolved once so a cache exists.
  global().register(|| SwappedService { generation: 1 });
  assert_eq!(locate!(SwappedService).generation, 1);

  // Act: replace it eagerly.
  global().register_with(Lifecycle::EagerSingleton, || {
    EAGER_BUILDS.fetch_add(1, Ordering::SeqCst);
    SwappedService { generation: 2 }
  });

  // Assert: the new instance was built during registration and is served.
  assert_eq!(EAGER_BUILDS.load(Ordering::SeqCst), 1);
  assert_eq!(locate!(SwappedService).generation, 2);
  assert_eq!(EAGER_BUILDS.load(Ordering::SeqCst), 1);
}
