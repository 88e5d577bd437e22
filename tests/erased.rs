//! The type-erased registration primitive and the resolution-time type check
//! it makes necessary.

use service_locator::{global, LocateError, Lifecycle, Registry, ServiceKey};
use std::sync::Arc;

// --- Test Fixtures ---

struct ErasedService {
  id: u32,
}

// --- Erased Registration Tests ---

#[test]
fn test_erased_registration_resolves_like_typed() {
  // Arrange: hand-roll what `register_with` produces.
  let registry = Registry::new();
  registry.register_erased(
    ServiceKey::of::<ErasedService>(),
    Lifecycle::LazySingleton,
    Box::new(|| Box::new(Arc::new(ErasedService { id: 7 }))),
  );

  // Act
  let r1 = registry.locate::<ErasedService>().unwrap();
  let r2 = registry.locate::<ErasedService>().unwrap();

  // Assert
  assert_eq!(r1.id, 7);
  assert!(Arc::ptr_eq(&r1, &r2));
}

#[test]
fn test_mismatched_factory_fails_on_fresh_construction() {
  // A transient factory whose product does not match its key.
  #[derive(Debug)]
  struct WantedService;

  let registry = Registry::new();
  registry.register_erased(
    ServiceKey::of::<WantedService>(),
    Lifecycle::Transient,
    Box::new(|| Box::new(Arc::new(0_u32))),
  );

  // Act
  let result = registry.locate::<WantedService>();

  // Assert
  let error = result.unwrap_err();
  assert!(matches!(error, LocateError::TypeMismatch { .. }));
  assert!(error.type_name().contains("WantedService"));
}

#[test]
fn test_mismatched_factory_fails_on_cached_value_too() {
  // Under a shared lifecycle the wrong value lands in the cache; every
  // resolution must keep reporting the mismatch.
  struct WantedShared;

  let registry = Registry::new();
  registry.register_erased(
    ServiceKey::of::<WantedShared>(),
    Lifecycle::LazySingleton,
    Box::new(|| Box::new(Arc::new("not the service".to_string()))),
  );

  // Act & Assert: first resolution populates the cache, second reads it.
  assert!(matches!(
    registry.locate::<WantedShared>(),
    Err(LocateError::TypeMismatch { .. })
  ));
  assert!(matches!(
    registry.locate::<WantedShared>(),
    Err(LocateError::TypeMismatch { .. })
  ));
}

#[test]
fn test_key_addressed_queries_and_removal() {
  struct KeyedService;
  let key = ServiceKey::of::<KeyedService>();

  // Arrange
  global().register(|| KeyedService);
  assert!(global().is_registered_key(&key));

  // Act
  global().unregister_key(&key);

  // Assert
  assert!(!global().is_registered_key(&key));
  assert!(global().locate::<KeyedService>().is_err());
}

#[test]
fn test_service_keys_compare_by_type_identity() {
  assert_eq!(ServiceKey::of::<ErasedService>(), ServiceKey::of::<ErasedService>());
  assert_ne!(ServiceKey::of::<ErasedService>(), ServiceKey::of::<u32>());
  // The diagnostic name follows the type.
  assert!(ServiceKey::of::<ErasedService>().type_name().contains("ErasedService"));
}
