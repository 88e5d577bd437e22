//! The `Registry` type and its registration, resolution and query methods.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::core::{BoxedFactory, Lifecycle, Registration, ResolutionGuard, ServiceKey};
use crate::error::{LocateError, Result};

/// A thread-safe, type-keyed service registry.
///
/// Services are registered under the identity of a nominal type (a concrete
/// type or a trait object) together with a [`Lifecycle`] policy, and resolved
/// by that type alone. Registration is dynamic: a service can be added,
/// replaced or removed at any point in the process lifetime, and
/// re-registering a type replaces the previous recipe and discards any cached
/// instance.
///
/// Most call sites use the process-wide instance from
/// [`global()`](crate::global); independent instances from [`Registry::new`]
/// give tests and scoped wiring full isolation.
#[derive(Default)]
pub struct Registry {
  entries: DashMap<ServiceKey, Registration>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Registration ---

  /// Registers `T` with the default [`Lifecycle::LazySingleton`] policy.
  pub fn register<T: Any + Send + Sync>(&self, factory: impl Fn() -> T + Send + Sync + 'static) {
    self.register_with(Lifecycle::default(), factory);
  }

  /// Registers `T` under an explicit lifecycle policy.
  ///
  /// Any previous registration for `T` is replaced and its cached instance
  /// discarded; re-registration is never an error. For
  /// [`Lifecycle::EagerSingleton`] the factory runs before this method
  /// returns; a panicking factory propagates to the caller and leaves the
  /// cache unpopulated, so the next resolution retries it.
  pub fn register_with<T: Any + Send + Sync>(
    &self,
    lifecycle: Lifecycle,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    let key = ServiceKey::of::<T>();
    self.register_erased(key, lifecycle, Box::new(move || Box::new(Arc::new(factory()))));
  }

  /// Registers a trait object `I` (e.g. `dyn Greeter`) with the default
  /// [`Lifecycle::LazySingleton`] policy.
  ///
  /// The factory hands back an `Arc<I>`, letting it pick any concrete
  /// implementation; resolution then serves the service as `Arc<I>`.
  pub fn register_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.register_trait_with(Lifecycle::default(), factory);
  }

  /// Registers a trait object `I` under an explicit lifecycle policy.
  pub fn register_trait_with<I: ?Sized + Any + Send + Sync>(
    &self,
    lifecycle: Lifecycle,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    let key = ServiceKey::of::<I>();
    self.register_erased(key, lifecycle, Box::new(move || Box::new(factory())));
  }

  /// Registers a type-erased factory under an explicit key.
  ///
  /// This is the primitive the typed registration methods forward to. The
  /// factory's product is not checked here: the registry enforces that the
  /// boxed value is an `Arc` of the keyed type at the moment of consumption,
  /// in [`locate`](Registry::locate). A factory whose product does not match
  /// its key is reported as [`LocateError::TypeMismatch`] on every resolution.
  pub fn register_erased(&self, key: ServiceKey, lifecycle: Lifecycle, factory: BoxedFactory) {
    trace!(service = key.type_name(), ?lifecycle, "registering service");
    self.entries.insert(key, Registration::new(lifecycle, factory));
    if lifecycle == Lifecycle::EagerSingleton {
      // Populate the cache through the same once-only path `locate` uses, so
      // the instance exists before registration returns.
      let _guard = ResolutionGuard::new(key);
      if let Some(entry) = self.entries.get(&key) {
        debug!(service = key.type_name(), "constructing eager shared instance");
        entry.value().shared_ref();
      }
    }
  }

  // --- Resolution ---

  /// Resolves an instance of `T` according to its registered lifecycle.
  ///
  /// `T` may be inferred from the call site or spelled with a turbofish; both
  /// forms name the same registration. Shared lifecycles clone one cached
  /// `Arc`, so instance identity is observable via [`Arc::ptr_eq`];
  /// [`Lifecycle::Transient`] mints a fresh instance per call.
  ///
  /// # Errors
  ///
  /// [`LocateError::UnregisteredService`] when `T` has no current
  /// registration, and [`LocateError::TypeMismatch`] when the registered
  /// factory produced something other than `T`. Both signal wiring bugs; the
  /// [`locate!`](crate::locate) macro converts them into panics.
  pub fn locate<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>> {
    let key = ServiceKey::of::<T>();
    let _guard = ResolutionGuard::new(key);

    let entry = self.entries.get(&key).ok_or(LocateError::UnregisteredService {
      type_name: key.type_name(),
    })?;
    let registration = entry.value();

    match registration.lifecycle {
      Lifecycle::Transient => registration
        .fresh()
        .downcast::<Arc<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| LocateError::TypeMismatch {
          type_name: key.type_name(),
        }),
      Lifecycle::LazySingleton | Lifecycle::EagerSingleton => {
        if !registration.is_cached() {
          debug!(service = key.type_name(), "constructing shared instance");
        }
        registration
          .shared_ref()
          .downcast_ref::<Arc<T>>()
          .cloned()
          .ok_or(LocateError::TypeMismatch {
            type_name: key.type_name(),
          })
      }
    }
  }

  // --- Removal and queries ---

  /// Removes `T`'s registration and any cached instance in one step.
  ///
  /// No-op when `T` was never registered.
  pub fn unregister<T: ?Sized + Any>(&self) {
    self.unregister_key(&ServiceKey::of::<T>());
  }

  /// Key-addressed form of [`unregister`](Registry::unregister).
  pub fn unregister_key(&self, key: &ServiceKey) {
    if self.entries.remove(key).is_some() {
      trace!(service = key.type_name(), "unregistered service");
    }
  }

  /// Whether a registration currently exists for `T`. Pure query.
  pub fn is_registered<T: ?Sized + Any>(&self) -> bool {
    self.is_registered_key(&ServiceKey::of::<T>())
  }

  /// Key-addressed form of [`is_registered`](Registry::is_registered).
  pub fn is_registered_key(&self, key: &ServiceKey) -> bool {
    self.entries.contains_key(key)
  }
}
