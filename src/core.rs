//! Core data structures for the registry: keys, lifecycles, entries.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;

thread_local! {
  // The set of services whose factories are currently executing on this
  // thread. A factory that locates its own key would otherwise deadlock
  // inside the entry map.
  static IN_FLIGHT: RefCell<HashSet<ServiceKey>> = RefCell::new(HashSet::new());
}

/// An RAII guard that traps re-entrant resolution.
///
/// When created, it adds the service key to the thread-local in-flight set.
/// If the key is already present, the factory for that service is trying to
/// locate itself mid-construction, and we panic instead of deadlocking.
/// When the guard is dropped, it removes the key from the set.
pub(crate) struct ResolutionGuard {
  key: ServiceKey,
}

impl ResolutionGuard {
  pub(crate) fn new(key: ServiceKey) -> Self {
    IN_FLIGHT.with(|keys| {
      // `insert` returns `false` if the key was already present.
      if !keys.borrow_mut().insert(key) {
        panic!(
          "re-entrant resolution: the factory for `{}` attempted to locate its own service",
          key.type_name()
        );
      }
    });
    Self { key }
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    IN_FLIGHT.with(|keys| {
      keys.borrow_mut().remove(&self.key);
    });
  }
}

/// The registry's lookup key: the identity of a registered nominal type.
///
/// Two keys are equal iff they denote the same declared type, which may be a
/// concrete type or a trait object (`dyn Trait`). The type name rides along
/// for diagnostics only and takes no part in equality or hashing.
#[derive(Clone, Copy)]
pub struct ServiceKey {
  type_id: TypeId,
  type_name: &'static str,
}

impl ServiceKey {
  /// The key identifying `T`.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
    }
  }

  /// The human-readable name of the keyed type.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl PartialEq for ServiceKey {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id
  }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
  }
}

impl fmt::Debug for ServiceKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.type_name)
  }
}

/// Instance lifecycle policy for a registered service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
  /// Every resolution invokes the factory and yields a fresh instance.
  Transient,
  /// The factory runs on first resolution; the instance is cached and shared
  /// by every later resolution.
  #[default]
  LazySingleton,
  /// The factory runs at registration time; the instance is cached and shared
  /// exactly as with [`Lifecycle::LazySingleton`] thereafter.
  EagerSingleton,
}

/// A type-erased construction recipe, as stored in the registry.
///
/// The boxed value must be a `Box<Arc<T>>` for the `T` the recipe is keyed
/// under; the registry checks this at resolution time, not here.
pub type BoxedFactory = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// A registration entry: the lifecycle policy, the factory, and the cached
/// shared instance.
///
/// The cache lives inside the entry so that replacing or removing the entry
/// replaces or removes the cache in the same map write. The cell stays empty
/// for [`Lifecycle::Transient`] registrations.
pub(crate) struct Registration {
  pub(crate) lifecycle: Lifecycle,
  factory: BoxedFactory,
  cell: OnceCell<Box<dyn Any + Send + Sync>>,
}

impl Registration {
  pub(crate) fn new(lifecycle: Lifecycle, factory: BoxedFactory) -> Self {
    Self {
      lifecycle,
      factory,
      cell: OnceCell::new(),
    }
  }

  /// The shared instance for this entry, constructing it on first call.
  ///
  /// Exactly one caller runs the factory; concurrent callers block until the
  /// cell is populated and then observe the same value. If the factory
  /// panics, the cell stays empty and the next caller retries.
  pub(crate) fn shared_ref(&self) -> &(dyn Any + Send + Sync) {
    &**self.cell.get_or_init(|| (self.factory)())
  }

  /// A freshly constructed instance. Never touches the cache.
  pub(crate) fn fresh(&self) -> Box<dyn Any + Send + Sync> {
    (self.factory)()
  }

  /// Whether a cached shared instance currently exists.
  pub(crate) fn is_cached(&self) -> bool {
    self.cell.get().is_some()
  }
}
