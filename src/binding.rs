//! Declarative registration and resolution sugar over the global registry.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::Lifecycle;
use crate::global::global;

/// A declaration-site handle that wires a service field to the global
/// registry.
///
/// Constructed bare with [`Injected::new`], every [`get`](Injected::get)
/// resolves `T` from [`global()`](crate::global). Constructed with one of the
/// `register*` constructors, the recipe is registered at declaration time and
/// the handle then behaves identically. The handle holds no state of its own;
/// both capabilities are plain call-throughs to the registry's
/// `register`/`locate` contract.
///
/// # Examples
///
/// ```
/// use service_locator::Injected;
///
/// struct Mailer {
///   smtp_host: String,
/// }
///
/// struct NewsletterJob {
///   mailer: Injected<Mailer>,
/// }
///
/// let job = NewsletterJob {
///   mailer: Injected::register(|| Mailer {
///     smtp_host: "mail.example.com".to_string(),
///   }),
/// };
///
/// assert_eq!(job.mailer.get().smtp_host, "mail.example.com");
/// ```
pub struct Injected<T: ?Sized> {
  _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized + Any + Send + Sync> Injected<T> {
  /// A handle that resolves `T` from the global registry on each access.
  pub fn new() -> Self {
    Self {
      _marker: PhantomData,
    }
  }

  /// Resolves the service.
  ///
  /// # Panics
  ///
  /// Panics when `T` is unregistered or its factory produced the wrong type,
  /// with the same fatal contract as [`locate!`](crate::locate).
  pub fn get(&self) -> Arc<T> {
    global().locate::<T>().unwrap_or_else(|error| panic!("{}", error))
  }

  /// Registers a trait object `I = T` (e.g. `Injected<dyn Greeter>`) with the
  /// default lifecycle and returns a resolving handle.
  pub fn register_trait(factory: impl Fn() -> Arc<T> + Send + Sync + 'static) -> Self {
    Self::register_trait_with(Lifecycle::default(), factory)
  }

  /// Registers a trait object under an explicit lifecycle and returns a
  /// resolving handle.
  pub fn register_trait_with(
    lifecycle: Lifecycle,
    factory: impl Fn() -> Arc<T> + Send + Sync + 'static,
  ) -> Self {
    global().register_trait_with(lifecycle, factory);
    Self::new()
  }
}

impl<T: Any + Send + Sync> Injected<T> {
  /// Registers `T` with the default lifecycle and returns a resolving handle.
  pub fn register(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
    Self::register_with(Lifecycle::default(), factory)
  }

  /// Registers `T` under an explicit lifecycle and returns a resolving
  /// handle.
  pub fn register_with(
    lifecycle: Lifecycle,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) -> Self {
    global().register_with(lifecycle, factory);
    Self::new()
  }
}

impl<T: ?Sized + Any + Send + Sync> Default for Injected<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> Clone for Injected<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: ?Sized> Copy for Injected<T> {}
