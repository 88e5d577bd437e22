//! Public macros for ergonomic, fail-fast resolution.

/// Resolves a service from the global registry, panicking on failure.
///
/// This macro is the fail-fast face of [`Registry::locate`](crate::Registry::locate):
/// a missing registration or a factory that produced the wrong type is a
/// wiring bug, and the macro aborts the current operation with the error's
/// message instead of handing back a `Result`.
///
/// # Panics
///
/// Panics if the service cannot be resolved. To trap the failure instead,
/// call [`Registry::locate`](crate::Registry::locate) directly.
///
/// # Examples
///
/// ```
/// use service_locator::{global, locate};
///
/// // Register a simple type.
/// global().register(|| String::from("hello"));
///
/// // Resolve it.
/// let message = locate!(String);
/// assert_eq!(*message, "hello");
/// ```
///
/// ```
/// use service_locator::{global, locate};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// // Register a trait implementation.
/// global().register_trait::<dyn Greeter>(|| Arc::new(EnglishGreeter));
///
/// // Resolve the trait object.
/// let greeter = locate!(trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! locate {
  // Arm for resolving a concrete type: locate!(MyService)
  ($type:ty) => {
    $crate::global()
      .locate::<$type>()
      .unwrap_or_else(|error| panic!("{}", error))
  };

  // Arm for resolving a trait object: locate!(trait MyTrait)
  // We use `:ident` to capture the trait's name and construct `dyn Trait`
  // inside the expansion.
  (trait $trait_ident:ident) => {
    $crate::global()
      .locate::<dyn $trait_ident>()
      .unwrap_or_else(|error| panic!("{}", error))
  };
}

/// Resolves a service from an explicit [`Registry`](crate::Registry),
/// panicking on failure.
///
/// Same contract as [`locate!`], for call sites that carry their own registry
/// instead of using the global one.
///
/// # Examples
///
/// ```
/// use service_locator::{locate_from, Registry};
///
/// let registry = Registry::new();
/// registry.register(|| 42_i32);
///
/// let answer = locate_from!(&registry, i32);
/// assert_eq!(*answer, 42);
/// ```
#[macro_export]
macro_rules! locate_from {
  // Arm for resolving a concrete type: locate_from!(&registry, MyService)
  ($registry:expr, $type:ty) => {
    ($registry)
      .locate::<$type>()
      .unwrap_or_else(|error| panic!("{}", error))
  };

  // Arm for resolving a trait object: locate_from!(&registry, trait MyTrait)
  ($registry:expr, trait $trait_ident:ident) => {
    ($registry)
      .locate::<dyn $trait_ident>()
      .unwrap_or_else(|error| panic!("{}", error))
  };
}
