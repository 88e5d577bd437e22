//! The process-wide registry instance and its access function.

use once_cell::sync::Lazy;

use crate::registry::Registry;

// The one and only process-wide registry. Created on first access in a
// thread-safe manner.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::default);

/// Provides a reference to the process-wide registry instance.
///
/// This function allows for direct interaction with the registry, such as
/// registering services from anywhere in an application. Code that needs an
/// isolated registry (tests, scoped wiring) constructs its own with
/// [`Registry::new`] instead.
///
/// # Examples
///
/// ```
/// use service_locator::global;
///
/// fn wire_services() {
///   // Get the global registry and register a service.
///   global().register(|| String::from("Hello from global!"));
/// }
/// ```
pub fn global() -> &'static Registry {
  &GLOBAL_REGISTRY
}
