//! # Service Locator
//!
//! A thread-safe, type-keyed service registry for Rust with three instance
//! lifecycles.
//!
//! Callers register a construction recipe for an abstract service type and
//! later resolve an instance of that type without naming the concrete
//! implementation. Registration is dynamic: a service can be added, replaced
//! or removed at any point in the process lifetime, and replacing a
//! registration discards any instance cached under the old recipe.
//!
//! ## Core Concepts
//!
//! - **Registry**: the central store of construction recipes and shared
//!   instances, keyed by type identity. Trait objects are first-class keys.
//! - **Global Registry**: a static, process-wide instance, accessible via
//!   [`global()`]; independent instances from [`Registry::new`] stay fully
//!   isolated.
//! - **Lifecycle**: how many instances a registration produces:
//!   [`Lifecycle::Transient`] builds one per resolution,
//!   [`Lifecycle::LazySingleton`] (the default) builds once on first
//!   resolution, [`Lifecycle::EagerSingleton`] builds at registration time.
//! - **Resolution**: [`Registry::locate`] returns a typed [`Result`]; the
//!   [`locate!`] macro panics on a missing or mismatched service, treating it
//!   as the wiring bug it is.
//!
//! ## Quick Start
//!
//! ```
//! use service_locator::{global, locate, Lifecycle};
//! use std::sync::Arc;
//!
//! // Define a trait and a concrete implementation.
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     "Hello, World!".to_string()
//!   }
//! }
//!
//! fn main() {
//!   // Register the implementation behind its trait. The default lifecycle
//!   // builds it on first resolution and shares it afterwards.
//!   global().register_trait::<dyn Greeter>(|| Arc::new(EnglishGreeter));
//!
//!   // Resolve it anywhere in the process by the trait alone.
//!   let greeter = locate!(trait Greeter);
//!   assert_eq!(greeter.greet(), "Hello, World!");
//!
//!   // Transient services yield a fresh instance per resolution.
//!   global().register_with(Lifecycle::Transient, || vec![0u8; 16]);
//!   let a = locate!(Vec<u8>);
//!   let b = locate!(Vec<u8>);
//!   assert!(!Arc::ptr_eq(&a, &b));
//! }
//! ```

mod binding;
mod core;
mod error;
mod global;
mod macros;
mod registry;

pub use binding::Injected;
pub use crate::core::{BoxedFactory, Lifecycle, ServiceKey};
pub use error::{LocateError, Result};
pub use global::global;
pub use registry::Registry;
