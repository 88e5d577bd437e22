use service_locator::{global, locate};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define concrete implementations
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

struct PrefixedLogger {
  prefix: &'static str,
}
impl Logger for PrefixedLogger {
  fn log(&self, message: &str) {
    println!("[{}]: {}", self.prefix, message);
  }
}

fn main() {
  // --- Registration ---
  // Register ConsoleLogger as the implementation for the `dyn Logger` key.
  // The registry stores Arc<ConsoleLogger> but serves it as Arc<dyn Logger>.
  global().register_trait::<dyn Logger>(|| Arc::new(ConsoleLogger));

  // --- Resolution ---
  // Call sites depend only on the trait; they never name the implementation.
  let logger = locate!(trait Logger);
  logger.log("Starting report generation.");
  logger.log("Finished report generation.");

  // --- Replacement ---
  // Re-registering the same key swaps the implementation for every later
  // resolution and discards the previously cached instance.
  global().register_trait::<dyn Logger>(|| {
    Arc::new(PrefixedLogger { prefix: "AUDIT" })
  });

  let logger = locate!(trait Logger);
  logger.log("Implementation swapped without touching any call site.");
}
