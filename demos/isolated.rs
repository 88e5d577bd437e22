use service_locator::{global, locate_from, Registry};

// A function that wires its own dependencies and runs some logic. By
// accepting a `&Registry`, it can be exercised with a controlled environment.
fn process_data(registry: &Registry) -> String {
  // Register a data source ONLY within the scope of this registry.
  registry.register(|| "test data".to_string());

  // Resolve the dependency from the provided registry.
  let data = locate_from!(registry, String);
  format!("Processed: {}", data.to_uppercase())
}

fn main() {
  // --- Scenario with an isolated registry ---
  println!("--- Running with an isolated registry ---");
  let test_registry = Registry::new();
  let result = process_data(&test_registry);

  println!("Result: {}", result);
  assert_eq!(result, "Processed: TEST DATA");

  // --- Verify isolation ---
  // The service registered in `test_registry` must NOT exist globally.
  assert!(
    !global().is_registered::<String>(),
    "dependency should not have leaked into the global registry!"
  );

  println!("\nVerified that the isolated registry does not leak into the global one.");
}
