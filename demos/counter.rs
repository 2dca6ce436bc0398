//! Example demonstrating a model with equality-gated setters.
//!
//! This example shows how to:
//! - Compose a `ChangeNotifier` into a model type
//! - Write setters that assign and notify only on change
//! - Observe which property changed via the notification key
//!
//! Run with: cargo run --example counter

use bindable::prelude::*;

struct Counter {
    count: i32,
    label: String,
    changes: ChangeNotifier,
}

impl Counter {
    fn new() -> Self {
        Self {
            count: 0,
            label: "idle".to_string(),
            changes: ChangeNotifier::new(),
        }
    }

    fn set_count(&mut self, value: i32) -> bool {
        self.changes.set(&mut self.count, value, "count")
    }

    fn set_label(&mut self, value: String) -> bool {
        self.changes.set(&mut self.label, value, "label")
    }

    /// A shared handle observers subscribe through.
    fn notifier(&self) -> ChangeNotifier {
        self.changes.clone()
    }
}

fn main() {
    println!("=== Equality-Gated Setter Example ===\n");

    let mut counter = Counter::new();

    let _sub = counter.notifier().subscribe(|change| {
        println!("[observer] property `{}` changed", change.key());
    });

    println!("set_count(5)        -> changed: {}", counter.set_count(5));
    println!("set_count(5) again  -> changed: {}", counter.set_count(5));
    println!(
        "set_label(\"busy\")   -> changed: {}",
        counter.set_label("busy".to_string())
    );

    println!("\nFinal state: count = {}, label = {}", counter.count, counter.label);
}
