//! Example demonstrating the subscriber/notification system.
//!
//! This example shows how to:
//! - Subscribe multiple handlers to one notifier
//! - Receive notifications in registration order
//! - Unsubscribe by dropping handles
//!
//! Run with: cargo run --example subscribers

use bindable::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn main() {
    println!("=== Subscriber/Notification Example ===\n");

    let notifier = ChangeNotifier::new();
    let mut port: u16 = 8080;

    // Track notification counts
    let notifications = Rc::new(Cell::new(0usize));

    // Subscribe multiple handlers
    println!("Subscribing multiple handlers...\n");

    let notifications_clone = Rc::clone(&notifications);
    let handle1 = notifier.subscribe(move |change| {
        let count = notifications_clone.get() + 1;
        notifications_clone.set(count);
        println!(
            "[Handler 1] `{}` changed (notification #{})",
            change.key(),
            count
        );
    });

    let handle2 = notifier.subscribe(|change| {
        println!("[Handler 2] `{}` changed", change.key());
    });

    println!("Active listeners: {}\n", notifier.listener_count());

    // A changing update invokes both handlers, in registration order.
    println!("Updating port to 9090...");
    notifier.set(&mut port, 9090, "port");

    // A no-op update invokes neither.
    println!("\nUpdating port to 9090 again (no change)...");
    notifier.set(&mut port, 9090, "port");
    println!("(no notifications, value already matched)");

    // Unsubscribe the first handler.
    println!("\nDropping handler 1...");
    drop(handle1);
    println!("Active listeners: {}\n", notifier.listener_count());

    println!("Updating port to 7070...");
    notifier.set(&mut port, 7070, "port");

    drop(handle2);
    println!("\nDone. Final port: {port}");
}
