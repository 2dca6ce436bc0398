//! # bindable
//!
//! Equality-gated property setters with synchronous change notification.
//!
//! ## Overview
//!
//! `bindable` gives model types change-notification semantics without an
//! inheritance hierarchy: a model owns a small [`ChangeNotifier`] value and
//! delegates to it from its setters. The notifier compares the old and new
//! values, assigns only on change, and dispatches a [`PropertyChanged`]
//! notification carrying the changed property's key to every registered
//! listener, in registration order.
//!
//! [`ChangeNotifier`]: core::ChangeNotifier
//! [`PropertyChanged`]: notify::PropertyChanged
//!
//! ## Quick Start
//!
//! ```rust
//! use bindable::prelude::*;
//!
//! struct Counter {
//!     count: i32,
//!     changes: ChangeNotifier,
//! }
//!
//! impl Counter {
//!     fn set_count(&mut self, value: i32) -> bool {
//!         self.changes.set(&mut self.count, value, "count")
//!     }
//! }
//!
//! let mut counter = Counter {
//!     count: 0,
//!     changes: ChangeNotifier::new(),
//! };
//!
//! // A cloned notifier shares the listener list with the model's copy.
//! let notifier = counter.changes.clone();
//! let _sub = notifier.subscribe(|change| {
//!     println!("property `{}` changed", change.key());
//! });
//!
//! assert!(counter.set_count(5));  // assigned, one notification
//! assert!(!counter.set_count(5)); // already 5, no notification
//! ```
//!
//! ## Semantics
//!
//! - **Equality gate**: a notification is emitted if and only if the new
//!   value differs from the stored one by the field type's own `PartialEq`.
//!   A no-op assignment never notifies.
//! - **Synchronous dispatch**: listeners run on the caller's stack, in
//!   registration order, before `set` returns. There is no batching or
//!   coalescing of notifications.
//! - **Explicit keys**: Rust has no call-site member-name reflection, so
//!   the property key is always an explicit argument to `set` and `notify`
//!   (typically a string literal matching the field name).
//! - **Re-entrancy**: a listener may subscribe, unsubscribe, or trigger a
//!   nested `set` during dispatch. The registry snapshots the listener
//!   list before invoking anyone, so re-entrant registration changes take
//!   effect from the next dispatch. Guarding against unbounded recursion
//!   (a listener that unconditionally re-sets the property it was notified
//!   about) is the caller's responsibility.
//! - **Single-threaded**: handles are `Rc`-based and deliberately `!Send`.
//!   Concurrent registration and notification are out of scope.
//!
//! ## Feature Flags
//!
//! Enable optional features in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bindable = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! - `tracing`: emit `tracing` events for accepted mutations and dispatch.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod notify;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::ChangeNotifier;
    pub use crate::notify::{ListenerRegistry, PropertyChanged, PropertyKey, SubscriptionHandle};
}
