//! Property change notification machinery.
//!
//! Provides the multicast listener registry and the notification payload dispatched to listeners.

pub mod event;
pub mod subscriber;

pub use event::{PropertyChanged, PropertyKey};
pub use subscriber::{ChangeListener, ListenerRegistry, SubscriptionHandle};
