//! Core change-notification types.

mod notifier;

pub use notifier::ChangeNotifier;
