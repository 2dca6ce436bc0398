//! The change-notification capability a model type owns.

use std::fmt;

use crate::notify::{ListenerRegistry, PropertyChanged, PropertyKey, SubscriptionHandle};

/// Change-notification capability for a model type.
///
/// A model owns a `ChangeNotifier` alongside its fields and delegates to
/// it from its setters. The notifier holds only the listener registry;
/// each field's storage stays on the model that declares it. Cloning a
/// notifier shares the registry, so a model can hand out a handle that
/// observers subscribe through.
///
/// # Examples
///
/// ```rust
/// use bindable::prelude::*;
///
/// struct Person {
///     name: String,
///     changes: ChangeNotifier,
/// }
///
/// impl Person {
///     fn set_name(&mut self, name: String) -> bool {
///         self.changes.set(&mut self.name, name, "name")
///     }
/// }
///
/// let mut person = Person {
///     name: "a".to_string(),
///     changes: ChangeNotifier::new(),
/// };
///
/// // String equality is by value: a fresh allocation with the same
/// // content is not a change.
/// assert!(!person.set_name("a".to_string()));
/// assert!(person.set_name("b".to_string()));
/// ```
pub struct ChangeNotifier {
    /// Listener registry for change notifications
    listeners: ListenerRegistry,
}

impl ChangeNotifier {
    /// Create a notifier with no registered listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: ListenerRegistry::new(),
        }
    }

    /// Checks if a property already holds the desired value. Assigns the
    /// value and notifies listeners only when necessary.
    ///
    /// Equality is the field type's own `PartialEq`; types that compare by
    /// identity or by value keep whichever semantics they define. If the
    /// values compare equal, the slot is left untouched, no listener is
    /// invoked, and `false` is returned. Otherwise the slot is overwritten
    /// and every listener is invoked, in registration order, before this
    /// method returns.
    ///
    /// Returns `true` if the value was assigned, `false` if the existing
    /// value already matched the desired one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bindable::prelude::*;
    /// let notifier = ChangeNotifier::new();
    /// let mut count = 0;
    ///
    /// assert!(notifier.set(&mut count, 5, "count"));
    /// assert_eq!(count, 5);
    ///
    /// // Same value again: no assignment, no notification.
    /// assert!(!notifier.set(&mut count, 5, "count"));
    /// ```
    pub fn set<T: PartialEq>(&self, slot: &mut T, value: T, key: PropertyKey) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;

        #[cfg(feature = "tracing")]
        tracing::debug!(key, "property changed");

        self.notify(key);
        true
    }

    /// Notify listeners that the property identified by `key` changed.
    ///
    /// Dispatches synchronously, in registration order, without an
    /// equality check. With zero listeners this is a no-op. Setters that
    /// bypass [`set`](Self::set) (e.g. a computed property that depends on
    /// another field) call this directly.
    pub fn notify(&self, key: PropertyKey) {
        debug_assert!(!key.is_empty(), "property key must not be empty");

        #[cfg(feature = "tracing")]
        tracing::trace!(key, "dispatching change notification");

        self.listeners.notify_all(&PropertyChanged::new(key));
    }

    /// Subscribe to property changes on this notifier.
    ///
    /// The listener is invoked with the [`PropertyChanged`] notification
    /// on every accepted mutation. Returns a handle that can be dropped
    /// to unsubscribe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bindable::prelude::*;
    /// let notifier = ChangeNotifier::new();
    ///
    /// let handle = notifier.subscribe(|change| {
    ///     println!("property `{}` changed", change.key());
    /// });
    ///
    /// // Later, unsubscribe
    /// drop(handle);
    /// ```
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&PropertyChanged) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Get the number of active listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.listener_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_assigns_on_change() {
        let notifier = ChangeNotifier::new();
        let mut value = 1;

        assert!(notifier.set(&mut value, 2, "value"));
        assert_eq!(value, 2);
    }

    #[test]
    fn test_set_is_noop_on_equal_value() {
        let notifier = ChangeNotifier::new();
        let mut value = 2;

        assert!(!notifier.set(&mut value, 2, "value"));
        assert_eq!(value, 2);
    }

    #[test]
    fn test_equal_value_does_not_notify() {
        let notifier = ChangeNotifier::new();
        let invoked = Rc::new(Cell::new(false));

        let invoked_clone = Rc::clone(&invoked);
        let _handle = notifier.subscribe(move |_| invoked_clone.set(true));

        let mut value = 7;
        notifier.set(&mut value, 7, "value");
        assert!(!invoked.get());
    }

    #[test]
    fn test_change_notifies_with_key() {
        let notifier = ChangeNotifier::new();
        let seen = Rc::new(Cell::new(""));

        let seen_clone = Rc::clone(&seen);
        let _handle = notifier.subscribe(move |change| seen_clone.set(change.key()));

        let mut value = 0;
        assert!(notifier.set(&mut value, 1, "count"));
        assert_eq!(seen.get(), "count");
    }

    #[test]
    fn test_string_equality_is_by_value() {
        let notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0usize));

        let count_clone = Rc::clone(&count);
        let _handle = notifier.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        let mut name = "a".to_string();
        // Distinct allocation, equal content: not a change.
        assert!(!notifier.set(&mut name, "a".to_string(), "name"));
        assert_eq!(count.get(), 0);

        assert!(notifier.set(&mut name, "b".to_string(), "name"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_notify_bypasses_equality_gate() {
        let notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0usize));

        let count_clone = Rc::clone(&count);
        let _handle = notifier.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        notifier.notify("anything");
        notifier.notify("anything");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_clone_shares_registry() {
        let notifier = ChangeNotifier::new();
        let notifier2 = notifier.clone();

        let count = Rc::new(Cell::new(0usize));
        let count_clone = Rc::clone(&count);
        let _handle = notifier2.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        let mut value = 0;
        notifier.set(&mut value, 1, "value");
        assert_eq!(count.get(), 1);
        assert_eq!(notifier.listener_count(), 1);
    }

    #[test]
    #[should_panic(expected = "property key must not be empty")]
    fn test_empty_key_is_rejected_in_debug_builds() {
        let notifier = ChangeNotifier::new();
        notifier.notify("");
    }
}
