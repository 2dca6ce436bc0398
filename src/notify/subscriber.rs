//! Subscriber-based notifications for property changes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::notify::PropertyChanged;

/// A registered change listener.
///
/// Listeners receive the notification by reference and are invoked in
/// registration order, once per dispatch.
pub type ChangeListener = Rc<dyn Fn(&PropertyChanged)>;

/// Handle for a subscription that can be dropped to unsubscribe.
///
/// When the handle is dropped, the subscription is removed immediately;
/// the listener will not be invoked for any later dispatch. A dispatch
/// already in flight is unaffected.
pub struct SubscriptionHandle {
    id: usize,
    registry: Weak<RefCell<ListenerRegistryInner>>,
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut inner = registry.borrow_mut();
            inner.listeners.retain(|(sub_id, _)| *sub_id != self.id);
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Internal listener registry state.
struct ListenerRegistryInner {
    listeners: Vec<(usize, ChangeListener)>,
    next_id: usize,
}

/// Registry for managing property change listeners.
///
/// Allows code to register callbacks that are invoked whenever a property
/// changes. Cloning a registry produces a second handle to the same
/// listener list.
///
/// # Examples
///
/// ```rust
/// use bindable::notify::{ListenerRegistry, PropertyChanged};
///
/// let registry = ListenerRegistry::new();
///
/// let handle = registry.subscribe(|change| {
///     println!("property `{}` changed", change.key());
/// });
///
/// // Notify all listeners
/// registry.notify_all(&PropertyChanged::new("count"));
///
/// // Unsubscribe by dropping the handle
/// drop(handle);
/// ```
pub struct ListenerRegistry {
    inner: Rc<RefCell<ListenerRegistryInner>>,
}

impl ListenerRegistry {
    /// Create a new, empty listener registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerRegistryInner {
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe to property changes.
    ///
    /// The listener is appended to the registration order and will be
    /// invoked on every dispatch until the returned handle is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bindable::notify::ListenerRegistry;
    /// let registry = ListenerRegistry::new();
    ///
    /// let handle = registry.subscribe(|change| {
    ///     println!("`{}` updated", change.key());
    /// });
    ///
    /// // Later, unsubscribe
    /// drop(handle);
    /// ```
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&PropertyChanged) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));

        SubscriptionHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Notify all listeners of a property change.
    ///
    /// Calls every registered listener in the order it was subscribed,
    /// synchronously, on the caller's stack. With zero listeners this is
    /// a no-op. A listener panic propagates to the caller and skips the
    /// remaining listeners for this dispatch.
    ///
    /// The registration list is snapshotted before any listener runs, so
    /// listeners may re-enter the registry (subscribe, drop a handle,
    /// trigger a nested dispatch); such changes apply from the next
    /// dispatch onward.
    pub fn notify_all(&self, change: &PropertyChanged) {
        let snapshot: Vec<ChangeListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_id, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(change);
        }
    }

    /// Get the number of active listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ListenerRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
