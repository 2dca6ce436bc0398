//! The notification payload dispatched to listeners.

/// Identifies a property within its host model.
///
/// Rust has no call-site member-name reflection, so the key is always
/// supplied explicitly by the setter, typically as a string literal
/// matching the field name.
pub type PropertyKey = &'static str;

/// Notification emitted when a property value changes.
///
/// Ephemeral: one is created per accepted mutation and borrowed by each
/// listener during dispatch. It carries only the key of the property that
/// changed; a listener that needs the new value captures a handle to the
/// host model instead.
///
/// # Examples
///
/// ```rust
/// use bindable::notify::PropertyChanged;
///
/// let change = PropertyChanged::new("count");
/// assert_eq!(change.key(), "count");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyChanged {
    key: PropertyKey,
}

impl PropertyChanged {
    /// Create a notification for the given property key.
    #[must_use]
    pub fn new(key: PropertyKey) -> Self {
        Self { key }
    }

    /// The key of the property that changed.
    #[must_use]
    pub fn key(&self) -> PropertyKey {
        self.key
    }
}
