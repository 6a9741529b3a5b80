//! Single-subscriber observable value.

use std::fmt;

/// Holds a value and synchronously notifies one subscriber on every set.
///
/// Subscribing replaces the previous subscriber. Notification happens inside
/// [`Observable::set`], before it returns.
pub struct Observable<T> {
    value: T,
    subscriber: Option<Box<dyn FnMut(&T)>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscriber: None,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value` and notifies the subscriber, if any.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&self.value);
        }
    }

    /// Installs `subscriber`, dropping any previous one.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
    }

    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
