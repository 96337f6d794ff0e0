//! Observable state cell shared by the wallet components.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A value behind a lock plus change listeners.
///
/// Listeners run after the write lock is released, with a snapshot of the new
/// value, so a listener may read or update the cell again.
pub struct Observable<S> {
    value: RwLock<S>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<S>)>>,
    next_id: AtomicU64,
}

impl<S: Clone> Observable<S> {
    pub fn new(value: S) -> Self {
        Self {
            value: RwLock::new(value),
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn get(&self) -> S {
        self.value.read().clone()
    }

    /// Read without cloning the whole value.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.value.read())
    }

    /// Mutate the value and notify listeners.
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let (result, snapshot) = {
            let mut value = self.value.write();
            let result = f(&mut value);
            (result, value.clone())
        };
        self.notify(&snapshot);
        result
    }

    pub fn set(&self, value: S) {
        self.update(|current| *current = value);
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().retain(|(existing, _)| *existing != id);
    }

    fn notify(&self, snapshot: &S) {
        let listeners: Vec<Listener<S>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl<S: Clone + Default> Default for Observable<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_listeners_see_updates_until_unsubscribed() {
        let cell = Observable::new(0u32);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let id = cell.subscribe(move |v| sink.lock().push(*v));

        cell.set(1);
        cell.update(|v| *v += 1);
        cell.unsubscribe(id);
        cell.set(10);

        assert_eq!(*seen.lock(), vec![1, 2]);
        assert_eq!(cell.get(), 10);
    }

    #[test]
    fn test_listener_may_read_cell() {
        let cell = Arc::new(Observable::new(String::new()));
        let reader = cell.clone();
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = seen.clone();
        cell.subscribe(move |_| *sink.lock() = reader.get());

        cell.set("GABC".to_string());
        assert_eq!(*seen.lock(), "GABC");
    }
}
