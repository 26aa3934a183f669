//! Minimal synchronous publish/subscribe store with replay-latest semantics.
//!
//! A [`Store`] owns one value. Subscribers are plain callbacks kept in
//! subscription order; every [`Store::set`] pushes the new value to each of them
//! on the caller's stack before returning. A fresh subscriber is immediately
//! called with the current value.
//!
//! Dropping (or calling [`Subscription::unsubscribe`] on) the returned handle
//! removes the callback. Views must release their subscription on unmount so the
//! store never calls into a disposed scope.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Shared, single-threaded value holder. Clones share the same state.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Current value (cloned).
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify every subscriber in subscription order.
    pub fn set(&self, value: T) {
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };
        // Borrow released: callbacks may read, set or unsubscribe re-entrantly.
        for callback in callbacks {
            callback(&value);
        }
    }

    /// Register `callback`; it is invoked right away with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.value.clone())
        };
        callback(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            active: Cell::new(true),
            detach: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            }),
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Handle for a registered callback. Unsubscribes on drop.
pub struct Subscription {
    active: Cell<bool>,
    detach: Box<dyn Fn()>,
}

impl Subscription {
    /// Remove the callback. Idempotent.
    pub fn unsubscribe(&self) {
        if self.active.replace(false) {
            (self.detach)();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.active.get())
            .finish()
    }
}
