//! `RelinkableHandle<T>`: a shared, observable, optionally-null reference
//! whose target can be swapped at run time.
//!
//! Indexes hold their discount curve through a relinkable handle: a curve
//! owner can rebuild the curve and relink every index at once, and anything
//! observing the handle is notified of the change. Readers take an `Arc`
//! snapshot and never hold the lock while computing.

use crate::patterns::observable::{Observable, ObservableImpl, Observer};
use std::sync::{Arc, PoisonError, RwLock, Weak};

struct Link<T: ?Sized> {
    target: RwLock<Option<Arc<T>>>,
    observers: ObservableImpl,
}

/// A handle whose contained value can be relinked at runtime.
///
/// Cloning the handle shares the link: relinking through one clone is visible
/// to all of them.
pub struct RelinkableHandle<T: ?Sized> {
    link: Arc<Link<T>>,
}

impl<T: ?Sized> Clone for RelinkableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            link: Arc::clone(&self.link),
        }
    }
}

impl<T: ?Sized> RelinkableHandle<T> {
    /// Create a new relinkable handle, initially null.
    pub fn null() -> Self {
        Self {
            link: Arc::new(Link {
                target: RwLock::new(None),
                observers: ObservableImpl::new(),
            }),
        }
    }

    /// Create a new relinkable handle pointing at `target`.
    pub fn new(target: Arc<T>) -> Self {
        let handle = Self::null();
        *handle.write() = Some(target);
        handle
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Arc<T>>> {
        self.link
            .target
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Point the handle at `target` and notify observers.
    pub fn link_to(&self, target: Arc<T>) {
        *self.write() = Some(target);
        self.link.observers.notify();
    }

    /// Detach the handle from any value and notify observers.
    pub fn unlink(&self) {
        *self.write() = None;
        self.link.observers.notify();
    }

    /// Return `true` if the handle currently points at nothing.
    pub fn is_empty(&self) -> bool {
        self.current().is_none()
    }

    /// Snapshot of the current target, or `None` if the handle is null.
    pub fn current(&self) -> Option<Arc<T>> {
        self.link
            .target
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T: ?Sized> Default for RelinkableHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> std::fmt::Debug for RelinkableHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "RelinkableHandle(null)")
        } else {
            write!(f, "RelinkableHandle(linked)")
        }
    }
}

impl<T: ?Sized> Observable for RelinkableHandle<T> {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.link.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.link.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.link.observers.notify();
    }
}
