//! LazyObject pattern.
//!
//! A `LazyObject` caches an expensive computation and recalculates only when
//! one of its inputs has notified a change. The bookkeeping flags are atomics
//! so that a lazy object can also be an [`Observer`](super::observable::Observer),
//! which must be `Send + Sync`.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Trait for objects that lazily compute and cache their results.
///
/// Implementors provide [`perform_calculations`][Self::perform_calculations]
/// and expose a [`LazyState`]; the default methods handle the
/// calculated/frozen bookkeeping.
pub trait LazyObject {
    /// Perform the actual (expensive) calculation and store its results.
    fn perform_calculations(&self) -> crate::errors::Result<()>;

    /// The embedded bookkeeping state.
    fn lazy_state(&self) -> &LazyState;

    /// Ensure results are up-to-date.
    ///
    /// If the cache is stale and not frozen, runs
    /// [`perform_calculations`][Self::perform_calculations]. The cache is
    /// marked fresh before the calculation starts, so a notification that
    /// arrives while it runs leaves it stale. On failure the cache stays
    /// stale so that the next call retries.
    fn calculate(&self) -> crate::errors::Result<()> {
        let state = self.lazy_state();
        if !state.calculated.load(Ordering::Acquire) && !self.is_frozen() {
            state.calculated.store(true, Ordering::Release);
            if let Err(e) = self.perform_calculations() {
                state.calculated.store(false, Ordering::Release);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Mark the cached result as stale without triggering a recalculation.
    fn invalidate(&self) {
        self.lazy_state().calculated.store(false, Ordering::Release);
    }

    /// Prevent recalculation until [`unfreeze`][Self::unfreeze] is called.
    fn freeze(&self) {
        self.lazy_state().freeze_count.fetch_add(1, Ordering::AcqRel);
    }

    /// Undo one call to [`freeze`][Self::freeze].
    fn unfreeze(&self) {
        let _ = self.lazy_state().freeze_count.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |n| n.checked_sub(1),
        );
    }

    /// Return `true` if the cache is currently valid.
    fn is_calculated(&self) -> bool {
        self.lazy_state().calculated.load(Ordering::Acquire)
    }

    /// Return `true` if recalculation is currently deferred.
    fn is_frozen(&self) -> bool {
        self.lazy_state().freeze_count.load(Ordering::Acquire) > 0
    }
}

/// Bookkeeping fields required by [`LazyObject`].
///
/// # Example
/// ```
/// use std::sync::Mutex;
/// use pc_core::patterns::lazy_object::{LazyObject, LazyState};
///
/// struct Answer {
///     state: LazyState,
///     value: Mutex<f64>,
/// }
///
/// impl LazyObject for Answer {
///     fn perform_calculations(&self) -> pc_core::Result<()> {
///         *self.value.lock().unwrap() = 42.0;
///         Ok(())
///     }
///     fn lazy_state(&self) -> &LazyState { &self.state }
/// }
///
/// let a = Answer { state: LazyState::new(), value: Mutex::new(0.0) };
/// a.calculate().unwrap();
/// assert_eq!(*a.value.lock().unwrap(), 42.0);
/// ```
#[derive(Debug, Default)]
pub struct LazyState {
    calculated: AtomicBool,
    freeze_count: AtomicU32,
}

impl LazyState {
    /// Create a new `LazyState`; the cache starts stale.
    pub fn new() -> Self {
        Self::default()
    }
}
