//! Integration tests for indexes and their fixing history.

use approx::assert_abs_diff_eq;
use pc_core::{Observable, Observer, RelinkableHandle};
use pc_indexes::{euribor, FixingHistory, FixingLookup, Index, IndexManager};
use pc_termstructures::{FlatForward, YieldTermStructure};
use pc_time::{Calendar, Date};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Weak};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

struct Counter(AtomicU32);

impl Observer for Counter {
    fn update(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn euribor_value_date_skips_target_holidays() {
    let idx = euribor(3, RelinkableHandle::null()).unwrap();
    // Maundy Thursday 2025 fixes for value on the Wednesday after Easter.
    assert_eq!(idx.value_date(date(2025, 4, 17)).unwrap(), date(2025, 4, 23));
    assert!(!idx.is_valid_fixing_date(date(2025, 4, 18)));
    assert!(idx.is_valid_fixing_date(date(2025, 4, 17)));
}

#[test]
fn euribor_maturity_is_modified_following() {
    let idx = euribor(1, RelinkableHandle::null()).unwrap();
    // 30 Nov 2025 is a Sunday; following would roll into December.
    assert_eq!(idx.maturity_date(date(2025, 10, 30)).unwrap(), date(2025, 11, 28));
}

#[test]
fn shared_handle_relinks_every_index() {
    let handle: RelinkableHandle<dyn YieldTermStructure> = RelinkableHandle::null();
    let three = euribor(3, handle.clone()).unwrap();
    let six = euribor(6, handle.clone()).unwrap();
    assert!(three.term_structure().is_none());

    let counter = Arc::new(Counter(AtomicU32::new(0)));
    six.register_observer(Arc::downgrade(&counter) as Weak<dyn Observer>);

    handle.link_to(Arc::new(FlatForward::new(
        date(2025, 1, 2),
        0.02,
        pc_time::Actual365Fixed,
    )));
    assert!(three.term_structure().is_some());
    assert!(six.term_structure().is_some());
    assert_eq!(counter.0.load(Ordering::Relaxed), 1);
}

#[test]
fn dropped_observer_is_not_called() {
    let idx = euribor(12, RelinkableHandle::null()).unwrap();
    let counter = Arc::new(Counter(AtomicU32::new(0)));
    idx.register_observer(Arc::downgrade(&counter) as Weak<dyn Observer>);
    drop(counter);
    // must not panic on the dead observer
    idx.notify_observers();
}

#[test]
fn published_fixings_are_visible_through_the_manager() {
    let idx = pc_indexes::Xibor::new(
        "IntegrationIbor",
        6,
        2,
        pc_time::Target,
        pc_time::BusinessDayConvention::ModifiedFollowing,
        pc_time::Actual360,
        RelinkableHandle::null(),
    )
    .unwrap();
    let d = date(2025, 1, 13);
    idx.add_fixing(d, 0.0275).unwrap();
    assert_eq!(IndexManager.lookup(idx.name(), d), FixingLookup::Found(0.0275));
    assert_eq!(
        IndexManager.lookup(idx.name(), date(2025, 1, 14)),
        FixingLookup::NotFound
    );
    assert!(idx.add_fixing(d, f64::INFINITY).is_err());
}

#[test]
fn forecast_uses_linked_curve() {
    let handle: RelinkableHandle<dyn YieldTermStructure> = RelinkableHandle::null();
    let idx = euribor(6, handle.clone()).unwrap();
    let low = Arc::new(FlatForward::new(date(2025, 1, 2), 0.01, pc_time::Actual365Fixed));
    let high = Arc::new(FlatForward::new(date(2025, 1, 2), 0.05, pc_time::Actual365Fixed));
    let fixing = date(2025, 3, 13);

    handle.link_to(low);
    let f_low = idx.forecast_fixing(fixing).unwrap();
    handle.link_to(high);
    let f_high = idx.forecast_fixing(fixing).unwrap();

    assert!(f_high > f_low);
    // a continuous 5% flat curve quotes roughly 5% simple over six months
    assert_abs_diff_eq!(f_high, 0.05, epsilon = 1e-3);
    assert!(idx.fixing_calendar().is_business_day(fixing));
}

#[cfg(feature = "serde")]
#[test]
fn fixings_load_from_json() {
    let json = r#"[
        {"index": "JsonIbor6M", "date": "2025-01-13", "rate": 0.031},
        {"index": "JsonIbor6M", "date": "2025-01-14", "rate": 0.0312}
    ]"#;
    let fixings: Vec<pc_indexes::Fixing> = serde_json::from_str(json).unwrap();
    let history = pc_indexes::IndexHistory::new();
    history.add_fixings(fixings).unwrap();
    assert_eq!(
        history.lookup("jsonibor6m", date(2025, 1, 14)),
        FixingLookup::Found(0.0312)
    );
}
