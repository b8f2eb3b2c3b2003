//! End-to-end: a Euribor leg over Easter, valued through the façade.

use approx::assert_abs_diff_eq;
use parcoupon::cashflows::{CashFlow, Coupon, ParCouponLegBuilder, ParCouponValuator};
use parcoupon::core::RelinkableHandle;
use parcoupon::indexes::{euribor, Index, IndexHistory};
use parcoupon::termstructures::{InterpolatedDiscountCurve, YieldTermStructure};
use parcoupon::time::{Actual365Fixed, Date};
use std::sync::Arc;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn easter_coupon_forecast_uses_target_value_dates() {
    let reference = date(2025, 1, 2);
    let curve = InterpolatedDiscountCurve::new(
        &[reference, date(2025, 7, 2), date(2026, 1, 2)],
        &[1.0, 0.985, 0.97],
        Actual365Fixed,
    )
    .unwrap();
    let curve: Arc<dyn YieldTermStructure> = Arc::new(curve);
    let index = Arc::new(euribor(3, RelinkableHandle::new(Arc::clone(&curve))).unwrap());

    // accrual starts the Tuesday after Easter Monday 2025
    let coupons = ParCouponLegBuilder::new(
        vec![date(2025, 4, 22), date(2025, 7, 22)],
        index.clone(),
    )
    .with_notional(1_000_000.0)
    .build()
    .unwrap();
    let coupon = &coupons[0];
    assert_eq!(coupon.fixing_date(), date(2025, 4, 16));

    // v1 = 16 Apr + 2 TARGET days = 22 Apr (Good Friday, Easter Monday skipped)
    // v2 = (22 Jul - 2) + 2 = 22 Jul
    let expected = (curve.discount(date(2025, 4, 22)).unwrap()
        / curve.discount(date(2025, 7, 22)).unwrap()
        - 1.0)
        * 1_000_000.0;
    let amount = ParCouponValuator::with_history(IndexHistory::new())
        .amount(coupon.record(), &*index, reference)
        .unwrap();
    assert_abs_diff_eq!(amount, expected, epsilon = 1e-8);
    assert_abs_diff_eq!(coupon.amount().unwrap(), expected, epsilon = 1e-8);
    assert_eq!(coupon.accrual_start_date(), date(2025, 4, 22));
    assert_eq!(index.value_date(coupon.fixing_date()).unwrap(), date(2025, 4, 22));
}
