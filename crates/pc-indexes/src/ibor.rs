//! Pre-configured index constructors.

use crate::xibor::Xibor;
use pc_core::errors::Result;
use pc_core::RelinkableHandle;
use pc_termstructures::YieldTermStructure;
use pc_time::{Actual360, BusinessDayConvention, Target};

/// Create a Euribor index with a tenor of `months`.
///
/// - Calendar: TARGET
/// - Day counter: Actual/360
/// - Settlement days: 2
/// - Convention: Modified Following
pub fn euribor(
    months: u32,
    term_structure: RelinkableHandle<dyn YieldTermStructure>,
) -> Result<Xibor> {
    Xibor::new(
        "Euribor",
        months,
        2,
        Target,
        BusinessDayConvention::ModifiedFollowing,
        Actual360,
        term_structure,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;

    #[test]
    fn euribor_conventions() {
        let idx = euribor(6, RelinkableHandle::null()).unwrap();
        assert_eq!(idx.name(), "Euribor6M");
        assert_eq!(idx.settlement_days(), 2);
        assert_eq!(idx.fixing_calendar().name(), "TARGET");
        assert_eq!(idx.day_counter().name(), "Actual/360");
        assert_eq!(
            idx.business_day_convention(),
            BusinessDayConvention::ModifiedFollowing
        );
    }
}
