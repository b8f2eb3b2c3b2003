//! Rolling rules for dates that land on holidays.

/// Rule applied by [`Calendar::adjust`](crate::Calendar::adjust).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Roll forward to the next business day.
    #[default]
    Following,
    /// Roll forward, or backward if rolling forward changes the month.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Roll backward, or forward if rolling backward changes the month.
    ModifiedPreceding,
    /// Leave the date as it is.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Following => "Following",
            Self::ModifiedFollowing => "Modified Following",
            Self::Preceding => "Preceding",
            Self::ModifiedPreceding => "Modified Preceding",
            Self::Unadjusted => "Unadjusted",
        })
    }
}
