use crate::common::{DieCount, TargetBound, SIDES};

/// Number of dice needed so that their combined faces can reach `bound`.
///
/// This is `ceil(bound / 6)`, so the result always satisfies
/// `dice * 6 >= bound`.
pub fn resolve(bound: TargetBound) -> DieCount {
    let n = bound.get().div_ceil(SIDES) as usize;
    // `unwrap` can be used because a bound is never below 1
    DieCount::new(n).unwrap()
}
