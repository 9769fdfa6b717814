//! Roll six-sided dice whose faces add up to a chosen target or less.
//!
//! Given a target bound, [`resolve`] decides how many dice are needed to reach
//! it (`ceil(bound / 6)`), and a [`ConstrainedSumSampler`] produces the faces
//! for one roll.
//!
//! ```
//! let outcome = target_dice::roll(13).unwrap();
//! assert_eq!(outcome.len(), 3);
//! assert!((3..=13).contains(&outcome.sum()));
//! ```
//!
//! # Fairness
//!
//! The default [`Mode::Exact`] picks a total uniformly between the smallest
//! possible total and the bound, then builds faces that reach it exactly. That
//! makes every total equally likely, but the combinations of faces behind a
//! given total are *not* equally likely: building spreads increments over
//! random dice one at a time, which favours some splits over others.
//! [`Mode::Ceiling`] instead rolls the dice independently and rerolls
//! whenever the total is over the bound, which keeps independent dice but
//! skews totals toward the middle.

pub mod common;
pub mod error;
pub mod parse;
pub mod report;
pub mod resolve;
pub mod roll;
pub mod session;
pub mod stringifiers;

pub use common::{DieCount, Face, Outcome, TargetBound};
pub use error::RollError;
pub use report::{Orientation, RollReport};
pub use resolve::resolve;
pub use roll::{ConstrainedSumSampler, Mode};
pub use session::{RollSession, SessionConfig};

pub type Result<T> = std::result::Result<T, RollError>;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Rolls once for `bound` using exact-sum sampling and the thread-local RNG.
pub fn roll(bound: common::Int) -> Result<Outcome> {
    let bound = TargetBound::new(bound)?;
    let dice = resolve(bound);
    Ok(ConstrainedSumSampler::default().sample(bound, dice, &mut rand::thread_rng()))
}

#[cfg(test)]
pub(crate) mod test_utils {
    use rand::{rngs::StdRng, SeedableRng};

    pub fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll() {
        assert_eq!(roll(1).unwrap().faces(), &[1]);
        assert_eq!(roll(0), Err(RollError::InvalidInput(0)));
        assert_eq!(roll(-3), Err(RollError::InvalidInput(-3)));
        let outcome = roll(36).unwrap();
        assert_eq!(outcome.len(), 6);
        assert!((6..=36).contains(&outcome.sum()));
    }
}
