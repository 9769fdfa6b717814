use super::{shuffle, Roller};
use crate::common::{DieCount, Face, NonEmpty, Outcome, TargetBound, UInt, D6, SIDES};
use std::fmt;
use tracing::{debug, trace};

/// A rule for turning a bound and a die count into one outcome.
#[enum_dispatch::enum_dispatch]
pub trait Sample {
    fn sample<R: Roller>(&self, bound: TargetBound, dice: DieCount, roller: &mut R) -> Outcome;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Sample)]
pub enum SumPolicy {
    ExactSum(ExactSum),
    Ceiling(Ceiling),
}

impl SumPolicy {
    pub const fn mode(&self) -> Mode {
        match self {
            Self::ExactSum(_) => Mode::Exact,
            Self::Ceiling(_) => Mode::Ceiling,
        }
    }
}

impl Default for SumPolicy {
    fn default() -> Self {
        Self::ExactSum(ExactSum)
    }
}

/// Which [`SumPolicy`] to use, without its parameters.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Mode {
    /// Pick a total up to the bound, then build dice that add up to it.
    #[default]
    Exact,
    /// Roll freely and reroll until the total is within the bound.
    Ceiling,
}

impl Mode {
    pub fn policy(self, max_attempts: usize) -> SumPolicy {
        match self {
            Self::Exact => ExactSum.into(),
            Self::Ceiling => Ceiling::new(max_attempts).into(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Ceiling => "ceiling",
        })
    }
}

/// Exact-sum sampling.
///
/// A target total `T` is drawn uniformly from
/// `dice..=min(bound, 6 * dice)`, then every die starts at 1 and random
/// increments are handed to random dice until the faces add up to `T`.
/// Finally the faces are shuffled.
///
/// The result is uniform over the choice of `T` and over which die receives
/// each increment. It is *not* uniform over all face combinations that add
/// up to `T`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ExactSum;

impl ExactSum {
    /// Random picks tried before falling back to a scan for a die below 6.
    const MAX_PICKS: usize = 4;

    /// Draws the total that [`ExactSum::build`] will reach.
    pub fn pick_target<R: Roller>(bound: TargetBound, dice: DieCount, roller: &mut R) -> UInt {
        let low = dice.min_sum();
        let high = bound.get().min(dice.max_sum());
        assert!(
            low <= high,
            "bound {} cannot be reached with {} dice",
            bound,
            dice
        );
        roller.roll_between(low, high)
    }

    /// Builds faces for `dice` dice that add up to exactly `target`.
    ///
    /// # Panics
    /// If `target` is outside `dice..=6 * dice`.
    pub fn build<R: Roller>(target: UInt, dice: DieCount, roller: &mut R) -> Outcome {
        assert!(
            (dice.min_sum()..=dice.max_sum()).contains(&target),
            "total {} is impossible with {} dice",
            target,
            dice
        );

        let mut faces = NonEmpty::from_vec_push(vec![1; dice.get() - 1], 1);
        let mut remaining = target - dice.min_sum();
        while remaining > 0 {
            let Some(i) = Self::open_die(&faces, roller) else {
                unreachable!("{} left over but every die shows {}", remaining, SIDES);
            };
            let room = SIDES - faces[i];
            let step = roller.roll_between(1, room.min(remaining));
            faces[i] += step;
            remaining -= step;
        }

        shuffle(&mut faces, roller);
        Outcome::new(faces)
    }

    /// Finds a die that can still go up.
    fn open_die<R: Roller>(faces: &[Face], roller: &mut R) -> Option<usize> {
        (0..Self::MAX_PICKS)
            .map(|_| roller.pick(faces.len()))
            .find(|&i| faces[i] < SIDES)
            .or_else(|| faces.iter().position(|&face| face < SIDES))
    }
}

impl Sample for ExactSum {
    fn sample<R: Roller>(&self, bound: TargetBound, dice: DieCount, roller: &mut R) -> Outcome {
        let target = Self::pick_target(bound, dice, roller);
        trace!(total = target, "picked target total");
        Self::build(target, dice, roller)
    }
}

/// Ceiling sampling.
///
/// Every die is rolled independently and the roll is kept when the total
/// does not exceed the bound. After `max_attempts` rejected rolls the call
/// falls back to [`ExactSum`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ceiling {
    max_attempts: usize,
}

impl Ceiling {
    pub const DEFAULT_ATTEMPTS: usize = 100;

    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for Ceiling {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS)
    }
}

impl Sample for Ceiling {
    fn sample<R: Roller>(&self, bound: TargetBound, dice: DieCount, roller: &mut R) -> Outcome {
        assert!(
            dice.min_sum() <= bound.get(),
            "bound {} cannot be reached with {} dice",
            bound,
            dice
        );

        for attempt in 1..=self.max_attempts {
            let rolls: Vec<Face> = roller.roll_iter(dice.get(), D6).collect();
            if rolls.iter().sum::<UInt>() <= bound.get() {
                if let Some(outcome) = Outcome::from_rolls(rolls) {
                    trace!(attempt, "roll accepted");
                    return outcome;
                }
            }
        }

        debug!(
            attempts = self.max_attempts,
            "no roll fit under the bound; building one instead"
        );
        ExactSum.sample(bound, dice, roller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;
    use crate::test_utils::seeded;

    fn count(n: usize) -> DieCount {
        DieCount::new(n).unwrap()
    }

    fn bound(b: i64) -> TargetBound {
        TargetBound::new(b).unwrap()
    }

    #[test]
    fn test_build_exact_totals() {
        let mut rng = seeded(1);
        for n in 1..=12 {
            let dice = count(n);
            for target in dice.min_sum()..=dice.max_sum() {
                let outcome = ExactSum::build(target, dice, &mut rng);
                assert_eq!(outcome.len(), n);
                assert_eq!(outcome.sum(), target);
                assert!(outcome.faces().iter().all(|f| (1..=6).contains(f)));
            }
        }
    }

    #[test]
    fn test_build_extremes() {
        let mut rng = seeded(2);
        let outcome = ExactSum::build(36, count(6), &mut rng);
        assert_eq!(outcome.faces(), &[6; 6]);
        let outcome = ExactSum::build(6, count(6), &mut rng);
        assert_eq!(outcome.faces(), &[1; 6]);
    }

    #[test]
    fn test_build_with_stuck_picks() {
        // A roller that keeps picking the first die must still finish by
        // scanning for the next die with room.
        let outcome = ExactSum::build(12, count(2), &mut StepRoller::new(1, 0));
        assert_eq!(outcome.faces(), &[6, 6]);
        let outcome = ExactSum::build(30, count(10), &mut StepRoller::new(1, 0));
        assert_eq!(outcome.sum(), 30);
    }

    #[test]
    #[should_panic(expected = "impossible")]
    fn test_build_target_too_high() {
        ExactSum::build(13, count(2), &mut seeded(0));
    }

    #[test]
    #[should_panic(expected = "impossible")]
    fn test_build_target_too_low() {
        ExactSum::build(2, count(3), &mut seeded(0));
    }

    #[test]
    fn test_pick_target_range() {
        let mut rng = seeded(4);
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let t = ExactSum::pick_target(bound(10), count(2), &mut rng);
            assert!((2..=10).contains(&t));
            seen[t as usize] = true;
        }
        assert!(seen[2..=10].iter().all(|&s| s));

        // Targets never go past what the dice can show.
        for _ in 0..200 {
            let t = ExactSum::pick_target(bound(40), count(2), &mut rng);
            assert!((2..=12).contains(&t));
        }
    }

    #[test]
    #[should_panic(expected = "cannot be reached")]
    fn test_pick_target_too_many_dice() {
        ExactSum::pick_target(bound(2), count(3), &mut seeded(0));
    }

    #[test]
    fn test_ceiling_within_bound() {
        let mut rng = seeded(5);
        let policy = Ceiling::default();
        for b in [7, 10, 13, 20, 36] {
            let dice = crate::resolve::resolve(bound(b));
            for _ in 0..500 {
                let outcome = policy.sample(bound(b), dice, &mut rng);
                assert_eq!(outcome.len(), dice.get());
                assert!(outcome.sum() <= b as UInt);
                assert!(outcome.faces().iter().all(|f| (1..=6).contains(f)));
            }
        }
    }

    #[test]
    fn test_ceiling_falls_back() {
        // Every free roll is 6 + 6, which never fits under 7, so the
        // fallback has to produce the outcome.
        let mut roller = StepRoller::new(6, 0);
        let outcome = Ceiling::new(3).sample(bound(7), count(2), &mut roller);
        assert!(outcome.sum() <= 7);
        assert_eq!(outcome.len(), 2);

        let outcome = Ceiling::new(0).sample(bound(7), count(2), &mut seeded(9));
        assert!(outcome.sum() <= 7);
    }

    #[test]
    fn test_policy_dispatch() {
        let mut rng = seeded(6);
        let exact: SumPolicy = Mode::Exact.policy(10);
        let ceiling: SumPolicy = Mode::Ceiling.policy(10);
        assert_eq!(exact, SumPolicy::ExactSum(ExactSum));
        assert_eq!(ceiling, SumPolicy::Ceiling(Ceiling::new(10)));
        assert_eq!(ceiling.mode(), Mode::Ceiling);
        assert_eq!(Ceiling::default().max_attempts(), Ceiling::DEFAULT_ATTEMPTS);
        for policy in [exact, ceiling] {
            let outcome = policy.sample(bound(13), count(3), &mut rng);
            assert!((3..=13).contains(&outcome.sum()));
        }
    }
}
