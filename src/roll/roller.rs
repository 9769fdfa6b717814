use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// Source of randomness for rolling dice and choosing positions.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// A value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// An index in `0..len`. `len` must not be zero.
    fn pick(&mut self, len: usize) -> usize;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;

    /// A value in `low..=high`.
    fn roll_between(&mut self, low: UInt, high: UInt) -> UInt {
        assert!(1 <= low && low <= high, "empty range {}..={}", low, high);
        // `unwrap` can be used because the range was checked to be non-empty
        let span = NonZeroUInt::new(high - low + 1).unwrap();
        low - 1 + self.roll(span)
    }
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded;

    #[test]
    fn test_step_roller() {
        let mut roller = StepRoller::new(5, 1);
        let six = NonZeroUInt::new(6).unwrap();
        assert_eq!(roller.roll(six), 5);
        assert_eq!(roller.roll(six), 6);
        assert_eq!(roller.roll(six), 1);
        assert_eq!(roller.pick(4), 3);
        assert_eq!(roller.roll_iter(3, six).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_roll_between() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            let x = rng.roll_between(3, 9);
            assert!((3..=9).contains(&x));
        }
        assert_eq!(rng.roll_between(4, 4), 4);
        assert_eq!(StepRoller::new(1, 0).roll_between(10, 12), 10);
        assert_eq!(StepRoller::new(3, 0).roll_between(10, 12), 12);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_roll_between_empty() {
        StepRoller::new(1, 1).roll_between(5, 4);
    }
}
