use crate::error::RollError;
use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// The value shown on the top of a single die, always in `1..=SIDES`.
pub type Face = UInt;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Number of faces on every die this crate rolls.
pub const SIDES: UInt = 6;

pub(crate) const D6: NonZeroUInt = match NonZeroUInt::new(SIDES) {
    Some(x) => x,
    None => unreachable!(),
};

/// Largest number of dice a single roll may use.
pub const MAX_DICE: usize = 1000;

/// Largest target accepted from user input.
pub const MAX_BOUND: UInt = MAX_DICE as UInt * SIDES;

/// The upper limit the combined faces of a roll must respect.
///
/// A `TargetBound` is always at least 1 and at most [`MAX_BOUND`]; values
/// outside that range are rejected when the bound is built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TargetBound(NonZeroUInt);

impl TargetBound {
    /// Bound used when the user gives no usable number.
    pub const DEFAULT: Self = Self(D6);

    pub fn new(value: Int) -> Result<Self, RollError> {
        if value < 1 {
            return Err(RollError::InvalidInput(value));
        }
        UInt::try_from(value)
            .ok()
            .filter(|&v| v <= MAX_BOUND)
            .and_then(NonZeroUInt::new)
            .map(Self)
            .ok_or(RollError::TooManyDice {
                bound: value,
                max: MAX_BOUND,
            })
    }

    /// Interprets a number typed by the user.
    ///
    /// Missing input and `0` both select [`TargetBound::DEFAULT`]; negative
    /// numbers are rejected.
    pub fn from_input(value: Option<Int>) -> Result<Self, RollError> {
        match value {
            None | Some(0) => Ok(Self::DEFAULT),
            Some(v) => Self::new(v),
        }
    }

    pub const fn get(self) -> UInt {
        self.0.get()
    }
}

impl Default for TargetBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TargetBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How many dice are rolled together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DieCount(NonZeroUsize);

impl DieCount {
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Lowest total these dice can show: every die on 1.
    pub const fn min_sum(self) -> UInt {
        self.0.get() as UInt
    }

    /// Highest total these dice can show: every die on 6.
    pub const fn max_sum(self) -> UInt {
        self.0.get() as UInt * SIDES
    }
}

impl fmt::Display for DieCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The faces produced by a single roll, in die order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Outcome(NonEmpty<Face>);

impl Outcome {
    pub(crate) fn new(faces: NonEmpty<Face>) -> Self {
        debug_assert!(faces.iter().all(|f| (1..=SIDES).contains(f)));
        Self(faces)
    }

    pub(crate) fn from_rolls(mut rolls: Vec<Face>) -> Option<Self> {
        let last = rolls.pop()?;
        Some(Self::new(NonEmpty::from_vec_push(rolls, last)))
    }

    pub fn faces(&self) -> &[Face] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn sum(&self) -> UInt {
        self.0.iter().sum()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut faces = self.0.iter();
        if let Some(first) = faces.next() {
            write!(f, "{}", first)?;
        }
        for face in faces {
            write!(f, " + {}", face)?;
        }
        Ok(())
    }
}
