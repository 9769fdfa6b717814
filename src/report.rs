use crate::common::{Face, Outcome, TargetBound, UInt};
use crate::stringifiers::Stringify;
use std::fmt;

/// A finished roll, ready to be shown.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollReport {
    bound: TargetBound,
    outcome: Outcome,
}

impl RollReport {
    pub fn new(bound: TargetBound, outcome: Outcome) -> Self {
        Self { bound, outcome }
    }

    pub fn bound(&self) -> TargetBound {
        self.bound
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn values(&self) -> &[Face] {
        self.outcome.faces()
    }

    pub fn sum(&self) -> UInt {
        self.outcome.sum()
    }

    /// How each die has to be turned to show its face, in die order.
    pub fn orientations(&self) -> impl Iterator<Item = Orientation> + '_ {
        self.values().iter().filter_map(|&face| Orientation::for_face(face))
    }

    pub fn result<S: Stringify + Default>(&self) -> String {
        S::default().stringify(self)
    }
}

/// Rotation of a die cube, in degrees about the X and Y axes, that brings a
/// given face to the front.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Orientation {
    pub x: i16,
    pub y: i16,
}

impl Orientation {
    const TABLE: [Orientation; 6] = [
        Orientation::new(0, 0),
        Orientation::new(-90, 0),
        Orientation::new(0, -90),
        Orientation::new(0, 90),
        Orientation::new(90, 0),
        Orientation::new(180, 0),
    ];

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn for_face(face: Face) -> Option<Self> {
        let index = usize::try_from(face).ok()?.checked_sub(1)?;
        Self::TABLE.get(index).copied()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotateX({}deg) rotateY({}deg)", self.x, self.y)
    }
}
