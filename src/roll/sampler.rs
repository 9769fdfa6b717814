use super::{Roller, Sample, SumPolicy};
use crate::common::{vec1, DieCount, Outcome, TargetBound, SIDES};
use tracing::debug;

/// Produces outcomes whose faces respect a target bound.
///
/// A single die is always rolled straight from `1..=min(bound, 6)`; more dice
/// go through the configured [`SumPolicy`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConstrainedSumSampler {
    policy: SumPolicy,
}

impl ConstrainedSumSampler {
    pub fn new(policy: impl Into<SumPolicy>) -> Self {
        Self {
            policy: policy.into(),
        }
    }

    pub fn policy(&self) -> SumPolicy {
        self.policy
    }

    pub fn sample<R: Roller>(&self, bound: TargetBound, dice: DieCount, roller: &mut R) -> Outcome {
        let outcome = if dice == DieCount::ONE {
            let face = roller.roll_between(1, bound.get().min(SIDES));
            Outcome::new(vec1![face])
        } else {
            self.policy.sample(bound, dice, roller)
        };
        debug!(
            %bound,
            %dice,
            mode = %self.policy.mode(),
            faces = %outcome,
            total = outcome.sum(),
            "sampled outcome"
        );
        outcome
    }
}
