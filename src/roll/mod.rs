mod policy;
mod roller;
mod sampler;
mod shuffle;

pub use policy::{Ceiling, ExactSum, Mode, Sample, SumPolicy};
pub use roller::Roller;
pub use sampler::ConstrainedSumSampler;
pub use shuffle::shuffle;

#[cfg(test)]
pub(crate) use roller::StepRoller;
