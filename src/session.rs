use crate::common::{DieCount, Outcome, TargetBound};
use crate::report::RollReport;
use crate::resolve::resolve;
use crate::roll::{Ceiling, ConstrainedSumSampler, Mode, Roller};
use crate::DefaultRoller;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Settings a [`RollSession`] starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub bound: TargetBound,
    pub mode: Mode,
    /// Free rolls tried by [`Mode::Ceiling`] before building an outcome.
    pub max_attempts: usize,
    /// How long the dice "roll" before the outcome is shown.
    pub delay: Duration,
}

impl SessionConfig {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bound: TargetBound::DEFAULT,
            mode: Mode::Exact,
            max_attempts: Ceiling::DEFAULT_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// A roll that has been sampled but not yet shown.
///
/// Hand it back to [`RollSession::finish`] to reveal it; the session refuses
/// new rolls until then. Dropping it unrevealed frees the session too.
#[must_use]
#[derive(Debug)]
pub struct PendingRoll {
    report: RollReport,
    dice: DieCount,
    busy: Rc<Cell<bool>>,
}

impl Drop for PendingRoll {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Everything the roll prompt remembers between requests: the bound, the
/// number of dice it implies, whether a roll is in progress, and the most
/// recent outcome.
pub struct RollSession<R = DefaultRoller> {
    bound: TargetBound,
    dice: DieCount,
    sampler: ConstrainedSumSampler,
    max_attempts: usize,
    delay: Duration,
    rolling: Rc<Cell<bool>>,
    last: Option<Outcome>,
    roller: R,
}

impl<R: Roller> RollSession<R> {
    pub fn new(config: SessionConfig, roller: R) -> Self {
        Self {
            bound: config.bound,
            dice: resolve(config.bound),
            sampler: ConstrainedSumSampler::new(config.mode.policy(config.max_attempts)),
            max_attempts: config.max_attempts,
            delay: config.delay,
            rolling: Rc::new(Cell::new(false)),
            last: None,
            roller,
        }
    }

    pub fn bound(&self) -> TargetBound {
        self.bound
    }

    pub fn dice(&self) -> DieCount {
        self.dice
    }

    pub fn mode(&self) -> Mode {
        self.sampler.policy().mode()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling.get()
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    /// Changes the bound and returns the new number of dice. The previous
    /// outcome is forgotten.
    pub fn set_bound(&mut self, bound: TargetBound) -> DieCount {
        self.bound = bound;
        self.dice = resolve(bound);
        self.last = None;
        info!(%bound, dice = %self.dice, "bound changed");
        self.dice
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.sampler = ConstrainedSumSampler::new(mode.policy(self.max_attempts));
        info!(%mode, "mode changed");
    }

    /// Starts a roll, or returns `None` if one is already in progress.
    pub fn begin_roll(&mut self) -> Option<PendingRoll> {
        if self.rolling.get() {
            debug!("roll already in progress; ignoring request");
            return None;
        }
        self.rolling.set(true);
        let outcome = self.sampler.sample(self.bound, self.dice, &mut self.roller);
        Some(PendingRoll {
            report: RollReport::new(self.bound, outcome),
            dice: self.dice,
            busy: Rc::clone(&self.rolling),
        })
    }

    /// Ends the roll in progress and reveals its result.
    pub fn finish(&mut self, pending: PendingRoll) -> RollReport {
        self.rolling.set(false);
        if pending.dice == self.dice && pending.report.bound() == self.bound {
            self.last = Some(pending.report.outcome().clone());
        } else {
            debug!("bound changed during the roll; not keeping the outcome");
        }
        pending.report.clone()
    }

    /// Rolls, waits out the display delay, and returns the result.
    pub fn roll_blocking(&mut self) -> Option<RollReport> {
        let pending = self.begin_roll()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Some(self.finish(pending))
    }
}

impl Default for RollSession {
    fn default() -> Self {
        Self::new(SessionConfig::default(), rand::thread_rng())
    }
}
