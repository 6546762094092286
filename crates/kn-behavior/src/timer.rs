//! Tick-driven countdown.

/// Remaining time at or below this counts as zero.  Absorbs the rounding of
/// repeated `f32` subtraction, so a 2 s hold at 1/30 s per frame ends on
/// frame 60.
const FINISH_EPSILON: f32 = 1e-4;

/// Counts simulated seconds down to zero.
///
/// There is no clock behind it: the owner calls [`tick`][Self::tick] with
/// each frame's `dt`.  Cancelling is simply dropping the value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Countdown {
    duration:  f32,
    remaining: f32,
    finished:  bool,
}

impl Countdown {
    /// A countdown of `secs` seconds.  Negative or NaN durations become 0,
    /// which finishes on the first tick.
    pub fn new(secs: f32) -> Self {
        let duration = if secs.is_nan() { 0.0 } else { secs.max(0.0) };
        Self {
            duration,
            remaining: duration,
            finished: false,
        }
    }

    /// Consume `dt` seconds.  Returns `true` exactly once: on the tick that
    /// brings the remaining time to zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        if dt.is_finite() && dt > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        if self.remaining <= FINISH_EPSILON {
            self.remaining = 0.0;
            self.finished = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start over from the full duration.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.finished = false;
    }
}
