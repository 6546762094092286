//! Simulation time model.
//!
//! # Design
//!
//! The simulation advances in fixed frames.  Every frame carries the same
//! delta time, `frame_duration_secs`, which is what the need decay, eating
//! countdown and agent motion consume.  Elapsed time is derived from the
//! integer frame counter:
//!
//!   elapsed_secs = current_frame * frame_duration_secs
//!
//! so that long runs do not accumulate floating-point drift the way summing
//! `dt` every frame would.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute simulation frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current frame and converts it to simulated seconds.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Simulated seconds per frame (the `dt` handed to every tick).
    pub frame_duration_secs: f32,
    /// The current frame: advanced by `SimClock::advance()` each iteration.
    pub current_frame: Frame,
}

impl SimClock {
    pub fn new(frame_duration_secs: f32) -> Self {
        Self {
            frame_duration_secs,
            current_frame: Frame::ZERO,
        }
    }

    /// Delta time of one frame.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.frame_duration_secs
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = Frame(self.current_frame.0 + 1);
    }

    /// Simulated seconds since frame 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_frame.0 as f64 * self.frame_duration_secs as f64
    }

    /// Zero-based in-game day containing the current frame.
    ///
    /// Returns 0 when `day_length_secs` is not positive.
    pub fn day_index(&self, day_length_secs: f32) -> u64 {
        if day_length_secs <= 0.0 {
            return 0;
        }
        (self.elapsed_secs() / day_length_secs as f64).floor() as u64
    }

    /// How many frames span `secs` simulated seconds (rounds up).
    pub fn frames_for_secs(&self, secs: f32) -> u64 {
        if self.frame_duration_secs <= 0.0 || secs <= 0.0 {
            return 0;
        }
        (secs / self.frame_duration_secs).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.elapsed_secs().max(0.0) as u64;
        write!(f, "{} ({:02}:{:02})", self.current_frame, total / 60, total % 60)
    }
}
