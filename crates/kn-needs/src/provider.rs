//! The satisfaction capability exposed to the pension and to display code.

use crate::NeedSnapshot;

/// Something that reports how content it is.
///
/// Implemented by [`NeedController`][crate::NeedController] and by every
/// type that owns one (a dog).  The aggregator clamps the reported value to
/// `[0, 1]` itself, so implementations need not.
pub trait SatisfactionProvider {
    /// Satisfaction in `[0, 1]`, 1 meaning fully content.
    fn satisfaction(&self) -> f32;

    /// One snapshot per need, in registration order.
    fn needs_snapshot(&self) -> Vec<NeedSnapshot>;
}

impl<T: SatisfactionProvider + ?Sized> SatisfactionProvider for &T {
    fn satisfaction(&self) -> f32 {
        (**self).satisfaction()
    }

    fn needs_snapshot(&self) -> Vec<NeedSnapshot> {
        (**self).needs_snapshot()
    }
}

impl<T: SatisfactionProvider + ?Sized> SatisfactionProvider for Box<T> {
    fn satisfaction(&self) -> f32 {
        (**self).satisfaction()
    }

    fn needs_snapshot(&self) -> Vec<NeedSnapshot> {
        (**self).needs_snapshot()
    }
}
