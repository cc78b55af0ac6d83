/*!
 * Fair Signal Selection
 *
 * Picks one deliverable signal starting from a per-thread rotating cursor so
 * that repeatedly re-delivered signals cannot starve one another.
 */

use super::types::{Signal, SignalSet};
use crate::core::limits::SIGNAL_COUNT;

/// Rotating start point for selection, always in `0..32`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FairnessCursor(u8);

impl FairnessCursor {
    #[inline]
    pub fn position(self) -> u8 {
        self.0
    }

    /// Move past the signal just selected
    #[inline]
    pub fn advance_past(&mut self, selected: Signal) {
        self.0 = (selected.number() + 1) % SIGNAL_COUNT;
    }
}

/// First signal of `available & !blocked` at or after `cursor`, wrapping mod 32
///
/// Rotating the mask right by the cursor moves bit `cursor` to bit 0, so the
/// trailing zero count is the distance from the cursor to the pick.
#[inline]
pub(crate) fn select(available: SignalSet, blocked: SignalSet, cursor: FairnessCursor) -> Option<Signal> {
    let deliverable = available.without(blocked);
    if deliverable.is_empty() {
        return None;
    }

    let start = u32::from(cursor.position());
    let distance = deliverable.bits().rotate_right(start).trailing_zeros();
    let number = (start + distance) % u32::from(SIGNAL_COUNT);
    Signal::new(i64::from(number)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(n: i64) -> Signal {
        Signal::new(n).unwrap()
    }

    fn set(signals: &[i64]) -> SignalSet {
        signals.iter().map(|n| sig(*n)).collect()
    }

    #[test]
    fn test_select_from_zero() {
        let picked = select(set(&[3, 5]), SignalSet::EMPTY, FairnessCursor::default());
        assert_eq!(picked, Some(sig(3)));
    }

    #[test]
    fn test_select_respects_cursor() {
        let mut cursor = FairnessCursor::default();
        cursor.advance_past(sig(3));
        assert_eq!(cursor.position(), 4);
        assert_eq!(select(set(&[3, 5]), SignalSet::EMPTY, cursor), Some(sig(5)));
    }

    #[test]
    fn test_select_wraps() {
        let mut cursor = FairnessCursor::default();
        cursor.advance_past(sig(30));
        assert_eq!(select(set(&[2, 7]), SignalSet::EMPTY, cursor), Some(sig(2)));
    }

    #[test]
    fn test_cursor_wraps_after_31() {
        let mut cursor = FairnessCursor::default();
        cursor.advance_past(sig(31));
        assert_eq!(cursor.position(), 0);
        assert_eq!(select(set(&[0, 31]), SignalSet::EMPTY, cursor), Some(sig(0)));
    }

    #[test]
    fn test_select_honors_blocked() {
        let available = set(&[4, 9]);
        assert_eq!(select(available, set(&[4]), FairnessCursor::default()), Some(sig(9)));
        assert_eq!(select(available, available, FairnessCursor::default()), None);
        assert_eq!(select(SignalSet::EMPTY, SignalSet::EMPTY, FairnessCursor::default()), None);
    }
}
