use crate::config::{LONG_PRESS_MS, REPEAT_INTERVAL_MS};
use crate::ui::InputKind;

/// Move selection cursor one item up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Tracks one held button and decides which kind each edge or timer
/// expiry produces.
///
/// ```text
/// press ─┬─ release < LONG_PRESS_MS ────────────→ Short, Release
///        └─ held LONG_PRESS_MS → Long → Repeat…  → Release
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoldTracker {
    long_sent: bool,
}

impl HoldTracker {
    /// Fresh tracker for a button that just went down.
    pub const fn new() -> Self {
        Self { long_sent: false }
    }

    /// How long to wait for the release before the next hold event.
    pub fn next_hold_delay_ms(&self) -> u64 {
        if self.long_sent {
            REPEAT_INTERVAL_MS
        } else {
            LONG_PRESS_MS
        }
    }

    /// The hold timer expired with the button still down.
    pub fn on_hold_elapsed(&mut self) -> InputKind {
        if self.long_sent {
            InputKind::Repeat
        } else {
            self.long_sent = true;
            InputKind::Long
        }
    }

    /// The button came up. Returns `Short` only if no Long fired.
    /// `Release` is always sent afterwards by the caller.
    pub fn on_release(&self) -> Option<InputKind> {
        if self.long_sent {
            None
        } else {
            Some(InputKind::Short)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        assert_eq!(select_prev(0), 0);
        assert_eq!(select_prev(1), 0);
        assert_eq!(select_next(0, 2), 1);
        assert_eq!(select_next(1, 2), 1);
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn quick_tap_is_short() {
        let hold = HoldTracker::new();
        assert_eq!(hold.next_hold_delay_ms(), LONG_PRESS_MS);
        assert_eq!(hold.on_release(), Some(InputKind::Short));
    }

    #[test]
    fn hold_goes_long_then_repeats() {
        let mut hold = HoldTracker::new();
        assert_eq!(hold.on_hold_elapsed(), InputKind::Long);
        assert_eq!(hold.next_hold_delay_ms(), REPEAT_INTERVAL_MS);
        assert_eq!(hold.on_hold_elapsed(), InputKind::Repeat);
        assert_eq!(hold.on_hold_elapsed(), InputKind::Repeat);
        assert_eq!(hold.on_release(), None);
    }
}
