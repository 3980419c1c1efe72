//! Gravity clock: turns elapsed frame time into drop steps.
//!
//! The engine has no notion of time. The frontend advances this clock every
//! tick and calls `drop_one_step` once for each step it reports.

use crate::types::gravity_interval_ms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn for_level(level: u32) -> Self {
        Self {
            interval_ms: gravity_interval_ms(level),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return how many drops are now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let steps = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        steps
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    #[test]
    fn level_two_drops_every_quarter_second() {
        let mut clock = GravityClock::for_level(2);
        assert_eq!(clock.interval_ms(), 250);
        assert_eq!(clock.advance(249), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.advance(500), 2);
    }

    #[test]
    fn ticks_accumulate_remainder() {
        let mut clock = GravityClock::for_level(1);
        let steps: u32 = (0..100).map(|_| clock.advance(TICK_MS)).sum();
        // 1600ms at 500ms per step.
        assert_eq!(steps, 3);
    }

    #[test]
    fn reset_discards_partial_interval() {
        let mut clock = GravityClock::for_level(2);
        clock.advance(200);
        clock.reset();
        assert_eq!(clock.advance(200), 0);
    }
}
