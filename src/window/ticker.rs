pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_DURATION: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Upper bound of ticks replayed in one frame after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Converts variable frame times into a whole number of fixed logical ticks.
#[derive(Default)]
pub struct FixedTicker {
    accumulated: f32
}

impl FixedTicker {
    /// Accounts `elapsed` seconds of wall clock time and returns how many ticks to run now.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulated += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulated >= TICK_DURATION && ticks < MAX_CATCH_UP_TICKS {
            self.accumulated -= TICK_DURATION;
            ticks += 1;
        }
        if ticks == MAX_CATCH_UP_TICKS {
            // whatever is left over belongs to the stall, not to the next frame
            self.accumulated = 0.0;
        }
        ticks
    }
}
