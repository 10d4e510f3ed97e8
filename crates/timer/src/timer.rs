//! Poll-driven countdown timer.

/// A countdown timer advanced by explicit time steps.
///
/// The timer accumulates elapsed time while running and reports completion
/// once the accumulated time reaches its duration. It never fires on its own;
/// callers tick it once per simulation step and poll the queries they need.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer {
    duration: f32,
    elapsed: f32,
    running: bool,
}

impl Timer {
    /// Create a stopped timer with the given duration in seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Configured duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time left until the timer finishes, saturating at zero.
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Completion fraction in `[0, 1]`. A zero-duration timer is complete.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Whether the timer is currently accumulating time.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the accumulated time has reached the duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start (or restart) the timer from zero.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Restart the timer from zero with a new duration.
    pub fn start_with(&mut self, duration: f32) {
        self.duration = duration;
        self.start();
    }

    /// Pause the timer, keeping the accumulated time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume a paused timer.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop the timer and discard the accumulated time.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    /// Zero the accumulated time without changing the running flag.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Change the duration without touching the accumulated time.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration;
    }

    /// Advance the timer by `dt` seconds. Paused timers ignore the step.
    pub fn tick(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    /// Poll for completion, resetting the accumulated time on a hit.
    ///
    /// Returns `true` at most once per elapsed interval, which makes the
    /// timer usable as a repeating interval primitive.
    pub fn finish_and_reset(&mut self) -> bool {
        if self.is_finished() {
            self.reset();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_advance_until_started() {
        let mut timer = Timer::new(1.0);
        timer.tick(0.5);
        assert_eq!(timer.elapsed(), 0.0);
        assert!(!timer.is_finished());
    }

    #[test]
    fn finishes_after_duration() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(0.4);
        assert!(!timer.is_finished());
        timer.tick(0.6);
        assert!(timer.is_finished());
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn pause_freezes_elapsed_time() {
        let mut timer = Timer::new(2.0);
        timer.start();
        timer.tick(0.5);
        timer.pause();
        timer.tick(10.0);
        assert_eq!(timer.elapsed(), 0.5);
        timer.resume();
        timer.tick(1.5);
        assert!(timer.is_finished());
    }

    #[test]
    fn stop_discards_progress() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(0.9);
        timer.stop();
        assert_eq!(timer.elapsed(), 0.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn restart_with_new_duration() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(1.0);
        assert!(timer.is_finished());
        timer.start_with(3.0);
        assert_eq!(timer.duration(), 3.0);
        assert!(!timer.is_finished());
    }

    #[test]
    fn progress_is_clamped() {
        let mut timer = Timer::new(2.0);
        timer.start();
        timer.tick(5.0);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn zero_duration_is_always_complete() {
        let timer = Timer::new(0.0);
        assert_eq!(timer.progress(), 1.0);
        assert!(timer.is_finished());
    }

    #[test]
    fn finish_and_reset_fires_once_per_interval() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(1.0);
        assert!(timer.finish_and_reset());
        assert!(!timer.finish_and_reset());
        timer.tick(1.0);
        assert!(timer.finish_and_reset());
    }
}
