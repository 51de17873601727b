//! Tick driver abstraction
//!
//! The session controller owns *when* ticks start and stop; a driver owns
//! *how* (browser timers, or a manual queue for tests and the native demo).

use std::time::Duration;

/// Periodic tick registration plus a one-shot restart timer
pub trait TickDriver {
    /// Begin invoking the tick handler every `period`
    fn start_ticking(&mut self, period: Duration);
    /// Cancel the current tick registration (no-op when none is active)
    fn stop_ticking(&mut self);
    /// Invoke the restart handler once after `delay`
    fn schedule_restart(&mut self, delay: Duration);
}

/// Event produced by [`ManualClock::next_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Tick,
    Restart,
}

/// Headless driver that hands out events on demand
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    period: Option<Duration>,
    pending_restart: Option<Duration>,
    /// Live tick registrations; never exceeds 1 when used correctly
    pub active_registrations: u32,
    /// Largest value `active_registrations` ever reached
    pub peak_registrations: u32,
    /// Ticks handed out so far
    pub ticks_fired: u64,
    /// Simulated time elapsed
    pub elapsed: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ticking(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn pending_restart(&self) -> Option<Duration> {
        self.pending_restart
    }

    /// Next event in time order: a running interval always fires before a
    /// pending restart, since the controller cancels ticking before it
    /// schedules one.
    pub fn next_event(&mut self) -> Option<ClockEvent> {
        if let Some(period) = self.period {
            self.elapsed += period;
            self.ticks_fired += 1;
            return Some(ClockEvent::Tick);
        }
        let delay = self.pending_restart.take()?;
        self.elapsed += delay;
        Some(ClockEvent::Restart)
    }
}

impl TickDriver for ManualClock {
    fn start_ticking(&mut self, period: Duration) {
        self.period = Some(period);
        self.active_registrations += 1;
        self.peak_registrations = self.peak_registrations.max(self.active_registrations);
    }

    fn stop_ticking(&mut self) {
        if self.period.take().is_some() {
            self.active_registrations -= 1;
        }
    }

    fn schedule_restart(&mut self, delay: Duration) {
        self.pending_restart = Some(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_clock_has_no_events() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.next_event(), None);
    }

    #[test]
    fn test_ticks_until_stopped() {
        let mut clock = ManualClock::new();
        clock.start_ticking(Duration::from_millis(100));

        assert_eq!(clock.next_event(), Some(ClockEvent::Tick));
        assert_eq!(clock.next_event(), Some(ClockEvent::Tick));
        assert_eq!(clock.elapsed, Duration::from_millis(200));

        clock.stop_ticking();
        clock.schedule_restart(Duration::from_millis(500));
        assert_eq!(clock.active_registrations, 0);
        assert_eq!(clock.next_event(), Some(ClockEvent::Restart));
        assert_eq!(clock.next_event(), None);
        assert_eq!(clock.elapsed, Duration::from_millis(700));
        assert_eq!(clock.ticks_fired, 2);
    }

    #[test]
    fn test_double_stop_is_harmless() {
        let mut clock = ManualClock::new();
        clock.start_ticking(Duration::from_millis(100));
        clock.stop_ticking();
        clock.stop_ticking();
        assert_eq!(clock.active_registrations, 0);
        assert!(!clock.is_ticking());
    }
}
