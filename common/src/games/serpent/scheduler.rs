use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Single periodic tick source. Arming drops the previous cadence first,
/// so there is never more than one pending tick.
#[derive(Default)]
pub struct TickScheduler {
    interval: Option<Interval>,
    arm_count: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// First tick fires one full `period` from now. Must run inside a tokio runtime.
    pub fn arm(&mut self, period: Duration) {
        self.interval = None;
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.arm_count += 1;
    }

    pub fn halt(&mut self) {
        self.interval = None;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// How many times a cadence has been installed so far.
    pub fn arm_count(&self) -> u64 {
        self.arm_count
    }

    /// Resolves at the next tick; never resolves while halted.
    pub async fn next_tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let mut scheduler = TickScheduler::new();
        let started = Instant::now();
        scheduler.arm(Duration::from_millis(130));
        let fired = scheduler.next_tick().await;
        assert_eq!(fired - started, Duration::from_millis(130));
        let fired_again = scheduler.next_tick().await;
        assert_eq!(fired_again - started, Duration::from_millis(260));
    }

    #[tokio::test(start_paused = true)]
    async fn test_halted_scheduler_never_ticks() {
        let mut scheduler = TickScheduler::new();
        assert!(timeout(Duration::from_secs(5), scheduler.next_tick()).await.is_err());

        scheduler.arm(Duration::from_millis(50));
        scheduler.halt();
        assert!(!scheduler.is_armed());
        assert!(timeout(Duration::from_secs(5), scheduler.next_tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_cadence() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm(Duration::from_millis(130));
        scheduler.next_tick().await;

        let rearmed_at = Instant::now();
        scheduler.arm(Duration::from_millis(126));
        assert_eq!(scheduler.period(), Some(Duration::from_millis(126)));
        assert_eq!(scheduler.arm_count(), 2);

        let fired = scheduler.next_tick().await;
        assert_eq!(fired - rearmed_at, Duration::from_millis(126));
        let fired = scheduler.next_tick().await;
        assert_eq!(fired - rearmed_at, Duration::from_millis(252));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_ticks_do_not_burst() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm(Duration::from_millis(100));
        tokio::time::sleep(Duration::from_millis(450)).await;

        scheduler.next_tick().await;
        let after_late = Instant::now();
        let fired = scheduler.next_tick().await;
        assert_eq!(fired - after_late, Duration::from_millis(100));
    }
}
