use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

pub(super) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The cancellable refresh schedule behind the running counter.
///
/// Holds an interval only while armed. Dropping the interval cancels it, so a
/// disarmed or dropped ticker can never fire again.
pub(super) struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    pub(super) fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub(super) fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// First tick lands one full period from now.
    pub(super) fn arm(&mut self) {
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        tracing::debug!(period = ?self.period, "tick scheduler armed");
    }

    pub(super) fn disarm(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("tick scheduler disarmed");
        }
    }

    /// Follow the running flag. Only transitions touch the schedule, so a
    /// timer that keeps running keeps its phase.
    pub(super) fn sync(&mut self, running: bool) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Resolves on the next tick; never resolves while disarmed.
    pub(super) async fn tick(&mut self) {
        match &mut self.interval {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}
