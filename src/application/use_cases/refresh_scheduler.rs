use crate::freshness::domain::RefreshTrigger;
use crate::shared::error::SyncError;
use crate::shared::task::TaskHandle;
use crate::shared::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No timer
    Idle,
    /// Recurring timer running
    Active,
}

/// RefreshScheduler - recurring interval trigger
///
/// `start` moves the scheduler from idle to active and arms a timer that
/// emits one `RefreshTrigger::Interval` per period, the first one a full
/// period after start. `stop` cancels the timer and returns to idle. Ticks do
/// not wait for the cycles they trigger.
pub struct RefreshScheduler {
    period: Duration,
    task: Option<TaskHandle>,
}

impl RefreshScheduler {
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(SyncError::validation("Refresh interval must be greater than zero").into());
        }
        Ok(Self { period, task: None })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> SchedulerState {
        match &self.task {
            Some(task) if task.is_active() => SchedulerState::Active,
            _ => SchedulerState::Idle,
        }
    }

    /// idle -> active. Starting an active scheduler is a no-op.
    pub fn start(&mut self, sink: mpsc::UnboundedSender<RefreshTrigger>) {
        if self.state() == SchedulerState::Active {
            tracing::debug!("refresh scheduler already active");
            return;
        }

        let period = self.period;
        self.task = Some(TaskHandle::spawn("refresh-scheduler", move |mut stop| {
            async move {
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

                loop {
                    tokio::select! {
                        biased;
                        _ = stop.stopped() => break,
                        _ = ticker.tick() => {
                            if sink.send(RefreshTrigger::Interval).is_err() {
                                tracing::debug!("trigger receiver dropped; scheduler exiting");
                                break;
                            }
                        }
                    }
                }
            }
        }));
        tracing::info!(period_secs = period.as_secs_f64(), "refresh scheduler active");
    }

    /// active -> idle. Cancels the timer; no trigger is emitted afterwards.
    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
            tracing::info!("refresh scheduler idle");
        }
    }

    /// Like `stop`, but waits for the timer task to exit
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.shutdown().await;
            tracing::info!("refresh scheduler idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<RefreshTrigger>) -> Vec<RefreshTrigger> {
        let mut triggers = Vec::new();
        while let Ok(trigger) = rx.try_recv() {
            triggers.push(trigger);
        }
        triggers
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(RefreshScheduler::new(Duration::ZERO).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_idle() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(30)).unwrap();
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_trigger_per_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(30)).unwrap();
        scheduler.start(tx);
        assert_eq!(scheduler.state(), SchedulerState::Active);

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(drain(&mut rx), vec![RefreshTrigger::Interval]);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_triggers_after_stop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(30)).unwrap();
        scheduler.start(tx);

        tokio::time::sleep(Duration::from_secs(95)).await;
        assert_eq!(drain(&mut rx).len(), 3);

        scheduler.stop();
        assert_eq!(scheduler.state(), SchedulerState::Idle);

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_returns_to_idle() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(5)).unwrap();
        scheduler.start(tx);
        scheduler.shutdown().await;

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(10)).unwrap();
        scheduler.start(tx.clone());
        scheduler.stop();
        scheduler.start(tx);

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(drain(&mut rx).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(1)).unwrap();
        scheduler.start(tx);
        drop(rx);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }
}
