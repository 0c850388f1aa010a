use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long `shutdown` waits for a task to observe its stop signal
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Cooperative stop signal handed to a task spawned through [`TaskHandle`]
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

impl StopSignal {
    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the owning handle has been cancelled or dropped
    pub async fn stopped(&mut self) {
        // A closed channel means the handle is gone, which also means stop.
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }
}

/// Handle to a background task that must be cancelled on teardown
///
/// Every recurring timer and long-lived connection in the coordinator is
/// owned through one of these. `cancel` asks the task to stop at its next
/// suspension point; `shutdown` additionally waits for it (aborting after a
/// short grace period). Dropping an uncancelled handle aborts the task so a
/// forgotten handle can never leak a timer.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    stop_tx: watch::Sender<bool>,
    join: Option<JoinHandle<()>>,
}

impl TaskHandle {
    /// Spawns `task` on the current tokio runtime
    pub fn spawn<F, Fut>(name: &'static str, task: F) -> Self
    where
        F: FnOnce(StopSignal) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = watch::channel(false);
        let join = tokio::spawn(task(StopSignal { rx: stop_rx }));
        tracing::debug!(task = name, "background task started");

        Self {
            name,
            stop_tx,
            join: Some(join),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Signals the task to stop. Idempotent.
    pub fn cancel(&mut self) {
        let was_stopped = self.stop_tx.send_replace(true);
        if !was_stopped {
            tracing::debug!(task = self.name, "background task cancelled");
        }
    }

    /// True until the handle is cancelled or the task finishes on its own
    pub fn is_active(&self) -> bool {
        !*self.stop_tx.borrow() && self.join.as_ref().is_some_and(|join| !join.is_finished())
    }

    /// Cancels the task and waits for it to wind down
    pub async fn shutdown(mut self) {
        self.cancel();

        let Some(mut join) = self.join.take() else {
            return;
        };

        match tokio::time::timeout(SHUTDOWN_GRACE, &mut join).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.is_panic() => {
                tracing::warn!(task = self.name, "background task panicked: {}", e);
            }
            Ok(Err(_)) => {}
            Err(_) => {
                tracing::warn!(
                    task = self.name,
                    "background task ignored stop signal; aborting"
                );
                join.abort();
            }
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            self.stop_tx.send_replace(true);
            join.abort();
        }
    }
}
