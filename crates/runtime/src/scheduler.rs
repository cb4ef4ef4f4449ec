//! Delayed lobby tasks.
//!
//! The service never sleeps itself. It hands a [`ScheduledTask`] to a
//! [`Scheduler`], and whoever drives the scheduler feeds due tasks back into
//! [`GameService::run_task`](crate::GameService::run_task).

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::repository::GameId;

/// Internal follow-up work on a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    /// Decline a join the creator did not confirm in time.
    Decline(GameId),
    /// Delete a declined game and its player rows.
    Remove(GameId),
}

impl ScheduledTask {
    pub fn game_id(&self) -> GameId {
        match self {
            ScheduledTask::Decline(id) | ScheduledTask::Remove(id) => *id,
        }
    }
}

pub trait Scheduler: Send + Sync {
    /// Run `task` once `delay` has elapsed. Fire and forget.
    fn run_after(&self, delay: Duration, task: ScheduledTask);
}

/// Scheduler backed by the tokio timer.
///
/// Each task sleeps on its own spawned future and is then forwarded over an
/// unbounded channel; pair the receiver with
/// [`run_scheduled_tasks`](crate::run_scheduled_tasks). `run_after` must be
/// called from within a tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ScheduledTask>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScheduledTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn run_after(&self, delay: Duration, task: ScheduledTask) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(task).is_err() {
                tracing::debug!(?task, "scheduled task dropped, receiver closed");
            }
        });
    }
}

/// Scheduler that only records what was requested. Tests decide when
/// tasks run.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    queued: Mutex<Vec<(Duration, ScheduledTask)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every recorded task in request order.
    pub fn take(&self) -> Vec<(Duration, ScheduledTask)> {
        self.queued
            .lock()
            .map(|mut queued| std::mem::take(&mut *queued))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.queued.lock().map(|queued| queued.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Scheduler for ManualScheduler {
    fn run_after(&self, delay: Duration, task: ScheduledTask) {
        match self.queued.lock() {
            Ok(mut queued) => queued.push((delay, task)),
            Err(_) => tracing::warn!(?task, "manual scheduler lock poisoned"),
        }
    }
}
