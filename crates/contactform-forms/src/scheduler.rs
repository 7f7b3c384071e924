//! Deferred work for the submission lifecycle.
//!
//! The controller never sleeps. It hands a [`TimerTask`] and a delay to a
//! [`Scheduler`], and whoever drives the form feeds the task back through
//! [`ContactForm::fire`](crate::form::ContactForm::fire) once the delay has
//! elapsed. Timers fire once and cannot be cancelled.
//!
//! Two schedulers are provided:
//!
//! - [`ManualScheduler`] keeps a virtual clock that only moves when
//!   [`advance`](ManualScheduler::advance) is called. Tests and hosts with
//!   their own frame loop use it.
//! - [`TokioScheduler`] sleeps on the tokio timer and delivers due tasks over
//!   a channel consumed by [`run_event_loop`](crate::form::run_event_loop).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A deferred callback of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerTask {
    /// Finish the simulated submission.
    CompleteSubmission,
    /// Hide the success notification.
    HideSuccess,
}

/// Schedules fire-once [`TimerTask`]s.
pub trait Scheduler {
    /// Arranges for `task` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, task: TimerTask);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTask {
    due: Duration,
    seq: u64,
    task: TimerTask,
}

/// A scheduler driven by an explicit virtual clock.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use contactform_forms::scheduler::{ManualScheduler, Scheduler, TimerTask};
///
/// let mut scheduler = ManualScheduler::new();
/// scheduler.schedule(Duration::from_millis(1500), TimerTask::CompleteSubmission);
///
/// assert!(scheduler.advance(Duration::from_millis(1499)).is_empty());
/// assert_eq!(
///     scheduler.advance(Duration::from_millis(1)),
///     vec![TimerTask::CompleteSubmission]
/// );
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

impl ManualScheduler {
    /// Creates a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of tasks that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the delay until the next task is due, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Moves the clock forward by `by` and returns the tasks that became due.
    ///
    /// Tasks are returned in due order; tasks due at the same instant keep
    /// the order in which they were scheduled.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerTask> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = pending;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.task).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTask {
            due: self.now + delay,
            seq,
            task,
        });
    }
}

/// The receiving half of a [`TokioScheduler`].
#[derive(Debug)]
pub struct TimerReceiver {
    rx: mpsc::UnboundedReceiver<TimerTask>,
    pending: Arc<AtomicUsize>,
}

impl TimerReceiver {
    /// Waits for the next due task.
    ///
    /// Returns `None` once the scheduler and every in-flight timer are gone.
    pub async fn recv(&mut self) -> Option<TimerTask> {
        let task = self.rx.recv().await?;
        self.pending.fetch_sub(1, Ordering::SeqCst);
        Some(task)
    }

    /// Returns the number of scheduled tasks not yet received.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

/// A scheduler backed by the tokio timer.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerTask>,
    pending: Arc<AtomicUsize>,
}

impl TokioScheduler {
    /// Creates a scheduler and the receiver its tasks are delivered to.
    pub fn new() -> (Self, TimerReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));
        (
            Self {
                tx,
                pending: Arc::clone(&pending),
            },
            TimerReceiver { rx, pending },
        )
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, task: TimerTask) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        let tx = self.tx.clone();
        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(task).is_err() {
                // Receiver dropped; nobody will ever count this task.
                pending.fetch_sub(1, Ordering::SeqCst);
                tracing::debug!(?task, "timer fired after the event loop stopped");
            }
        });
    }
}
