// src/decorators/scheduler.rs — Timer collaborator for delay and throttle
//
// `TokioScheduler` runs callbacks on a tokio runtime. `VirtualScheduler`
// keeps a manual clock so time-dependent behavior can be driven step by
// step in tests.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::infra::errors::Result;

/// A deferred callback.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Schedules callbacks after a delay and reports the current time.
pub trait Scheduler: Send + Sync {
    type Handle: Send;

    /// Run `task` once after `delay`. Never blocks the caller.
    fn schedule(&self, task: Task, delay: Duration) -> Self::Handle;

    /// Prevent a scheduled task from running. No-op if it already ran.
    fn cancel(&self, handle: &Self::Handle);

    fn now(&self) -> Instant;
}

// ─── Tokio ──────────────────────────────────────────────────────────────────

/// Scheduler backed by tokio timers. Each task is a spawned sleeper.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Use the runtime of the calling context.
    pub fn current() -> Result<Self> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule(&self, task: Task, delay: Duration) -> JoinHandle<()> {
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        })
    }

    fn cancel(&self, handle: &JoinHandle<()>) {
        if !handle.is_finished() {
            tracing::debug!("Cancelling scheduled task");
        }
        handle.abort();
    }

    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

// ─── Virtual time ───────────────────────────────────────────────────────────

/// Handle returned by [`VirtualScheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualHandle(u64);

struct PendingTask {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct VirtualState {
    elapsed: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler whose clock only moves when [`advance`](Self::advance) is
/// called. Tasks fire in order of expiry; tasks with equal expiry fire in
/// the order they were scheduled.
pub struct VirtualScheduler {
    origin: Instant,
    state: Mutex<VirtualState>,
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            state: Mutex::new(VirtualState::default()),
        }
    }

    /// Time elapsed on the virtual clock.
    pub fn elapsed(&self) -> Duration {
        self.lock().elapsed
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Move the clock forward by `by`, running every task that comes due.
    /// Tasks run without the scheduler lock held, so they may schedule more
    /// work; anything that falls due inside the window also runs. Returns the
    /// number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().elapsed + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut state = self.lock();
                let due = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let pending = state.pending.remove(i);
                        state.elapsed = state.elapsed.max(pending.due);
                        Some(pending)
                    }
                    None => {
                        state.elapsed = target;
                        None
                    }
                }
            };
            let Some(pending) = next else {
                break;
            };
            tracing::trace!("Virtual task {} fired at {:?}", pending.id, pending.due);
            (pending.task)();
            fired += 1;
        }
        fired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VirtualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = VirtualHandle;

    fn schedule(&self, task: Task, delay: Duration) -> VirtualHandle {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.elapsed + delay;
        state.pending.push(PendingTask { id, due, task });
        VirtualHandle(id)
    }

    fn cancel(&self, handle: &VirtualHandle) {
        self.lock().pending.retain(|p| p.id != handle.0);
    }

    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}
