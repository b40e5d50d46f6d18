// src/decorators/throttle.rs — At most one invocation per time window
//
// Leading edge: a call outside any window runs immediately and opens a
// window of `wait`. Trailing edge: calls inside the window are coalesced
// into one invocation at the end of the window, using the most recent
// arguments. Either edge can be switched off with `ThrottleOptions`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use super::scheduler::Scheduler;
use crate::infra::config::ThrottleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl From<&ThrottleConfig> for ThrottleOptions {
    fn from(config: &ThrottleConfig) -> Self {
        Self {
            leading: config.leading,
            trailing: config.trailing,
        }
    }
}

type Func<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

struct ThrottleState<H, A, R> {
    /// Start of the current window.
    window_start: Option<Instant>,
    /// Latest arguments waiting for the trailing edge.
    pending_args: Option<A>,
    trailing_timer: Option<H>,
    last_result: Option<R>,
}

struct ThrottleInner<S: Scheduler, A, R> {
    func: Func<A, R>,
    scheduler: Arc<S>,
    wait: Duration,
    options: ThrottleOptions,
    state: Mutex<ThrottleState<S::Handle, A, R>>,
}

/// Rate-limited wrapper around a function. Clones share the same window.
pub struct Throttle<S: Scheduler, A, R> {
    inner: Arc<ThrottleInner<S, A, R>>,
}

impl<S: Scheduler, A, R> Clone for Throttle<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Throttle `func` to one invocation per `wait`, firing on both edges.
pub fn throttle<S, A, R, F>(scheduler: Arc<S>, func: F, wait: Duration) -> Throttle<S, A, R>
where
    S: Scheduler + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    throttle_with(scheduler, func, wait, ThrottleOptions::default())
}

pub fn throttle_with<S, A, R, F>(
    scheduler: Arc<S>,
    func: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Throttle<S, A, R>
where
    S: Scheduler + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Throttle {
        inner: Arc::new(ThrottleInner {
            func: Box::new(func),
            scheduler,
            wait,
            options,
            state: Mutex::new(ThrottleState {
                window_start: None,
                pending_args: None,
                trailing_timer: None,
                last_result: None,
            }),
        }),
    }
}

/// Window and edges taken from configuration.
pub fn throttle_configured<S, A, R, F>(
    scheduler: Arc<S>,
    func: F,
    config: &ThrottleConfig,
) -> Throttle<S, A, R>
where
    S: Scheduler + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    throttle_with(scheduler, func, config.wait(), ThrottleOptions::from(config))
}

impl<S, A, R> Throttle<S, A, R>
where
    S: Scheduler + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Invoke or coalesce. Returns the result of the most recent actual
    /// invocation, which is `None` until the function has run once.
    pub fn call(&self, args: A) -> Option<R> {
        let inner = &self.inner;
        let now = inner.scheduler.now();
        let mut state = inner.lock();

        if state.window_start.is_none() && !inner.options.leading {
            state.window_start = Some(now);
        }

        let elapsed = state
            .window_start
            .map(|start| now.saturating_duration_since(start));
        let window_open = elapsed.is_some_and(|e| e < inner.wait);

        if !window_open {
            if let Some(timer) = state.trailing_timer.take() {
                inner.scheduler.cancel(&timer);
            }
            state.pending_args = None;
            state.window_start = Some(now);
            drop(state);
            return Some(inner.invoke(args));
        }

        if inner.options.trailing {
            state.pending_args = Some(args);
            if state.trailing_timer.is_none() {
                let remaining = inner.wait - elapsed.unwrap_or_default();
                let weak: Weak<ThrottleInner<S, A, R>> = Arc::downgrade(inner);
                let timer = inner.scheduler.schedule(
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.fire_trailing();
                        }
                    }),
                    remaining,
                );
                state.trailing_timer = Some(timer);
            }
            tracing::debug!("throttle: call coalesced into trailing edge");
        } else {
            tracing::debug!("throttle: call dropped inside window");
        }

        state.last_result.clone()
    }

    /// Result of the most recent invocation.
    pub fn last_result(&self) -> Option<R> {
        self.inner.lock().last_result.clone()
    }

    /// Whether a trailing invocation is scheduled.
    pub fn has_pending(&self) -> bool {
        self.inner.lock().trailing_timer.is_some()
    }
}

impl<S, A, R> ThrottleInner<S, A, R>
where
    S: Scheduler,
    R: Clone,
{
    fn lock(&self) -> MutexGuard<'_, ThrottleState<S::Handle, A, R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run the function outside the lock and record its result.
    fn invoke(&self, args: A) -> R {
        let result = (self.func)(args);
        self.lock().last_result = Some(result.clone());
        result
    }

    fn fire_trailing(&self) {
        let args = {
            let mut state = self.lock();
            state.trailing_timer = None;
            state.window_start = if self.options.leading {
                Some(self.scheduler.now())
            } else {
                None
            };
            state.pending_args.take()
        };
        if let Some(args) = args {
            tracing::debug!("throttle: trailing edge fired");
            self.invoke(args);
        }
    }
}
