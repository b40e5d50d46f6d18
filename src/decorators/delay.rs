// src/decorators/delay.rs — Deferred single invocation

use std::time::Duration;

use super::scheduler::Scheduler;

/// Run `func(args)` once after `wait`. Returns the scheduler's handle,
/// which [`cancel`] accepts. The return value of `func` is discarded.
pub fn delay<S, F, A>(scheduler: &S, func: F, wait: Duration, args: A) -> S::Handle
where
    S: Scheduler,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!("delay: scheduling invocation in {:?}", wait);
    scheduler.schedule(Box::new(move || func(args)), wait)
}

/// Cancel a pending [`delay`]. Harmless if it already ran.
pub fn cancel<S: Scheduler>(scheduler: &S, handle: &S::Handle) {
    scheduler.cancel(handle);
}
