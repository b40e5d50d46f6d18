// src/decorators/once.rs — Run a function at most once

use std::sync::{Mutex, OnceLock, PoisonError};

/// Wraps `func` so only the first call runs it. Every later call returns
/// the result of that first call and ignores its arguments.
///
/// If the first invocation panics nothing is cached, and the next call
/// tries again.
pub struct Once<F, R> {
    func: Mutex<F>,
    result: OnceLock<R>,
}

pub fn once<F, R>(func: F) -> Once<F, R> {
    Once {
        func: Mutex::new(func),
        result: OnceLock::new(),
    }
}

impl<F, R> Once<F, R> {
    /// Call through the wrapper. Concurrent first callers block until the
    /// single invocation finishes.
    pub fn call<A>(&self, args: A) -> &R
    where
        F: FnMut(A) -> R,
    {
        self.result.get_or_init(|| {
            let mut func = self.func.lock().unwrap_or_else(PoisonError::into_inner);
            let result = (*func)(args);
            tracing::debug!("once: wrapped function invoked");
            result
        })
    }

    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    /// The cached result, if the function has run.
    pub fn result(&self) -> Option<&R> {
        self.result.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_runs_only_once() {
        let mut calls = 0;
        let wrapped = once(|n: i32| {
            calls += 1;
            n * 10
        });
        let results: Vec<i32> = (1..=5).map(|n| *wrapped.call(n)).collect();
        assert_eq!(results, vec![10; 5]);
        drop(wrapped);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_state_reporting() {
        let wrapped = once(|(a, b): (i32, i32)| a + b);
        assert!(!wrapped.has_run());
        assert_eq!(wrapped.result(), None);
        assert_eq!(*wrapped.call((2, 3)), 5);
        assert!(wrapped.has_run());
        assert_eq!(wrapped.result(), Some(&5));
    }

    #[test]
    fn test_shared_across_threads() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        let wrapped = Arc::new(once(move |_: ()| c.fetch_add(1, Ordering::SeqCst)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let w = wrapped.clone();
                std::thread::spawn(move || *w.call(()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 0);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
