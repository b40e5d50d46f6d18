// src/decorators/memoize.rs — Cache results per argument
//
// The cache is unbounded and lives as long as the wrapper. The lock is
// released while the wrapped function runs, so the function may itself go
// through the wrapper (recursive memoization).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::infra::config::MemoizeConfig;

/// Default warning size for a cache.
const WARN_ENTRIES: usize = 10_000;

pub struct Memoize<F, Res, K, R> {
    func: F,
    resolver: Res,
    cache: Mutex<HashMap<K, R>>,
    warn_entries: usize,
    warned: AtomicBool,
}

/// Memoize on the argument itself.
pub fn memoize<A, R, F>(func: F) -> Memoize<F, fn(&A) -> Option<A>, A, R>
where
    A: Clone + Hash + Eq,
    F: Fn(A) -> R,
{
    memoize_with(func, identity_key::<A> as fn(&A) -> Option<A>)
}

/// Memoize on the JSON serialization of the argument. The argument is
/// first converted to a `serde_json::Value`, whose objects keep their keys
/// sorted, so maps with the same entries share a key regardless of
/// iteration order. Arguments that fail to serialize, or whose map keys
/// cannot be written as strings, bypass the cache.
pub fn memoize_serialized<A, R, F>(func: F) -> Memoize<F, fn(&A) -> Option<String>, String, R>
where
    A: Serialize,
    F: Fn(A) -> R,
{
    memoize_with(func, serialized_key::<A> as fn(&A) -> Option<String>)
}

/// Memoize with a custom key. A resolver returning `None` means "do not
/// cache this call".
pub fn memoize_with<F, Res, K, R>(func: F, resolver: Res) -> Memoize<F, Res, K, R> {
    Memoize {
        func,
        resolver,
        cache: Mutex::new(HashMap::new()),
        warn_entries: WARN_ENTRIES,
        warned: AtomicBool::new(false),
    }
}

fn identity_key<A: Clone>(arg: &A) -> Option<A> {
    Some(arg.clone())
}

fn serialized_key<A: Serialize>(arg: &A) -> Option<String> {
    match serde_json::to_value(arg) {
        Ok(value) => Some(value.to_string()),
        Err(e) => {
            tracing::debug!("memoize: argument not serializable, skipping cache: {}", e);
            None
        }
    }
}

impl<F, Res, K, R> Memoize<F, Res, K, R>
where
    K: Hash + Eq,
    R: Clone,
{
    /// Log a warning once the cache holds more than `entries` results
    /// (0 disables the warning).
    pub fn with_warn_entries(mut self, entries: usize) -> Self {
        self.warn_entries = entries;
        self
    }

    /// Apply the `[memoize]` section of the crate configuration.
    pub fn with_config(self, config: &MemoizeConfig) -> Self {
        self.with_warn_entries(config.warn_entries)
    }

    pub fn call<A>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
        Res: Fn(&A) -> Option<K>,
    {
        let Some(key) = (self.resolver)(&arg) else {
            return (self.func)(arg);
        };

        if let Some(hit) = self.cache().get(&key) {
            tracing::trace!("memoize: cache hit");
            return hit.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.func)(arg);

        let len = {
            let mut cache = self.cache();
            cache.entry(key).or_insert_with(|| result.clone());
            cache.len()
        };
        if self.warn_entries > 0
            && len > self.warn_entries
            && !self.warned.swap(true, Ordering::Relaxed)
        {
            tracing::warn!(
                "memoize: cache holds {} entries (warning threshold {})",
                len,
                self.warn_entries
            );
        }
        result
    }

    /// Whether a result for `arg` is cached.
    pub fn is_cached<A>(&self, arg: &A) -> bool
    where
        Res: Fn(&A) -> Option<K>,
    {
        (self.resolver)(arg).is_some_and(|key| self.cache().contains_key(&key))
    }

    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<K, R>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
