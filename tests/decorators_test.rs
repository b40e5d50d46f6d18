// tests/decorators_test.rs — Integration test: once, memoize, delay, throttle

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;

use underbar::decorators::{
    delay, memoize, once, throttle, throttle_configured, Scheduler, TokioScheduler,
    VirtualScheduler,
};
use underbar::infra::config::Config;
use underbar::infra::logger::init_logging;

#[test]
fn test_once_called_five_times() {
    init_logging("debug");
    let calls = AtomicUsize::new(0);
    let init = once(|seed: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        seed * 2
    });
    let results: Vec<u32> = (1..=5).map(|n| *init.call(n)).collect();
    assert_eq!(results, vec![2, 2, 2, 2, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_memoize_shared_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let lookup = Arc::new(memoize(move |id: u32| {
        counter.fetch_add(1, Ordering::SeqCst);
        format!("user-{id}")
    }));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lookup = lookup.clone();
            std::thread::spawn(move || (0..10).map(|id| lookup.call(id)).collect::<Vec<_>>())
        })
        .collect();
    for handle in handles {
        let names = handle.join().unwrap();
        assert_eq!(names[7], "user-7");
    }
    assert_eq!(lookup.cache_len(), 10);
    // Concurrent misses on the same key may both compute; never more than
    // one per thread per key.
    let total = calls.load(Ordering::SeqCst);
    assert!((10..=40).contains(&total));
}

#[test]
fn test_memoize_same_argument_once() {
    let calls = AtomicUsize::new(0);
    let slow_square = memoize(|n: i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        n * n
    });
    assert_eq!(slow_square.call(12), 144);
    assert_eq!(slow_square.call(12), 144);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_throttle_with_virtual_clock() {
    let scheduler = Arc::new(VirtualScheduler::new());
    let hits = Arc::new(Mutex::new(Vec::new()));
    let sink = hits.clone();
    let config = Config::from_toml_str("[throttle]\nwait_ms = 100\n").unwrap();
    let throttled = throttle_configured(
        scheduler.clone(),
        move |label: &'static str| {
            sink.lock().unwrap().push(label);
            label.len()
        },
        &config.throttle,
    );

    assert_eq!(throttled.call("first"), Some(5));
    for label in ["a", "bb", "ccc"] {
        scheduler.advance(Duration::from_millis(20));
        throttled.call(label);
    }
    assert_eq!(*hits.lock().unwrap(), vec!["first"]);

    scheduler.advance(Duration::from_millis(40));
    assert_eq!(*hits.lock().unwrap(), vec!["first", "ccc"]);
    assert_eq!(throttled.last_result(), Some(3));
}

#[test]
fn test_delay_on_virtual_clock_runs_once() {
    let scheduler = VirtualScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    delay(
        &scheduler,
        move |step: usize| {
            counter.fetch_add(step, Ordering::SeqCst);
        },
        Duration::from_millis(50),
        3,
    );
    scheduler.advance(Duration::from_millis(500));
    scheduler.advance(Duration::from_millis(500));
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_delay_on_tokio_runtime() {
    let scheduler = TokioScheduler::current().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();
    let start = scheduler.now();
    delay(
        &scheduler,
        move |msg: &'static str| {
            let _ = tx.send(msg);
        },
        Duration::from_millis(20),
        "done",
    );
    let msg = tokio::time::timeout(Duration::from_secs(2), rx)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(msg, "done");
    assert!(scheduler.now() - start >= Duration::from_millis(20));
}

#[tokio::test]
async fn test_throttle_on_tokio_runtime() {
    let scheduler = Arc::new(TokioScheduler::current().unwrap());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let throttled = throttle(
        scheduler,
        move |_: ()| counter.fetch_add(1, Ordering::SeqCst),
        Duration::from_millis(30),
    );

    for _ in 0..10 {
        throttled.call(());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
