// src/decorators/mod.rs — Function wrappers: once, memoize, delay, throttle

pub mod delay;
pub mod memoize;
pub mod once;
pub mod scheduler;
pub mod throttle;

pub use delay::{cancel, delay};
pub use memoize::{memoize, memoize_serialized, memoize_with, Memoize};
pub use once::{once, Once};
pub use scheduler::{Scheduler, Task, TokioScheduler, VirtualHandle, VirtualScheduler};
pub use throttle::{throttle, throttle_configured, throttle_with, Throttle, ThrottleOptions};
