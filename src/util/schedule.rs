//! Deferred callbacks behind one abstraction.
//!
//! DESIGN
//! ======
//! Every pause in the site (fake login latency, redirect delay, toast
//! lifetime, focus after mount) goes through `Scheduler::schedule` with a
//! duration from `config::Delays`. Callbacks from one call site fire in the
//! order they were scheduled. There is no cancellation and no retry: once
//! scheduled, a task always runs.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task);
}

/// Browser timers via `setTimeout`.
///
/// Without the `csr` feature tasks run inline and the delay is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = delay;
            task();
        }
    }
}

/// Queues tasks until the test drains them, recording each delay.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ManualScheduler {
    queue: std::sync::Mutex<std::collections::VecDeque<(Duration, Task)>>,
    history: std::sync::Mutex<Vec<Duration>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub(crate) fn pending(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Delays of every task ever scheduled, in scheduling order.
    pub(crate) fn history(&self) -> Vec<Duration> {
        self.history.lock().unwrap().clone()
    }

    /// Run the oldest queued task. Returns `false` when the queue is empty.
    pub(crate) fn run_next(&self) -> bool {
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some((_, task)) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run tasks, including ones scheduled by tasks, until none remain.
    pub(crate) fn run_all(&self) {
        while self.run_next() {}
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.history.lock().unwrap().push(delay);
        self.queue.lock().unwrap().push_back((delay, task));
    }
}
