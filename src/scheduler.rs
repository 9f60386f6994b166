//! Deferred dispatch.
//!
//! Some observer callbacks must not run inside the call that triggered them,
//! because the observer may be in the middle of rendering. A `Scheduler`
//! takes the callback and runs it on a later turn of the host's loop.

use log::debug;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Queue `task` to run after the current call stack unwinds. Never
    /// runs it inline.
    fn post(&self, task: Task);
}

/// FIFO of pending tasks drained by the host once per loop turn.
///
/// Cloning yields another handle onto the same queue.
#[derive(Clone, Default)]
pub struct MainQueue {
    pending: Rc<RefCell<VecDeque<Task>>>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Runs every task queued before this call and returns how many ran.
    /// Tasks posted while draining wait for the next call.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<Task> = self.pending.borrow_mut().drain(..).collect();
        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            debug!("Main queue ran {} deferred task(s)", count);
        }
        count
    }
}

impl Scheduler for MainQueue {
    fn post(&self, task: Task) {
        self.pending.borrow_mut().push_back(task);
    }
}

/// Posts tasks onto the current tokio `LocalSet`.
///
/// Must be used from inside `LocalSet::run_until` (or a task spawned on a
/// `LocalSet`); `spawn_local` panics otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTaskScheduler;

impl Scheduler for LocalTaskScheduler {
    fn post(&self, task: Task) {
        tokio::task::spawn_local(async move {
            task();
        });
    }
}
