//! Virtual-clock scheduler.
//!
//! Nothing fires until [`ManualScheduler::advance`] moves the clock. Tasks
//! run in due-time order (ties in scheduling order), and tasks scheduled by
//! a running task are picked up within the same `advance` call if they fall
//! due before its target time.

use std::cell::RefCell;
use factverse_types::event::TaskHandle;
use crate::ports::Scheduler;

struct Scheduled {
    handle: TaskHandle,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

struct ClockState {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

pub struct ManualScheduler {
    state: RefCell<ClockState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(ClockState {
                now_ms: 0,
                next_id: 0,
                queue: Vec::new(),
            }),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            // The borrow must end before the task runs: tasks may schedule.
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due_ms <= target)
                    .min_by_key(|(_, s)| (s.due_ms, s.handle.0))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let scheduled = state.queue.remove(i);
                        state.now_ms = scheduled.due_ms;
                        Some(scheduled.task)
                    }
                    None => {
                        state.now_ms = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let mut state = self.state.borrow_mut();
        let handle = TaskHandle(state.next_id);
        state.next_id += 1;
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.queue.push(Scheduled { handle, due_ms, task });
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        self.state.borrow_mut().queue.retain(|s| s.handle != handle);
    }
}
