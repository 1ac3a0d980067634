//! Scheduler adapter: browser `setTimeout` via gloo-timers.
//!
//! Each task is a `TimeoutFuture` wrapped in `Abortable` and spawned on the
//! page's microtask queue. Cancelling aborts the future, so the callback
//! never runs. Dropping the scheduler aborts everything still pending.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;

use factverse_core::ports::Scheduler;
use factverse_types::event::TaskHandle;

pub struct TimeoutScheduler {
    next_id: Cell<u64>,
    /// Abort handles of tasks that have not fired yet, keyed by task ID
    active: Rc<RefCell<HashMap<u64, AbortHandle>>>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            active: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }
}

impl Default for TimeoutScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let (abort, registration) = AbortHandle::new_pair();
        self.active.borrow_mut().insert(id, abort);

        let active = self.active.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let fired = Abortable::new(TimeoutFuture::new(delay_ms), registration)
                .await
                .is_ok();
            active.borrow_mut().remove(&id);
            if fired {
                task();
            }
        });

        TaskHandle(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        let abort = self.active.borrow_mut().remove(&handle.0);
        if let Some(abort) = abort {
            log::debug!("Timer {} cancelled", handle.0);
            abort.abort();
        }
    }
}

impl Drop for TimeoutScheduler {
    fn drop(&mut self) {
        for (_, abort) in self.active.borrow_mut().drain() {
            abort.abort();
        }
    }
}
