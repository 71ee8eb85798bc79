//! One-shot deferred tasks with scoped cancellation
//!
//! A [`Scheduler`] hands back a handle for every scheduled task. Dropping the
//! handle cancels the task if it has not fired yet, so whoever owns the handle
//! owns the task's lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Deferred one-shot task runner
pub trait Scheduler {
    /// Cancels the task when dropped
    type Handle;

    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    /// `Timeout` clears the browser timeout on drop
    type Handle = gloo_timers::callback::Timeout;

    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }
}

struct PendingTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Deterministic scheduler driven by a fake clock.
///
/// Nothing fires until [`ManualScheduler::advance`] moves the clock past a
/// task's due time. Used by the controller and page tests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// Handle for a task scheduled on a [`ManualScheduler`]
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        // Move the task out before dropping it so the borrow is released
        let cancelled = {
            let mut clock = clock.borrow_mut();
            let index = clock.pending.iter().position(|task| task.id == self.id);
            index.map(|index| clock.pending.remove(index))
        };
        drop(cancelled);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fake time
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks scheduled but not yet fired or cancelled
    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward and run every task that became due, in due order.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            clock.now
        };

        let mut ran = 0;
        while let Some(task) = self.take_due(target) {
            (task.task)();
            ran += 1;
        }
        ran
    }

    fn take_due(&self, until: Duration) -> Option<PendingTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.id))
            .map(|(index, _)| index)?;
        Some(clock.pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTask { id, due, task });

        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter_task(counter: &Rc<Cell<u32>>) -> Box<dyn FnOnce()> {
        let counter = counter.clone();
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_task_fires_only_when_due() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let _handle = scheduler.schedule_once(Duration::from_millis(100), counter_task(&fired));

        assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_task_fires_once() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let _handle = scheduler.schedule_once(Duration::from_millis(10), counter_task(&fired));

        scheduler.advance(Duration::from_millis(10));
        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let handle = scheduler.schedule_once(Duration::from_millis(10), counter_task(&fired));
        assert_eq!(scheduler.pending_count(), 1);

        drop(handle);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(5)), 0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let push = |label: &'static str| -> Box<dyn FnOnce()> {
            let order = order.clone();
            Box::new(move || order.borrow_mut().push(label))
        };

        let _late = scheduler.schedule_once(Duration::from_millis(30), push("late"));
        let _early = scheduler.schedule_once(Duration::from_millis(10), push("early"));

        assert_eq!(scheduler.advance(Duration::from_millis(50)), 2);
        assert_eq!(*order.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(50));
    }

    #[test]
    fn test_handle_outliving_scheduler_is_harmless() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_once(Duration::from_millis(10), Box::new(|| {}));
        drop(scheduler);
        drop(handle);
    }
}
