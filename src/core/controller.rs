//! View controller for the portfolio page
//!
//! Owns the [`ViewState`] and the one deferred task of the page: the loading
//! timer. The timer handle lives inside the controller, so tearing the
//! controller down (or dropping it) cancels a timer that has not fired.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::{log, warn};

use super::Section;
use super::scheduler::Scheduler;
use super::view_state::{Layout, ViewState};

/// Time the loading placeholder stays on screen after mount
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

/// Subscriber notified once per state mutation
pub type ChangeListener = Rc<dyn Fn(ViewState)>;

pub struct ViewController<S: Scheduler> {
    state: Rc<RefCell<ViewState>>,
    on_change: ChangeListener,
    scheduler: S,
    delay: Duration,
    timer: Option<S::Handle>,
    disposed: Rc<Cell<bool>>,
}

impl<S: Scheduler> ViewController<S> {
    pub fn new(scheduler: S, on_change: impl Fn(ViewState) + 'static) -> Self {
        Self::with_delay(scheduler, LOADING_DELAY, on_change)
    }

    pub fn with_delay(
        scheduler: S,
        delay: Duration,
        on_change: impl Fn(ViewState) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState::new())),
            on_change: Rc::new(on_change),
            scheduler,
            delay,
            timer: None,
            disposed: Rc::new(Cell::new(false)),
        }
    }

    /// Start the loading timer.
    ///
    /// Schedules at most one timer over the controller's lifetime: calls made
    /// while the timer is pending, after it fired, or after teardown do
    /// nothing. Returns true if a timer was scheduled.
    pub fn initialize(&mut self) -> bool {
        if self.timer.is_some() || self.disposed.get() || !self.state.borrow().loading {
            return false;
        }

        let state = Rc::downgrade(&self.state);
        let on_change = self.on_change.clone();
        let disposed = self.disposed.clone();

        let handle = self.scheduler.schedule_once(
            self.delay,
            Box::new(move || {
                if disposed.get() {
                    return;
                }
                let Some(state) = state.upgrade() else {
                    return;
                };
                let snapshot = {
                    let mut state = state.borrow_mut();
                    if !state.finish_loading() {
                        return;
                    }
                    *state
                };
                log!("portfolio ready, showing {}", snapshot.active_section);
                on_change(snapshot);
            }),
        );

        log!("loading timer scheduled for {}ms", self.delay.as_millis());
        self.timer = Some(handle);
        true
    }

    /// Make `target` the visible section.
    ///
    /// Returns true if the state changed. Selecting the active section, or
    /// selecting after teardown, leaves the state untouched and does not
    /// notify.
    pub fn select_section(&self, target: Section) -> bool {
        if self.disposed.get() {
            return false;
        }
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if !state.select_section(target) {
                return false;
            }
            *state
        };
        log!("section changed to {}", target);
        (self.on_change)(snapshot);
        true
    }

    /// Select a section by its string id; unknown ids are ignored.
    pub fn select_section_id(&self, id: &str) -> bool {
        match id.parse::<Section>() {
            Ok(section) => self.select_section(section),
            Err(e) => {
                warn!("ignoring navigation: {}", e);
                false
            }
        }
    }

    pub fn state(&self) -> ViewState {
        *self.state.borrow()
    }

    /// Layout for the current state
    pub fn render(&self) -> Layout {
        Layout::plan(&self.state.borrow())
    }

    /// Whether the loading timer has been scheduled and not yet fired or cancelled
    pub fn timer_pending(&self) -> bool {
        self.timer.is_some() && self.state.borrow().loading && !self.disposed.get()
    }

    /// Release the timer and stop all further mutation
    pub fn teardown(&mut self) {
        if self.disposed.replace(true) {
            return;
        }
        self.timer.take();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}

impl<S: Scheduler> Drop for ViewController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
