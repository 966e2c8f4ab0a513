use std::time::Duration;

use thiserror::Error;

pub const SELF_TIMED_STEP: u8 = 2;
pub const SELF_TIMED_TICK: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading(u8),
    Completing,
    Hidden,
}

impl Phase {
    pub fn progress(self) -> u8 {
        match self {
            Phase::Loading(p) => p,
            Phase::Completing | Phase::Hidden => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SelfTimed { step: u8, tick: Duration },
    ExternallyDriven,
}

impl Mode {
    pub fn self_timed() -> Self {
        Self::SelfTimed {
            step: SELF_TIMED_STEP,
            tick: SELF_TIMED_TICK,
        }
    }
}

/// Both delays are measured from the moment progress reaches 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub hide_after: Duration,
    pub notify_after: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            hide_after: Duration::from_millis(500),
            notify_after: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    Tick,
    Hide,
    Notify,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("couldn't schedule timer: {0}")]
    Unavailable(String),
}

pub trait Cancel {
    fn cancel(&self);
}

/// Schedules [`Deferred`] tasks to be handed back to
/// [`LoadingController::fire`] once due.
pub trait Scheduler {
    type Handle: Cancel;

    fn after(&self, delay: Duration, task: Deferred) -> Result<Self::Handle, ScheduleError>;
    fn every(&self, period: Duration, task: Deferred) -> Result<Self::Handle, ScheduleError>;
}

/// Progress behind the loading overlay. Runs on its own tick
/// ([`Mode::SelfTimed`]) or follows the page's "still loading" flag
/// ([`Mode::ExternallyDriven`]). Reaching 100 moves it to
/// [`Phase::Completing`] and schedules the hide and the completion
/// notification.
pub struct LoadingController<S: Scheduler> {
    mode: Mode,
    timing: Timing,
    phase: Phase,
    scheduler: S,
    ticker: Option<S::Handle>,
    pending: Vec<S::Handle>,
    notified: bool,
}

impl<S: Scheduler> LoadingController<S> {
    pub fn new(mode: Mode, timing: Timing, scheduler: S) -> Self {
        let mode = match mode {
            Mode::SelfTimed { step, tick } => Mode::SelfTimed {
                step: step.max(1),
                tick,
            },
            m => m,
        };
        Self {
            mode,
            timing,
            phase: Phase::Loading(0),
            scheduler,
            ticker: None,
            pending: Vec::new(),
            notified: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.phase.progress()
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Starts the progress tick. Does nothing for an externally driven
    /// controller or one that is already ticking.
    pub fn start(&mut self) {
        let Mode::SelfTimed { tick, .. } = self.mode else {
            return;
        };
        if self.ticker.is_some() || !matches!(self.phase, Phase::Loading(_)) {
            return;
        }
        match self.scheduler.every(tick, Deferred::Tick) {
            Ok(handle) => self.ticker = Some(handle),
            Err(e) => log::error!("loading screen stuck: {e}"),
        }
    }

    /// Follows the page's loading flag. Only meaningful in
    /// [`Mode::ExternallyDriven`].
    pub fn set_loading(&mut self, still_loading: bool) {
        if let Mode::SelfTimed { .. } = self.mode {
            log::warn!("ignoring loading flag on a self-timed loading screen");
            return;
        }
        match (still_loading, self.phase) {
            (false, Phase::Loading(_)) => self.complete(),
            (true, Phase::Completing | Phase::Hidden) => {
                self.cancel_all();
                self.phase = Phase::Loading(0);
                self.notified = false;
                log::debug!("loading screen restarted");
            }
            _ => {}
        }
    }

    /// Applies a due task. Returns `true` when the completion notification
    /// should be delivered, at most once per loading episode.
    pub fn fire(&mut self, task: Deferred) -> bool {
        match (task, self.phase) {
            (Deferred::Tick, Phase::Loading(progress)) => {
                let Mode::SelfTimed { step, .. } = self.mode else {
                    return false;
                };
                let progress = progress.saturating_add(step).min(100);
                if progress == 100 {
                    self.complete();
                } else {
                    self.phase = Phase::Loading(progress);
                }
                false
            }
            (Deferred::Hide, Phase::Completing) => {
                self.phase = Phase::Hidden;
                log::debug!("loading screen hidden");
                false
            }
            (Deferred::Notify, Phase::Completing | Phase::Hidden) if !self.notified => {
                self.notified = true;
                true
            }
            _ => false,
        }
    }

    /// Cancels the tick and every scheduled transition.
    pub fn teardown(&mut self) {
        self.cancel_all();
    }

    fn complete(&mut self) {
        self.cancel_all();
        self.phase = Phase::Completing;
        log::debug!("loading screen completing");
        let delays = [
            (self.timing.hide_after, Deferred::Hide),
            (self.timing.notify_after, Deferred::Notify),
        ];
        for (delay, task) in delays {
            match self.scheduler.after(delay, task) {
                Ok(handle) => self.pending.push(handle),
                Err(e) => log::error!("loading screen stuck: {e}"),
            }
        }
    }

    fn cancel_all(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        for handle in self.pending.drain(..) {
            handle.cancel();
        }
    }
}

impl<S: Scheduler> Drop for LoadingController<S> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Entry {
        id: u64,
        due: Duration,
        period: Option<Duration>,
        task: Deferred,
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        queue: Vec<Entry>,
    }

    /// Virtual time: nothing fires until the test advances the clock.
    #[derive(Clone, Default)]
    struct ManualClock(Rc<RefCell<ClockState>>);

    struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<ClockState>>,
    }

    impl Cancel for ManualHandle {
        fn cancel(&self) {
            self.clock.borrow_mut().queue.retain(|e| e.id != self.id);
        }
    }

    impl ManualClock {
        fn push(&self, delay: Duration, period: Option<Duration>, task: Deferred) -> ManualHandle {
            let mut state = self.0.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + delay;
            state.queue.push(Entry {
                id,
                due,
                period,
                task,
            });
            ManualHandle {
                id,
                clock: self.0.clone(),
            }
        }

        fn pending(&self) -> usize {
            self.0.borrow().queue.len()
        }

        fn pop_due(&self, until: Duration) -> Option<Deferred> {
            let mut state = self.0.borrow_mut();
            let index = state
                .queue
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= until)
                .min_by_key(|(_, e)| (e.due, e.id))
                .map(|(i, _)| i)?;
            let due = state.queue[index].due;
            let task = state.queue[index].task;
            state.now = due;
            match state.queue[index].period {
                Some(period) => state.queue[index].due = due + period,
                None => {
                    state.queue.remove(index);
                }
            }
            Some(task)
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn after(&self, delay: Duration, task: Deferred) -> Result<ManualHandle, ScheduleError> {
            Ok(self.push(delay, None, task))
        }

        fn every(&self, period: Duration, task: Deferred) -> Result<ManualHandle, ScheduleError> {
            Ok(self.push(period, Some(period), task))
        }
    }

    struct NoHandle;

    impl Cancel for NoHandle {
        fn cancel(&self) {}
    }

    struct BrokenScheduler;

    impl Scheduler for BrokenScheduler {
        type Handle = NoHandle;

        fn after(&self, _: Duration, _: Deferred) -> Result<NoHandle, ScheduleError> {
            Err(ScheduleError::Unavailable("no window".to_string()))
        }

        fn every(&self, _: Duration, _: Deferred) -> Result<NoHandle, ScheduleError> {
            Err(ScheduleError::Unavailable("no window".to_string()))
        }
    }

    /// Advances the clock to `until_ms`, feeding every due task to the
    /// controller. Returns how many completion notifications were produced.
    fn run_until(
        clock: &ManualClock,
        controller: &mut LoadingController<ManualClock>,
        until_ms: u64,
    ) -> usize {
        let until = Duration::from_millis(until_ms);
        let mut notifications = 0;
        while let Some(task) = clock.pop_due(until) {
            if controller.fire(task) {
                notifications += 1;
            }
        }
        clock.0.borrow_mut().now = until;
        notifications
    }

    fn self_timed(clock: &ManualClock, step: u8) -> LoadingController<ManualClock> {
        let mode = Mode::SelfTimed {
            step,
            tick: Duration::from_millis(30),
        };
        LoadingController::new(mode, Timing::default(), clock.clone())
    }

    fn externally_driven(clock: &ManualClock) -> LoadingController<ManualClock> {
        LoadingController::new(Mode::ExternallyDriven, Timing::default(), clock.clone())
    }

    #[test]
    fn test_self_timed_completes_after_fifty_ticks() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 2);
        assert_eq!(controller.phase(), Phase::Loading(0));
        controller.start();

        assert_eq!(run_until(&clock, &mut controller, 1499), 0);
        assert_eq!(controller.phase(), Phase::Loading(98));

        assert_eq!(run_until(&clock, &mut controller, 1500), 0);
        assert_eq!(controller.phase(), Phase::Completing);
        assert_eq!(controller.progress(), 100);
        assert!(controller.is_visible());
        // ticker gone, hide + notify queued
        assert_eq!(clock.pending(), 2);

        assert_eq!(run_until(&clock, &mut controller, 1999), 0);
        assert!(controller.is_visible());
        assert_eq!(run_until(&clock, &mut controller, 2000), 0);
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(!controller.is_visible());

        assert_eq!(run_until(&clock, &mut controller, 2299), 0);
        assert_eq!(run_until(&clock, &mut controller, 2300), 1);
        assert_eq!(run_until(&clock, &mut controller, 10_000), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_self_timed_progress_never_overshoots() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 3);
        controller.start();

        let mut seen = vec![controller.progress()];
        while let Some(task) = clock.pop_due(Duration::from_millis(1020)) {
            controller.fire(task);
            seen.push(controller.progress());
        }

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|p| *p <= 100));
        // 33 ticks reach 99, the 34th caps at 100
        assert_eq!(seen[33], 99);
        assert_eq!(seen[34], 100);
        assert_eq!(controller.phase(), Phase::Completing);
    }

    #[test]
    fn test_zero_step_still_advances() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 0);
        controller.start();

        run_until(&clock, &mut controller, 30);
        assert_eq!(controller.progress(), 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 2);
        controller.start();
        controller.start();
        assert_eq!(clock.pending(), 1);

        run_until(&clock, &mut controller, 30);
        assert_eq!(controller.progress(), 2);
    }

    #[test]
    fn test_external_waits_for_signal() {
        let clock = ManualClock::default();
        let mut controller = externally_driven(&clock);
        controller.start();
        controller.set_loading(true);
        assert_eq!(clock.pending(), 0);

        run_until(&clock, &mut controller, 5000);
        assert_eq!(controller.phase(), Phase::Loading(0));

        controller.set_loading(false);
        assert_eq!(controller.phase(), Phase::Completing);
        assert_eq!(controller.progress(), 100);

        assert_eq!(run_until(&clock, &mut controller, 5499), 0);
        assert!(controller.is_visible());
        assert_eq!(run_until(&clock, &mut controller, 5500), 0);
        assert!(!controller.is_visible());
        assert_eq!(run_until(&clock, &mut controller, 5800), 1);
    }

    #[test]
    fn test_external_reload_cancels_notification() {
        let clock = ManualClock::default();
        let mut controller = externally_driven(&clock);

        controller.set_loading(false);
        assert_eq!(run_until(&clock, &mut controller, 600), 0);
        assert_eq!(controller.phase(), Phase::Hidden);

        controller.set_loading(true);
        assert_eq!(controller.phase(), Phase::Loading(0));
        assert!(controller.is_visible());
        assert_eq!(clock.pending(), 0);
        assert_eq!(run_until(&clock, &mut controller, 5000), 0);

        // a fresh episode notifies again
        controller.set_loading(false);
        assert_eq!(run_until(&clock, &mut controller, 5800), 1);
    }

    #[test]
    fn test_rapid_flips_notify_once() {
        let clock = ManualClock::default();
        let mut controller = externally_driven(&clock);

        controller.set_loading(false);
        controller.set_loading(true);
        controller.set_loading(false);
        controller.set_loading(false);
        assert_eq!(clock.pending(), 2);

        assert_eq!(run_until(&clock, &mut controller, 10_000), 1);
    }

    #[test]
    fn test_repeated_done_keeps_original_deadlines() {
        let clock = ManualClock::default();
        let mut controller = externally_driven(&clock);

        controller.set_loading(false);
        run_until(&clock, &mut controller, 300);
        controller.set_loading(false);

        assert_eq!(run_until(&clock, &mut controller, 500), 0);
        assert_eq!(controller.phase(), Phase::Hidden);
        assert_eq!(run_until(&clock, &mut controller, 800), 1);
    }

    #[test]
    fn test_self_timed_ignores_signal() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 2);
        controller.set_loading(false);
        assert_eq!(controller.phase(), Phase::Loading(0));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_teardown_cancels_timers() {
        let clock = ManualClock::default();
        let mut controller = self_timed(&clock, 2);
        controller.start();
        run_until(&clock, &mut controller, 90);
        assert_eq!(controller.progress(), 6);

        controller.teardown();
        assert_eq!(clock.pending(), 0);
        run_until(&clock, &mut controller, 10_000);
        assert_eq!(controller.progress(), 6);

        let mut controller = externally_driven(&clock);
        controller.set_loading(false);
        assert_eq!(clock.pending(), 2);
        drop(controller);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_scheduler_failure_is_not_fatal() {
        let mut controller =
            LoadingController::new(Mode::self_timed(), Timing::default(), BrokenScheduler);
        controller.start();
        assert_eq!(controller.phase(), Phase::Loading(0));

        let mut controller =
            LoadingController::new(Mode::ExternallyDriven, Timing::default(), BrokenScheduler);
        controller.set_loading(false);
        assert_eq!(controller.phase(), Phase::Completing);
        assert!(controller.is_visible());
    }
}
