//! Hover intent tracking for tooltips.
//!
//! A tooltip shouldn't flash open every time the pointer crosses its trigger,
//! so activation is delayed until the pointer has rested there for a while.
//! [`HoverIntent`] holds that state independently of any UI framework; the
//! timer itself comes from a [`Scheduler`].

/// Schedules a one-shot activation callback.
///
/// Dropping the returned handle must cancel the callback if it hasn't fired
/// yet. `gloo::timers::callback::Timeout` behaves this way.
pub trait Scheduler {
    type Handle;

    /// Arrange for the host to call [`HoverIntent::delay_elapsed`] with
    /// `generation` once `delay_ms` have passed.
    fn schedule(&self, delay_ms: u32, generation: u64) -> Self::Handle;
}

struct Pending<H> {
    generation: u64,
    // Held only so it's dropped (and cancelled) along with the record.
    _handle: H,
}

pub struct HoverIntent<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    disabled: bool,
    hover_active: bool,
    generation: u64,
    pending: Option<Pending<S::Handle>>,
}

impl<S: Scheduler> HoverIntent<S> {
    pub fn new(scheduler: S, delay_ms: u32, disabled: bool) -> Self {
        Self {
            scheduler,
            delay_ms,
            disabled,
            hover_active: false,
            generation: 0,
            pending: None,
        }
    }

    /// Whether the tooltip should actually be shown.
    pub fn is_open(&self) -> bool {
        self.hover_active && !self.disabled
    }

    /// Whether the hover delay has elapsed without the pointer leaving. This
    /// can be true while the tooltip is disabled.
    pub fn is_hover_active(&self) -> bool {
        self.hover_active
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Pointer entered the trigger. Starts the hover delay, replacing any
    /// delay that is still running. Does nothing if the hover is already
    /// active.
    ///
    /// Entering never changes the open state, so this always returns `false`.
    pub fn pointer_enter(&mut self) -> bool {
        if self.hover_active {
            return false;
        }

        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let handle = self.scheduler.schedule(self.delay_ms, generation);
        self.pending = Some(Pending {
            generation,
            _handle: handle,
        });

        log::trace!("hover delay #{} started ({}ms)", generation, self.delay_ms);
        false
    }

    /// The delay scheduled as `generation` has run out. Returns whether the
    /// open state changed.
    pub fn delay_elapsed(&mut self, generation: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.generation == generation => {}
            _ => {
                log::trace!("ignoring stale hover delay #{}", generation);
                return false;
            }
        }

        self.pending = None;
        self.set_hover(true)
    }

    /// Pointer left the trigger. Returns whether the open state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.cancel();
        self.set_hover(false)
    }

    /// Apply a new configuration. Any change to `disabled` closes the
    /// tooltip, but a pending activation keeps running and may set the hover
    /// again once it fires. A new delay only applies to the next
    /// pointer-enter. Returns whether the open state changed.
    pub fn reconfigure(&mut self, delay_ms: u32, disabled: bool) -> bool {
        let was_open = self.is_open();
        self.delay_ms = delay_ms;

        if disabled != self.disabled {
            log::trace!("tooltip disabled changed to {}", disabled);
            self.disabled = disabled;
            self.hover_active = false;
        }

        was_open != self.is_open()
    }

    /// Cancel the pending activation, if any. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                log::trace!("hover delay #{} cancelled", pending.generation);
                true
            }
            None => false,
        }
    }

    fn set_hover(&mut self, active: bool) -> bool {
        let was_open = self.is_open();
        self.hover_active = active;
        was_open != self.is_open()
    }
}

#[cfg(test)]
mod test {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{HoverIntent, Scheduler};

    struct Timer {
        fire_at: u64,
        generation: u64,
        cancelled: Rc<Cell<bool>>,
    }

    /// Manually driven clock. Timers are cancelled when their handle drops.
    #[derive(Clone, Default)]
    struct FakeScheduler {
        now: Rc<Cell<u64>>,
        timers: Rc<RefCell<Vec<Timer>>>,
    }

    struct FakeHandle(Rc<Cell<bool>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn schedule(&self, delay_ms: u32, generation: u64) -> FakeHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.timers.borrow_mut().push(Timer {
                fire_at: self.now.get() + delay_ms as u64,
                generation,
                cancelled: cancelled.clone(),
            });
            FakeHandle(cancelled)
        }
    }

    impl FakeScheduler {
        /// Move the clock to `t`, firing whatever is due. Returns how many
        /// callbacks ran.
        fn advance_to(&self, t: u64, intent: &mut HoverIntent<FakeScheduler>) -> usize {
            let mut fired = 0;
            loop {
                let due = {
                    let mut timers = self.timers.borrow_mut();
                    timers.retain(|timer| !timer.cancelled.get());
                    timers.sort_by_key(|timer| timer.fire_at);
                    if timers.first().map_or(false, |timer| timer.fire_at <= t) {
                        Some(timers.remove(0))
                    } else {
                        None
                    }
                };

                match due {
                    Some(timer) => {
                        self.now.set(timer.fire_at);
                        intent.delay_elapsed(timer.generation);
                        fired += 1;
                    }
                    None => break,
                }
            }

            self.now.set(t);
            fired
        }

        fn live_timers(&self) -> usize {
            self.timers
                .borrow()
                .iter()
                .filter(|timer| !timer.cancelled.get())
                .count()
        }
    }

    fn setup(delay_ms: u32, disabled: bool) -> (FakeScheduler, HoverIntent<FakeScheduler>) {
        let scheduler = FakeScheduler::default();
        let intent = HoverIntent::new(scheduler.clone(), delay_ms, disabled);
        (scheduler, intent)
    }

    #[test]
    fn test_opens_after_delay() {
        for delay in [0, 1, 50, 300, 1_000] {
            let (clock, mut intent) = setup(delay, false);
            intent.pointer_enter();
            assert!(intent.is_pending());

            clock.advance_to(delay as u64, &mut intent);
            assert!(intent.is_hover_active());
            assert!(intent.is_open());
            assert!(!intent.is_pending());
        }
    }

    #[test]
    fn test_leave_before_delay_never_opens() {
        for delay in [1, 50, 300] {
            let (clock, mut intent) = setup(delay, false);
            intent.pointer_enter();
            clock.advance_to(delay as u64 - 1, &mut intent);

            intent.pointer_leave();
            assert!(!intent.is_hover_active());
            assert_eq!(clock.live_timers(), 0);

            assert_eq!(clock.advance_to(delay as u64 * 10, &mut intent), 0);
            assert!(!intent.is_hover_active());
        }
    }

    #[test]
    fn test_repeated_enter_schedules_once() {
        let (clock, mut intent) = setup(300, false);
        intent.pointer_enter();
        clock.advance_to(100, &mut intent);
        intent.pointer_enter();
        intent.pointer_enter();
        assert_eq!(clock.live_timers(), 1);

        // The last enter restarts the delay
        assert_eq!(clock.advance_to(399, &mut intent), 0);
        assert!(!intent.is_open());
        assert_eq!(clock.advance_to(400, &mut intent), 1);
        assert!(intent.is_open());

        // Entering while already active does nothing
        intent.pointer_enter();
        assert_eq!(clock.live_timers(), 0);
        assert_eq!(clock.advance_to(10_000, &mut intent), 0);
        assert!(intent.is_open());
    }

    #[test]
    fn test_disabled_is_never_open() {
        let (clock, mut intent) = setup(10, true);
        intent.pointer_enter();
        clock.advance_to(50, &mut intent);
        assert!(intent.is_hover_active());
        assert!(!intent.is_open());
    }

    #[test]
    fn test_disabling_closes_immediately() {
        let (clock, mut intent) = setup(10, false);
        intent.pointer_enter();
        clock.advance_to(10, &mut intent);
        assert!(intent.is_open());

        assert!(intent.reconfigure(10, true));
        assert!(!intent.is_open());
        assert!(!intent.is_hover_active());
    }

    #[test]
    fn test_reconfigure_without_disable_change() {
        let (clock, mut intent) = setup(10, false);
        intent.pointer_enter();
        clock.advance_to(10, &mut intent);

        // Same disabled value keeps the hover
        assert!(!intent.reconfigure(10, false));
        assert!(intent.is_open());
    }

    #[test]
    fn test_pending_delay_survives_disable_toggle() {
        let (clock, mut intent) = setup(100, false);
        intent.pointer_enter();
        clock.advance_to(50, &mut intent);

        intent.reconfigure(100, true);
        assert!(intent.is_pending());
        assert!(!intent.is_hover_active());
        intent.reconfigure(100, false);

        // The delay started before disabling still activates the hover
        assert_eq!(clock.advance_to(150, &mut intent), 1);
        assert!(intent.is_hover_active());
        assert!(intent.is_open());
    }

    #[test]
    fn test_pending_delay_while_disabled_stays_closed() {
        let (clock, mut intent) = setup(100, false);
        intent.pointer_enter();
        clock.advance_to(50, &mut intent);

        intent.reconfigure(100, true);
        clock.advance_to(150, &mut intent);
        assert!(intent.is_hover_active());
        assert!(!intent.is_open());

        // Re-enabling is a disabled change too, so it closes the hover
        assert!(!intent.reconfigure(100, false));
        assert!(!intent.is_hover_active());
        assert!(!intent.is_open());
    }

    #[test]
    fn test_delay_change_applies_to_next_enter() {
        let (clock, mut intent) = setup(100, false);
        intent.pointer_enter();
        intent.reconfigure(500, false);
        assert_eq!(intent.delay_ms(), 500);

        clock.advance_to(100, &mut intent);
        assert!(intent.is_open());

        intent.pointer_leave();
        intent.pointer_enter();
        clock.advance_to(599, &mut intent);
        assert!(!intent.is_open());
        clock.advance_to(600, &mut intent);
        assert!(intent.is_open());
    }

    #[test]
    fn test_stale_generation_ignored() {
        let (_clock, mut intent) = setup(100, false);
        intent.pointer_enter();
        intent.pointer_leave();
        intent.pointer_enter();

        // #1 was cancelled, a late message for it must not open anything
        assert!(!intent.delay_elapsed(1));
        assert!(!intent.is_hover_active());
        assert!(intent.is_pending());

        assert!(intent.delay_elapsed(2));
        assert!(intent.is_open());
    }

    #[test]
    fn test_scenario_default_delay() {
        let (clock, mut intent) = setup(300, false);
        intent.pointer_enter();

        clock.advance_to(299, &mut intent);
        assert!(!intent.is_open());
        clock.advance_to(301, &mut intent);
        assert!(intent.is_open());

        clock.advance_to(310, &mut intent);
        assert!(intent.pointer_leave());
        assert!(!intent.is_open());

        clock.advance_to(650, &mut intent);
        assert!(!intent.is_open());
    }

    #[test]
    fn test_scenario_disabled_throughout() {
        let (clock, mut intent) = setup(100, true);
        intent.pointer_enter();

        clock.advance_to(100, &mut intent);
        assert!(intent.is_hover_active());

        clock.advance_to(200, &mut intent);
        assert!(!intent.is_open());
    }

    #[test]
    fn test_unmount_cancels_pending() {
        let (clock, mut intent) = setup(300, false);
        intent.pointer_enter();
        assert!(intent.cancel());
        assert_eq!(clock.live_timers(), 0);

        // Dropping the whole thing also releases the handle
        intent.pointer_enter();
        assert_eq!(clock.live_timers(), 1);
        drop(intent);
        assert_eq!(clock.live_timers(), 0);
    }
}
