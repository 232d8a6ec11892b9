use std::time::Duration;

use super::types::{PagePose, Tab, TransitionPhase, FLIP_IN, FLIP_OUT, SNAP_HOLD};

/// Drives the page-flip illusion between tabs: the current page lifts
/// away, content swaps while off-screen, the new page snaps into its
/// entry position for one painted frame, then drops in and settles.
///
/// All waiting is expressed as deadlines checked by `tick`, which the
/// UI calls once per frame with a monotonic elapsed time. Tests drive
/// it with synthetic durations.
pub struct PageFlip {
    active: Tab,
    phase: TransitionPhase,
    /// Tab the in-flight cycle is heading to
    incoming: Option<Tab>,
    /// Most recent mid-flight request; starts a fresh cycle once the
    /// current one settles (queue-latest policy)
    queued: Option<Tab>,
    phase_started: Duration,
    deadline: Option<Duration>,
    scroll_reset: bool,
}

impl Default for PageFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFlip {
    pub fn new() -> Self {
        Self {
            active: Tab::default(),
            phase: TransitionPhase::Idle,
            incoming: None,
            queued: None,
            phase_started: Duration::ZERO,
            deadline: None,
            scroll_reset: false,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn pose(&self) -> PagePose {
        self.phase.pose()
    }

    pub fn is_animating(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Ask for a tab change. Requesting the currently active tab while
    /// idle is a no-op. While a cycle is in flight the latest request
    /// wins: re-confirming the tab already flying in clears anything
    /// queued; any other tab, the outgoing one included, replaces the
    /// queue and starts a fresh cycle once the current one settles.
    pub fn request(&mut self, target: Tab, now: Duration) {
        if self.phase != TransitionPhase::Idle {
            if Some(target) == self.incoming {
                self.queued = None;
            } else {
                self.queued = Some(target);
            }
            return;
        }
        if target == self.active {
            return;
        }
        self.start_cycle(target, now);
    }

    fn start_cycle(&mut self, target: Tab, now: Duration) {
        self.incoming = Some(target);
        self.enter(TransitionPhase::FlippingOut, now);
        self.deadline = Some(now + FLIP_OUT);
    }

    /// Advance the cycle. Call once per painted frame.
    pub fn tick(&mut self, now: Duration) {
        match self.phase {
            TransitionPhase::Idle => {
                if let Some(target) = self.queued.take() {
                    if target != self.active {
                        self.start_cycle(target, now);
                    }
                }
            }
            TransitionPhase::FlippingOut => {
                if self.deadline_reached(now) {
                    // Swap while the page is off-screen
                    if let Some(target) = self.incoming {
                        self.active = target;
                    }
                    self.scroll_reset = true;
                    self.enter(TransitionPhase::SnappedIn, now);
                    // Deliberately unarmed: the snap pose must be
                    // painted before the drop-in is scheduled
                    self.deadline = None;
                }
            }
            TransitionPhase::SnappedIn => match self.deadline {
                // First tick after the snap frame was painted
                None => self.deadline = Some(now + SNAP_HOLD),
                Some(_) => {
                    if self.deadline_reached(now) {
                        self.enter(TransitionPhase::FlippingIn, now);
                        self.deadline = Some(now + FLIP_IN);
                    }
                }
            },
            TransitionPhase::FlippingIn => {
                if self.deadline_reached(now) {
                    self.enter(TransitionPhase::Idle, now);
                    self.deadline = None;
                    self.incoming = None;
                }
            }
        }
    }

    fn enter(&mut self, phase: TransitionPhase, now: Duration) {
        self.phase = phase;
        self.phase_started = now;
    }

    fn deadline_reached(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Fraction of the current phase's animation that has elapsed,
    /// clamped to 0..=1. Rest and PreEntry poses are not animated.
    pub fn phase_progress(&self, now: Duration) -> f32 {
        let span = match self.phase {
            TransitionPhase::FlippingOut => FLIP_OUT,
            TransitionPhase::FlippingIn => FLIP_IN,
            TransitionPhase::Idle | TransitionPhase::SnappedIn => return 1.0,
        };
        let elapsed = now.saturating_sub(self.phase_started);
        (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// True once per content swap: the consumer resets its scroll
    /// position to the top and clears the flag.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Run ticks at a steady cadence until the flip settles
    fn settle(flip: &mut PageFlip, mut now: Duration) -> Duration {
        for _ in 0..500 {
            flip.tick(now);
            if !flip.is_animating() {
                return now;
            }
            now += ms(16);
        }
        panic!("flip never settled");
    }

    #[test]
    fn test_same_tab_request_is_noop() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Home, ms(0));
        assert_eq!(flip.phase(), TransitionPhase::Idle);
        assert_eq!(flip.active(), Tab::Home);
        flip.tick(ms(16));
        assert_eq!(flip.phase(), TransitionPhase::Idle);
        assert!(!flip.take_scroll_reset());
    }

    #[test]
    fn test_full_phase_sequence() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        assert_eq!(flip.phase(), TransitionPhase::FlippingOut);
        assert_eq!(flip.active(), Tab::Home);

        // Still flipping out before the 400ms boundary
        flip.tick(ms(399));
        assert_eq!(flip.phase(), TransitionPhase::FlippingOut);
        assert_eq!(flip.active(), Tab::Home);

        // Swap happens exactly at the FlippingOut -> SnappedIn boundary
        flip.tick(ms(400));
        assert_eq!(flip.phase(), TransitionPhase::SnappedIn);
        assert_eq!(flip.active(), Tab::Projects);
        assert!(flip.take_scroll_reset());

        // Next frame arms the 50ms hold; the snap frame was painted
        flip.tick(ms(416));
        assert_eq!(flip.phase(), TransitionPhase::SnappedIn);

        flip.tick(ms(416 + 50));
        assert_eq!(flip.phase(), TransitionPhase::FlippingIn);

        flip.tick(ms(416 + 50 + 649));
        assert_eq!(flip.phase(), TransitionPhase::FlippingIn);

        flip.tick(ms(416 + 50 + 650));
        assert_eq!(flip.phase(), TransitionPhase::Idle);
        assert_eq!(flip.active(), Tab::Projects);
    }

    #[test]
    fn test_pose_mapping() {
        assert_eq!(TransitionPhase::Idle.pose(), PagePose::Rest);
        assert_eq!(TransitionPhase::FlippingOut.pose(), PagePose::LiftAway);
        assert_eq!(TransitionPhase::SnappedIn.pose(), PagePose::PreEntry);
        assert_eq!(TransitionPhase::FlippingIn.pose(), PagePose::DropIn);
    }

    #[test]
    fn test_round_trip_returns_to_origin_with_no_residual_pose() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        let now = settle(&mut flip, ms(0));
        assert_eq!(flip.active(), Tab::Projects);

        flip.request(Tab::About, now);
        let now = settle(&mut flip, now);
        assert_eq!(flip.active(), Tab::About);

        flip.request(Tab::Home, now);
        let now = settle(&mut flip, now);
        assert_eq!(flip.active(), Tab::Home);
        assert_eq!(flip.pose(), PagePose::Rest);
        assert_eq!(flip.phase_progress(now), 1.0);
    }

    #[test]
    fn test_mid_flight_request_is_queued_latest() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        flip.tick(ms(100));
        // Two mid-flight requests; only the latest survives
        flip.request(Tab::Home, ms(120));
        flip.request(Tab::About, ms(140));
        assert_eq!(flip.phase(), TransitionPhase::FlippingOut);

        let now = settle(&mut flip, ms(150));
        assert_eq!(flip.active(), Tab::Projects);

        // The queued request starts a fresh cycle on the next tick
        flip.tick(now + ms(16));
        assert_eq!(flip.phase(), TransitionPhase::FlippingOut);
        let now = settle(&mut flip, now + ms(16));
        assert_eq!(flip.active(), Tab::About);
        let _ = now;
    }

    #[test]
    fn test_mid_flight_request_for_incoming_tab_is_dropped() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        flip.tick(ms(100));
        flip.request(Tab::Projects, ms(120));
        let now = settle(&mut flip, ms(150));
        // No second cycle pending
        flip.tick(now + ms(16));
        assert_eq!(flip.phase(), TransitionPhase::Idle);
        assert_eq!(flip.active(), Tab::Projects);
    }

    #[test]
    fn test_reconfirming_incoming_tab_clears_stale_queue() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        flip.tick(ms(100));
        // Queue About, then click Projects again: the last click
        // confirms the in-flight target and must win
        flip.request(Tab::About, ms(120));
        flip.request(Tab::Projects, ms(140));

        let now = settle(&mut flip, ms(150));
        assert_eq!(flip.active(), Tab::Projects);

        // The superseded About request must not start a cycle
        flip.tick(now + ms(16));
        assert_eq!(flip.phase(), TransitionPhase::Idle);
        assert_eq!(flip.active(), Tab::Projects);
    }

    #[test]
    fn test_mid_flight_request_for_outgoing_tab_flips_back() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(0));
        flip.tick(ms(100));
        // Clicking the tab that is lifting away means "go back"
        flip.request(Tab::Home, ms(120));

        let now = settle(&mut flip, ms(150));
        assert_eq!(flip.active(), Tab::Projects);

        flip.tick(now + ms(16));
        assert_eq!(flip.phase(), TransitionPhase::FlippingOut);
        let now = settle(&mut flip, now + ms(16));
        assert_eq!(flip.active(), Tab::Home);
        let _ = now;
    }

    #[test]
    fn test_snap_frame_precedes_drop_in_by_at_least_one_tick() {
        let mut flip = PageFlip::new();
        flip.request(Tab::About, ms(0));
        flip.tick(ms(400));
        assert_eq!(flip.phase(), TransitionPhase::SnappedIn);
        // However late the next tick lands, it only arms the hold
        flip.tick(ms(2000));
        assert_eq!(flip.phase(), TransitionPhase::SnappedIn);
        flip.tick(ms(2050));
        assert_eq!(flip.phase(), TransitionPhase::FlippingIn);
    }

    #[test]
    fn test_phase_progress_clamps() {
        let mut flip = PageFlip::new();
        flip.request(Tab::Projects, ms(100));
        assert_eq!(flip.phase_progress(ms(100)), 0.0);
        assert!(flip.phase_progress(ms(300)) > 0.4);
        assert_eq!(flip.phase_progress(ms(900)), 1.0);
    }
}
