use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Length of the pop-in animation once an element has latched
const REVEAL_SPAN: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy)]
struct Reveal {
    latched_at: Duration,
    delay: Duration,
}

/// One-shot visibility latches for the pop-in reveal. An element
/// latches the first frame its rect is inside the visible area and
/// never re-arms, so scrolling back never replays the animation.
#[derive(Default)]
pub struct RevealLedger {
    entries: HashMap<u64, Reveal>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(id: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    /// Latch an element as seen. Subsequent calls are ignored.
    pub fn mark_visible(&mut self, id: &str, delay: Duration, now: Duration) {
        self.entries.entry(Self::key(id)).or_insert(Reveal {
            latched_at: now,
            delay,
        });
    }

    pub fn is_latched(&self, id: &str) -> bool {
        self.entries.contains_key(&Self::key(id))
    }

    /// Animation progress for an element: None before it has latched,
    /// 0..=1 afterwards (0 while its stagger delay is still running).
    pub fn progress(&self, id: &str, now: Duration) -> Option<f32> {
        let reveal = self.entries.get(&Self::key(id))?;
        let start = reveal.latched_at + reveal.delay;
        if now < start {
            return Some(0.0);
        }
        let elapsed = now - start;
        Some((elapsed.as_secs_f32() / REVEAL_SPAN.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Small deterministic tilt per element, -3..=3 degrees, for the
    /// "tossed onto the page" look.
    pub fn tilt_degrees(id: &str) -> f32 {
        let h = Self::key(id);
        ((h % 61) as f32 / 60.0) * 6.0 - 3.0
    }

    /// Forget all latches (used when content is swapped wholesale)
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_latch_is_one_shot() {
        let mut ledger = RevealLedger::new();
        assert!(ledger.progress("hero", ms(0)).is_none());

        ledger.mark_visible("hero", Duration::ZERO, ms(100));
        assert!(ledger.is_latched("hero"));

        // Re-marking later must not restart the animation
        ledger.mark_visible("hero", Duration::ZERO, ms(5000));
        assert_eq!(ledger.progress("hero", ms(700)), Some(1.0));
    }

    #[test]
    fn test_stagger_delay_holds_at_zero() {
        let mut ledger = RevealLedger::new();
        ledger.mark_visible("card", ms(200), ms(0));
        assert_eq!(ledger.progress("card", ms(100)), Some(0.0));
        assert_eq!(ledger.progress("card", ms(800)), Some(1.0));
    }

    #[test]
    fn test_tilt_is_deterministic_and_bounded() {
        let a = RevealLedger::tilt_degrees("panel-a");
        assert_eq!(a, RevealLedger::tilt_degrees("panel-a"));
        for id in ["panel-a", "panel-b", "card-1", "card-2"] {
            let tilt = RevealLedger::tilt_degrees(id);
            assert!((-3.0..=3.0).contains(&tilt), "tilt out of range: {}", tilt);
        }
    }
}
