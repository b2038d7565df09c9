use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::config::parse_or;

/// Millisecond interval a delay is drawn from.
///
/// The pair is kept exactly as configured: a range with `max <= min` is not
/// reordered or rejected, it collapses to `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Bounds {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Apply raw per-request overrides. Each side is replaced independently
    /// and only when it parses; anything else keeps the current value.
    pub fn with_overrides(self, min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min_ms: parse_or(min, self.min_ms),
            max_ms: parse_or(max, self.max_ms),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.max_ms <= self.min_ms
    }

    /// Uniform over `[min, max]` inclusive, or exactly `min` when degenerate.
    pub fn pick_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.is_degenerate() {
            return self.min_ms;
        }
        rng.random_range(self.min_ms..=self.max_ms)
    }

    pub fn pick(&self) -> Duration {
        Duration::from_millis(self.pick_delay(&mut rand::rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn delay_stays_inside_inclusive_range() {
        let bounds = Bounds::new(500, 1000);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let delay = bounds.pick_delay(&mut rng);
            assert!((500..=1000).contains(&delay), "delay {delay} out of range");
        }
    }

    #[test]
    fn both_endpoints_are_reachable() {
        let bounds = Bounds::new(10, 12);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: std::collections::BTreeSet<u64> =
            (0..500).map(|_| bounds.pick_delay(&mut rng)).collect();
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![10, 11, 12]);
    }

    #[test]
    fn equal_bounds_yield_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Bounds::new(100, 100).pick_delay(&mut rng), 100);
    }

    #[test]
    fn inverted_bounds_collapse_to_min() {
        let bounds = Bounds::new(500, 200);
        assert!(bounds.is_degenerate());
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(bounds.pick_delay(&mut rng), 500);
        }
        assert_eq!(bounds.pick(), Duration::from_millis(500));
    }

    #[test]
    fn overrides_apply_independently() {
        let base = Bounds::new(4000, 4000);
        assert_eq!(
            base.with_overrides(Some("100"), None),
            Bounds::new(100, 4000)
        );
        assert_eq!(
            base.with_overrides(None, Some("9000")),
            Bounds::new(4000, 9000)
        );
        assert_eq!(
            base.with_overrides(Some("abc"), Some("250")),
            Bounds::new(4000, 250)
        );
        assert_eq!(base.with_overrides(Some("-5"), Some("")), base);
    }
}
