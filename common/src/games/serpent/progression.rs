use std::time::Duration;

/// Score, level and cadence rules for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    pub food_reward: u32,
    pub level_threshold: u32,
    pub base_tick_interval: Duration,
    pub speed_decrement: Duration,
    pub min_tick_interval: Duration,
}

impl Progression {
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.level_threshold.max(1) + 1
    }

    /// Never below `min_tick_interval`, and never increasing with the level.
    pub fn tick_interval_for_level(&self, level: u32) -> Duration {
        let decrement = self.speed_decrement.saturating_mul(level.saturating_sub(1));
        self.base_tick_interval
            .saturating_sub(decrement)
            .max(self.min_tick_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Progression {
        Progression {
            food_reward: 10,
            level_threshold: 50,
            base_tick_interval: Duration::from_millis(130),
            speed_decrement: Duration::from_millis(4),
            min_tick_interval: Duration::from_millis(55),
        }
    }

    #[test]
    fn test_level_for_score() {
        let rules = classic();
        assert_eq!(rules.level_for_score(0), 1);
        assert_eq!(rules.level_for_score(40), 1);
        assert_eq!(rules.level_for_score(50), 2);
        assert_eq!(rules.level_for_score(99), 2);
        assert_eq!(rules.level_for_score(250), 6);
    }

    #[test]
    fn test_tick_interval_scales_down() {
        let rules = classic();
        assert_eq!(rules.tick_interval_for_level(1), Duration::from_millis(130));
        assert_eq!(rules.tick_interval_for_level(2), Duration::from_millis(126));
        assert_eq!(rules.tick_interval_for_level(10), Duration::from_millis(94));
    }

    #[test]
    fn test_tick_interval_is_floored_and_monotonic() {
        let rules = classic();
        let mut previous = rules.tick_interval_for_level(1);
        for level in 2..200 {
            let current = rules.tick_interval_for_level(level);
            assert!(current <= previous);
            assert!(current >= rules.min_tick_interval);
            previous = current;
        }
        assert_eq!(rules.tick_interval_for_level(u32::MAX), Duration::from_millis(55));
    }
}
