use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::grid::GridBounds;
use super::progression::Progression;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct SerpentSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub base_tick_interval_ms: u32,
    pub speed_decrement_ms: u32,
    pub min_tick_interval_ms: u32,
    pub food_reward: u32,
    pub level_threshold: u32,
}

impl SerpentSettings {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.field_width, self.field_height)
    }

    pub fn progression(&self) -> Progression {
        Progression {
            food_reward: self.food_reward,
            level_threshold: self.level_threshold,
            base_tick_interval: Duration::from_millis(self.base_tick_interval_ms as u64),
            speed_decrement: Duration::from_millis(self.speed_decrement_ms as u64),
            min_tick_interval: Duration::from_millis(self.min_tick_interval_ms as u64),
        }
    }
}

impl Validate for SerpentSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.field_width > 100 || self.field_height > 100 {
            return Err("field dimensions must not exceed 100x100".to_string());
        }
        if self.base_tick_interval_ms < 20 || self.base_tick_interval_ms > 5000 {
            return Err("base_tick_interval_ms must be between 20 and 5000".to_string());
        }
        if self.min_tick_interval_ms < 10 {
            return Err("min_tick_interval_ms must be at least 10".to_string());
        }
        if self.min_tick_interval_ms > self.base_tick_interval_ms {
            return Err("min_tick_interval_ms must not exceed base_tick_interval_ms".to_string());
        }
        if self.food_reward == 0 || self.food_reward > 1000 {
            return Err("food_reward must be between 1 and 1000".to_string());
        }
        if self.level_threshold == 0 || self.level_threshold > 1_000_000 {
            return Err("level_threshold must be between 1 and 1000000".to_string());
        }
        Ok(())
    }
}

impl Default for SerpentSettings {
    fn default() -> Self {
        Self {
            field_width: 27,
            field_height: 27,
            base_tick_interval_ms: 130,
            speed_decrement_ms: 4,
            min_tick_interval_ms: 55,
            food_reward: 10,
            level_threshold: 50,
        }
    }
}
