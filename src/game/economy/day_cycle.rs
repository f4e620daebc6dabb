//! Day/Night Cycle
//!
//! 1 in-game day = 10 real minutes (600 seconds) by default.
//! Time of day is the position inside the current cycle, 0.0 to 1.0:
//! dawn, day, dusk and night each take a quarter. Daylight (for spawning)
//! is the open window 0.25 to 0.75.

use serde::{Deserialize, Serialize};

use crate::game::config::ClockConfig;

/// Quarter of the cycle, for the darkness overlay and HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// 0.0 - 0.25, darkness fading out
    Dawn,
    /// 0.25 - 0.5, no darkness
    Day,
    /// 0.5 - 0.75, darkness fading in
    Dusk,
    /// 0.75 - 1.0, full darkness
    Night,
}

impl DayPhase {
    pub fn name(&self) -> &'static str {
        match self {
            DayPhase::Dawn => "dawn",
            DayPhase::Day => "day",
            DayPhase::Dusk => "dusk",
            DayPhase::Night => "night",
        }
    }
}

/// Clock state as stored in save files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Accumulated seconds
    pub time: f64,
    pub day_count: u32,
    /// Index of the last cycle that was counted
    pub last_day: u32,
}

/// Day/night clock
#[derive(Debug, Clone)]
pub struct Clock {
    /// Accumulated seconds since the game started
    time: f64,
    /// Completed cycles
    day_count: u32,
    last_day: u32,
    config: ClockConfig,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl Clock {
    /// Start at midnight of day 0.
    pub fn new(config: ClockConfig) -> Self {
        Self {
            time: 0.0,
            day_count: 0,
            last_day: 0,
            config,
        }
    }

    fn cycle(&self) -> f64 {
        self.config.cycle_duration.max(f32::EPSILON) as f64
    }

    /// Advance the clock.
    /// Returns how many days rolled over (normally 0 or 1).
    pub fn update(&mut self, delta_seconds: f32) -> u32 {
        self.time += delta_seconds.max(0.0) as f64;

        let current_day = (self.time / self.cycle()).floor() as u32;
        if current_day <= self.last_day {
            return 0;
        }
        let passed = current_day - self.last_day;
        self.day_count += passed;
        self.last_day = current_day;
        log::info!("Day {} begins", self.day_count);
        passed
    }

    /// Position in the current cycle (0-1)
    pub fn time_of_day(&self) -> f32 {
        ((self.time % self.cycle()) / self.cycle()) as f32
    }

    pub fn is_day(&self) -> bool {
        let t = self.time_of_day();
        t > 0.25 && t < 0.75
    }

    pub fn is_night(&self) -> bool {
        !self.is_day()
    }

    pub fn phase(&self) -> DayPhase {
        let t = self.time_of_day();
        if t < 0.25 {
            DayPhase::Dawn
        } else if t < 0.5 {
            DayPhase::Day
        } else if t < 0.75 {
            DayPhase::Dusk
        } else {
            DayPhase::Night
        }
    }

    /// Darkness overlay alpha, 0 to `max_overlay_alpha`.
    pub fn overlay_alpha(&self) -> u8 {
        let max = self.config.max_overlay_alpha;
        let t = self.time_of_day();
        let alpha = match self.phase() {
            DayPhase::Dawn => max * (1.0 - t / 0.25),
            DayPhase::Day => 0.0,
            DayPhase::Dusk => max * ((t - 0.5) / 0.25),
            DayPhase::Night => max,
        };
        alpha.clamp(0.0, 255.0) as u8
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// True on every Nth day; checked when a day rolls over.
    pub fn should_reset(&self) -> bool {
        let every = self.config.reset_every_days;
        every > 0 && self.day_count > 0 && self.day_count % every == 0
    }

    /// Accumulated seconds
    pub fn elapsed(&self) -> f64 {
        self.time
    }

    /// Formatted time string (HH:MM), midnight at 0.0
    pub fn time_string(&self) -> String {
        let hours = self.time_of_day() * 24.0;
        let minutes = (hours * 60.0) % 60.0;
        format!("{:02}:{:02}", hours as u32, minutes as u32)
    }

    /// Seconds until the next rollover
    pub fn remaining_seconds(&self) -> f32 {
        (1.0 - self.time_of_day()) * self.config.cycle_duration
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time: self.time,
            day_count: self.day_count,
            last_day: self.last_day,
        }
    }

    pub fn restore(&mut self, snapshot: &ClockSnapshot) {
        self.time = snapshot.time.max(0.0);
        self.day_count = snapshot.day_count;
        self.last_day = snapshot.last_day;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_cycle() {
        let mut clock = Clock::default();

        assert_eq!(clock.day_count(), 0);
        assert_eq!(clock.phase(), DayPhase::Dawn);
        assert!(clock.is_night());

        // Advance to midday
        assert_eq!(clock.update(300.0), 0);
        assert!(clock.is_day());
        assert_eq!(clock.phase(), DayPhase::Dusk);

        // Advance to next day
        assert_eq!(clock.update(400.0), 1);
        assert_eq!(clock.day_count(), 1);
        assert!((clock.time_of_day() - 100.0 / 600.0).abs() < 1e-5);
    }

    #[test]
    fn test_day_window_is_open() {
        let mut clock = Clock::default();
        clock.update(150.0);
        assert!(!clock.is_day());
        clock.update(1.0);
        assert!(clock.is_day());
        clock.update(298.0);
        assert!(clock.is_day());
        clock.update(1.0);
        assert!(!clock.is_day());
    }

    #[test]
    fn test_overlay_alpha() {
        let mut clock = Clock::default();
        assert_eq!(clock.overlay_alpha(), 150);
        clock.update(75.0);
        assert_eq!(clock.overlay_alpha(), 75);
        clock.update(150.0);
        assert_eq!(clock.overlay_alpha(), 0);
        clock.update(150.0);
        assert_eq!(clock.overlay_alpha(), 75);
        clock.update(150.0);
        assert_eq!(clock.overlay_alpha(), 150);
    }

    #[test]
    fn test_reset_every_seventh_day() {
        let mut clock = Clock::default();
        let mut resets = Vec::new();
        for _ in 0..14 {
            clock.update(600.0);
            if clock.should_reset() {
                resets.push(clock.day_count());
            }
        }
        assert_eq!(resets, vec![7, 14]);
    }

    #[test]
    fn test_long_step_counts_every_day() {
        let mut clock = Clock::default();
        assert_eq!(clock.update(1800.0), 3);
        assert_eq!(clock.day_count(), 3);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut clock = Clock::default();
        clock.update(1234.0);
        let snapshot = clock.snapshot();

        let mut restored = Clock::default();
        restored.restore(&snapshot);
        assert_eq!(restored.day_count(), 2);
        assert_eq!(restored.time_of_day(), clock.time_of_day());
        assert_eq!(restored.update(10.0), 0);
    }

    #[test]
    fn test_time_string() {
        let mut clock = Clock::default();
        clock.update(300.0);
        assert_eq!(clock.time_string(), "12:00");
    }
}
