//! Automatic preset rotation
//!
//! The cycler holds no thread or timer of its own. The renderer polls it
//! once per frame and applies whatever preset it returns.

use embassy_time::{Duration, Instant};

use crate::preset::PresetId;

/// Shortest accepted interval between preset changes
pub const MIN_CYCLE_INTERVAL: Duration = Duration::from_millis(500);

/// Interval used when none is given
pub const DEFAULT_CYCLE_INTERVAL: Duration = Duration::from_secs(5);

/// Rotates through a list of presets at a fixed interval
#[derive(Debug, Clone)]
pub struct PresetCycler {
    presets: &'static [PresetId],
    interval: Duration,
    /// Preset returned by the next switch
    index: usize,
    active: Option<PresetId>,
    /// `None` while stopped
    next_switch: Option<Instant>,
}

impl PresetCycler {
    /// Create a stopped cycler
    pub fn new(presets: &'static [PresetId], interval: Duration) -> Self {
        Self {
            presets,
            interval: interval.max(MIN_CYCLE_INTERVAL),
            index: 0,
            active: None,
            next_switch: None,
        }
    }

    /// Cycler over every known preset
    pub fn all(interval: Duration) -> Self {
        Self::new(&PresetId::ALL, interval)
    }

    /// Start cycling; the first preset is due immediately
    pub fn start(&mut self, now: Instant) {
        if self.next_switch.is_none() && !self.presets.is_empty() {
            self.next_switch = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.next_switch = None;
    }

    pub const fn is_running(&self) -> bool {
        self.next_switch.is_some()
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval, never below [`MIN_CYCLE_INTERVAL`].
    ///
    /// Takes effect after the next switch.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_CYCLE_INTERVAL);
    }

    /// Most recently returned preset
    pub const fn current(&self) -> Option<PresetId> {
        self.active
    }

    /// Return the next preset if its switch time has come
    pub fn poll(&mut self, now: Instant) -> Option<PresetId> {
        let due = self.next_switch?;
        if now < due {
            return None;
        }
        self.switch(now)
    }

    /// Switch to the next preset right away and restart the interval
    pub fn skip_to_next(&mut self, now: Instant) -> Option<PresetId> {
        self.switch(now)
    }

    fn switch(&mut self, now: Instant) -> Option<PresetId> {
        let preset = *self.presets.get(self.index)?;
        self.index = (self.index + 1) % self.presets.len();
        self.active = Some(preset);
        if self.next_switch.is_some() {
            self.next_switch = Some(now + self.interval);
        }
        Some(preset)
    }
}
