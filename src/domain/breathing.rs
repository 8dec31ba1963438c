/// Guided breathing session state machine
///
/// A session counts down a fixed duration while cycling through the phases of
/// a breathing pattern. Time only moves when the caller advances it, which
/// keeps the machine deterministic and independent of any timer.

use std::time::Duration;
use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use crate::domain::UserSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BreathingPattern {
    /// Equal time for each phase
    #[default]
    Box,
    /// Inhale 4, hold 7, exhale 8
    #[serde(rename = "478", alias = "4-7-8")]
    FourSevenEight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    HoldEmpty,
}

const PHASE_ORDER: [BreathPhase; 4] = [
    BreathPhase::Inhale,
    BreathPhase::Hold,
    BreathPhase::Exhale,
    BreathPhase::HoldEmpty,
];

impl BreathingPattern {
    pub fn name(&self) -> &'static str {
        match self {
            BreathingPattern::Box => "Box Breathing",
            BreathingPattern::FourSevenEight => "4-7-8 Breathing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BreathingPattern::Box => "Equal time for each phase",
            BreathingPattern::FourSevenEight => "Relaxing breath pattern",
        }
    }

    /// Phase length in seconds; 0 means the phase is skipped
    pub fn phase_seconds(&self, phase: BreathPhase) -> u64 {
        match (self, phase) {
            (BreathingPattern::Box, _) => 4,
            (BreathingPattern::FourSevenEight, BreathPhase::Inhale) => 4,
            (BreathingPattern::FourSevenEight, BreathPhase::Hold) => 7,
            (BreathingPattern::FourSevenEight, BreathPhase::Exhale) => 8,
            (BreathingPattern::FourSevenEight, BreathPhase::HoldEmpty) => 0,
        }
    }

    pub fn instruction(&self, phase: BreathPhase) -> &'static str {
        match (self, phase) {
            (BreathingPattern::Box, BreathPhase::Inhale) => "Breathe in slowly",
            (BreathingPattern::Box, BreathPhase::Hold) => "Hold your breath",
            (BreathingPattern::Box, BreathPhase::Exhale) => "Breathe out slowly",
            (BreathingPattern::Box, BreathPhase::HoldEmpty) => "Hold empty",
            (BreathingPattern::FourSevenEight, BreathPhase::Inhale) => "Breathe in through nose",
            (BreathingPattern::FourSevenEight, BreathPhase::Hold) => "Hold your breath",
            (BreathingPattern::FourSevenEight, BreathPhase::Exhale) => "Breathe out through mouth",
            (BreathingPattern::FourSevenEight, BreathPhase::HoldEmpty) => "",
        }
    }

    /// Length of one full cycle in seconds
    pub fn cycle_seconds(&self) -> u64 {
        PHASE_ORDER.iter().map(|p| self.phase_seconds(*p)).sum()
    }

    /// The phases that actually occur, with their lengths
    pub fn phases(&self) -> Vec<(BreathPhase, u64)> {
        PHASE_ORDER
            .iter()
            .map(|p| (*p, self.phase_seconds(*p)))
            .filter(|(_, secs)| *secs > 0)
            .collect()
    }
}

/// A running (or paused) breathing exercise
#[derive(Debug, Clone, PartialEq)]
pub struct BreathingSession {
    pattern: BreathingPattern,
    duration_minutes: u32,
    remaining_ms: u64,
    phase: BreathPhase,
    phase_elapsed_ms: u64,
    cycles: u32,
    active: bool,
}

impl BreathingSession {
    pub fn new(pattern: BreathingPattern, duration_minutes: u32) -> Self {
        Self {
            pattern,
            duration_minutes,
            remaining_ms: minutes_to_ms(duration_minutes),
            phase: BreathPhase::Inhale,
            phase_elapsed_ms: 0,
            cycles: 0,
            active: false,
        }
    }

    /// A session using the user's preferred duration
    pub fn from_settings(pattern: BreathingPattern, settings: &UserSettings) -> Self {
        Self::new(pattern, settings.breathing_duration)
    }

    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.active = true;
        }
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and rewind to the beginning
    pub fn reset(&mut self) {
        *self = Self::new(self.pattern, self.duration_minutes);
    }

    /// Change the pattern; ignored while running
    pub fn set_pattern(&mut self, pattern: BreathingPattern) -> bool {
        if self.active {
            return false;
        }
        self.pattern = pattern;
        self.reset();
        true
    }

    /// Change the duration; ignored while running
    pub fn set_duration(&mut self, minutes: u32) -> bool {
        if self.active {
            return false;
        }
        self.duration_minutes = minutes;
        self.reset();
        true
    }

    /// Move the clock forward by `elapsed`
    ///
    /// Does nothing while paused. Stops the session once the countdown
    /// reaches zero.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.active || self.remaining_ms == 0 {
            return;
        }

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let mut budget = elapsed_ms.min(self.remaining_ms);
        self.remaining_ms -= budget;

        while budget > 0 {
            let phase_len = self.pattern.phase_seconds(self.phase) * 1000;
            let left = phase_len.saturating_sub(self.phase_elapsed_ms);
            if budget < left {
                self.phase_elapsed_ms += budget;
                budget = 0;
            } else {
                budget -= left;
                self.next_phase();
            }
        }

        if self.remaining_ms == 0 {
            self.active = false;
            tracing::debug!("Breathing session complete after {} cycles", self.cycles);
        }
    }

    /// Run the session until the countdown ends
    pub fn run_to_completion(&mut self) {
        self.start();
        self.advance(Duration::from_millis(self.remaining_ms));
    }

    fn next_phase(&mut self) {
        let mut index = PHASE_ORDER.iter().position(|p| *p == self.phase).unwrap_or(0);
        loop {
            index = (index + 1) % PHASE_ORDER.len();
            if index == 0 {
                self.cycles += 1;
            }
            if self.pattern.phase_seconds(PHASE_ORDER[index]) > 0 {
                break;
            }
        }
        self.phase = PHASE_ORDER[index];
        self.phase_elapsed_ms = 0;
    }

    pub fn pattern(&self) -> BreathingPattern {
        self.pattern
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Whole seconds left, rounded up
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }

    /// Fraction of the current phase completed, 0.0 to 1.0
    pub fn phase_progress(&self) -> f64 {
        let phase_len = self.pattern.phase_seconds(self.phase) * 1000;
        if phase_len == 0 {
            return 0.0;
        }
        self.phase_elapsed_ms as f64 / phase_len as f64
    }

    pub fn instruction(&self) -> &'static str {
        self.pattern.instruction(self.phase)
    }

    /// Size of the breathing circle, between 0.5 and 1.0
    pub fn circle_scale(&self) -> f64 {
        let progress = self.phase_progress();
        match self.phase {
            BreathPhase::Inhale => 0.5 + progress * 0.5,
            BreathPhase::Exhale => 1.0 - progress * 0.5,
            BreathPhase::Hold => 1.0,
            BreathPhase::HoldEmpty => 0.5,
        }
    }

    /// Remaining time as `m:ss`
    pub fn format_remaining(&self) -> String {
        let secs = self.remaining_seconds();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

fn minutes_to_ms(minutes: u32) -> u64 {
    minutes as u64 * 60 * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_one_minute_completes_three_cycles() {
        let mut session = BreathingSession::new(BreathingPattern::Box, 1);
        session.start();
        for _ in 0..60 {
            session.advance(Duration::from_secs(1));
        }
        assert_eq!(session.cycles(), 3);
        assert!(!session.is_active());
        assert!(session.is_complete());
        assert_eq!(session.format_remaining(), "0:00");
    }

    #[test]
    fn test_four_seven_eight_skips_hold_empty() {
        let mut session = BreathingSession::new(BreathingPattern::FourSevenEight, 1);
        session.start();

        session.advance(Duration::from_secs(4));
        assert_eq!(session.phase(), BreathPhase::Hold);
        session.advance(Duration::from_secs(7));
        assert_eq!(session.phase(), BreathPhase::Exhale);
        session.advance(Duration::from_secs(8));
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.cycles(), 1);
    }

    #[test]
    fn test_paused_session_does_not_advance() {
        let mut session = BreathingSession::new(BreathingPattern::Box, 3);
        session.advance(Duration::from_secs(10));
        assert_eq!(session.format_remaining(), "3:00");

        session.toggle();
        session.advance(Duration::from_millis(2500));
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining_seconds(), 178);
        assert!((session.circle_scale() - 0.8125).abs() < 1e-9);

        session.toggle();
        session.advance(Duration::from_secs(30));
        assert_eq!(session.remaining_seconds(), 178);
    }

    #[test]
    fn test_reset_and_locked_changes() {
        let mut session = BreathingSession::new(BreathingPattern::Box, 1);
        session.start();
        session.advance(Duration::from_secs(20));
        assert!(!session.set_duration(5));
        assert!(!session.set_pattern(BreathingPattern::FourSevenEight));

        session.reset();
        assert!(!session.is_active());
        assert_eq!(session.cycles(), 0);
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.format_remaining(), "1:00");

        assert!(session.set_duration(5));
        assert_eq!(session.format_remaining(), "5:00");
    }

    #[test]
    fn test_run_to_completion_uses_settings_duration() {
        let settings = UserSettings { breathing_duration: 2, ..UserSettings::default() };
        let mut session = BreathingSession::from_settings(BreathingPattern::FourSevenEight, &settings);
        session.run_to_completion();
        // 120s / 19s per cycle
        assert_eq!(session.cycles(), 6);
        assert!(session.is_complete());
    }

    #[test]
    fn test_pattern_parsing() {
        let p: BreathingPattern = serde_json::from_str("\"478\"").unwrap();
        assert_eq!(p, BreathingPattern::FourSevenEight);
        let p: BreathingPattern = serde_json::from_str("\"box\"").unwrap();
        assert_eq!(p, BreathingPattern::Box);
        assert_eq!(BreathingPattern::FourSevenEight.phases().len(), 3);
    }
}
