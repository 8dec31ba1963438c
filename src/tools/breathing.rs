/// Tool for planning a guided breathing exercise
///
/// The server has no clock-driven UI, so the tool runs a breathing session
/// to completion and reports its shape: the phase sequence, how many full
/// cycles fit in the chosen duration, and a per-second guide for one cycle.

use std::time::Duration;
use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

use crate::domain::{
    BreathPhase, BreathingPattern, BreathingSession, DomainError, MAX_BREATHING_MINUTES,
};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;

/// Parameters for a breathing plan
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct BreathingPlanParams {
    /// "box" or "478" (defaults to box)
    pub pattern: Option<BreathingPattern>,
    /// Session length in minutes (defaults to the breathing duration setting)
    pub minutes: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PhaseStep {
    pub phase: BreathPhase,
    pub seconds: u64,
    pub instruction: &'static str,
}

/// Where the guide is at one second into the cycle
#[derive(Debug, Serialize)]
pub struct GuideTick {
    pub second: u64,
    pub phase: BreathPhase,
    pub circle_scale: f64,
    pub remaining: String,
}

#[derive(Debug, Serialize)]
pub struct BreathingPlanResponse {
    pub pattern: BreathingPattern,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub phases: Vec<PhaseStep>,
    pub cycle_seconds: u64,
    pub full_cycles: u32,
    pub first_cycle: Vec<GuideTick>,
    pub message: String,
}

pub fn breathing_plan<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: BreathingPlanParams,
) -> Result<BreathingPlanResponse, StorageError> {
    let pattern = params.pattern.unwrap_or_default();
    let session = match params.minutes {
        Some(minutes) => BreathingSession::new(pattern, minutes),
        None => BreathingSession::from_settings(pattern, &store.get_settings()),
    };
    let minutes = session.duration_minutes();

    if minutes == 0 || minutes > MAX_BREATHING_MINUTES {
        return Err(DomainError::Validation {
            message: format!("Duration must be between 1 and {} minutes", MAX_BREATHING_MINUTES),
        }
        .into());
    }

    let phases: Vec<PhaseStep> = pattern
        .phases()
        .into_iter()
        .map(|(phase, seconds)| PhaseStep {
            phase,
            seconds,
            instruction: pattern.instruction(phase),
        })
        .collect();

    // One cycle sampled each second
    let mut guide = session.clone();
    guide.start();
    let mut first_cycle = Vec::new();
    for second in 0..pattern.cycle_seconds() {
        first_cycle.push(GuideTick {
            second,
            phase: guide.phase(),
            circle_scale: guide.circle_scale(),
            remaining: guide.format_remaining(),
        });
        guide.advance(Duration::from_secs(1));
    }

    let mut session = session;
    session.run_to_completion();
    let full_cycles = session.cycles();

    let message = format!(
        "{} for {} min ({}): {}. {} full cycles.",
        pattern.name(),
        minutes,
        pattern.description(),
        phases
            .iter()
            .map(|p| format!("{} {}s", p.instruction, p.seconds))
            .collect::<Vec<_>>()
            .join(", "),
        full_cycles
    );

    Ok(BreathingPlanResponse {
        pattern,
        name: pattern.name(),
        description: pattern.description(),
        duration_minutes: minutes,
        phases,
        cycle_seconds: pattern.cycle_seconds(),
        full_cycles,
        first_cycle,
        message,
    })
}
