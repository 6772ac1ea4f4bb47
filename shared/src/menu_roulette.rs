use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{FULL_TURN_DEGREES, STOP_ANGLE_RESOLUTION};
use crate::error::RouletteError;
use crate::menu_catalog::MenuCategory;
use crate::random::{draw_index, RandomSource};
use crate::roulette_config::RouletteConfig;

/// Represents the result of a wheel spin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub selected_index: usize,
    pub selected_item: String,
}

/// Represents the current state of one roulette wheel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelState {
    pub current_rotation_degrees: f64,
    pub is_spinning: bool,
    pub last_result: Option<SpinResult>,
}

/// Everything a caller needs to animate a spin and finish it later.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub next_state: WheelState,
    pub completion_delay_ms: u32,
    pub result: SpinResult,
    pub target_stop_degrees: f64,
    pub delta_degrees: f64,
    pub extra_turns: u32,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_spin(&mut self, target_rotation: f64) {
        self.current_rotation_degrees = target_rotation;
        self.is_spinning = true;
        self.last_result = None;
    }

    pub fn complete_spin(&mut self, result: SpinResult) {
        self.is_spinning = false;
        self.last_result = Some(result);
    }
}

pub fn segment_angle(segment_count: usize) -> f64 {
    FULL_TURN_DEGREES / segment_count as f64
}

fn snap_angle(degrees: f64) -> f64 {
    (degrees * STOP_ANGLE_RESOLUTION).round() / STOP_ANGLE_RESOLUTION
}

/// Rotation (mod 360) that rests the top pointer on the centre of `index`.
pub fn target_stop_angle(index: usize, segment_count: usize) -> f64 {
    let segment = segment_angle(segment_count);
    let raw = FULL_TURN_DEGREES - (index as f64 * segment + segment / 2.0);
    snap_angle(raw).rem_euclid(FULL_TURN_DEGREES)
}

/// Smallest non-negative forward rotation from `current` to `target_stop`.
pub fn forward_delta(current: f64, target_stop: f64) -> f64 {
    (target_stop - current.rem_euclid(FULL_TURN_DEGREES) + FULL_TURN_DEGREES) % FULL_TURN_DEGREES
}

/// `current + 360 * extra_turns + forward_delta(current, target_stop)`, built from
/// whole turns plus the stop angle so the result is exact in f64.
pub fn landing_rotation(current: f64, target_stop: f64, extra_turns: u32) -> f64 {
    let current_angle = current.rem_euclid(FULL_TURN_DEGREES);
    let whole_turns = current - current_angle;
    let wrap = if target_stop < current_angle { 1 } else { 0 };
    whole_turns + FULL_TURN_DEGREES * f64::from(extra_turns + wrap) + target_stop
}

/// Index of the segment sitting under the top pointer at `rotation`.
pub fn segment_under_pointer(rotation: f64, segment_count: usize) -> usize {
    let pointer = (FULL_TURN_DEGREES - rotation.rem_euclid(FULL_TURN_DEGREES)) % FULL_TURN_DEGREES;
    ((pointer / segment_angle(segment_count)).floor() as usize).min(segment_count - 1)
}

/// Picks an item uniformly and computes where the wheel must stop to show it.
///
/// The first sample chooses the item, the second the number of extra turns.
/// `state` is never modified; a rejected spin leaves the caller's state as is.
/// An out-of-range `config` is rejected before anything is drawn.
pub fn spin<S: RandomSource + ?Sized>(
    state: &WheelState,
    category: &MenuCategory,
    rng: &mut S,
    config: &RouletteConfig,
) -> Result<SpinOutcome, RouletteError> {
    config.validate()?;

    if state.is_spinning {
        log::debug!("spin ignored, wheel already spinning");
        return Err(RouletteError::ConcurrentSpinRejected);
    }

    let segment_count = category.items.len();
    if segment_count == 0 {
        return Err(RouletteError::InvalidCategory { name: category.name.clone() });
    }

    let selected_index = draw_index(rng, segment_count);
    let target_stop_degrees = target_stop_angle(selected_index, segment_count);
    let current = state.current_rotation_degrees;
    let delta_degrees = forward_delta(current, target_stop_degrees);
    let extra_turns = config.min_extra_turns + draw_index(rng, config.turn_choices()) as u32;
    let next_rotation = landing_rotation(current, target_stop_degrees, extra_turns);

    let mut next_state = state.clone();
    next_state.start_spin(next_rotation);

    let result = SpinResult {
        selected_index,
        selected_item: category.items[selected_index].clone(),
    };

    log::debug!(
        "spin {}: index {} ({}), stop {:.3}, {} extra turns, rotation {:.3} -> {:.3}",
        category.name,
        selected_index,
        result.selected_item,
        target_stop_degrees,
        extra_turns,
        current,
        next_rotation
    );

    Ok(SpinOutcome {
        next_state,
        completion_delay_ms: config.spin_duration_ms,
        result,
        target_stop_degrees,
        delta_degrees,
        extra_turns,
    })
}
