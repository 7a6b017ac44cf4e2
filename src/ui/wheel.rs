//! Wheel geometry and spin easing
//!
//! The rotation value is purely presentational: it increases monotonically
//! across spins so the wheel never snaps backwards, and the core never sees
//! it. The only contract with the sim is that the easing runs over exactly
//! the visual spin duration and lands the pointer on the winning segment.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Full extra rotations added to every spin for visual effect
pub const FULL_SPINS: f32 = 8.0;

/// Segment fill gradients (inner, outer), cycled when the pool is larger
pub const SEGMENT_COLORS: [[&str; 2]; 10] = [
    ["#8B5CF6", "#A78BFA"], // Purple
    ["#EC4899", "#F472B6"], // Pink
    ["#F59E0B", "#FBBF24"], // Amber
    ["#10B981", "#34D399"], // Emerald
    ["#3B82F6", "#60A5FA"], // Blue
    ["#EF4444", "#F87171"], // Red
    ["#6366F1", "#818CF8"], // Indigo
    ["#14B8A6", "#2DD4BF"], // Teal
    ["#F97316", "#FB923C"], // Orange
    ["#A855F7", "#C084FC"], // Violet
];

/// Angular width of one segment for a pool of `n`
#[inline]
pub fn segment_angle(n: usize) -> f32 {
    TAU / n as f32
}

/// Start angle of segment `index` on an unrotated wheel. Segment 0 begins at
/// the top, where the pointer sits.
#[inline]
pub fn segment_start(index: usize, n: usize) -> f32 {
    index as f32 * segment_angle(n) - FRAC_PI_2
}

/// Rotation the segment centers of a pool of `n` need for the pointer to sit
/// on the center of segment `winner_index`, modulo a full turn
#[inline]
fn landing_angle(winner_index: usize, n: usize) -> f32 {
    (TAU - (winner_index as f32 + 0.5) * segment_angle(n)).rem_euclid(TAU)
}

/// Absolute rotation a spin should end at: at least [`FULL_SPINS`] full turns
/// past `current`, then the nearest angle that parks the pointer on the
/// winning segment's center. Always greater than `current`, so the wheel
/// keeps turning the same way across spins.
pub fn target_rotation(current: f32, winner_index: usize, n: usize) -> f32 {
    let base = current + FULL_SPINS * TAU;
    let mut target = base - base.rem_euclid(TAU) + landing_angle(winner_index, n);
    if target < base {
        target += TAU;
    }
    target
}

/// Deceleration curve for the spin animation, `t` in `[0, 1]`.
/// Approximates the original's cubic-bezier ease-out.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Interpolated rotation at `progress` (0 = spin start, 1 = pointer parked)
#[inline]
pub fn rotation_at(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * ease_out(progress)
}
