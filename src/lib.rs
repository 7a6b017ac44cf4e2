//! Mystery Wheel - spinning-wheel winner selection mini-game
//!
//! Core modules:
//! - `sim`: Deterministic game core (participant pool, spin cycle, selection)
//! - `ui`: Wheel geometry/easing math plus browser DOM rendering glue
//! - `settings`: User preferences persisted to LocalStorage

pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Maximum number of winners per game
    pub const WINNER_QUOTA: usize = 5;
    /// Visual spin phase duration (5 seconds)
    pub const SPIN_DURATION_TICKS: u32 = 5 * TICKS_PER_SECOND;
    /// Winner announcement hold before the commit (2 seconds)
    pub const ANNOUNCE_DURATION_TICKS: u32 = 2 * TICKS_PER_SECOND;
}
