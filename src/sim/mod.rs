//! Deterministic game core
//!
//! All selection and state logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only (time advances one tick at a time)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The presentation layer reads state and feeds actions in through
//! [`TickInput`]; nothing else mutates a [`GameState`].

pub mod select;
pub mod state;
pub mod tick;

pub use select::pick_index;
pub use state::{GamePhase, GameState, SpinStatus};
pub use tick::{TickInput, tick};
