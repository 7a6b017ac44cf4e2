//! Game state and mutation operations
//!
//! The state store is the single piece of mutable shared state. Everything
//! here is serializable so a run can be reproduced from its seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Overall lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host to start; entry form not yet open
    NotStarted,
    /// Accepting participants and spins
    InProgress,
    /// Winner quota reached, no further spins
    Complete,
}

/// State of the current spin cycle
///
/// The winner is drawn at the start of a cycle and fixed for its remainder;
/// it is carried through the variants but only surfaced to readers once the
/// cycle reaches `Announcing` (see [`GameState::announced_winner`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinStatus {
    Idle,
    /// Visual spin phase; `ticks_left` counts down to the reveal
    Spinning { winner: String, ticks_left: u32 },
    /// Winner shown prominently; `ticks_left` counts down to the commit
    Announcing { winner: String, ticks_left: u32 },
}

impl SpinStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SpinStatus::Idle)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Selection RNG, advanced once per spin
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub spin: SpinStatus,
    /// Not-yet-selected participants, in insertion order
    pub pool: Vec<String>,
    /// Winners in the order they won, capped at [`WINNER_QUOTA`]
    pub winners: Vec<String>,
    /// Counter for auto-generated guest names
    guest_seq: u32,
}

impl GameState {
    /// Create a fresh game with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::NotStarted,
            spin: SpinStatus::Idle,
            pool: Vec::new(),
            winners: Vec::new(),
            guest_seq: 0,
        }
    }

    /// `NotStarted -> InProgress`; no-op in any other phase
    pub fn start_game(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::InProgress;
        }
    }

    /// Add a participant to the pool.
    ///
    /// The name is trimmed; empty names and names already in the pool or on
    /// the winner list are rejected (silent no-op, returns false). The
    /// sentinel input `"in"` (case-insensitive) is a request to join under an
    /// auto-generated placeholder name rather than a literal entry.
    pub fn add_participant(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        let name = if trimmed.eq_ignore_ascii_case("in") {
            self.next_guest_name()
        } else {
            if self.contains_name(trimmed) {
                return false;
            }
            trimmed.to_string()
        };
        self.pool.push(name);
        true
    }

    /// Begin a spin cycle with the pool entry at `winner_index` as the
    /// pre-drawn winner.
    ///
    /// No-op unless the pool is non-empty, no cycle is in flight, the winner
    /// quota has not been reached, and the index is in range. Selection
    /// itself lives in the orchestrator (`tick::request_spin`); taking the
    /// index here keeps the store drivable with a stubbed selector.
    pub fn begin_spin(&mut self, winner_index: usize) -> bool {
        if !self.can_spin() || winner_index >= self.pool.len() {
            return false;
        }
        self.spin = SpinStatus::Spinning {
            winner: self.pool[winner_index].clone(),
            ticks_left: SPIN_DURATION_TICKS,
        };
        true
    }

    /// `Spinning -> Announcing`: the winner becomes visible to readers.
    /// Pool and winner list are untouched until the commit.
    pub fn resolve_spin(&mut self) {
        if let SpinStatus::Spinning { winner, .. } = &self.spin {
            self.spin = SpinStatus::Announcing {
                winner: winner.clone(),
                ticks_left: ANNOUNCE_DURATION_TICKS,
            };
        }
    }

    /// `Announcing -> Idle`: append the winner to the winner list, remove it
    /// from the pool, and complete the game once the quota is reached.
    pub fn commit_winner(&mut self) {
        let winner = match std::mem::replace(&mut self.spin, SpinStatus::Idle) {
            SpinStatus::Announcing { winner, .. } => winner,
            other => {
                self.spin = other;
                return;
            }
        };
        if let Some(pos) = self.pool.iter().position(|name| *name == winner) {
            self.pool.remove(pos);
        }
        self.winners.push(winner);
        if self.winners.len() >= WINNER_QUOTA {
            self.phase = GamePhase::Complete;
        }
    }

    /// Clear everything and return to `NotStarted`. Cancels any in-flight
    /// spin cycle: once the status is back to `Idle` no pending stage can
    /// fire.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.winners.clear();
        self.spin = SpinStatus::Idle;
        self.phase = GamePhase::NotStarted;
        self.guest_seq = 0;
    }

    /// Whether a spin request would currently be accepted
    pub fn can_spin(&self) -> bool {
        !self.pool.is_empty() && self.spin.is_idle() && self.winners.len() < WINNER_QUOTA
    }

    /// Winner name, exposed only during the announcement hold
    pub fn announced_winner(&self) -> Option<&str> {
        match &self.spin {
            SpinStatus::Announcing { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Pool index of the in-flight winner, for the wheel renderer to aim at.
    /// `None` outside the visual spin phase.
    pub fn spin_target(&self) -> Option<usize> {
        match &self.spin {
            SpinStatus::Spinning { winner, .. } => {
                self.pool.iter().position(|name| name == winner)
            }
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    fn contains_name(&self, name: &str) -> bool {
        self.pool.iter().any(|p| p == name) || self.winners.iter().any(|w| w == name)
    }

    /// Next unused `Player N` placeholder. The original used a wall-clock
    /// timestamp; a session-local sequence keeps the sim deterministic.
    fn next_guest_name(&mut self) -> String {
        loop {
            self.guest_seq += 1;
            let name = format!("Player {}", self.guest_seq);
            if !self.contains_name(&name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_empty() {
        let mut state = GameState::new(1);
        assert!(state.add_participant("  Alice  "));
        assert_eq!(state.pool, vec!["Alice"]);
        assert!(!state.add_participant("   "));
        assert!(!state.add_participant(""));
        assert_eq!(state.pool.len(), 1);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut state = GameState::new(1);
        assert!(state.add_participant("Alice"));
        assert!(!state.add_participant("Alice"));
        assert!(!state.add_participant(" Alice "));
        assert_eq!(state.pool, vec!["Alice"]);
    }

    #[test]
    fn test_add_rejects_past_winner() {
        let mut state = GameState::new(1);
        state.add_participant("Alice");
        state.begin_spin(0);
        state.resolve_spin();
        state.commit_winner();
        assert_eq!(state.winners, vec!["Alice"]);
        assert!(!state.add_participant("Alice"));
        assert!(state.pool.is_empty());
    }

    #[test]
    fn test_sentinel_generates_distinct_names() {
        let mut state = GameState::new(1);
        assert!(state.add_participant("in"));
        assert!(state.add_participant("IN"));
        assert!(state.add_participant(" In "));
        assert_eq!(state.pool.len(), 3);
        for name in &state.pool {
            assert!(name.starts_with("Player "));
        }
        let mut unique = state.pool.clone();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_start_game_only_from_not_started() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::NotStarted);
        state.start_game();
        assert_eq!(state.phase, GamePhase::InProgress);
        state.start_game();
        assert_eq!(state.phase, GamePhase::InProgress);
    }

    #[test]
    fn test_begin_spin_guards() {
        let mut state = GameState::new(1);
        // Empty pool
        assert!(!state.begin_spin(0));
        assert!(state.spin.is_idle());

        state.add_participant("Alice");
        state.add_participant("Bob");
        // Out of range
        assert!(!state.begin_spin(2));
        // Accepted
        assert!(state.begin_spin(1));
        assert!(matches!(&state.spin, SpinStatus::Spinning { winner, .. } if winner == "Bob"));
        // Already in flight
        assert!(!state.begin_spin(0));
        assert!(matches!(&state.spin, SpinStatus::Spinning { winner, .. } if winner == "Bob"));
    }

    #[test]
    fn test_begin_spin_rejected_at_quota() {
        let mut state = GameState::new(1);
        for i in 0..WINNER_QUOTA + 2 {
            state.add_participant(&format!("P{i}"));
        }
        for _ in 0..WINNER_QUOTA {
            assert!(state.begin_spin(0));
            state.resolve_spin();
            state.commit_winner();
        }
        assert_eq!(state.winners.len(), WINNER_QUOTA);
        assert!(state.is_complete());
        assert!(!state.begin_spin(0));
    }

    #[test]
    fn test_spin_cycle_transitions() {
        let mut state = GameState::new(1);
        state.add_participant("Alice");
        state.add_participant("Bob");

        state.begin_spin(0);
        assert_eq!(state.announced_winner(), None);
        assert_eq!(state.spin_target(), Some(0));

        state.resolve_spin();
        assert_eq!(state.announced_winner(), Some("Alice"));
        assert_eq!(state.spin_target(), None);
        // Not yet committed
        assert_eq!(state.pool.len(), 2);
        assert!(state.winners.is_empty());

        state.commit_winner();
        assert!(state.spin.is_idle());
        assert_eq!(state.pool, vec!["Bob"]);
        assert_eq!(state.winners, vec!["Alice"]);
        assert_eq!(state.announced_winner(), None);
    }

    #[test]
    fn test_resolve_and_commit_require_matching_stage() {
        let mut state = GameState::new(1);
        state.add_participant("Alice");

        // Out-of-order calls are no-ops
        state.resolve_spin();
        state.commit_winner();
        assert!(state.spin.is_idle());
        assert!(state.winners.is_empty());

        state.begin_spin(0);
        state.commit_winner();
        assert!(matches!(state.spin, SpinStatus::Spinning { .. }));
        assert!(state.winners.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(1);
        state.start_game();
        for name in ["Alice", "Bob", "Carol"] {
            state.add_participant(name);
        }
        state.begin_spin(0);
        state.resolve_spin();
        state.commit_winner();
        state.begin_spin(0);

        state.reset();
        assert!(state.pool.is_empty());
        assert!(state.winners.is_empty());
        assert!(state.spin.is_idle());
        assert_eq!(state.phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_pool_and_winners_stay_disjoint() {
        let mut state = GameState::new(9);
        for i in 0..8 {
            state.add_participant(&format!("P{i}"));
        }
        for _ in 0..WINNER_QUOTA {
            state.begin_spin(0);
            state.resolve_spin();
            state.commit_winner();
            for winner in &state.winners {
                assert!(!state.pool.contains(winner));
            }
        }
        assert_eq!(state.pool.len(), 8 - WINNER_QUOTA);
    }
}
