//! Session state and simulation events
//!
//! A [`GameSession`] owns everything the simulation mutates: the player, both
//! projectile collections, the progression parameters and the phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Player, Projectile};
use super::progression::{GameOverReason, GamePhase, PauseReason, ProgressionState};

/// Something the frontend should react to (sound cues, records, music)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more snowballs caught this tick
    SnowballContact { count: usize },
    /// One or more rocks hit the player this tick
    RockContact { count: usize },
    /// Level completed; `level` is the new level
    LevelUp { level: u32 },
    GameOver {
        reason: GameOverReason,
        level: u32,
        ticks: u64,
    },
    /// Left a pause screen
    Resumed(PauseReason),
    /// Left the game-over screen with a fresh run
    SessionReset,
}

/// Complete game session (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub rocks: Vec<Projectile>,
    pub snowballs: Vec<Projectile>,
    pub progression: ProgressionState,
    /// Simulated ticks in the current run
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a session on the welcome screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Paused(PauseReason::Welcome),
            player: Player::default(),
            rocks: Vec::new(),
            snowballs: Vec::new(),
            progression: ProgressionState::default(),
            time_ticks: 0,
        }
    }

    /// Full reset after a game over. The RNG stream carries on so consecutive
    /// runs differ; the phase is left to the caller.
    pub fn reset(&mut self) {
        self.player.reset();
        self.progression = ProgressionState::default();
        self.rocks.clear();
        self.snowballs.clear();
        self.time_ticks = 0;
    }

    /// One tick of warming
    pub fn melt(&mut self) {
        self.player.temperature += self.progression.melt_rate;
    }

    /// Projectile fields and RNG borrowed together for the spawner
    pub(crate) fn spawn_parts(
        &mut self,
    ) -> (
        &mut ProgressionState,
        &mut Vec<Projectile>,
        &mut Vec<Projectile>,
        &mut Pcg32,
    ) {
        (
            &mut self.progression,
            &mut self.rocks,
            &mut self.snowballs,
            &mut self.rng,
        )
    }

    pub fn projectile_count(&self) -> usize {
        self.rocks.len() + self.snowballs.len()
    }
}
