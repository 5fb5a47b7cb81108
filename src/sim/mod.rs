//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the projectile vectors)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ContactEvents, resolve};
pub use entity::{Player, Projectile, ProjectileKind, Rect};
pub use progression::{GameOverReason, GamePhase, PauseReason, ProgressionState};
pub use spawner::{SpawnEvent, spawn_tick};
pub use state::{GameEvent, GameSession};
pub use tick::{TickInput, autopilot_input, tick, update};
