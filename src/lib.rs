//! Snowball Rush - catch snowballs, dodge rocks, don't melt
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, progression)
//! - `game_loop`: Fixed-tick driver wiring the sim to its collaborators
//! - `renderer`: Drawing interface, HUD layout and the terminal backend
//! - `platform`: Input sources (terminal keyboard, scripted)
//! - `audio`: Sound cue interface and the audio manager
//! - `settings`: Player preferences loaded from JSON
//! - `records`: Best levels reached, persisted as JSON

pub mod audio;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod records;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game_loop::{FrameClock, GameContext, GameLoop};
pub use records::LevelRecords;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Visible playfield dimensions
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Fixed tick rate (simulation and rendering share it)
    pub const FPS: u32 = 60;

    /// Sprite footprints used for overlap tests
    pub const PLAYER_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const ROCK_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const SNOWBALL_SIZE: Vec2 = Vec2::new(32.0, 32.0);

    /// Horizontal step per tick while a direction key is held
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const STARTING_LIVES: i32 = 3;

    /// Temperatures in °C
    pub const STARTING_TEMPERATURE: f64 = -500.0;
    pub const HEALED_TEMPERATURE: f64 = -273.15;
    pub const MELTING_TEMPERATURE: f64 = 10.0;

    /// Projectiles enter above the visible area
    pub const SPAWN_Y: f32 = -100.0;
    pub const ROCK_MARGIN: i32 = 32;
    pub const SNOWBALL_MARGIN: i32 = 64;
    pub const SNOWBALL_PAIR_OFFSET: f32 = 50.0;
    /// The leading snowball of each pair falls this much faster
    pub const SNOWBALL_SPEED_BONUS: f32 = 2.0;

    pub const ROCK_DAMAGE: u32 = 3;
    pub const ROCK_VELOCITY: f32 = 10.0;
    pub const SNOWBALL_VELOCITY: f32 = 7.0;
    pub const SNOWBALL_HEAL_AMOUNT: u32 = 2;

    /// Difficulty progression
    pub const START_MELT_RATE: f64 = 0.1;
    pub const MELT_RATE_STEP: f64 = 0.1;
    pub const MAX_MELT_RATE: f64 = 2.0;
    pub const START_ROCKS_TO_BE_THROWN: u32 = 10;
    pub const ROCKS_PER_LEVEL: u32 = 5;
    pub const ROCK_THRESHOLD_STEP: f32 = 100.0;
    pub const MIN_ROCK_THRESHOLD: f32 = 150.0;

    /// Height of the HUD band at the top of the screen
    pub const HUD_HEIGHT: f32 = 100.0;
}
