//! Lane Rush - a two-lane highway dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, state machine)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Procedural Web Audio sound effects (wasm)
//! - `highscores`: In-process run leaderboard
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible track size in world units
    pub const TRACK_WIDTH: f32 = 1000.0;
    pub const TRACK_HEIGHT: f32 = 820.0;

    /// Road band centered on the track
    pub const ROAD_WIDTH: f32 = 600.0;
    pub const ROAD_CENTER_X: f32 = TRACK_WIDTH / 2.0;

    /// Lane centers sit this far to either side of the road center
    pub const LANE_OFFSET: f32 = 150.0;
    pub const LANE_LEFT_X: f32 = ROAD_CENTER_X - LANE_OFFSET;
    pub const LANE_RIGHT_X: f32 = ROAD_CENTER_X + LANE_OFFSET;

    /// Player car vertical coordinate (never changes)
    pub const PLAYER_Y: f32 = 675.0;

    /// Respawn line for the rival car, above the visible track
    pub const RIVAL_SPAWN_Y: f32 = -100.0;
    /// Distance past the bottom edge before a wrap fires; large enough
    /// that the relocation is never visible
    pub const WRAP_MARGIN: f32 = 200.0;

    /// Rival speed at session start, in units per tick
    pub const RIVAL_BASE_SPEED: f32 = 5.0;
    /// Speed gained on every wrap (no ceiling)
    pub const RIVAL_SPEED_STEP: f32 = 1.0;

    /// Collision/draw box shared by both cars
    pub const CAR_WIDTH: f32 = 120.0;
    pub const CAR_HEIGHT: f32 = 200.0;

    /// Fixed simulation tick interval in milliseconds
    pub const TICK_PERIOD_MS: f64 = 10.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// When set, a new record is stored as `score + 1` instead of `score`
    pub const LEGACY_HIGH_SCORE_BONUS: bool = true;
}
