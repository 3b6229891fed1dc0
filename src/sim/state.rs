//! Game state and core simulation types
//!
//! All per-session state lives here. The simulation is deterministic:
//! every lane draw comes from the seeded RNG owned by `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{Aabb, car_aabb};
use crate::consts::*;

/// One of the two fixed lanes on the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    /// Horizontal center coordinate of this lane
    pub fn x(self) -> f32 {
        match self {
            Lane::Left => LANE_LEFT_X,
            Lane::Right => LANE_RIGHT_X,
        }
    }

    pub fn opposite(self) -> Lane {
        match self {
            Lane::Left => Lane::Right,
            Lane::Right => Lane::Left,
        }
    }
}

/// Draw a lane uniformly at random. Spawn placement never avoids (or
/// seeks) the player's lane.
pub fn random_lane(rng: &mut Pcg32) -> Lane {
    if rng.random_bool(0.5) {
        Lane::Left
    } else {
        Lane::Right
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a keypress; the initial state and where every run ends
    Stopped,
    /// Active gameplay
    Running,
}

/// The player's car
///
/// Only the lane varies; the vertical coordinate is fixed. A lane change
/// is an instantaneous snap, never an intermediate position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerCar {
    pub lane: Lane,
}

impl Default for PlayerCar {
    fn default() -> Self {
        Self { lane: Lane::Left }
    }
}

impl PlayerCar {
    /// Current position, derived from the lane
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.lane.x(), PLAYER_Y)
    }

    /// Collision bounds at the current position
    pub fn aabb(&self) -> Aabb {
        car_aabb(self.pos())
    }

    /// Snap to `lane`. Returns `false` (and changes nothing) when the car
    /// is already there, so callers can gate the steering cue.
    pub fn switch_lane(&mut self, lane: Lane) -> bool {
        if self.lane == lane {
            return false;
        }
        self.lane = lane;
        true
    }

    /// Back to the starting lane
    pub fn reset(&mut self) {
        self.lane = Lane::Left;
    }
}

/// The oncoming car
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RivalCar {
    pub lane: Lane,
    /// Vertical coordinate, continuous (y grows downward)
    pub y: f32,
    /// Units advanced per tick; grows on every wrap, never shrinks mid-run
    pub speed: f32,
}

impl RivalCar {
    fn spawned(lane: Lane) -> Self {
        Self {
            lane,
            y: RIVAL_SPAWN_Y,
            speed: RIVAL_BASE_SPEED,
        }
    }

    /// Current position, derived from lane and vertical coordinate
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.lane.x(), self.y)
    }

    /// Collision bounds at the current position
    pub fn aabb(&self) -> Aabb {
        car_aabb(self.pos())
    }

    /// Move one tick's worth down the track
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// True once the car has cleared the bottom margin
    pub fn past_wrap_line(&self) -> bool {
        self.y > TRACK_HEIGHT + WRAP_MARGIN
    }

    /// Relocate to the respawn line with a fresh lane and one more step
    /// of speed
    pub fn wrap(&mut self, lane: Lane) {
        self.y = RIVAL_SPAWN_Y;
        self.lane = lane;
        self.speed += RIVAL_SPEED_STEP;
    }

    /// Session-start respawn: same relocation, speed back to base
    pub fn reset(&mut self, lane: Lane) {
        self.y = RIVAL_SPAWN_Y;
        self.lane = lane;
        self.speed = RIVAL_BASE_SPEED;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks survived this session
    pub score: u32,
    /// Best score across sessions, kept for the process lifetime
    pub highest_score: u32,
    /// Wraps survived this session
    pub passes: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The controlled car
    pub player: PlayerCar,
    /// The oncoming car
    pub rival: RivalCar,
}

impl GameState {
    /// Create a fresh state with the given seed, stopped and waiting for
    /// a keypress
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rival_lane = random_lane(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Stopped,
            score: 0,
            highest_score: 0,
            passes: 0,
            time_ticks: 0,
            player: PlayerCar::default(),
            rival: RivalCar::spawned(rival_lane),
        }
    }
}
