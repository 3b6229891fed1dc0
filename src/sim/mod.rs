//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{Aabb, car_aabb};
pub use collision::overlap;
pub use state::{GamePhase, GameState, Lane, PlayerCar, RivalCar, random_lane};
pub use tick::{GameEvent, key_pressed, start, tick};
