//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Injected, seeded RNG only
//! - Stable brick iteration order (column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{crosses_floor, find_brick_hit, hits_ceiling, hits_side_wall, paddle_covers};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, GameEvent, GameState, Outcome, Paddle, seeded_rng,
};
pub use tick::tick;
