//! Brick Breaker - a Breakout clone for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, brick collisions, session state)
//! - `renderer`: Presentation layer (scene drawing, WebGPU pipeline)
//! - `input`: Pointer-to-paddle mapping
//! - `config`: Data-driven playfield, layout and theme
//! - `app`: Frame driver tying the pieces together

pub mod app;
pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use app::{Autopilot, FrameResult, Game};
pub use config::{ConfigError, GameConfig};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Lives at the start of a new game
    pub const START_LIVES: u32 = 3;

    /// Horizontal speed scale applied on a paddle bounce, sampled from [MIN, MAX)
    pub const BOUNCE_SCALE_MIN: f32 = 0.8;
    pub const BOUNCE_SCALE_MAX: f32 = 1.2;
}
