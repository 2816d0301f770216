//! Game state and core simulation types
//!
//! The whole session lives in one owned [`GameState`]; the frame stepper and the
//! session controller receive it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{BrickConfig, GameConfig};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Notifications for the host (score/lives text sinks, logging, sound)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A session was started; `new_game` when score and lives were reset too
    Started { new_game: bool },
    ScoreChanged(u32),
    LivesChanged(u32),
    BrickDestroyed { col: u32, row: u32 },
    /// Ball bounced off the paddle with the given horizontal speed scale
    PaddleBounce { factor: f32 },
    /// Ball passed the paddle but lives remain
    BallLost,
    Won,
    Lost,
}

/// The ball: a point-circle with a per-tick velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start(),
            vel: config.ball_start_vel(),
            radius: config.ball.radius,
        }
    }

    /// Back to the spawn point and velocity
    pub fn respawn(&mut self, config: &GameConfig) {
        self.pos = config.ball_start();
        self.vel = config.ball_start_vel();
    }

    /// Position after one more tick at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle; only its left edge moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.paddle_start_x(),
            width: config.paddle.width,
            height: config.paddle.height,
        }
    }

    pub fn recenter(&mut self, config: &GameConfig) {
        self.x = config.paddle_start_x();
    }

    /// Paddle rectangle, sitting on the bottom edge of the playfield
    pub fn rect(&self, playfield_height: f32) -> Rect {
        Rect::new(self.x, playfield_height - self.height, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// A brick; its rectangle is derived from its grid indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub col: u32,
    pub row: u32,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }
}

/// Fixed-size brick grid, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    layout: BrickConfig,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickConfig) -> Self {
        let bricks = (0..layout.columns)
            .flat_map(|col| {
                (0..layout.rows).map(move |row| Brick {
                    col,
                    row,
                    status: BrickStatus::Alive,
                })
            })
            .collect();
        Self {
            layout: layout.clone(),
            bricks,
        }
    }

    pub fn columns(&self) -> u32 {
        self.layout.columns
    }

    pub fn rows(&self) -> u32 {
        self.layout.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.layout.columns && row < self.layout.rows)
            .then(|| (col * self.layout.rows + row) as usize)
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&Brick> {
        self.index(col, row).map(|i| &self.bricks[i])
    }

    pub fn get_mut(&mut self, col: u32, row: u32) -> Option<&mut Brick> {
        self.index(col, row).map(move |i| &mut self.bricks[i])
    }

    /// Rectangle of the brick at (col, row)
    pub fn rect(&self, col: u32, row: u32) -> Rect {
        let l = &self.layout;
        Rect::new(
            col as f32 * (l.width + l.padding) + l.offset_left,
            row as f32 * (l.height + l.padding) + l.offset_top,
            l.width,
            l.height,
        )
    }

    /// All bricks, column ascending then row ascending
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Alive bricks in column-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }

    /// Mark the brick destroyed; returns false if it was not alive
    pub fn destroy(&mut self, col: u32, row: u32) -> bool {
        match self.get_mut(col, row) {
            Some(brick) if brick.is_alive() => {
                brick.status = BrickStatus::Destroyed;
                true
            }
            _ => false,
        }
    }

    /// Every brick back to alive
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.status = BrickStatus::Alive;
        }
    }
}

/// Seeded RNG for the paddle-bounce jitter
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Gates whether further ticks are scheduled
    pub running: bool,
    /// Result of the last finished game, cleared on reset
    pub outcome: Option<Outcome>,
    /// Ticks simulated since load
    pub time_ticks: u64,
    /// Pending notifications, drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Load-time state: full board, nothing running
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ball: Ball::new(config),
            paddle: Paddle::new(config),
            bricks: BrickGrid::new(&config.bricks),
            score: 0,
            lives: config.rules.start_lives,
            running: false,
            outcome: None,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(!state.running);
        assert_eq!(state.bricks.len(), 15);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.paddle.x, 202.5);
    }

    #[test]
    fn test_grid_is_column_major() {
        let grid = BrickGrid::new(&BrickConfig::default());
        let order: Vec<(u32, u32)> = grid.iter().map(|b| (b.col, b.row)).take(4).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
    }

    #[test]
    fn test_brick_rect_from_indices() {
        let grid = BrickGrid::new(&BrickConfig::default());
        assert_eq!(grid.rect(0, 0), Rect::new(30.0, 30.0, 75.0, 20.0));
        assert_eq!(grid.rect(2, 1), Rect::new(200.0, 60.0, 75.0, 20.0));
        assert_eq!(grid.rect(4, 2), Rect::new(370.0, 90.0, 75.0, 20.0));
    }

    #[test]
    fn test_destroy_and_reset() {
        let mut grid = BrickGrid::new(&BrickConfig::default());
        assert!(grid.destroy(1, 2));
        assert!(!grid.destroy(1, 2));
        assert!(!grid.destroy(9, 0));
        assert_eq!(grid.alive_count(), 14);
        assert!(!grid.get(1, 2).unwrap().is_alive());

        grid.reset();
        assert_eq!(grid.alive_count(), 15);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let grid = BrickGrid::new(&BrickConfig::default());
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(&GameConfig::default());
        state.push_event(GameEvent::ScoreChanged(1));
        assert_eq!(state.drain_events(), vec![GameEvent::ScoreChanged(1)]);
        assert!(state.drain_events().is_empty());
    }
}
