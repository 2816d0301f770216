//! Collision tests for the ball against bricks, walls and the paddle
//!
//! The ball is treated as a point for bricks and the paddle, and as a circle of
//! its radius for the playfield walls. Wall tests look one tick ahead: they ask
//! whether the *next* position would leave the playfield.

use glam::Vec2;

use super::state::{Ball, BrickGrid, Paddle};

/// First alive brick (column-major scan) whose rectangle strictly contains `pos`
pub fn find_brick_hit(grid: &BrickGrid, pos: Vec2) -> Option<(u32, u32)> {
    grid.iter_alive()
        .find(|b| grid.rect(b.col, b.row).contains_point_strict(pos))
        .map(|b| (b.col, b.row))
}

/// Next position would cross the left or right wall
pub fn hits_side_wall(ball: &Ball, width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > width - ball.radius || next_x < ball.radius
}

/// Next position would cross the top wall
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Next position would cross the bottom edge (the paddle plane)
pub fn crosses_floor(ball: &Ball, height: f32) -> bool {
    ball.pos.y + ball.vel.y > height - ball.radius
}

/// Paddle lies under the ball's current horizontal position
pub fn paddle_covers(paddle: &Paddle, x: f32) -> bool {
    x > paddle.x && x < paddle.x + paddle.width
}
