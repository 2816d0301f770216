//! Per-frame simulation tick
//!
//! One call advances the session by one rendered frame. There is no delta-time:
//! the ball moves by its velocity once per call, so game speed follows the
//! display refresh rate.

use rand::Rng;

use super::collision::{crosses_floor, find_brick_hit, hits_ceiling, hits_side_wall, paddle_covers};
use super::state::{GameEvent, GameState, Outcome};
use crate::config::GameConfig;

/// Advance the game state by one tick
///
/// Order matters and matches the classic loop: brick scan on the current
/// position, side walls, then ceiling or floor on the next position, and
/// finally integration. A bounce and the move away from the surface happen in
/// the same tick. Does nothing unless the session is running.
pub fn tick<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    if !state.running {
        return;
    }
    state.time_ticks += 1;

    // At most one brick per tick, first hit in column-major order
    if let Some((col, row)) = find_brick_hit(&state.bricks, state.ball.pos) {
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks.destroy(col, row);
        state.score += 1;
        log::debug!("Brick ({}, {}) destroyed, score {}", col, row, state.score);
        state.push_event(GameEvent::BrickDestroyed { col, row });
        state.push_event(GameEvent::ScoreChanged(state.score));

        // Score carries over a restart after a win, so only the first board can end in a win
        if state.score == config.brick_count() {
            finish(state, Outcome::Won);
        }
    }

    if hits_side_wall(&state.ball, config.playfield.width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if hits_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if crosses_floor(&state.ball, config.playfield.height) {
        if paddle_covers(&state.paddle, state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
            // Jitter keeps rallies from becoming periodic; sign is preserved
            let factor = rng.random_range(config.rules.bounce_scale_min..config.rules.bounce_scale_max);
            state.ball.vel.x *= factor;
            log::debug!("Paddle bounce, dx scaled by {:.3}", factor);
            state.push_event(GameEvent::PaddleBounce { factor });
        } else {
            state.lives = state.lives.saturating_sub(1);
            state.push_event(GameEvent::LivesChanged(state.lives));

            if state.lives == 0 {
                finish(state, Outcome::Lost);
            } else {
                log::debug!("Ball lost, {} lives left", state.lives);
                state.push_event(GameEvent::BallLost);
                state.respawn_ball(config);
            }
        }
    }

    state.ball.pos += state.ball.vel;
}

/// Stop the loop and record the result
fn finish(state: &mut GameState, outcome: Outcome) {
    state.running = false;
    state.outcome = Some(outcome);
    match outcome {
        Outcome::Won => {
            log::info!("Board cleared, score {}", state.score);
            state.push_event(GameEvent::Won);
        }
        Outcome::Lost => {
            log::info!("Game over, score {}", state.score);
            state.push_event(GameEvent::Lost);
        }
    }
}
