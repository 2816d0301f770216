//! Scene composition: what gets drawn each frame, in order

use glam::Vec2;

use super::Surface;
use crate::config::{GameConfig, Palette};
use crate::sim::{GameState, Outcome};

/// Clear, then draw alive bricks, the ball and the paddle
pub fn draw_scene<S: Surface + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    palette: &Palette,
    surface: &mut S,
) {
    surface.clear(palette.background);

    for brick in state.bricks.iter_alive() {
        surface.fill_rect(
            state.bricks.rect(brick.col, brick.row),
            palette.row_color(brick.row),
        );
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, palette.ball);
    surface.fill_rect(state.paddle.rect(config.playfield.height), palette.paddle);
}

/// Win or game-over message, centred on the playfield
pub fn draw_outcome<S: Surface + ?Sized>(outcome: Outcome, config: &GameConfig, surface: &mut S) {
    let style = match outcome {
        Outcome::Won => &config.theme.win,
        Outcome::Lost => &config.theme.lose,
    };
    surface.fill_text(style, playfield_center(config));
}

/// The board before the first start, with the start prompt
pub fn draw_idle<S: Surface + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    palette: &Palette,
    surface: &mut S,
) {
    draw_scene(state, config, palette, surface);
    surface.fill_text(&config.theme.idle, playfield_center(config));
}

fn playfield_center(config: &GameConfig) -> Vec2 {
    Vec2::new(config.playfield.width / 2.0, config.playfield.height / 2.0)
}
