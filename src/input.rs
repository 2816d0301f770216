//! Pointer input to paddle position
//!
//! Pointer x is given relative to the playfield's left edge. Positions outside
//! the playfield are ignored; otherwise the paddle is centred on the pointer and
//! clamped so it stays fully inside. The simulation relies on this clamp and
//! does not re-check paddle bounds.

use crate::config::GameConfig;
use crate::sim::GameState;

/// Paddle left edge for a pointer at `relative_x`, or `None` if the pointer is off the playfield
pub fn pointer_to_paddle_x(relative_x: f32, config: &GameConfig) -> Option<f32> {
    let width = config.playfield.width;
    if !(relative_x > 0.0 && relative_x < width) {
        return None;
    }
    let max_x = (width - config.paddle.width).max(0.0);
    Some((relative_x - config.paddle.width / 2.0).clamp(0.0, max_x))
}

/// Move the paddle under the pointer. Returns true if the paddle moved.
pub fn apply_pointer(state: &mut GameState, relative_x: f32, config: &GameConfig) -> bool {
    match pointer_to_paddle_x(relative_x, config) {
        Some(x) if x != state.paddle.x => {
            state.paddle.x = x;
            true
        }
        _ => false,
    }
}

/// Convert a client-space pointer x to playfield pixels
///
/// `canvas_left` and `canvas_css_width` describe the canvas element on the page;
/// the canvas may be displayed scaled relative to its playfield size.
pub fn client_to_playfield_x(
    client_x: f32,
    canvas_left: f32,
    canvas_css_width: f32,
    config: &GameConfig,
) -> f32 {
    let relative = client_x - canvas_left;
    if canvas_css_width > 0.0 {
        relative * config.playfield.width / canvas_css_width
    } else {
        relative
    }
}
