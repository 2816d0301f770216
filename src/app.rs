//! Frame driver
//!
//! [`Game`] owns the configuration, the session state and the RNG. The host
//! calls [`Game::frame`] once per display refresh and keeps scheduling frames
//! only while [`FrameResult::running`] is true.

use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig, Palette};
use crate::input;
use crate::renderer::{Surface, draw_idle, draw_outcome, draw_scene};
use crate::sim::{GameEvent, GameState, Outcome, seeded_rng, tick};

/// What the host needs to know after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// Schedule another frame
    pub running: bool,
    /// Set once the game has ended
    pub outcome: Option<Outcome>,
}

/// A game session plus everything needed to step and draw it
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub palette: Palette,
    pub state: GameState,
    rng: Pcg32,
    started: bool,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.theme.palette()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            palette,
            state,
            rng: seeded_rng(seed),
            started: false,
        })
    }

    /// Start button. Returns true when a frame loop should be started.
    pub fn start(&mut self) -> bool {
        let started = self.state.start(&self.config);
        self.started |= started;
        started
    }

    /// Pointer moved to `relative_x` playfield pixels
    pub fn pointer(&mut self, relative_x: f32) -> bool {
        input::apply_pointer(&mut self.state, relative_x, &self.config)
    }

    /// Draw the current scene, advance one tick, and overlay the result if the game ended
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameResult {
        draw_scene(&self.state, &self.config, &self.palette, surface);
        tick(&mut self.state, &self.config, &mut self.rng);

        if let (false, Some(outcome)) = (self.state.running, self.state.outcome) {
            draw_outcome(outcome, &self.config, surface);
        }

        FrameResult {
            running: self.state.running,
            outcome: self.state.outcome,
        }
    }

    /// Draw without advancing: the start screen before the first game,
    /// otherwise the board with any end-of-game message
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.started {
            draw_idle(&self.state, &self.config, &self.palette, surface);
            return;
        }
        draw_scene(&self.state, &self.config, &self.palette, surface);
        if let (false, Some(outcome)) = (self.state.running, self.state.outcome) {
            draw_outcome(outcome, &self.config, surface);
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

/// Demo player: keeps the paddle under the ball with a slow sway so rallies vary
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Sway amplitude as a fraction of paddle width (below 0.5 never misses)
    pub sway: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { sway: 0.3 }
    }
}

impl Autopilot {
    /// Pointer position the autopilot wants this tick
    pub fn target_x(&self, game: &Game) -> f32 {
        let t = game.state.time_ticks as f32 * 0.02;
        let offset = (t.sin() * 0.7 + (t * 2.3).sin() * 0.3) * self.sway * game.config.paddle.width;
        let width = game.config.playfield.width;
        (game.state.ball.pos.x + offset).clamp(0.0, width)
    }

    pub fn steer(&self, game: &mut Game) {
        let x = self.target_x(game);
        game.pointer(x);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::renderer::VertexBatch;
    use crate::renderer::scene::tests::{Call, Recorder};

    fn game() -> Game {
        Game::new(GameConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.bricks.rows = 0;
        assert!(Game::new(config, 1).is_err());
    }

    #[test]
    fn test_redraw_before_start_shows_prompt() {
        let game = game();
        let mut rec = Recorder::default();
        game.redraw(&mut rec);
        assert!(matches!(rec.calls.last(), Some(Call::Text(t, _)) if t == "Click Start to begin"));
    }

    #[test]
    fn test_frame_reports_running() {
        let mut game = game();
        assert!(game.start());
        assert!(!game.start());

        let mut batch = VertexBatch::new();
        let result = game.frame(&mut batch);
        assert!(result.running);
        assert_eq!(result.outcome, None);
        assert!(batch.texts.is_empty());
        assert!(!batch.vertices.is_empty());
        assert_eq!(game.state.ball.pos, Vec2::new(244.0, 286.0));
    }

    #[test]
    fn test_frame_without_start_does_not_tick() {
        let mut game = game();
        let mut batch = VertexBatch::new();
        let result = game.frame(&mut batch);
        assert!(!result.running);
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_losing_frame_draws_message() {
        let mut game = game();
        game.start();
        game.state.lives = 1;
        game.state.paddle.x = 0.0;
        game.state.ball.pos = Vec2::new(400.0, 308.0);
        game.state.ball.vel = Vec2::new(4.0, 4.0);

        let mut rec = Recorder::default();
        let result = game.frame(&mut rec);
        assert!(!result.running);
        assert_eq!(result.outcome, Some(Outcome::Lost));
        assert!(matches!(
            rec.calls.last(),
            Some(Call::Text(t, _)) if t == "GAME OVER! Click Start to play again"
        ));

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::LivesChanged(0)));
        assert!(events.contains(&GameEvent::Lost));

        // Redraw keeps the message up
        let mut rec = Recorder::default();
        game.redraw(&mut rec);
        assert!(matches!(rec.calls.last(), Some(Call::Text(..))));
    }

    #[test]
    fn test_pointer_moves_paddle() {
        let mut game = game();
        assert!(game.pointer(100.0));
        assert_eq!(game.state.paddle.x, 62.5);
        assert!(!game.pointer(-5.0));
    }

    #[test]
    fn test_autopilot_target_near_ball() {
        let game = game();
        let pilot = Autopilot::default();
        let x = pilot.target_x(&game);
        assert!((x - game.state.ball.pos.x).abs() < game.config.paddle.width / 2.0);
    }

    #[test]
    fn test_autopilot_target_on_narrow_playfield() {
        let mut config = GameConfig::default();
        config.playfield.width = 1.5;
        config.playfield.height = 320.0;
        config.paddle.width = 1.0;
        config.bricks.columns = 1;
        config.bricks.rows = 1;
        config.bricks.width = 1.0;
        config.bricks.offset_left = 0.0;
        config.ball.radius = 0.5;
        let game = Game::new(config, 1).unwrap();

        let x = Autopilot::default().target_x(&game);
        assert!((0.0..=1.5).contains(&x));
    }

    #[test]
    fn test_autopilot_never_misses() {
        let mut game = game();
        let pilot = Autopilot::default();
        let mut batch = VertexBatch::new();
        game.start();

        for _ in 0..20_000 {
            pilot.steer(&mut game);
            if !game.frame(&mut batch).running {
                break;
            }
        }

        assert_eq!(game.state.lives, 3);
        assert!(game.state.score > 0);
        if !game.state.running {
            assert_eq!(game.state.outcome, Some(Outcome::Won));
            assert_eq!(game.state.score, 15);
        }
    }
}
