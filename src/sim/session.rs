//! Session controller: start and reset
//!
//! `reset` restores the board. Score and lives only go back to their initial
//! values when the previous game was lost (lives at zero); restarting after a
//! win keeps the score.

use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

impl GameState {
    /// Begin a session. Returns false (and changes nothing) if already running.
    pub fn start(&mut self, config: &GameConfig) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        let new_game = self.reset(config);
        log::info!(
            "Session started (new game: {}, score {}, lives {})",
            new_game,
            self.score,
            self.lives
        );
        self.push_event(GameEvent::Started { new_game });
        true
    }

    /// Restore ball, paddle and bricks; start a new game if no lives are left.
    /// Returns true when score and lives were reset as well.
    pub fn reset(&mut self, config: &GameConfig) -> bool {
        self.respawn_ball(config);
        self.bricks.reset();
        self.outcome = None;

        if self.lives == 0 {
            self.score = 0;
            self.lives = config.rules.start_lives;
            self.push_event(GameEvent::ScoreChanged(self.score));
            self.push_event(GameEvent::LivesChanged(self.lives));
            return true;
        }
        false
    }

    /// Ball back to its spawn point, paddle centred
    pub fn respawn_ball(&mut self, config: &GameConfig) {
        self.ball.respawn(config);
        self.paddle.recenter(config);
    }
}
