//! Game configuration
//!
//! Every tunable of the playfield lives here. Each section is `#[serde(default)]`
//! so a partial JSON document only overrides what it names; `Default` reproduces
//! the classic layout from [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("invalid color {0:?} (expected #rrggbb or #rrggbbaa)")]
    Color(String),
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Parse a CSS hex color (`#rrggbb` or `#rrggbbaa`)
pub fn parse_hex_color(s: &str) -> Result<Rgba, ConfigError> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::Color(s.to_string()))?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(ConfigError::Color(s.to_string()));
    }

    let mut rgba = [1.0; 4];
    for (i, slot) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| ConfigError::Color(s.to_string()))?;
        *slot = byte as f32 / 255.0;
    }
    Ok(rgba)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Distance of the spawn point above the bottom edge
    pub start_lift: f32,
    pub start_dx: f32,
    pub start_dy: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            start_lift: BALL_START_LIFT,
            start_dx: BALL_START_DX,
            start_dy: BALL_START_DY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub columns: u32,
    pub rows: u32,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub start_lives: u32,
    pub bounce_scale_min: f32,
    pub bounce_scale_max: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            bounce_scale_min: BOUNCE_SCALE_MIN,
            bounce_scale_max: BOUNCE_SCALE_MAX,
        }
    }
}

/// A centred text message (rendered through the DOM overlay)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageStyle {
    pub text: String,
    /// CSS color
    pub color: String,
    /// CSS font shorthand
    pub font: String,
}

impl MessageStyle {
    fn new(text: &str, color: &str, font: &str) -> Self {
        Self {
            text: text.to_string(),
            color: color.to_string(),
            font: font.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub ball: String,
    pub paddle: String,
    /// Brick colors, picked by `row % rows.len()`
    pub rows: Vec<String>,
    pub win: MessageStyle,
    pub lose: MessageStyle,
    pub idle: MessageStyle,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            ball: "#0095dd".into(),
            paddle: "#0095dd".into(),
            rows: vec!["#ff5252".into(), "#ffeb3b".into(), "#4caf50".into()],
            win: MessageStyle::new("YOU WIN! Click Start to play again", "#0095dd", "24px Arial"),
            lose: MessageStyle::new(
                "GAME OVER! Click Start to play again",
                "#ff5252",
                "24px Arial",
            ),
            idle: MessageStyle::new("Click Start to begin", "#0095dd", "20px Arial"),
        }
    }
}

/// Parsed fill colors of a [`ThemeConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub ball: Rgba,
    pub paddle: Rgba,
    pub rows: Vec<Rgba>,
}

impl Palette {
    /// Brick color for a grid row
    pub fn row_color(&self, row: u32) -> Rgba {
        self.rows[row as usize % self.rows.len()]
    }
}

impl ThemeConfig {
    /// Parse every color of the theme
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::invalid("theme.rows", "palette is empty"));
        }
        for style in [&self.win, &self.lose, &self.idle] {
            parse_hex_color(&style.color)?;
        }
        Ok(Palette {
            background: parse_hex_color(&self.background)?,
            ball: parse_hex_color(&self.ball)?,
            paddle: parse_hex_color(&self.paddle)?,
            rows: self
                .rows
                .iter()
                .map(|c| parse_hex_color(c))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickConfig,
    pub rules: RulesConfig,
    pub theme: ThemeConfig,
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a file, falling back to defaults. The error is handed back for logging.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::invalid(field, format!("must be positive, got {v}")))
            }
        }

        let pf = &self.playfield;
        positive("playfield.width", pf.width)?;
        positive("playfield.height", pf.height)?;
        positive("ball.radius", self.ball.radius)?;
        positive("paddle.width", self.paddle.width)?;
        positive("paddle.height", self.paddle.height)?;
        positive("bricks.width", self.bricks.width)?;
        positive("bricks.height", self.bricks.height)?;

        // A running ball never has a zero velocity component
        for (field, v) in [
            ("ball.start_dx", self.ball.start_dx),
            ("ball.start_dy", self.ball.start_dy),
        ] {
            if !v.is_finite() || v == 0.0 {
                return Err(ConfigError::invalid(field, "must be non-zero"));
            }
        }
        if !(self.ball.start_lift > 0.0 && self.ball.start_lift < pf.height) {
            return Err(ConfigError::invalid(
                "ball.start_lift",
                "spawn point must lie inside the playfield",
            ));
        }
        if self.paddle.width > pf.width {
            return Err(ConfigError::invalid("paddle.width", "wider than the playfield"));
        }

        let b = &self.bricks;
        if b.columns == 0 || b.rows == 0 {
            return Err(ConfigError::invalid("bricks", "grid needs at least one brick"));
        }
        if b.padding < 0.0 || b.offset_left < 0.0 || b.offset_top < 0.0 {
            return Err(ConfigError::invalid("bricks", "padding and offsets must not be negative"));
        }
        let grid_right = b.offset_left + b.columns as f32 * (b.width + b.padding) - b.padding;
        let grid_bottom = b.offset_top + b.rows as f32 * (b.height + b.padding) - b.padding;
        if grid_right > pf.width || grid_bottom > pf.height {
            return Err(ConfigError::invalid(
                "bricks",
                format!("grid ({grid_right}x{grid_bottom}) does not fit the playfield"),
            ));
        }

        if self.rules.start_lives == 0 {
            return Err(ConfigError::invalid("rules.start_lives", "must be at least 1"));
        }
        let r = &self.rules;
        if !(r.bounce_scale_min > 0.0 && r.bounce_scale_min < r.bounce_scale_max) {
            return Err(ConfigError::invalid(
                "rules.bounce_scale",
                format!("empty range [{}, {})", r.bounce_scale_min, r.bounce_scale_max),
            ));
        }

        self.theme.palette()?;
        Ok(())
    }

    /// Ball spawn point
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.playfield.width / 2.0,
            self.playfield.height - self.ball.start_lift,
        )
    }

    /// Ball spawn velocity
    pub fn ball_start_vel(&self) -> Vec2 {
        Vec2::new(self.ball.start_dx, self.ball.start_dy)
    }

    /// Left edge of a centred paddle
    pub fn paddle_start_x(&self) -> f32 {
        (self.playfield.width - self.paddle.width) / 2.0
    }

    /// Top edge of the paddle (drawn flush with the bottom)
    pub fn paddle_top(&self) -> f32 {
        self.playfield.height - self.paddle.height
    }

    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> u32 {
        self.bricks.columns * self.bricks.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brick_count(), 15);
        assert_eq!(config.ball_start(), Vec2::new(240.0, 290.0));
        assert_eq!(config.ball_start_vel(), Vec2::new(4.0, -4.0));
        assert_eq!(config.paddle_start_x(), 202.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "bricks": { "columns": 4 }, "rules": { "start_lives": 5 } }"#)
            .unwrap();
        assert_eq!(config.bricks.columns, 4);
        assert_eq!(config.bricks.rows, BRICK_ROWS);
        assert_eq!(config.rules.start_lives, 5);
        assert_eq!(config.playfield, PlayfieldConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_zero_velocity_component() {
        let err = GameConfig::from_json(r#"{ "ball": { "start_dx": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball.start_dx", .. }));
    }

    #[test]
    fn test_rejects_grid_overflow() {
        let err = GameConfig::from_json(r#"{ "bricks": { "columns": 6 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bricks", .. }));
    }

    #[test]
    fn test_rejects_empty_bounce_range() {
        let mut config = GameConfig::default();
        config.rules.bounce_scale_min = 1.2;
        config.rules.bounce_scale_max = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_lives() {
        let mut config = GameConfig::default();
        config.rules.start_lives = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        let c = parse_hex_color("#FF0000").unwrap();
        assert_eq!(c, [1.0, 0.0, 0.0, 1.0]);
        let c = parse_hex_color("#00000080").unwrap();
        assert!((c[3] - 128.0 / 255.0).abs() < 1e-6);
        assert!(parse_hex_color("FF0000").is_err());
        assert!(parse_hex_color("#FF00").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
    }

    #[test]
    fn test_palette_row_wraps() {
        let palette = ThemeConfig::default().palette().unwrap();
        assert_eq!(palette.row_color(0), palette.row_color(3));
        assert_ne!(palette.row_color(0), palette.row_color(1));
    }

    #[test]
    fn test_bad_theme_color_rejected() {
        let err = GameConfig::from_json(r##"{ "theme": { "ball": "blue" } }"##).unwrap_err();
        assert!(matches!(err, ConfigError::Color(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, err) = GameConfig::load_or_default("/nonexistent/brick-breaker.json");
        assert_eq!(config, GameConfig::default());
        assert!(matches!(err, Some(ConfigError::Io(_))));
    }
}
