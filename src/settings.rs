//! Game settings
//!
//! Every section defaults independently, so a settings document only needs
//! the fields it changes. In the browser the JSON comes from an optional
//! `<script id="breakout-settings" type="application/json">` element; natively
//! from the file named by `BREAKOUT_SETTINGS`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::{BrickLayout, Vector2};

/// Ball setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    /// Per-frame displacement at start
    pub velocity: Vector2,
    /// Start height above the bottom edge
    pub start_height: f32,
    /// Horizontal speed clamp after a paddle bounce
    pub max_deflection: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            velocity: Vector2::new(BALL_START_DX, BALL_START_DY),
            start_height: BALL_START_HEIGHT,
            max_deflection: BALL_MAX_DEFLECTION,
        }
    }
}

/// Paddle setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub size: Vector2,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            size: Vector2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

/// All tunable dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Surface width and height in pixels
    pub screen: Vector2,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub bricks: BrickLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
            bricks: BrickLayout::default(),
        }
    }
}

impl Settings {
    /// Element id holding browser settings
    pub const ELEMENT_ID: &'static str = "breakout-settings";
    /// Environment variable naming a native settings file
    pub const ENV_VAR: &'static str = "BREAKOUT_SETTINGS";
    /// Largest brick grid accepted from a settings document
    pub const MAX_BRICKS: u32 = 1024;

    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject dimensions the game cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.screen.x <= 0.0 || self.screen.y <= 0.0 {
            return invalid(format!("screen must be positive, got {:?}", self.screen));
        }
        if self.ball.radius <= 0.0 {
            return invalid(format!("ball radius must be positive, got {}", self.ball.radius));
        }
        if self.ball.radius * 2.0 >= self.screen.x.min(self.screen.y) {
            return invalid(format!(
                "ball of radius {} does not fit on a {}x{} screen",
                self.ball.radius, self.screen.x, self.screen.y
            ));
        }
        if self.ball.max_deflection < 0.0 {
            return invalid(format!(
                "max deflection must not be negative, got {}",
                self.ball.max_deflection
            ));
        }
        let paddle = self.paddle.size;
        if paddle.x <= 0.0 || paddle.y <= 0.0 || paddle.x > self.screen.x {
            return invalid(format!(
                "paddle {}x{} does not fit a screen {} wide",
                paddle.x, paddle.y, self.screen.x
            ));
        }
        let bricks = &self.bricks;
        if bricks.columns == 0 || bricks.rows == 0 {
            return invalid("brick grid is empty".to_string());
        }
        match bricks.columns.checked_mul(bricks.rows) {
            Some(count) if count <= Self::MAX_BRICKS => {}
            _ => {
                return invalid(format!(
                    "brick grid {}x{} exceeds {} bricks",
                    bricks.columns,
                    bricks.rows,
                    Self::MAX_BRICKS
                ));
            }
        }
        if bricks.brick_size.x <= 0.0 || bricks.brick_size.y <= 0.0 {
            return invalid(format!(
                "brick size must be positive, got {:?}",
                bricks.brick_size
            ));
        }
        Ok(())
    }

    /// Load settings from the page, if it provides any (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                Ok(settings)
            }
            _ => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from the file named by `BREAKOUT_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path);
                Ok(settings)
            }
            Err(_) => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.screen, Vector2::new(480.0, 320.0));
        assert_eq!(settings.bricks.brick_count(), 15);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings =
            Settings::from_json(r#"{ "screen": { "x": 640, "y": 480 }, "ball": { "radius": 6 } }"#)
                .expect("valid settings");
        assert_eq!(settings.screen, Vector2::new(640.0, 480.0));
        assert_eq!(settings.ball.radius, 6.0);
        assert_eq!(settings.ball.velocity, Vector2::new(2.0, -2.0));
        assert_eq!(settings.paddle, PaddleSettings::default());
        assert_eq!(settings.bricks, BrickLayout::default());
    }

    #[test]
    fn test_largest_grid_accepted() {
        let settings = Settings::from_json(r#"{ "bricks": { "columns": 32, "rows": 32 } }"#)
            .expect("valid settings");
        assert_eq!(settings.bricks.brick_count(), Settings::MAX_BRICKS as usize);
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings = Settings::from_json("{}").expect("valid settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ screen: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let cases = [
            r#"{ "screen": { "x": 0, "y": 320 } }"#,
            r#"{ "ball": { "radius": 200 } }"#,
            r#"{ "paddle": { "size": { "x": 500, "y": 10 } } }"#,
            r#"{ "bricks": { "columns": 0 } }"#,
            r#"{ "ball": { "max_deflection": -1 } }"#,
            r#"{ "bricks": { "columns": 70000, "rows": 70000 } }"#,
            r#"{ "bricks": { "columns": 64, "rows": 17 } }"#,
        ];
        for json in cases {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)), "{json}");
        }
    }
}
