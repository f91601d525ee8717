//! Canvas Breakout - a brick-breaking arcade game for the browser
//!
//! Core modules:
//! - `sim`: Entities, collisions, the controller and its frame loop
//! - `renderer`: Drawing surfaces (browser canvas, recording list)
//! - `settings`: Data-driven game dimensions
//! - `error`: Settings and platform errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{PlatformError, SettingsError};
pub use settings::Settings;
pub use sim::{Game, GameEvent, Vector2};

/// Game configuration defaults
pub mod consts {
    /// Frame delta assumed when no previous timestamp exists (seconds)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Drawing surface size
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-frame displacement at start (moving up and right)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Start height above the bottom edge
    pub const BALL_START_HEIGHT: f32 = 30.0;
    /// Horizontal speed clamp after a paddle bounce
    pub const BALL_MAX_DEFLECTION: f32 = 2.0;

    /// Paddle defaults (sits on the bottom edge)
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Brick grid
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Triangles per circle when tessellating
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
