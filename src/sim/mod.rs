//! Game simulation
//!
//! All gameplay logic lives here, free of browser dependencies:
//! - Velocities are per-frame displacements; the frame delta is carried but
//!   never scales motion
//! - Entities are processed in collection order, update then render
//! - Cross-entity changes are applied after each pass

pub mod collision;
pub mod entity;
pub mod game;
pub mod state;
pub mod vector;
pub mod wave;

pub use collision::collides;
pub use entity::{
    Behavior, Entity, EntityId, EntityIds, EntityKind, FrameContext, Intent, RoleHandle, Roles,
    SharedPosition, shared,
};
pub use game::Game;
pub use state::{Ball, Brick, GameEvent, GameStats, Paddle, RunState};
pub use vector::Vector2;
pub use wave::{BrickLayout, generate_wave};
