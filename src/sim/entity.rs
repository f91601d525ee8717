//! Entity model: one wrapper type for ball, paddle and bricks
//!
//! Every entity owns a shared position handle plus kind-specific data, and
//! answers the same per-frame contract (`Behavior`). Entities never touch each
//! other directly: what they need from the rest of the world arrives through a
//! `FrameContext`, and anything they want to change outside themselves leaves
//! as an `Intent` that the controller applies after the pass.

use std::cell::Cell;
use std::rc::Rc;

use super::state::{Ball, Brick, Paddle};
use super::vector::Vector2;
use crate::renderer::Surface;

/// Position shared between an entity and whoever else holds its handle.
///
/// Writes through any clone are seen by every other clone, within the same
/// frame and across frames.
pub type SharedPosition = Rc<Cell<Vector2>>;

/// Wrap a position in a fresh shared handle
pub fn shared(position: Vector2) -> SharedPosition {
    Rc::new(Cell::new(position))
}

/// Stable entity identifier, unique for the lifetime of a `Game`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Monotonic entity id allocator
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Per-frame update and render contract implemented by every entity kind
pub trait Behavior {
    /// Advance one frame. `position` is this entity's shared handle.
    fn update(&mut self, position: &SharedPosition, ctx: &mut FrameContext);

    /// Draw at `position`
    fn render(&self, position: Vector2, surface: &mut dyn Surface);
}

/// Kind-specific entity data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Ball(Ball),
    Paddle(Paddle),
    Brick(Brick),
}

impl EntityKind {
    fn behavior(&self) -> &dyn Behavior {
        match self {
            EntityKind::Ball(ball) => ball,
            EntityKind::Paddle(paddle) => paddle,
            EntityKind::Brick(brick) => brick,
        }
    }

    fn behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            EntityKind::Ball(ball) => ball,
            EntityKind::Paddle(paddle) => paddle,
            EntityKind::Brick(brick) => brick,
        }
    }
}

/// A game object: identity, shared position, kind data
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    position: SharedPosition,
    pub kind: EntityKind,
}

impl Entity {
    /// Create an entity. Without a position handle it starts at the origin.
    pub fn new(id: EntityId, kind: EntityKind, position: Option<SharedPosition>) -> Self {
        Self {
            id,
            position: position.unwrap_or_else(|| shared(Vector2::ZERO)),
            kind,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Current position
    pub fn position(&self) -> Vector2 {
        self.position.get()
    }

    /// Another handle onto this entity's position
    pub fn position_handle(&self) -> SharedPosition {
        Rc::clone(&self.position)
    }

    pub fn update(&mut self, ctx: &mut FrameContext) {
        let Self { position, kind, .. } = self;
        kind.behavior_mut().update(position, ctx);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.kind.behavior().render(self.position.get(), surface);
    }

    pub fn as_ball(&self) -> Option<&Ball> {
        match &self.kind {
            EntityKind::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    pub fn as_ball_mut(&mut self) -> Option<&mut Ball> {
        match &mut self.kind {
            EntityKind::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    pub fn as_brick(&self) -> Option<&Brick> {
        match &self.kind {
            EntityKind::Brick(brick) => Some(brick),
            _ => None,
        }
    }

    pub fn is_brick(&self) -> bool {
        matches!(self.kind, EntityKind::Brick(_))
    }
}

/// Handle onto an entity that fills a fixed role (ball or paddle)
#[derive(Debug, Clone)]
pub struct RoleHandle {
    pub id: EntityId,
    pub position: SharedPosition,
}

impl RoleHandle {
    pub fn of(entity: &Entity) -> Self {
        Self {
            id: entity.id(),
            position: entity.position_handle(),
        }
    }
}

/// Named roles held by the controller, independent of collection order
#[derive(Debug, Clone)]
pub struct Roles {
    pub ball: RoleHandle,
    pub paddle: RoleHandle,
    /// Paddle dimensions, fixed at setup
    pub paddle_size: Vector2,
}

/// Cross-entity change requested during an update pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// The ball struck the brick with this wave-local index: bounce the ball
    /// vertically and remove the brick
    BrickHit { index: u32 },
    /// All bricks are gone: lay out a fresh wave
    RegenerateWave,
    /// The ball left through the bottom edge
    GameOver,
}

/// What an entity may see and request during one frame
#[derive(Debug)]
pub struct FrameContext {
    /// Seconds since the previous frame
    pub delta: f32,
    /// Screen width and height
    pub screen: Vector2,
    /// Latest pointer position, surface-local
    pub pointer: Vector2,
    roles: Roles,
    entity_count: usize,
    intents: Vec<Intent>,
}

impl FrameContext {
    pub fn new(
        delta: f32,
        screen: Vector2,
        pointer: Vector2,
        roles: Roles,
        entity_count: usize,
    ) -> Self {
        Self {
            delta,
            screen,
            pointer,
            roles,
            entity_count,
            intents: Vec::new(),
        }
    }

    /// Ball position as of now (reflects the ball's own update once it has run)
    pub fn ball_position(&self) -> Vector2 {
        self.roles.ball.position.get()
    }

    /// Paddle position and size
    pub fn paddle_bounds(&self) -> (Vector2, Vector2) {
        (self.roles.paddle.position.get(), self.roles.paddle_size)
    }

    /// Live entity count: the count at the start of the pass minus bricks
    /// already hit in this pass
    pub fn entity_count(&self) -> usize {
        let removed = self
            .intents
            .iter()
            .filter(|i| matches!(i, Intent::BrickHit { .. }))
            .count();
        self.entity_count.saturating_sub(removed)
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn into_intents(self) -> Vec<Intent> {
        self.intents
    }
}
