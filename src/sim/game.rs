//! Game controller and frame loop
//!
//! `Game` owns the entity collection, the run-state flag and the latest
//! pointer position. Each tick clears the surface, then updates and renders
//! every entity in collection order. Entity updates only request changes
//! (`Intent`); the controller applies them once the pass is over, in the order
//! they were requested. A brick hit during a tick is therefore still drawn in
//! that tick and gone from the next one, and a wave generated during a tick is
//! first drawn in the next one.

use super::entity::{Entity, EntityIds, EntityKind, FrameContext, Intent, RoleHandle, Roles, shared};
use super::state::{Ball, Brick, GameEvent, GameStats, Paddle, RunState};
use super::vector::Vector2;
use super::wave::generate_wave;
use crate::renderer::Surface;
use crate::settings::Settings;

/// The controller
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    entities: Vec<Entity>,
    roles: Roles,
    ids: EntityIds,
    run_state: RunState,
    pointer: Vector2,
    events: Vec<GameEvent>,
    stats: GameStats,
}

impl Game {
    /// Set up the ball and paddle. No bricks exist until `start`.
    pub fn new(settings: Settings) -> Self {
        let mut ids = EntityIds::default();
        let screen = settings.screen;

        let ball_start = Vector2::new(screen.x / 2.0, screen.y - settings.ball.start_height);
        let ball = Entity::new(
            ids.next_id(),
            EntityKind::Ball(Ball::new(
                settings.ball.velocity,
                settings.ball.radius,
                settings.ball.max_deflection,
            )),
            Some(shared(ball_start)),
        );

        let paddle_size = settings.paddle.size;
        let paddle_start = Vector2::new((screen.x - paddle_size.x) / 2.0, screen.y - paddle_size.y);
        let paddle = Entity::new(
            ids.next_id(),
            EntityKind::Paddle(Paddle::new(paddle_size)),
            Some(shared(paddle_start)),
        );

        let roles = Roles {
            ball: RoleHandle::of(&ball),
            paddle: RoleHandle::of(&paddle),
            paddle_size,
        };

        Self {
            settings,
            entities: vec![ball, paddle],
            roles,
            ids,
            run_state: RunState::Stopped,
            // Centre, so the paddle holds still until the first pointer event
            pointer: Vector2::new(screen.x / 2.0, screen.y / 2.0),
            events: Vec::new(),
            stats: GameStats::default(),
        }
    }

    /// Lay out the first wave and begin running.
    ///
    /// Returns false (and does nothing) if already running or over; on true
    /// the caller schedules the first frame.
    pub fn start(&mut self) -> bool {
        match self.run_state {
            RunState::Running => return false,
            RunState::Over => {
                log::warn!("Game is over, ignoring start");
                return false;
            }
            RunState::Stopped => {}
        }
        self.regenerate_wave();
        self.run_state = RunState::Running;
        self.events.push(GameEvent::Started);
        log::info!("Game started ({} entities)", self.entities.len());
        true
    }

    /// Stop processing frames. Drawing state is left as it is.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Stopped;
        self.events.push(GameEvent::Stopped);
        log::info!("Game stopped");
    }

    /// Stop processing frames and tell the host to show its end-of-game notice
    pub fn game_over(&mut self) {
        self.run_state = RunState::Over;
        self.events.push(GameEvent::GameOver);
        log::info!(
            "Game over after {} frames, {} waves, {} bricks",
            self.stats.frames,
            self.stats.waves,
            self.stats.bricks_destroyed
        );
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Record the latest pointer position (surface-local)
    pub fn set_pointer(&mut self, pointer: Vector2) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Vector2 {
        self.pointer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Process one frame. Returns whether another frame should be scheduled.
    pub fn tick(&mut self, delta: f32, surface: &mut dyn Surface) -> bool {
        if !self.is_running() {
            return false;
        }

        surface.clear();

        let mut ctx = FrameContext::new(
            delta,
            self.settings.screen,
            self.pointer,
            self.roles.clone(),
            self.entities.len(),
        );
        for entity in &mut self.entities {
            entity.update(&mut ctx);
            entity.render(surface);
        }

        self.stats.frames += 1;
        for intent in ctx.into_intents() {
            self.apply(intent);
        }

        self.is_running()
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::BrickHit { index } => {
                // One flip per hit: two bricks struck together cancel out
                if let Some(ball) = self.ball_mut() {
                    ball.velocity.y = -ball.velocity.y;
                }
                self.entities
                    .retain(|e| e.as_brick().is_none_or(|b| b.index != index));
                self.stats.bricks_destroyed += 1;
                self.events.push(GameEvent::BrickDestroyed { index });
                log::debug!("Brick {} destroyed", index);
            }
            Intent::RegenerateWave => self.regenerate_wave(),
            Intent::GameOver => self.game_over(),
        }
    }

    /// Replace any surviving bricks with a fresh wave
    fn regenerate_wave(&mut self) {
        self.entities.retain(|e| !e.is_brick());
        let bricks = generate_wave(&self.settings.bricks, &mut self.ids);
        let count = bricks.len();
        self.entities.extend(bricks);

        self.stats.waves += 1;
        self.events.push(GameEvent::WaveGenerated {
            wave: self.stats.waves,
            bricks: count,
        });
        log::info!("Wave {} generated with {} bricks", self.stats.waves, count);
    }

    fn ball_mut(&mut self) -> Option<&mut Ball> {
        let id = self.roles.ball.id;
        let ball = self
            .entities
            .iter_mut()
            .find(|e| e.id() == id)
            .and_then(Entity::as_ball_mut);
        if ball.is_none() {
            log::warn!("Ball entity {:?} missing from collection", id);
        }
        ball
    }

    /// All entities in processing order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Live bricks with their positions
    pub fn bricks(&self) -> impl Iterator<Item = (Vector2, &Brick)> {
        self.entities
            .iter()
            .filter_map(|e| e.as_brick().map(|b| (e.position(), b)))
    }

    pub fn ball_position(&self) -> Vector2 {
        self.roles.ball.position.get()
    }

    pub fn ball_velocity(&self) -> Option<Vector2> {
        let id = self.roles.ball.id;
        self.entities
            .iter()
            .find(|e| e.id() == id)
            .and_then(Entity::as_ball)
            .map(|b| b.velocity)
    }

    pub fn paddle_position(&self) -> Vector2 {
        self.roles.paddle.position.get()
    }

    /// Drain events produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }
}
