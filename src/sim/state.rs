//! Entity kinds and controller state
//!
//! Ball, paddle and brick behaviors, plus the run-state flag, outbound events
//! and in-memory stats owned by the controller.

use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::entity::{Behavior, FrameContext, Intent, SharedPosition};
use super::vector::Vector2;
use crate::renderer::{Surface, colors};

/// Whether frames are being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    /// Ball lost; the game cannot be started again
    Over,
}

/// Notification for the host, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Stopped,
    /// A fresh brick grid was laid out
    WaveGenerated { wave: u32, bricks: usize },
    BrickDestroyed { index: u32 },
    /// Ball lost; the host swaps in its end-of-game notice
    GameOver,
}

/// Counters for the current session (never persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub frames: u64,
    pub waves: u32,
    pub bricks_destroyed: u32,
}

/// The ball.
///
/// `velocity` is a per-frame displacement and the only field that changes
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub velocity: Vector2,
    pub radius: f32,
    /// Limit on horizontal speed after a paddle bounce
    pub max_deflection: f32,
}

impl Ball {
    pub fn new(velocity: Vector2, radius: f32, max_deflection: f32) -> Self {
        Self {
            velocity,
            radius,
            max_deflection,
        }
    }
}

impl Behavior for Ball {
    fn update(&mut self, position: &SharedPosition, ctx: &mut FrameContext) {
        let r = self.radius;
        let current = position.get();
        let next = current + self.velocity;

        // Side walls look ahead; the top wall checks the current position
        if next.x > ctx.screen.x - r || next.x < r {
            self.velocity.x = -self.velocity.x;
        }
        if current.y + self.velocity.y < r {
            self.velocity.y = -self.velocity.y;
        }

        let (paddle_pos, paddle_size) = ctx.paddle_bounds();
        if collides(next, paddle_pos, paddle_size) {
            self.velocity.y = -self.velocity.y;
            if ctx.entity_count() == 2 {
                ctx.push(Intent::RegenerateWave);
            }
            let paddle_center = paddle_pos.x + paddle_size.x / 2.0;
            self.velocity.x =
                (current.x - paddle_center).clamp(-self.max_deflection, self.max_deflection);
        }

        // Runs after the paddle bounce, against the possibly flipped velocity
        if current.y + self.velocity.y > ctx.screen.y - r {
            ctx.push(Intent::GameOver);
        }

        position.set(current + self.velocity);
    }

    fn render(&self, position: Vector2, surface: &mut dyn Surface) {
        surface.fill_circle(position, self.radius, colors::ENTITY);
    }
}

/// The pointer-driven paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub size: Vector2,
}

impl Paddle {
    pub fn new(size: Vector2) -> Self {
        Self { size }
    }
}

impl Behavior for Paddle {
    fn update(&mut self, position: &SharedPosition, ctx: &mut FrameContext) {
        let mut pos = position.get();
        let max_x = ctx.screen.x - self.size.x;
        pos.x = (ctx.pointer.x - self.size.x / 2.0).min(max_x).max(0.0);
        position.set(pos);
    }

    fn render(&self, position: Vector2, surface: &mut dyn Surface) {
        surface.fill_rect(position, self.size, colors::ENTITY);
    }
}

/// A destructible brick.
///
/// `index` identifies the brick within its wave only; every new wave numbers
/// its bricks from zero again.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub size: Vector2,
    pub index: u32,
}

impl Brick {
    pub fn new(size: Vector2, index: u32) -> Self {
        Self { size, index }
    }
}

impl Behavior for Brick {
    fn update(&mut self, position: &SharedPosition, ctx: &mut FrameContext) {
        // Tested against where the ball is now, not where it is heading
        if collides(ctx.ball_position(), position.get(), self.size) {
            ctx.push(Intent::BrickHit { index: self.index });
        }
    }

    fn render(&self, position: Vector2, surface: &mut dyn Surface) {
        surface.fill_rect(position, self.size, colors::ENTITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::entity::{EntityId, RoleHandle, Roles, shared};

    const SCREEN: Vector2 = Vector2::new(480.0, 320.0);
    const PADDLE_SIZE: Vector2 = Vector2::new(75.0, 10.0);

    fn context(ball: &SharedPosition, paddle_at: Vector2, entity_count: usize) -> FrameContext {
        let roles = Roles {
            ball: RoleHandle {
                id: EntityId(1),
                position: ball.clone(),
            },
            paddle: RoleHandle {
                id: EntityId(2),
                position: shared(paddle_at),
            },
            paddle_size: PADDLE_SIZE,
        };
        FrameContext::new(1.0 / 60.0, SCREEN, Vector2::new(240.0, 160.0), roles, entity_count)
    }

    fn step(ball: &mut Ball, at: Vector2, paddle_at: Vector2, count: usize) -> (Vector2, Vec<Intent>) {
        let position = shared(at);
        let mut ctx = context(&position, paddle_at, count);
        ball.update(&position, &mut ctx);
        (position.get(), ctx.into_intents())
    }

    const PADDLE_FAR: Vector2 = Vector2::new(0.0, 310.0);

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vector2::new(2.0, -2.0), 10.0, 2.0);
        let (pos, intents) = step(&mut ball, Vector2::new(240.0, 200.0), PADDLE_FAR, 17);
        assert_eq!(pos, Vector2::new(242.0, 198.0));
        assert_eq!(ball.velocity, Vector2::new(2.0, -2.0));
        assert!(intents.is_empty());
    }

    #[test]
    fn test_left_wall_reverses_x() {
        let mut ball = Ball::new(Vector2::new(-2.0, 1.0), 10.0, 2.0);
        let (pos, _) = step(&mut ball, Vector2::new(11.0, 100.0), PADDLE_FAR, 17);
        assert_eq!(ball.velocity, Vector2::new(2.0, 1.0));
        assert_eq!(pos, Vector2::new(13.0, 101.0));
    }

    #[test]
    fn test_right_wall_reverses_x() {
        let mut ball = Ball::new(Vector2::new(3.0, 1.0), 10.0, 2.0);
        step(&mut ball, Vector2::new(468.0, 100.0), PADDLE_FAR, 17);
        assert_eq!(ball.velocity, Vector2::new(-3.0, 1.0));
    }

    #[test]
    fn test_top_wall_uses_current_position() {
        let mut ball = Ball::new(Vector2::new(1.0, -2.0), 10.0, 2.0);
        let (pos, _) = step(&mut ball, Vector2::new(100.0, 11.0), PADDLE_FAR, 17);
        assert_eq!(ball.velocity, Vector2::new(1.0, 2.0));
        assert_eq!(pos, Vector2::new(101.0, 13.0));
    }

    #[test]
    fn test_paddle_bounce_clamps_deflection() {
        // Paddle spans x 100..175, centre 137.5
        let paddle_at = Vector2::new(100.0, 310.0);

        let mut ball = Ball::new(Vector2::new(1.0, 6.0), 10.0, 2.0);
        let (_, intents) = step(&mut ball, Vector2::new(110.0, 305.0), paddle_at, 17);
        assert_eq!(ball.velocity, Vector2::new(-2.0, -6.0));
        assert!(intents.is_empty());

        let mut ball = Ball::new(Vector2::new(0.0, 3.0), 10.0, 2.0);
        step(&mut ball, Vector2::new(138.5, 308.0), paddle_at, 17);
        assert_eq!(ball.velocity, Vector2::new(1.0, -3.0));
    }

    #[test]
    fn test_paddle_miss_outside_horizontal_bounds() {
        let paddle_at = Vector2::new(100.0, 310.0);
        let mut ball = Ball::new(Vector2::new(1.0, 2.0), 10.0, 2.0);
        let (_, intents) = step(&mut ball, Vector2::new(300.0, 305.0), paddle_at, 17);
        assert_eq!(ball.velocity, Vector2::new(1.0, 2.0));
        assert!(intents.is_empty());
    }

    #[test]
    fn test_paddle_bounce_with_no_bricks_requests_wave() {
        let paddle_at = Vector2::new(100.0, 310.0);
        let mut ball = Ball::new(Vector2::new(1.0, 2.0), 10.0, 2.0);
        let (_, intents) = step(&mut ball, Vector2::new(137.5, 309.0), paddle_at, 2);
        assert_eq!(intents, vec![Intent::RegenerateWave]);
        assert_eq!(ball.velocity, Vector2::new(0.0, -2.0));
    }

    #[test]
    fn test_bottom_edge_signals_game_over_and_still_moves() {
        let mut ball = Ball::new(Vector2::new(2.0, 2.0), 10.0, 2.0);
        let (pos, intents) = step(&mut ball, Vector2::new(100.0, 309.5), PADDLE_FAR, 17);
        assert_eq!(intents, vec![Intent::GameOver]);
        assert_eq!(pos, Vector2::new(102.0, 311.5));
    }

    #[test]
    fn test_paddle_tracks_pointer_centered_and_clamped() {
        let mut paddle = Paddle::new(PADDLE_SIZE);
        let position = shared(Vector2::new(0.0, 310.0));
        let ball = shared(Vector2::ZERO);

        let mut ctx = context(&ball, Vector2::ZERO, 2);
        ctx.pointer = Vector2::new(200.0, 5.0);
        paddle.update(&position, &mut ctx);
        assert_eq!(position.get(), Vector2::new(162.5, 310.0));

        ctx.pointer = Vector2::new(5.0, 0.0);
        paddle.update(&position, &mut ctx);
        assert_eq!(position.get().x, 0.0);

        ctx.pointer = Vector2::new(479.0, 0.0);
        paddle.update(&position, &mut ctx);
        assert_eq!(position.get().x, 480.0 - 75.0);
    }

    #[test]
    fn test_brick_hit_uses_current_ball_position() {
        let mut brick = Brick::new(Vector2::new(75.0, 20.0), 4);
        let position = shared(Vector2::new(30.0, 30.0));

        let ball = shared(Vector2::new(50.0, 40.0));
        let mut ctx = context(&ball, PADDLE_FAR, 17);
        brick.update(&position, &mut ctx);
        assert_eq!(ctx.intents(), &[Intent::BrickHit { index: 4 }]);

        let ball = shared(Vector2::new(50.0, 60.0));
        let mut ctx = context(&ball, PADDLE_FAR, 17);
        brick.update(&position, &mut ctx);
        assert!(ctx.intents().is_empty());
    }

    #[test]
    fn test_render_shapes() {
        let mut surface = DrawList::default();
        Ball::new(Vector2::ZERO, 10.0, 2.0).render(Vector2::new(5.0, 6.0), &mut surface);
        Brick::new(Vector2::new(75.0, 20.0), 0).render(Vector2::new(30.0, 30.0), &mut surface);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Circle {
                    center: Vector2::new(5.0, 6.0),
                    radius: 10.0,
                    color: colors::ENTITY,
                },
                DrawCommand::Rect {
                    position: Vector2::new(30.0, 30.0),
                    size: Vector2::new(75.0, 20.0),
                    color: colors::ENTITY,
                },
            ]
        );
    }
}
