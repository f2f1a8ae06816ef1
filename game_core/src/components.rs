use crate::config::Config;
use crate::geom::Aabb;
use crate::resources::GameRng;
use glam::Vec2;
use rand::Rng;

/// Which half of the screen a paddle defends. The left paddle is the human
/// player, the right paddle is the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component. X is fixed per side (see `Config::paddle_x`); only the
/// top edge Y moves, and it always stays inside the screen.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Shift the paddle vertically, clamped to screen bounds
    pub fn shift(&mut self, delta_y: f32, config: &Config) {
        self.y = config.clamp_paddle_y(self.y + delta_y);
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Movement intent for the human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker component for the paddle driven by the tracking AI
#[derive(Debug, Clone, Copy)]
pub struct AiTracker;

/// Ball component. Remembers its spawn point so it can return there after a
/// point is scored.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    spawn: Vec2,
}

impl Ball {
    pub fn new(spawn: Vec2, config: &Config, rng: &mut GameRng) -> Self {
        Self {
            pos: spawn,
            vel: Self::random_velocity(config, rng),
            spawn,
        }
    }

    /// Return to the spawn point with a fresh random direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = self.spawn;
        self.vel = Self::random_velocity(config, rng);
    }

    /// Each axis is a coin flip, so the serve is never axis-aligned
    fn random_velocity(config: &Config, rng: &mut GameRng) -> Vec2 {
        let vx = if rng.0.gen_bool(0.5) {
            config.ball_speed_x
        } else {
            -config.ball_speed_x
        };
        let vy = if rng.0.gen_bool(0.5) {
            config.ball_speed_y
        } else {
            -config.ball_speed_y
        };
        Vec2::new(vx, vy)
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_min_size(self.pos, Vec2::splat(config.ball_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_shift_clamps_to_bounds() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, config.paddle_spawn_y());

        paddle.shift(-10_000.0, &config);
        assert_eq!(paddle.y, 0.0, "Paddle should stop at the top edge");

        paddle.shift(10_000.0, &config);
        assert_eq!(
            paddle.y,
            config.screen_height - config.paddle_height,
            "Paddle should stop at the bottom edge"
        );
    }

    #[test]
    fn test_ball_reset_returns_to_spawn() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(config.ball_spawn(), &config, &mut rng);

        ball.pos = Vec2::new(-3.0, 17.0);
        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
    }

    #[test]
    fn test_ball_velocity_drawn_from_fixed_set() {
        let config = Config::new();
        let mut rng = GameRng::new(42);
        let mut ball = Ball::new(config.ball_spawn(), &config, &mut rng);

        for _ in 0..32 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.vel.x.abs(), config.ball_speed_x);
            assert_eq!(ball.vel.y.abs(), config.ball_speed_y);
        }
    }
}
