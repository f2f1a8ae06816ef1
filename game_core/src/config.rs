use crate::components::Side;
use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    // AI paddle tracking speed, kept below the ball speed for balance
    pub const AI_PADDLE_SPEED: f32 = 4.0;

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Vertical speed imparted by a paddle hit at the paddle's very edge
    pub const DEFLECT_SPEED: f32 = 7.0;
}

/// Game configuration
///
/// All positions are top-left-origin screen pixels and all speeds are in
/// pixels per simulation tick (one tick per rendered frame).
/// `paddle_height` must be positive: the deflection formula divides by its
/// half.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub deflect_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            deflect_speed: Params::DEFLECT_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp paddle Y (top edge) to screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    /// Vertical spawn position centering a paddle on the screen
    pub fn paddle_spawn_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Ball spawn position (top-left corner of the ball box)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            780.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-20.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.screen_height - config.paddle_height
        );
        let valid_y = 250.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_config_spawn_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 250.0);
        assert_eq!(config.ball_spawn(), Vec2::new(400.0, 300.0));
    }
}
