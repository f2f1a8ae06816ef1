use crate::components::{AiTracker, Ball, Paddle};
use crate::config::Config;
use hecs::World;

/// Move the AI paddle toward the ball's vertical center, one capped step
/// per tick. Inside one step of alignment the paddle holds still so it does
/// not jitter around the ball.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_center_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_entity, ball)) => ball.center_y(config),
            None => return,
        }
    };

    for (_entity, (paddle, _tracker)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        let paddle_center_y = paddle.center_y(config);
        if paddle_center_y < ball_center_y - config.ai_paddle_speed {
            paddle.shift(config.ai_paddle_speed, config);
        } else if paddle_center_y > ball_center_y + config.ai_paddle_speed {
            paddle.shift(-config.ai_paddle_speed, config);
        }
    }
}
