use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Events;
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.shift(intent.dir as f32 * config.paddle_speed, config);
        }
    }
}

/// Advance the ball by its velocity and bounce it off the top and bottom
/// walls. Horizontal overflow is left alone here; it means a point was
/// scored and is resolved by the scoring system.
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;

        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + config.ball_size >= config.screen_height {
            ball.pos.y = config.screen_height - config.ball_size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player_paddle, Ball, GameRng, PaddleIntent};
    use glam::Vec2;

    fn ball_state(world: &World) -> (Vec2, Vec2) {
        let mut query = world.query::<&Ball>();
        let (_entity, ball) = query.iter().next().expect("ball should exist");
        (ball.pos, ball.vel)
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_paddle_moves_by_intent() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_player_paddle(&mut world, &config);
        let start_y = config.paddle_spawn_y();

        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = 1;
        move_paddles(&mut world, &config);
        assert_eq!(
            world.get::<&Paddle>(paddle).unwrap().y,
            start_y + config.paddle_speed
        );

        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = -1;
        move_paddles(&mut world, &config);
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, start_y);
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(1);
        create_ball(&mut world, &config, &mut rng);
        set_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(5.0, 3.0));
        let mut events = Events::new();

        move_ball(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(pos, Vec2::new(105.0, 103.0));
        assert_eq!(vel, Vec2::new(5.0, 3.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(1);
        create_ball(&mut world, &config, &mut rng);
        set_ball(&mut world, Vec2::new(100.0, 2.0), Vec2::new(5.0, -3.0));
        let mut events = Events::new();

        move_ball(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(pos.y, 0.0, "Ball should be clamped to the top edge");
        assert_eq!(vel.y, 3.0, "Vertical velocity should flip exactly once");
        assert_eq!(vel.x, 5.0, "Horizontal velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(1);
        create_ball(&mut world, &config, &mut rng);
        let near_bottom = config.screen_height - config.ball_size - 2.0;
        set_ball(&mut world, Vec2::new(100.0, near_bottom), Vec2::new(5.0, 3.0));
        let mut events = Events::new();

        move_ball(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(
            pos.y,
            config.screen_height - config.ball_size,
            "Ball should be clamped to the bottom edge"
        );
        assert_eq!(vel.y, -3.0, "Vertical velocity should flip exactly once");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_horizontal_overflow_is_not_clamped() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(1);
        create_ball(&mut world, &config, &mut rng);
        set_ball(&mut world, Vec2::new(2.0, 300.0), Vec2::new(-5.0, 0.0));
        let mut events = Events::new();

        move_ball(&mut world, &config, &mut events);

        let (pos, _vel) = ball_state(&world);
        assert_eq!(pos.x, -3.0, "Scoring overflow is left for the scoring system");
        assert!(!events.ball_hit_wall);
    }
}
