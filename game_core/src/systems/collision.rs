use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;
use hecs::World;

/// Resolve ball-vs-paddle collisions.
///
/// A hit only counts while the ball is moving toward the paddle, so a ball
/// that already bounced and still overlaps cannot bounce again. The hit
/// position on the paddle sets the exit angle: the farther from the paddle
/// center, the steeper the deflection.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_entity, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let paddle_box = paddle.aabb(config);
            if !ball.aabb(config).overlaps(&paddle_box) {
                continue;
            }

            let moving_toward = match paddle.side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            };
            if !moving_toward {
                continue;
            }

            // -1 at the paddle bottom, +1 at the top, 0 dead center
            let relative_intersect = (paddle.center_y(config) - ball.center_y(config))
                / (config.paddle_height / 2.0);
            ball.vel.y = -relative_intersect * config.deflect_speed;

            // Send the ball away from the paddle and nudge it one pixel
            // clear so the next tick cannot re-collide
            match paddle.side {
                Side::Left => {
                    ball.vel.x = ball.vel.x.abs();
                    ball.pos.x = paddle_box.max.x + 1.0;
                }
                Side::Right => {
                    ball.vel.x = -ball.vel.x.abs();
                    ball.pos.x = paddle_box.min.x - config.ball_size - 1.0;
                }
            }

            events.ball_hit_paddle = true;
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ai_paddle, create_ball, create_player_paddle, GameRng};
    use glam::Vec2;

    fn setup() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(99);
        create_player_paddle(&mut world, &config);
        create_ai_paddle(&mut world, &config);
        create_ball(&mut world, &config, &mut rng);
        (world, config, Events::new())
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn ball_state(world: &World) -> (Vec2, Vec2) {
        let mut query = world.query::<&Ball>();
        let (_entity, ball) = query.iter().next().expect("ball should exist");
        (ball.pos, ball.vel)
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, config, mut events) = setup();
        // Paddle spawns at y 250..350; overlap its face dead center
        set_ball(&mut world, Vec2::new(15.0, 296.5), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert!(vel.x > 0.0, "Ball should exit moving right");
        assert_eq!(vel.x, 5.0, "Horizontal speed magnitude is preserved");
        assert_eq!(
            pos.x,
            config.paddle_x(Side::Left) + config.paddle_width + 1.0,
            "Ball should sit one pixel clear of the paddle"
        );
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut world, config, mut events) = setup();
        set_ball(&mut world, Vec2::new(776.0, 296.5), Vec2::new(5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert!(vel.x < 0.0, "Ball should exit moving left");
        assert_eq!(
            pos.x,
            config.paddle_x(Side::Right) - config.ball_size - 1.0,
            "Ball should sit one pixel clear of the paddle"
        );
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_deflection_angle_from_hit_position() {
        let (mut world, config, mut events) = setup();
        // Ball center 20 px above the paddle center (300.0)
        set_ball(&mut world, Vec2::new(15.0, 276.5), Vec2::new(-5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        let (_pos, vel) = ball_state(&world);
        // relative_intersect = (300 - 280) / 50 = 0.4; vy = -0.4 * 7
        assert_eq!(vel.y, -2.8, "Hit above center must deflect upward");
    }

    #[test]
    fn test_deflection_is_deterministic() {
        for _ in 0..3 {
            let (mut world, config, mut events) = setup();
            set_ball(&mut world, Vec2::new(15.0, 320.0), Vec2::new(-5.0, -3.0));
            check_collisions(&mut world, &config, &mut events);
            let (_pos, vel) = ball_state(&world);
            // relative_intersect = (300 - 323.5) / 50 = -0.47
            assert_eq!(vel.y, 0.47 * 7.0);
        }
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        let (mut world, config, mut events) = setup();
        set_ball(&mut world, Vec2::new(15.0, 296.5), Vec2::new(5.0, 2.0));

        check_collisions(&mut world, &config, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel, Vec2::new(5.0, 2.0), "Ball keeps its velocity");
        assert_eq!(pos, Vec2::new(15.0, 296.5), "Ball is not repositioned");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let (mut world, config, mut events) = setup();
        set_ball(&mut world, Vec2::new(400.0, 296.5), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }
}
