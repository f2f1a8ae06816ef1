pub mod components;
pub mod config;
pub mod geom;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geom::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one tick.
///
/// Exactly one tick runs per client frame; all speeds are per-tick, so
/// there is no time resource. While the match is over the simulation is
/// frozen and only replay-menu input (handled by the client) has any
/// effect.
pub fn tick(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    input: PlayerInput,
    rng: &mut GameRng,
) {
    events.clear();

    if state.is_over() {
        return;
    }

    // 1. Apply sampled input to the human paddle
    apply_player_input(world, input);
    move_paddles(world, config);

    // 2. Move ball (bounces off top/bottom walls)
    move_ball(world, config, events);

    // 3. Resolve paddle collisions
    check_collisions(world, config, events);

    // 4. Check scoring edges; re-serve unless the match just ended
    check_scoring(world, config, state, events, rng);

    // 5. AI follows the (possibly just re-served) ball
    track_ball(world, config);
}

/// Start a new match with the chosen target score. Scores are cleared,
/// both paddles re-center and the ball re-serves; entities are reused.
pub fn start_match(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    target: MatchTarget,
    rng: &mut GameRng,
) {
    state.reset(target);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_spawn_y();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
    }
}

/// Helper to create the human (left) paddle entity
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Left, config.paddle_spawn_y()),
        PaddleIntent::new(),
    ))
}

/// Helper to create the AI (right) paddle entity
pub fn create_ai_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Right, config.paddle_spawn_y()), AiTracker))
}

/// Helper to create the ball entity with a random serve direction
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    world.spawn((Ball::new(config.ball_spawn(), config, rng),))
}
