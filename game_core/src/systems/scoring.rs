use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, MatchState};
use hecs::World;

/// Check whether the ball left the arena and score accordingly.
///
/// Exiting the left edge is a point for the AI, exiting the right edge a
/// point for the human. The ball is re-served from its spawn point unless
/// the point ended the match, in which case it stays frozen where it left.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            state.record_point(Side::Right);
            events.right_scored = true;
            if !state.is_over() {
                ball.reset(config, rng);
            }
        } else if ball.pos.x >= config.screen_width {
            state.record_point(Side::Left);
            events.left_scored = true;
            if !state.is_over() {
                ball.reset(config, rng);
            }
        }
    }
}
