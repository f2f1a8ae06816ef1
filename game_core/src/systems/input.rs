use crate::components::PaddleIntent;
use crate::resources::PlayerInput;
use hecs::World;

/// Copy the sampled human input into the paddle intent. Only the human
/// paddle carries a `PaddleIntent`; the AI paddle is driven by tracking.
pub fn apply_player_input(world: &mut World, input: PlayerInput) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = input.dir();
    }
}
