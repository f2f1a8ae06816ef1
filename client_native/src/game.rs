use game_core::{
    create_ai_paddle, create_ball, create_player_paddle, Aabb, Ball, Config, Events, GameRng,
    MatchState, MatchTarget, Paddle, PlayerInput, Side,
};
use hecs::World;

/// Owns the simulation world and its resources for the lifetime of the
/// process. A new match reuses the same entities; only the resources are
/// reset.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new() -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::from_entropy();

        create_player_paddle(&mut world, &config);
        create_ai_paddle(&mut world, &config);
        create_ball(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            state: MatchState::default(),
            events: Events::new(),
            rng,
        }
    }

    /// Run one simulation tick with the sampled input
    pub fn tick(&mut self, input: PlayerInput) {
        game_core::tick(
            &mut self.world,
            &self.config,
            &mut self.state,
            &mut self.events,
            input,
            &mut self.rng,
        );
    }

    /// Start a fresh match with the chosen target score
    pub fn start_match(&mut self, target: MatchTarget) {
        game_core::start_match(
            &mut self.world,
            &self.config,
            &mut self.state,
            target,
            &mut self.rng,
        );
    }

    /// Read-only bounding boxes for the renderer
    pub fn paddle_boxes(&self) -> Vec<Aabb> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_entity, paddle)| paddle.aabb(&self.config))
            .collect()
    }

    pub fn ball_box(&self) -> Option<Aabb> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_entity, ball)| ball.aabb(&self.config))
    }

    pub fn winner_label(&self) -> Option<&'static str> {
        self.state.winner().map(|side| match side {
            Side::Left => "PLAYER",
            Side::Right => "AI",
        })
    }
}
