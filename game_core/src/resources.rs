use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Human player score
    pub right: u8, // AI score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, target_points: u8) -> Option<Side> {
        if self.left >= target_points {
            Some(Side::Left)
        } else if self.right >= target_points {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Points needed to win a match. The only tunable parameter; anything
/// outside {3, 5, 7} is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchTarget {
    Three,
    #[default]
    Five,
    Seven,
}

impl MatchTarget {
    pub const ALL: [MatchTarget; 3] = [MatchTarget::Three, MatchTarget::Five, MatchTarget::Seven];

    pub fn points(self) -> u8 {
        match self {
            MatchTarget::Three => 3,
            MatchTarget::Five => 5,
            MatchTarget::Seven => 7,
        }
    }
}

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Rally in progress
    Playing,
    /// A side reached the target score; the simulation is frozen
    Over { winner: Side },
}

/// Scores plus the match state machine. The replay menu is a derived view
/// of the phase, so it can never show while a match is running.
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    pub score: Score,
    pub target: MatchTarget,
    pub phase: MatchPhase,
}

impl MatchState {
    pub fn new(target: MatchTarget) -> Self {
        Self {
            score: Score::new(),
            target,
            phase: MatchPhase::Playing,
        }
    }

    /// Record a point for `side` and evaluate termination
    pub fn record_point(&mut self, side: Side) {
        self.score.increment(side);
        if let Some(winner) = self.score.has_winner(self.target.points()) {
            self.phase = MatchPhase::Over { winner };
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Over { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    pub fn show_replay_menu(&self) -> bool {
        self.is_over()
    }

    pub fn reset(&mut self, target: MatchTarget) {
        *self = Self::new(target);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchTarget::default())
    }
}

/// Normalized human input for one tick, sampled by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub move_up: bool,
    pub move_down: bool,
}

impl PlayerInput {
    /// Net direction: -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> i8 {
        self.move_down as i8 - self.move_up as i8
    }
}

/// Events that occurred during this tick, consumed read-only by the client
/// (sound effects)
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
