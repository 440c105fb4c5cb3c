mod board;
mod counting;
mod guess;
mod pattern;
mod traits;

pub use board::{SolverBoard, SolverCell};
pub use counting::CountingStrategy;
pub use guess::RandomGuessStrategy;
pub use pattern::OneTwoOneStrategy;
pub use traits::{SolverAction, Strategy};

use crate::Game;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::debug;

/// Deduction depth of the automated player. Every chain ends with the
/// guessing tier, so a proposal exists as long as covered cells remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Ordered strategy tiers for one difficulty; the first tier with a
/// non-empty proposal wins.
pub struct StrategyChain {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyChain {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let strategies: Vec<Box<dyn Strategy>> = match difficulty {
            Difficulty::Easy => vec![Box::new(RandomGuessStrategy)],
            Difficulty::Medium => vec![Box::new(CountingStrategy), Box::new(RandomGuessStrategy)],
            Difficulty::Hard => vec![
                Box::new(CountingStrategy),
                Box::new(OneTwoOneStrategy),
                Box::new(RandomGuessStrategy),
            ],
        };
        Self::new(strategies)
    }

    pub fn propose(&self, board: &SolverBoard, rng: &mut StdRng) -> Vec<SolverAction> {
        for strategy in &self.strategies {
            let actions = strategy.propose(board, rng);
            if !actions.is_empty() {
                debug!(
                    strategy = strategy.name(),
                    moves = actions.len(),
                    "strategy proposed"
                );
                return actions;
            }
        }
        Vec::new()
    }
}

/// Plays a session at the configured difficulty. Holds no board state of
/// its own: it reads through `SolverBoard` and moves through the session's
/// command interface, never touching `Board` directly.
pub struct AutoPlayer {
    difficulty: Difficulty,
    chain: StrategyChain,
}

impl AutoPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            chain: StrategyChain::for_difficulty(difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Makes one automated move (which may be a several-command proposal,
    /// e.g. the 1-2-1 application). Returns `false` when the session is
    /// over or no tier produced a command.
    pub fn choose_and_play(&self, game: &mut Game) -> bool {
        if game.is_over() {
            return false;
        }

        let actions = {
            let (board, rng) = game.solver_parts();
            let view = SolverBoard::new(board);
            self.chain.propose(&view, rng)
        };
        if actions.is_empty() {
            return false;
        }

        game.set_ai_turn(true);
        for action in actions {
            match action {
                SolverAction::Reveal(pos) => game.click(pos),
                SolverAction::Flag(pos) => game.toggle_flag(pos),
            }
        }
        game.set_ai_turn(false);
        true
    }

    /// Drives the session until it is over or no move exists, pausing
    /// `pace` between moves so an observer can follow along. Zero pace
    /// plays flat out.
    pub fn play_until_over(&self, game: &mut Game, pace: Duration) {
        while self.choose_and_play(game) {
            if game.is_over() {
                break;
            }
            if !pace.is_zero() {
                std::thread::sleep(pace);
            }
        }
    }
}
