use super::board::SolverBoard;
use super::traits::{SolverAction, Strategy};
use rand::rngs::StdRng;
use rand::Rng;

/// Last resort: a uniform pick among the covered cells. The only tier that
/// consumes session randomness, so deductions stay reproducible.
pub struct RandomGuessStrategy;

impl Strategy for RandomGuessStrategy {
    fn name(&self) -> &str {
        "random-guess"
    }

    fn propose(&self, board: &SolverBoard, rng: &mut StdRng) -> Vec<SolverAction> {
        let covered = board.covered_positions();
        if covered.is_empty() {
            return Vec::new();
        }

        let pick = covered[rng.gen_range(0..covered.len())];
        vec![SolverAction::Reveal(pick)]
    }
}
