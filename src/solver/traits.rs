use super::board::SolverBoard;
use crate::Position;
use rand::rngs::StdRng;

/// A single command the automated player wants issued through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverAction {
    Reveal(Position),
    Flag(Position),
}

impl SolverAction {
    pub fn position(&self) -> Position {
        match self {
            SolverAction::Reveal(pos) | SolverAction::Flag(pos) => *pos,
        }
    }
}

/// One deduction tier. `propose` returns the commands the tier can justify
/// from the visible board alone; empty means it has nothing. Only the
/// guessing tier touches the RNG.
pub trait Strategy {
    fn name(&self) -> &str;

    fn propose(&self, board: &SolverBoard, rng: &mut StdRng) -> Vec<SolverAction>;
}
