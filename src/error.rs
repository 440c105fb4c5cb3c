use thiserror::Error;

/// The only failure the engine reports. Out-of-range clicks, commands after
/// the game is over, re-reveals and the like are deliberate no-ops instead of
/// errors, so callers never have to handle them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot place {mine_count} mines on a {side_length}x{side_length} board (max {max})")]
    InvalidConfiguration {
        side_length: usize,
        mine_count: usize,
        max: usize,
    },
}
