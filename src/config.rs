/// Side length of the playing field.
pub const BOARD_SIZE: usize = 10;

/// Smallest mine count the setup flow offers.
pub const MIN_MINES: usize = 10;

/// Largest mine count the setup flow offers.
pub const MAX_MINES: usize = 20;

/// Board shape for one session. The engine itself only rejects layouts with
/// no free cell left; the `MIN_MINES..=MAX_MINES` range is a setup-flow
/// convention enforced by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub side_length: usize,
    pub mine_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side_length: BOARD_SIZE,
            mine_count: MIN_MINES,
        }
    }
}

impl GameConfig {
    pub fn new(side_length: usize, mine_count: usize) -> Self {
        Self {
            side_length,
            mine_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.side_length, BOARD_SIZE);
        assert_eq!(config.mine_count, MIN_MINES);
        assert!(config.mine_count >= MIN_MINES && config.mine_count <= MAX_MINES);
    }
}
