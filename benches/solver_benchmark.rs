use autosweeper::{AutoPlayer, CellState, Difficulty, Game, GameConfig};
use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

#[derive(Debug, Default)]
struct GameStats {
    won: bool,
    cells_remaining: usize,
}

#[derive(Debug, Default)]
struct AggregateStats {
    games: Vec<GameStats>,
}

impl AggregateStats {
    fn games_played(&self) -> usize {
        self.games.len()
    }

    fn success_rate(&self) -> f64 {
        if self.games_played() == 0 {
            return 0.0;
        }
        self.games.iter().filter(|g| g.won).count() as f64 / self.games_played() as f64 * 100.0
    }

    fn average_completion(&self, safe_cells: usize) -> f64 {
        if self.games_played() == 0 {
            return 0.0;
        }
        let completions: Vec<f64> = self
            .games
            .iter()
            .map(|g| (safe_cells - g.cells_remaining.min(safe_cells)) as f64 / safe_cells as f64 * 100.0)
            .collect();
        completions.iter().sum::<f64>() / self.games_played() as f64
    }
}

fn play_single_game(config: GameConfig, seed: u64, player: &AutoPlayer) -> GameStats {
    let mut game = Game::with_seed(config, seed).expect("valid benchmark configuration");
    player.play_until_over(&mut game, Duration::ZERO);

    let covered_safe = game
        .board()
        .positions()
        .filter(|&pos| {
            let cell = game.board().cell(pos).unwrap();
            !cell.is_mine && cell.state != CellState::Revealed
        })
        .count();

    GameStats {
        won: game.did_win(),
        cells_remaining: covered_safe,
    }
}

fn benchmark_difficulties(c: &mut Criterion) {
    let mut group = c.benchmark_group("Playouts");

    let config = GameConfig::default();
    let safe_cells = config.side_length * config.side_length - config.mine_count;

    let difficulties = [
        (Difficulty::Easy, "Easy"),
        (Difficulty::Medium, "Medium"),
        (Difficulty::Hard, "Hard"),
    ];

    for (difficulty, name) in difficulties {
        let player = AutoPlayer::new(difficulty);

        // Performance benchmark over a rotating seed
        let mut seed = 0u64;
        group.bench_function(format!("{name} full game"), |b| {
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let stats = play_single_game(config, seed, &player);
                criterion::black_box(stats)
            });
        });

        // Effectiveness stats (200 seeded games)
        let mut aggregate = AggregateStats::default();
        for seed in 0..200 {
            aggregate.games.push(play_single_game(config, seed, &player));
        }

        println!(
            "\n{} on {}x{}, {} mines:",
            name, config.side_length, config.side_length, config.mine_count
        );
        println!("Success rate: {:.1}%", aggregate.success_rate());
        println!(
            "Average board completion: {:.1}%",
            aggregate.average_completion(safe_cells)
        );
        println!("Games played: {}", aggregate.games_played());
    }

    group.finish();
}

criterion_group!(benches, benchmark_difficulties);
criterion_main!(benches);
