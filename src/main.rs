use autosweeper::{
    AutoPlayMode, AutoPlayOptions, AutoPlayer, BoardSnapshot, CellState, CellView, Difficulty,
    Game, GameConfig, GameError, Position, BOARD_SIZE, MAX_MINES, MIN_MINES,
};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Delay between automated moves in solver mode, so the playout is
/// watchable.
const SOLVER_PACE: Duration = Duration::from_secs(1);

enum Command {
    Reveal(Position),
    Flag(Position),
    NewGame,
    Quit,
}

fn main() {
    tracing_subscriber::fmt::init();

    match run_game() {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game() -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mine_count = prompt_mine_count(&mut lines);
    let options = prompt_auto_play(&mut lines);

    let mut game = Game::new(GameConfig::new(BOARD_SIZE, mine_count))?;
    game.set_auto_play(options);
    let player = AutoPlayer::new(options.difficulty);

    loop {
        print_board(&game.snapshot());
        if game.is_over() {
            if game.did_win() {
                println!("You won!");
            } else {
                println!("Game over!");
            }
            println!("'n' deals a new board, 'q' quits.");
        }

        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                game = game.restart()?;
                continue;
            }
            Some(Command::Reveal(pos)) => game.click(pos),
            Some(Command::Flag(pos)) => game.toggle_flag(pos),
            None => {
                println!("Commands: r ROW COL, f ROW COL, n (new game), q (quit)");
                continue;
            }
        }

        if !game.is_over() {
            match game.auto_play().mode {
                AutoPlayMode::Alternating => {
                    player.choose_and_play(&mut game);
                }
                AutoPlayMode::Solver => {
                    // The solver takes over once the opening click is made.
                    if game.first_click_taken() {
                        run_solver_loop(&player, &mut game);
                    }
                }
                AutoPlayMode::Off => {}
            }
        }
    }

    Ok(())
}

fn run_solver_loop(player: &AutoPlayer, game: &mut Game) {
    while player.choose_and_play(game) {
        print_board(&game.snapshot());
        if game.is_over() {
            break;
        }
        std::thread::sleep(SOLVER_PACE);
    }
}

fn prompt_mine_count(lines: &mut impl Iterator<Item = io::Result<String>>) -> usize {
    loop {
        print!("Mines ({MIN_MINES}-{MAX_MINES}) [{MIN_MINES}]: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return MIN_MINES,
        };
        let line = line.trim();
        if line.is_empty() {
            return MIN_MINES;
        }
        match line.parse() {
            Ok(count) if (MIN_MINES..=MAX_MINES).contains(&count) => return count,
            _ => println!("Pick a number between {MIN_MINES} and {MAX_MINES}."),
        }
    }
}

fn prompt_auto_play(lines: &mut impl Iterator<Item = io::Result<String>>) -> AutoPlayOptions {
    loop {
        print!("AI mode (off / alt EASY|MEDIUM|HARD / solver EASY|MEDIUM|HARD) [off]: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return AutoPlayOptions::default(),
        };
        let mut parts = line.split_whitespace();

        let mode = match parts.next() {
            None | Some("off") => return AutoPlayOptions::default(),
            Some("alt") | Some("alternating") => AutoPlayMode::Alternating,
            Some("solver") => AutoPlayMode::Solver,
            Some(_) => {
                println!("Unknown mode.");
                continue;
            }
        };
        let difficulty = match parts.next() {
            None | Some("easy") => Difficulty::Easy,
            Some("medium") => Difficulty::Medium,
            Some("hard") => Difficulty::Hard,
            Some(_) => {
                println!("Unknown difficulty.");
                continue;
            }
        };
        return AutoPlayOptions { mode, difficulty };
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "q" | "quit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewGame),
        "r" => parse_position(&mut parts).map(Command::Reveal),
        "f" => parse_position(&mut parts).map(Command::Flag),
        _ => None,
    }
}

fn parse_position<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Option<Position> {
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Position::new(row, col))
}

fn print_board(snapshot: &BoardSnapshot) {
    print!("   ");
    for col in 0..snapshot.side_length {
        print!("{col} ");
    }
    println!();

    for row in 0..snapshot.side_length {
        print!("{row:2} ");
        for col in 0..snapshot.side_length {
            if let Some(view) = snapshot.cell(Position::new(row as i32, col as i32)) {
                let mark = if view.ai_marked { '.' } else { ' ' };
                print!("{}{}", cell_glyph(view), mark);
            }
        }
        println!();
    }
}

fn cell_glyph(view: &CellView) -> char {
    match view.state {
        CellState::Covered => '□',
        CellState::Flagged => '⚑',
        CellState::Revealed => {
            if view.is_mine == Some(true) {
                '*'
            } else if view.adjacent_mines == 0 {
                ' '
            } else {
                char::from_digit(view.adjacent_mines as u32, 10).unwrap_or('?')
            }
        }
    }
}
