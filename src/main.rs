//! Gomoku AI engine demo
//!
//! Runs the engine through scripted positions and a short scripted game,
//! printing each move with its search statistics.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use gomoku::{AIEngine, Board, ConfigError, EngineConfig, Game, GameStatus, Pos, Stone};

/// Play scripted positions against the Gomoku engine.
#[derive(Parser, Debug)]
#[command(name = "gomoku-demo", version, about, long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(short, long)]
    depth: Option<u8>,
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    let mut engine = AIEngine::with_config(config.clone())?;
    info!(
        "engine ready: depth {}, board {}x{}",
        engine.depth(),
        config.board_size,
        config.board_size
    );

    println!("===========================================");
    println!("       Gomoku AI Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    println!("--- Test 1: Opening Response ---");
    test_opening_response(&mut engine, config.board_size);

    println!("\n--- Test 2: Find Winning Move ---");
    test_winning_move(&mut engine, config.board_size);

    println!("\n--- Test 3: Block Opponent Four ---");
    test_block_opponent(&mut engine, config.board_size);

    println!("\n--- Test 4: Scripted Game ---");
    test_scripted_game(engine);

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
    Ok(())
}

fn test_opening_response(engine: &mut AIEngine, size: u8) {
    let mut board = Board::with_size(size);
    let center = size / 2 - 1;
    if board.place_stone(Pos::new(center, center), Stone::Player).is_err() {
        return;
    }

    let result = engine.get_move_with_stats(&mut board);
    match result.best_move {
        Some(m) => {
            println!("  Player at {}", Pos::new(center, center));
            println!("  AI responds: {m}");
            println!("  Time: {}ms, nodes: {}, cutoffs: {}", result.time_ms, result.nodes, result.cutoffs);
            let dx = (i32::from(m.x) - i32::from(center)).abs();
            let dy = (i32::from(m.y) - i32::from(center)).abs();
            if dx <= 1 && dy <= 1 {
                println!("  Result: PASS - Adjacent");
            } else {
                println!("  Result: FAIL - Not adjacent");
            }
        }
        None => println!("  Result: FAIL - No move found"),
    }
}

fn test_winning_move(engine: &mut AIEngine, size: u8) {
    let mut board = Board::with_size(size);
    let row = size / 2;
    // AI has four at columns 1..=4, left end blocked
    let setup = [(0, Stone::Player), (1, Stone::Ai), (2, Stone::Ai), (3, Stone::Ai), (4, Stone::Ai)];
    for (x, stone) in setup {
        if board.place_stone(Pos::new(x, row), stone).is_err() {
            return;
        }
    }

    let expected = Pos::new(5, row);
    let result = engine.get_move_with_stats(&mut board);
    report(result.best_move, expected, "Immediate Win", result.time_ms);
}

fn test_block_opponent(engine: &mut AIEngine, size: u8) {
    let mut board = Board::with_size(size);
    let row = size / 2;
    // Player has four at columns 3..=6, AI blocks the left end
    let setup = [(2, Stone::Ai), (3, Stone::Player), (4, Stone::Player), (5, Stone::Player), (6, Stone::Player)];
    for (x, stone) in setup {
        if board.place_stone(Pos::new(x, row), stone).is_err() {
            return;
        }
    }

    let expected = Pos::new(7, row);
    let result = engine.get_move_with_stats(&mut board);
    report(result.best_move, expected, "Defense", result.time_ms);
}

fn test_scripted_game(engine: AIEngine) {
    let mut game = Game::new(engine);
    let script = [(7, 7), (8, 8), (6, 6), (9, 9), (5, 5), (7, 8), (8, 7)];

    for (x, y) in script {
        match game.play(x, y) {
            Ok(turn) => {
                let reply = turn
                    .ai_move
                    .map_or_else(|| "-".to_string(), |pos| pos.to_string());
                println!("  Player ({x}, {y}) -> AI {reply}  [{:?}]", turn.status);
                if turn.status != GameStatus::InProgress {
                    break;
                }
            }
            // Scripted squares may already hold an AI stone
            Err(err) => println!("  Player ({x}, {y}) rejected: {err}"),
        }
    }

    println!();
    print_board(game.board());
    println!("  Final status: {:?}", game.status());
}

fn report(found: Option<Pos>, expected: Pos, label: &str, time_ms: u64) {
    match found {
        Some(m) => {
            println!("  AI plays: {m}");
            println!("  Time: {time_ms}ms");
            println!("  Expected: {expected} - {label}");
            if m == expected {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Wrong move");
            }
        }
        None => println!("  Result: FAIL - No move found"),
    }
}

fn print_board(board: &Board) {
    print!("   ");
    for x in 0..board.size() {
        print!("{x:3}");
    }
    println!();

    for y in 0..board.size() {
        print!("{y:3}");
        for x in 0..board.size() {
            let ch = match board.get(Pos::new(x, y)) {
                Stone::Player => "  X",
                Stone::Ai => "  O",
                Stone::Empty => "  .",
            };
            print!("{ch}");
        }
        println!();
    }
}
