//! Replays clicks from the command line and prints the resulting status.
//!
//! Each argument is a square name (`e2`) or `=x` to answer a promotion prompt
//! with piece letter `x`.

use std::env;
use std::process;

use hotseat_chess::board::{PieceKind, Square};
use hotseat_chess::game::{Game, GameConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status <square|=piece> ...");
        return;
    }

    let mut game = Game::new(GameConfig::default());
    for arg in &args {
        if let Some(choice) = arg.strip_prefix('=') {
            let Some(kind) = choice.chars().next().and_then(PieceKind::from_char) else {
                eprintln!("Invalid promotion choice: {arg}");
                process::exit(1);
            };
            if let Err(e) = game.choose_promotion(kind) {
                eprintln!("{e}");
                process::exit(1);
            }
            continue;
        }
        match arg.parse::<Square>() {
            Ok(sq) => {
                game.click(sq);
            }
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    let board = game.board();
    let color = game.current_player();
    let moves: Vec<(Square, Square)> = board
        .pieces_of(color)
        .flat_map(|p| {
            board
                .legal_moves(p.position, game.game_state())
                .into_iter()
                .map(move |to| (p.position, to))
        })
        .collect();

    println!("side_to_move: {}", color.name());
    println!("legal_moves: {}", moves.len());
    println!("check: {}", board.is_in_check(color));
    println!("checkmate: {}", game.is_game_over());
    if let Some(square) = game.pending_promotion() {
        println!("pending_promotion: {square}");
    }
    for (from, to) in moves {
        println!("{from}{to}");
    }
}
