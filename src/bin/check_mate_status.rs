use std::env;
use std::process::ExitCode;

use chess_rules::board::{Board, Move};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    for text in args.iter().skip(1) {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = board.play(mv) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let side = board.side_to_move();
    let legal_moves = board.legal_moves(side);
    println!("side_to_move: {side}");
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.is_king_in_check(side));
    println!("checkmate: {}", board.is_checkmate(side));
    println!("stalemate: {}", board.is_stalemate(side));
    println!("status: {}", board.status());
    for mv in &legal_moves {
        println!("{mv}");
    }
    println!("{}", board.board_snapshot());
    ExitCode::SUCCESS
}
