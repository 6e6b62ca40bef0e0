use serde::Deserialize;

use chess_rules::board::{Board, Move};

#[derive(Deserialize)]
struct FixtureSet {
    positions: Vec<Fixture>,
}

#[derive(Deserialize)]
struct Fixture {
    name: String,
    fen: String,
    moves: Vec<String>,
    status: String,
    in_check: bool,
    legal_moves: usize,
}

fn load() -> FixtureSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn status_fixture_suite() {
    let set = load();
    assert!(!set.positions.is_empty());

    for fixture in &set.positions {
        let mut board = Board::try_from_fen(&fixture.fen)
            .unwrap_or_else(|err| panic!("{}: bad FEN: {err}", fixture.name));
        for text in &fixture.moves {
            let mv: Move = text
                .parse()
                .unwrap_or_else(|err| panic!("{}: bad move {text}: {err}", fixture.name));
            board
                .play(mv)
                .unwrap_or_else(|err| panic!("{}: {text} rejected: {err}", fixture.name));
        }

        let side = board.side_to_move();
        assert_eq!(
            board.status().to_string(),
            fixture.status,
            "status mismatch for {}",
            fixture.name
        );
        assert_eq!(
            board.is_king_in_check(side),
            fixture.in_check,
            "check mismatch for {}",
            fixture.name
        );
        assert_eq!(
            board.legal_moves(side).len(),
            fixture.legal_moves,
            "legal move count mismatch for {}",
            fixture.name
        );
    }
}

#[test]
fn fixtures_survive_undo() {
    for fixture in load().positions {
        let mut board = Board::from_fen(&fixture.fen);
        let fen = board.to_fen();
        for text in &fixture.moves {
            board.play(text.parse().unwrap()).unwrap();
        }
        while board.undo() {}
        assert_eq!(board.to_fen(), fen, "undo mismatch for {}", fixture.name);
    }
}
