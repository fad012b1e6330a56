//! Tests for the console game loop.

use perfect_tictactoe::{Board, Outcome, Player};
use perfect_tictactoe_cli::{FirstMover, GameConfig, GameSession};

/// Runs a session from `board` with scripted input, returning the result and transcript.
fn play(board: &str, first: FirstMover, input: &str) -> (anyhow::Result<Outcome>, String) {
    let board: Board = board.parse().unwrap();
    let config = GameConfig::new(first);
    let mut output = Vec::new();
    let result = GameSession::with_board(board, &config, input.as_bytes(), &mut output).run();
    (result, String::from_utf8(output).unwrap())
}

/// Every cell in row-major order, 1-based, repeated enough to finish any game.
fn row_major_script() -> String {
    let mut script = String::new();
    for _ in 0..5 {
        for row in 1..=3 {
            for col in 1..=3 {
                script.push_str(&format!("{row}\n{col}\n"));
            }
        }
    }
    script
}

#[test]
fn test_ai_takes_winning_move() {
    let (result, transcript) = play("110 220 000", FirstMover::Ai, "");

    assert_eq!(result.unwrap(), Outcome::Won(Player::A));
    assert!(transcript.starts_with("1 | 1 | 0\n---------\n2 | 2 | 0\n---------\n"));
    assert!(transcript.contains("AI's turn:\n"));
    assert!(transcript.contains("AI plays row 1, column 3\n"));
    assert!(transcript.contains("1 | 1 | 1\n"));
    assert!(transcript.ends_with("AI wins!\n"));
}

#[test]
fn test_human_can_win_from_given_position() {
    let (result, transcript) = play("110 220 000", FirstMover::Human, "2\n3\n");

    assert_eq!(result.unwrap(), Outcome::Won(Player::B));
    assert!(transcript.contains("Your turn:\n"));
    assert!(transcript.contains("Enter row number (1-3): "));
    assert!(transcript.contains("Enter column number (1-3): "));
    assert!(transcript.contains("2 | 2 | 2\n"));
    assert!(transcript.ends_with("You win!\n"));
}

#[test]
fn test_occupied_cell_reprompts() {
    let (result, transcript) = play("110 220 000", FirstMover::Human, "1\n1\n2\n3\n");

    assert_eq!(result.unwrap(), Outcome::Won(Player::B));
    assert_eq!(transcript.matches("Invalid move. Try again.").count(), 1);
    assert_eq!(transcript.matches("Your turn:").count(), 2);
    assert!(!transcript.contains("AI's turn:"));
}

#[test]
fn test_out_of_range_cell_reprompts() {
    let (result, transcript) = play("110 220 000", FirstMover::Human, "4\n1\n0\n2\n2\n3\n");

    assert_eq!(result.unwrap(), Outcome::Won(Player::B));
    assert_eq!(transcript.matches("Invalid move. Try again.").count(), 2);
}

#[test]
fn test_non_numeric_input_is_fatal() {
    let (result, transcript) = play("000 000 000", FirstMover::Human, "abc\n");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid number"), "{err:#}");
    assert!(!transcript.contains("Invalid move"));
}

#[test]
fn test_end_of_input_is_fatal() {
    let (result, _) = play("000 000 000", FirstMover::Human, "2\n");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Input ended"), "{err:#}");
}

#[test]
fn test_last_cell_draw() {
    let (result, transcript) = play("121 211 210", FirstMover::Human, "3\n3\n");

    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(transcript.ends_with("It's a draw!\n"));
}

#[test]
fn test_finished_position_ends_immediately() {
    let (result, transcript) = play("222 110 100", FirstMover::Ai, "");

    assert_eq!(result.unwrap(), Outcome::Won(Player::B));
    assert!(!transcript.contains("turn:"));
    assert!(transcript.ends_with("You win!\n"));
}

#[test]
fn test_full_game_ai_first_never_lost() {
    let (result, transcript) = play("000 000 000", FirstMover::Ai, &row_major_script());

    let outcome = result.unwrap();
    assert_ne!(outcome, Outcome::Won(Player::B), "{transcript}");
    assert!(transcript.starts_with("0 | 0 | 0\n---------\n"));
    assert!(transcript.contains("AI plays row 1, column 1\n"));
}

#[test]
fn test_full_game_human_first_never_lost() {
    let (result, transcript) = play("000 000 000", FirstMover::Human, &row_major_script());

    let outcome = result.unwrap();
    assert_ne!(outcome, Outcome::Won(Player::B), "{transcript}");
    assert!(transcript.contains("Invalid move. Try again."));
}

#[test]
fn test_session_exposes_final_board() {
    let board: Board = "110 220 000".parse().unwrap();
    let mut output = Vec::new();
    let mut session = GameSession::with_board(board, &GameConfig::default(), &b""[..], &mut output);

    session.run().unwrap();
    assert_eq!(session.board().to_string().lines().next(), Some("1 | 1 | 1"));
}
