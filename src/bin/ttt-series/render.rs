//! Text rendering of the score board and the grid.

use std::fmt::{Display, Write};

use ttt_series::{Board, MatchController, PlayerOrder, Position};

const SPACER: &str = "     |     |";
const DIVIDER: &str = "-----+-----+-----";

/// The 3x3 grid, one marker per cell.
pub fn board(board: &Board) -> String {
    let mut out = String::from("\n");
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            out.push_str(DIVIDER);
            out.push('\n');
        }
        let [a, b, c] = [0, 1, 2].map(|column| board.get(cells[column]));
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{SPACER}\n  {a}  |  {b}  |  {c}\n{SPACER}");
    }
    out
}

/// Target score, both players' scores, the game number and the grid.
pub fn scoreboard(controller: &MatchController, game_number: u32) -> String {
    let mut out = format!("~~~~~SCORE (first to {})~~~~~\n", controller.winning_score());
    for order in PlayerOrder::BOTH {
        let player = controller.player(order);
        let _ = writeln!(out, "{}: {}", player.name(), player.score());
    }
    let _ = write!(out, "~~~Game {game_number}~~~\n{}", board(controller.board()));
    out
}

/// `a`, `a or b`, `a, b or c`.
pub fn join_or<T: Display>(items: &[T], separator: &str, final_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(&format!("{separator} "));
            format!("{head} {final_word} {last}")
        }
    }
}
