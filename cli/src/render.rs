use std::fmt::Write;

use sweeper_core::{
    AiMode, CellValue, Controller, GameState, GameStatus, HumanResult, Player, Trigger, Verdict,
};

fn cell_glyph(game: &GameState, coords: (u8, u8)) -> char {
    match game.cell_value(coords) {
        Some(CellValue::Mine) if game.triggered_mine() == Some(coords) => 'X',
        Some(CellValue::Mine) => '*',
        Some(CellValue::Count(0)) => '.',
        Some(CellValue::Count(count)) => char::from(b'0' + count),
        None if game.is_flagged(coords) => 'F',
        None => '#',
    }
}

/// Text grid with row and column indices, one cell per glyph.
pub fn board(game: &GameState) -> String {
    let size = game.size();
    let mut out = String::from("    ");
    for y in 0..size {
        let _ = write!(out, "{:>3}", y);
    }
    out.push('\n');

    for x in 0..size {
        let _ = write!(out, "{:>3} ", x);
        for y in 0..size {
            let _ = write!(out, "{:>3}", cell_glyph(game, (x, y)));
        }
        out.push('\n');
    }
    out
}

pub fn status_line(ctl: &Controller) -> String {
    let game = ctl.game();
    let status = match game.status() {
        GameStatus::Playing => "Playing",
        GameStatus::Won => "Victory",
        GameStatus::Lost => "Game Over",
    };
    let mut line = format!(
        "Mines: {}  Flags left: {}  {}",
        game.mine_count(),
        game.mines_left(),
        status
    );
    if ctl.config().mode == AiMode::Alternate && !game.is_finished() {
        let _ = write!(line, "  (turn {}: {:?})", ctl.turn(), ctl.turn_owner());
    }
    line
}

pub fn verdict(verdict: Verdict) -> String {
    let who = match verdict.by {
        Player::Human => "You",
        Player::Ai => "The AI",
    };
    let what = match verdict.trigger {
        Trigger::Cleared => "cleared the board",
        Trigger::Detonated => "hit a mine",
    };
    let result = match verdict.human {
        HumanResult::Won => "You win!",
        HumanResult::Lost => "You lose.",
    };
    format!("{} {}. {}", who, what, result)
}
