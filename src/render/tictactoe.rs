//! Grid game scene

use glam::Vec2;

use super::{Canvas, Color, DrawCommand};
use crate::consts::tictactoe::*;
use crate::sim::tictactoe::{Cell, Line, Outcome, Player, TicTacToeState};

const BACKGROUND: Color = Color::rgb(28, 170, 156);
const GRID: Color = Color::rgb(23, 145, 135);
const CIRCLE: Color = Color::rgb(239, 231, 200);
const CROSS: Color = Color::rgb(66, 66, 66);

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => CROSS,
        Player::Two => CIRCLE,
    }
}

fn grid(canvas: &mut Canvas) {
    for i in 1..BOARD_SIZE {
        let at = i as f32 * SQUARE_SIZE;
        canvas.line(
            Vec2::new(GRID_INSET, at),
            Vec2::new(WIDTH - GRID_INSET, at),
            LINE_WIDTH,
            GRID,
        );
        canvas.line(
            Vec2::new(at, GRID_INSET),
            Vec2::new(at, HEIGHT - GRID_INSET),
            LINE_WIDTH,
            GRID,
        );
    }
}

fn mark(canvas: &mut Canvas, cell: Cell, player: Player) {
    let origin = Vec2::new(cell.col as f32, cell.row as f32) * SQUARE_SIZE;
    match player {
        Player::One => {
            let near = CROSS_SPACE;
            let far = SQUARE_SIZE - CROSS_SPACE;
            canvas.line(
                origin + Vec2::new(near, far),
                origin + Vec2::new(far, near),
                CROSS_WIDTH,
                CROSS,
            );
            canvas.line(
                origin + Vec2::new(near, near),
                origin + Vec2::new(far, far),
                CROSS_WIDTH,
                CROSS,
            );
        }
        Player::Two => {
            let center = origin + Vec2::splat(SQUARE_SIZE / 2.0);
            canvas.ring(center, CIRCLE_RADIUS, CIRCLE_WIDTH, CIRCLE);
        }
    }
}

/// End points of the stroke drawn through a winning line
pub fn winning_stroke(line: Line) -> (Vec2, Vec2) {
    let half = SQUARE_SIZE / 2.0;
    match line {
        Line::Column(col) => {
            let x = col as f32 * SQUARE_SIZE + half;
            (Vec2::new(x, GRID_INSET), Vec2::new(x, HEIGHT - GRID_INSET))
        }
        Line::Row(row) => {
            let y = row as f32 * SQUARE_SIZE + half;
            (Vec2::new(GRID_INSET, y), Vec2::new(WIDTH - GRID_INSET, y))
        }
        Line::AscendingDiagonal => (
            Vec2::new(DIAGONAL_INSET, HEIGHT - DIAGONAL_INSET),
            Vec2::new(WIDTH - DIAGONAL_INSET, DIAGONAL_INSET),
        ),
        Line::DescendingDiagonal => (
            Vec2::new(DIAGONAL_INSET, DIAGONAL_INSET),
            Vec2::new(WIDTH - DIAGONAL_INSET, HEIGHT - DIAGONAL_INSET),
        ),
    }
}

/// Build the frame for the current board
pub fn draw(state: &TicTacToeState) -> Vec<DrawCommand> {
    let mut canvas = Canvas::new();
    canvas.fill(Vec2::new(WIDTH, HEIGHT), BACKGROUND);
    grid(&mut canvas);

    for (cell, owner) in state.board.iter() {
        if let Some(player) = owner {
            mark(&mut canvas, cell, player);
        }
    }

    if let Outcome::Won { player, line } = state.outcome {
        let (from, to) = winning_stroke(line);
        canvas.line(from, to, LINE_WIDTH, player_color(player));
    }

    canvas.finish()
}
