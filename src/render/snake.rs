//! Snake scene

use glam::{IVec2, Vec2};

use super::{Anchor, Canvas, Color, DrawCommand};
use crate::consts::snake::*;
use crate::sim::snake::SnakeState;

const GRASS_LIGHT: Color = Color::rgb(156, 210, 54);
const GRASS_DARK: Color = Color::rgb(147, 203, 57);

/// Segments darken toward black the further they trail
pub fn segment_color(index: usize) -> Color {
    let shade = (index as u32 + 1).saturating_mul(BODY_SHADE_STEP as u32);
    Color::rgb(0, 0, 255u32.saturating_sub(shade) as u8)
}

fn cell_rect(canvas: &mut Canvas, cell: IVec2, color: Color) {
    let size = Vec2::splat(CELL_SIZE as f32);
    canvas.rect(cell.as_vec2(), size, color);
}

/// Build the frame for the current snake state
pub fn draw(state: &SnakeState) -> Vec<DrawCommand> {
    let mut canvas = Canvas::new();

    // Checkerboard: light squares where row + col is even
    canvas.fill(
        Vec2::new(ARENA_WIDTH as f32, ARENA_HEIGHT as f32),
        GRASS_DARK,
    );
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            if (row + col) % 2 == 0 {
                cell_rect(&mut canvas, IVec2::new(col, row) * CELL_SIZE, GRASS_LIGHT);
            }
        }
    }

    cell_rect(&mut canvas, state.snake.head, Color::BLUE);
    for (i, segment) in state.snake.body.iter().enumerate() {
        cell_rect(&mut canvas, *segment, segment_color(i));
    }

    if let Some(food) = state.food {
        let half = CELL_SIZE as f32 / 2.0;
        canvas.circle(food.as_vec2() + Vec2::splat(half), half, Color::RED);
    }

    canvas.text(
        format!("Score: {}", state.score.points()),
        Vec2::new(5.0, 5.0),
        SCORE_TEXT_SIZE,
        Anchor::TopLeft,
        Color::BLACK,
    );

    canvas.finish()
}
