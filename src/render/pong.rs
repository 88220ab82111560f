//! Ball game scene

use glam::Vec2;

use super::{Anchor, Canvas, Color, DrawCommand};
use crate::consts::pong::*;
use crate::sim::pong::{PongState, Side};

/// Build the frame for the current ball game state
pub fn draw(state: &PongState) -> Vec<DrawCommand> {
    let mut canvas = Canvas::new();
    let arena = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);

    canvas.fill(arena, Color::BLACK);
    canvas.line(
        Vec2::new(ARENA_WIDTH / 2.0, 0.0),
        Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT),
        CENTER_LINE_WIDTH,
        Color::WHITE,
    );

    canvas.circle(state.ball.pos, state.ball.radius(), Color::WHITE);
    for paddle in [&state.left, &state.right] {
        canvas.rect(paddle.pos, paddle.size, Color::WHITE);
    }

    for (side, x) in [
        (Side::Left, ARENA_WIDTH / 4.0),
        (Side::Right, ARENA_WIDTH - ARENA_WIDTH / 4.0),
    ] {
        canvas.text(
            state.score(side).points().to_string(),
            Vec2::new(x, SCORE_TEXT_Y),
            SCORE_TEXT_SIZE,
            Anchor::TopCenter,
            Color::WHITE,
        );
    }

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_contents() {
        let mut state = PongState::new();
        state.left_score.increase();
        state.left_score.increase();
        state.right_score.increase();

        let commands = draw(&state);
        assert_eq!(commands.len(), 7);
        assert!(matches!(
            &commands[2],
            DrawCommand::Circle { center, radius, .. }
                if *center == Vec2::new(450.0, 250.0) && *radius == BALL_RADIUS
        ));

        let labels: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { label, pos, .. } => Some((label.as_str(), pos.x)),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![("2", 225.0), ("1", 675.0)]);
    }
}
