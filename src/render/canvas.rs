//! Command builder for 2D primitives

use glam::Vec2;

use super::{Anchor, Color, DrawCommand};

/// Collects draw commands in paint order
#[derive(Debug, Default)]
pub struct Canvas {
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cover the whole surface with one color
    pub fn fill(&mut self, size: Vec2, color: Color) {
        self.rect(Vec2::ZERO, size, color);
    }

    pub fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke: None,
        });
    }

    /// Circle outline of the given width
    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke: Some(width),
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn text(
        &mut self,
        label: impl Into<String>,
        pos: Vec2,
        size: f32,
        anchor: Anchor,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            label: label.into(),
            pos,
            size,
            anchor,
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn finish(self) -> Vec<DrawCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_keep_paint_order() {
        let mut canvas = Canvas::new();
        canvas.fill(Vec2::new(10.0, 10.0), Color::BLACK);
        canvas.ring(Vec2::new(5.0, 5.0), 2.0, 1.0, Color::WHITE);
        assert_eq!(canvas.len(), 2);

        let commands = canvas.finish();
        assert!(matches!(commands[0], DrawCommand::Rect { pos, .. } if pos == Vec2::ZERO));
        assert!(matches!(
            commands[1],
            DrawCommand::Circle {
                stroke: Some(w),
                ..
            } if w == 1.0
        ));
    }

    #[test]
    fn test_json_shape() {
        let mut canvas = Canvas::new();
        canvas.circle(Vec2::new(1.0, 2.0), 3.0, Color::RED);
        let json = serde_json::to_value(canvas.finish()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "shape": "circle",
                "center": [1.0, 2.0],
                "radius": 3.0,
                "color": {"r": 255, "g": 0, "b": 0}
            }])
        );
    }
}
