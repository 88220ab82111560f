//! Collision predicates for the snake game

use glam::IVec2;

use super::state::Snake;

/// Two grid positions are closer than one cell
///
/// With grid-aligned motion this is the same as "same cell".
#[inline]
fn within_cell(a: IVec2, b: IVec2, cell_size: i32) -> bool {
    a.as_vec2().distance(b.as_vec2()) < cell_size as f32
}

/// The head ran into one of its own segments
pub fn head_hits_body(snake: &Snake, cell_size: i32) -> bool {
    snake
        .body
        .iter()
        .any(|segment| within_cell(snake.head, *segment, cell_size))
}

/// The head left `[0, extent - cell_size]` on either axis
pub fn head_hits_wall(snake: &Snake, arena: IVec2, cell_size: i32) -> bool {
    let max = arena - IVec2::splat(cell_size);
    snake.head.x < 0 || snake.head.y < 0 || snake.head.x > max.x || snake.head.y > max.y
}

/// The head reached the food
pub fn head_hits_food(snake: &Snake, food: IVec2, cell_size: i32) -> bool {
    within_cell(snake.head, food, cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::snake::*;

    fn arena() -> IVec2 {
        IVec2::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    #[test]
    fn test_wall_bounds() {
        let mut snake = Snake::new(IVec2::ZERO);
        assert!(!head_hits_wall(&snake, arena(), CELL_SIZE));

        snake.head = IVec2::new(ARENA_WIDTH - CELL_SIZE, ARENA_HEIGHT - CELL_SIZE);
        assert!(!head_hits_wall(&snake, arena(), CELL_SIZE));

        snake.head = IVec2::new(ARENA_WIDTH, 0);
        assert!(head_hits_wall(&snake, arena(), CELL_SIZE));

        snake.head = IVec2::new(0, -CELL_SIZE);
        assert!(head_hits_wall(&snake, arena(), CELL_SIZE));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = Snake::new(IVec2::new(64, 64));
        assert!(!head_hits_body(&snake, CELL_SIZE));

        snake.body = vec![IVec2::new(32, 64), IVec2::new(32, 32)];
        assert!(!head_hits_body(&snake, CELL_SIZE));

        snake.body.push(IVec2::new(64, 64));
        assert!(head_hits_body(&snake, CELL_SIZE));
    }

    #[test]
    fn test_food_distance() {
        let snake = Snake::new(IVec2::new(32, 0));
        assert!(head_hits_food(&snake, IVec2::new(32, 0), CELL_SIZE));
        // Adjacent cell is exactly one cell away, not closer
        assert!(!head_hits_food(&snake, IVec2::new(64, 0), CELL_SIZE));
        assert!(!head_hits_food(&snake, IVec2::new(64, 32), CELL_SIZE));
    }
}
