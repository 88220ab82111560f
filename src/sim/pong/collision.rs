//! Collision predicates for the ball game
//!
//! Every check is a pure function of entity snapshots. Responses (bounce,
//! goal) are applied by the tick, not here.

use super::state::{Ball, Paddle};

/// Which horizontal wall the ball touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Shared contact test for both paddles
///
/// Vertical overlap is strict (edge contact does not count). Horizontally the
/// ball's leading edge must have reached the paddle's facing edge while its
/// trailing edge has not yet cleared the back face. Seen from either side that
/// is the same closed-interval overlap, so one test serves both paddles.
#[inline]
fn ball_touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let vertical = ball.bottom() > paddle.top() && ball.top() < paddle.bottom();
    let horizontal = ball.left() <= paddle.right() && ball.right() >= paddle.left();
    vertical && horizontal
}

/// Did the ball reach the left paddle's right face?
///
/// A ball that has slipped entirely behind the paddle no longer counts.
pub fn ball_hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball_touches_paddle(ball, paddle)
}

/// Did the ball reach the right paddle's left face?
pub fn ball_hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball_touches_paddle(ball, paddle)
}

/// Check contact with the top or bottom wall
pub fn ball_wall_contact(ball: &Ball, arena_height: f32) -> Option<Wall> {
    if ball.top() <= 0.0 {
        Some(Wall::Top)
    } else if ball.bottom() >= arena_height {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Did the ball touch or cross the top or bottom wall?
pub fn ball_hits_wall(ball: &Ball, arena_height: f32) -> bool {
    ball_wall_contact(ball, arena_height).is_some()
}

/// The ball is entirely past the right edge: a point for the left player
pub fn goal_for_left(ball: &Ball, arena_width: f32) -> bool {
    ball.left() >= arena_width
}

/// The ball is entirely past the left edge: a point for the right player
pub fn goal_for_right(ball: &Ball) -> bool {
    ball.right() <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::pong::*;
    use crate::sim::pong::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_left_paddle_hit() {
        let paddle = Paddle::new(Side::Left); // x 15..35, y 190..310
        // Left edge exactly on the paddle face
        let ball = Ball::at(Vec2::new(35.0 + BALL_RADIUS, 250.0));
        assert!(ball_hits_left_paddle(&ball, &paddle));

        // One pixel short
        let ball = Ball::at(Vec2::new(36.0 + BALL_RADIUS, 250.0));
        assert!(!ball_hits_left_paddle(&ball, &paddle));
    }

    #[test]
    fn test_paddle_miss_vertically() {
        let paddle = Paddle::new(Side::Right); // y 190..310
        // Bottom edge exactly touching the paddle top does not count
        let ball = Ball::at(Vec2::new(870.0, 190.0 - BALL_RADIUS));
        assert!(!ball_hits_right_paddle(&ball, &paddle));

        let ball = Ball::at(Vec2::new(870.0, 191.0 - BALL_RADIUS));
        assert!(ball_hits_right_paddle(&ball, &paddle));
    }

    #[test]
    fn test_left_paddle_back_face() {
        let paddle = Paddle::new(Side::Left); // x 15..35
        // Right edge exactly on the back face still touches
        let ball = Ball::at(Vec2::new(15.0 - BALL_RADIUS, 250.0));
        assert!(ball_hits_left_paddle(&ball, &paddle));

        // Slipped fully behind the paddle
        let ball = Ball::at(Vec2::new(14.0 - BALL_RADIUS, 250.0));
        assert!(!ball_hits_left_paddle(&ball, &paddle));
    }

    #[test]
    fn test_ball_behind_paddle_is_not_a_hit() {
        let paddle = Paddle::new(Side::Right); // x 865..885
        let ball = Ball::at(Vec2::new(885.0 + BALL_RADIUS + 1.0, 250.0));
        assert!(!ball_hits_right_paddle(&ball, &paddle));
    }

    #[test]
    fn test_wall_contact() {
        let ball = Ball::at(Vec2::new(450.0, BALL_RADIUS));
        assert_eq!(ball_wall_contact(&ball, ARENA_HEIGHT), Some(Wall::Top));

        let ball = Ball::at(Vec2::new(450.0, ARENA_HEIGHT - BALL_RADIUS + 2.0));
        assert_eq!(ball_wall_contact(&ball, ARENA_HEIGHT), Some(Wall::Bottom));

        let ball = Ball::default();
        assert!(!ball_hits_wall(&ball, ARENA_HEIGHT));
    }

    #[test]
    fn test_goals_need_full_exit() {
        // Touching the boundary from inside is not a goal
        let ball = Ball::at(Vec2::new(ARENA_WIDTH - BALL_RADIUS, 250.0));
        assert!(!goal_for_left(&ball, ARENA_WIDTH));
        let ball = Ball::at(Vec2::new(ARENA_WIDTH + BALL_RADIUS, 250.0));
        assert!(goal_for_left(&ball, ARENA_WIDTH));

        let ball = Ball::at(Vec2::new(BALL_RADIUS, 250.0));
        assert!(!goal_for_right(&ball));
        let ball = Ball::at(Vec2::new(-BALL_RADIUS - 0.5, 250.0));
        assert!(goal_for_right(&ball));
    }

    proptest! {
        #[test]
        fn goal_excludes_paddle_bounce(
            past in 0.0f32..200.0,
            y in 0.0f32..ARENA_HEIGHT,
            paddle_y in 0.0f32..(ARENA_HEIGHT - PADDLE_HEIGHT)
        ) {
            let mut left = Paddle::new(Side::Left);
            let mut right = Paddle::new(Side::Right);
            left.pos.y = paddle_y;
            right.pos.y = paddle_y;

            let beyond_right = Ball::at(Vec2::new(ARENA_WIDTH + BALL_RADIUS + past, y));
            prop_assert!(goal_for_left(&beyond_right, ARENA_WIDTH));
            prop_assert!(!ball_hits_right_paddle(&beyond_right, &right));

            let beyond_left = Ball::at(Vec2::new(-BALL_RADIUS - past, y));
            prop_assert!(goal_for_right(&beyond_left));
            prop_assert!(!ball_hits_left_paddle(&beyond_left, &left));
        }
    }
}
