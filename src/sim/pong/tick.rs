//! Fixed-step tick for the ball game
//!
//! Order within a tick: input, move, clamp, paddle bounce, wall bounce, goal.

use super::collision::{
    Wall, ball_hits_left_paddle, ball_hits_right_paddle, ball_wall_contact, goal_for_left,
    goal_for_right,
};
use super::state::{GamePhase, PaddleMotion, PongState, Side};
use crate::consts::pong::*;
use crate::input::{InputEvent, KeyCode};

/// Commands recognised by the ball game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongCommand {
    Start,
    Reset,
    /// Paddle key pressed or released
    Paddle {
        side: Side,
        motion: PaddleMotion,
    },
}

/// Paddle a key drives, and the direction it drives it in
fn paddle_key(key: KeyCode) -> Option<(Side, PaddleMotion)> {
    match key {
        k if k.is_char('w') => Some((Side::Left, PaddleMotion::Up)),
        k if k.is_char('s') => Some((Side::Left, PaddleMotion::Down)),
        KeyCode::Up => Some((Side::Right, PaddleMotion::Up)),
        KeyCode::Down => Some((Side::Right, PaddleMotion::Down)),
        _ => None,
    }
}

impl PongCommand {
    /// Map one input event to a command
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::KeyDown { key } if key.is_char('p') => Some(PongCommand::Start),
            InputEvent::KeyDown { key } if key.is_char('r') => Some(PongCommand::Reset),
            InputEvent::KeyDown { key } => {
                paddle_key(key).map(|(side, motion)| PongCommand::Paddle { side, motion })
            }
            // Releasing a paddle key stops that paddle
            InputEvent::KeyUp { key } => paddle_key(key).map(|(side, _)| PongCommand::Paddle {
                side,
                motion: PaddleMotion::Idle,
            }),
            _ => None,
        }
    }
}

/// Input for a single tick, folded from the event batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub start: bool,
    pub reset: bool,
    /// Latest requested motion per paddle (`None` keeps the current one)
    pub left: Option<PaddleMotion>,
    pub right: Option<PaddleMotion>,
}

impl TickInput {
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for command in events.iter().filter_map(PongCommand::from_event) {
            match command {
                PongCommand::Start => input.start = true,
                PongCommand::Reset => input.reset = true,
                PongCommand::Paddle {
                    side: Side::Left,
                    motion,
                } => input.left = Some(motion),
                PongCommand::Paddle {
                    side: Side::Right,
                    motion,
                } => input.right = Some(motion),
            }
        }
        input
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub launched: bool,
    pub paddle_bounce: Option<Side>,
    pub wall_bounce: Option<Wall>,
    /// Side whose player scored
    pub scored: Option<Side>,
}

/// Advance the ball game by one tick
pub fn tick(state: &mut PongState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    // Reset is applied before start so "reset, start" in one batch relaunches
    if input.reset {
        log::debug!("Ball game reset");
        state.reset();
    }

    if let Some(motion) = input.left {
        state.left.motion = motion;
    }
    if let Some(motion) = input.right {
        state.right.motion = motion;
    }

    if input.start && state.phase == GamePhase::Idle {
        state.ball.launch();
        state.phase = GamePhase::Playing;
        events.launched = true;
        log::debug!("Ball launched with velocity {:?}", state.ball.vel);
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    // Motion, then clamp so an overshoot never reaches the frame
    state.ball.advance();
    for paddle in [&mut state.left, &mut state.right] {
        paddle.advance();
        paddle.clamp_to_arena(ARENA_HEIGHT);
    }

    // Bounces only flip a velocity that still points into the surface
    let ball = &mut state.ball;
    if ball_hits_left_paddle(ball, &state.left) && ball.vel.x < 0.0 {
        ball.bounce_x();
        events.paddle_bounce = Some(Side::Left);
    }
    if ball_hits_right_paddle(ball, &state.right) && ball.vel.x > 0.0 {
        ball.bounce_x();
        events.paddle_bounce = Some(Side::Right);
    }

    match ball_wall_contact(ball, ARENA_HEIGHT) {
        Some(Wall::Top) if ball.vel.y < 0.0 => {
            ball.bounce_y();
            events.wall_bounce = Some(Wall::Top);
        }
        Some(Wall::Bottom) if ball.vel.y > 0.0 => {
            ball.bounce_y();
            events.wall_bounce = Some(Wall::Bottom);
        }
        _ => {}
    }

    // Goals last: the ball must already be past both paddles
    let scorer = if goal_for_left(ball, ARENA_WIDTH) {
        Some(Side::Left)
    } else if goal_for_right(ball) {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = scorer {
        match side {
            Side::Left => state.left_score.increase(),
            Side::Right => state.right_score.increase(),
        }
        log::info!(
            "{:?} player scored ({} - {})",
            side,
            state.left_score.points(),
            state.right_score.points()
        );
        state.restart_round();
        events.scored = Some(side);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_event_decoding() {
        let input = TickInput::from_events(&[
            InputEvent::key_down(KeyCode::Char('P')),
            InputEvent::key_down(KeyCode::Char('w')),
            InputEvent::key_down(KeyCode::Down),
            InputEvent::key_up(KeyCode::Char('w')),
            InputEvent::pointer_down(10.0, 10.0),
        ]);
        assert!(input.start);
        assert!(!input.reset);
        assert_eq!(input.left, Some(PaddleMotion::Idle));
        assert_eq!(input.right, Some(PaddleMotion::Down));
    }

    #[test]
    fn test_tick_idle_to_playing() {
        let mut state = PongState::new();

        // Nothing moves before the start key
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, TickEvents::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ball.pos, Vec2::new(450.0, 250.0));

        let events = tick(&mut state, &start());
        assert!(events.launched);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(460.0, 255.0));
    }

    #[test]
    fn test_start_while_playing_is_ignored() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        state.ball.vel = Vec2::new(-10.0, -5.0);
        let events = tick(&mut state, &start());
        assert!(!events.launched);
        assert_eq!(state.ball.vel, Vec2::new(-10.0, -5.0));
    }

    #[test]
    fn test_paddles_only_move_while_playing() {
        let mut state = PongState::new();
        let input = TickInput {
            left: Some(PaddleMotion::Up),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.left.motion, PaddleMotion::Up);
        assert_eq!(state.left.pos.y, 190.0);

        tick(&mut state, &start());
        assert_eq!(state.left.pos.y, 180.0);
        assert_eq!(state.right.pos.y, 190.0);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        // Next step puts the ball's right edge on the right paddle's face
        state.ball.pos = Vec2::new(865.0 - BALL_RADIUS - 10.0, 250.0);
        state.ball.vel = Vec2::new(10.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.paddle_bounce, Some(Side::Right));
        assert_eq!(state.ball.vel, Vec2::new(-10.0, 5.0));

        // Overlapping the paddle but already moving away: no second flip
        state.ball.pos = Vec2::new(860.0, 250.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.right(), 865.0);
        assert_eq!(events.paddle_bounce, None);
        assert_eq!(state.ball.vel, Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        state.ball.pos = Vec2::new(300.0, ARENA_HEIGHT - BALL_RADIUS - 3.0);
        state.ball.vel = Vec2::new(-10.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.wall_bounce, Some(Wall::Bottom));
        assert_eq!(state.ball.vel, Vec2::new(-10.0, -5.0));
    }

    #[test]
    fn test_goal_for_left_player_resets_round() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        state.left.motion = PaddleMotion::Down;
        state.right.motion = PaddleMotion::Up;
        // Above the right paddle's span, about to leave the arena
        state.ball.pos = Vec2::new(ARENA_WIDTH + BALL_RADIUS - 5.0, 60.0);
        state.ball.vel = Vec2::new(10.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.scored, Some(Side::Left));
        assert_eq!(state.left_score.points(), 1);
        assert_eq!(state.right_score.points(), 0);
        assert_eq!(state.phase, GamePhase::Idle);

        let fresh = PongState::new();
        assert_eq!(state.ball, fresh.ball);
        assert_eq!(state.left, fresh.left);
        assert_eq!(state.right, fresh.right);
    }

    #[test]
    fn test_goal_for_right_player() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        state.ball.pos = Vec2::new(-BALL_RADIUS + 5.0, 450.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.scored, Some(Side::Right));
        assert_eq!(state.right_score.points(), 1);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut state = PongState::new();
        tick(&mut state, &start());
        state.left_score.increase();
        state.right_score.increase();
        state.right.motion = PaddleMotion::Down;
        for _ in 0..7 {
            tick(&mut state, &TickInput::default());
        }

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset);
        assert_eq!(state, PongState::new());
    }

    proptest! {
        #[test]
        fn bounces_preserve_speed(
            x in 0.0f32..ARENA_WIDTH,
            y in 0.0f32..ARENA_HEIGHT,
            dx in prop_oneof![-12.0f32..-1.0, 1.0f32..12.0],
            dy in prop_oneof![-12.0f32..-1.0, 1.0f32..12.0],
            ticks in 1usize..60
        ) {
            let mut state = PongState::new();
            tick(&mut state, &start());
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(dx, dy);

            for _ in 0..ticks {
                if state.phase != GamePhase::Playing {
                    break;
                }
                tick(&mut state, &TickInput::default());
                if state.phase == GamePhase::Playing {
                    prop_assert_eq!(state.ball.vel.x.abs(), dx.abs());
                    prop_assert_eq!(state.ball.vel.y.abs(), dy.abs());
                }
            }
        }
    }
}
