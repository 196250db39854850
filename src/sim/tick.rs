//! Per-frame simulation step
//!
//! One call to `tick` advances the round by exactly one rendered frame.
//! The step is a single Euler update with no substepping.

use glam::Vec2;

use super::collision::{ball_boundary_collision, collide_obstacles};
use super::state::{Ball, BallEvent, BallState, GameEvent, GamePhase, GameState, Level, Shot};
use crate::tuning::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer went down this frame (starts a drag)
    pub pointer_pressed: bool,
    /// Pointer was released this frame at this position
    pub pointer_released: Option<Vec2>,
    /// Return to the first hole with a fresh scorecard
    pub restart: bool,
}

/// Place a fresh ball at the level's start position
pub fn load_level(level: &Level, tuning: &Tuning) -> Ball {
    log::debug!(
        "Loading level: start={:?} cup={:?} obstacles={}",
        level.start,
        level.cup.pos,
        level.obstacles.len()
    );
    Ball::new(level.start, tuning.ball_radius)
}

/// Launch a resting ball along `drag`
///
/// Returns `None` when no shot is fired: the drag has zero length, or the
/// ball is not at rest.
pub fn apply_shot(ball: &Ball, drag: Vec2, power_scale: f32, max_power: f32) -> Option<Ball> {
    if ball.state != BallState::Aiming {
        return None;
    }
    let shot = Shot::from_drag(drag, power_scale, max_power)?;
    Some(Ball {
        vel: shot.velocity(),
        state: BallState::Moving,
        ..*ball
    })
}

/// True when the ball has dropped into the level's cup
#[inline]
pub fn is_captured(ball: &Ball, level: &Level, tuning: &Tuning) -> bool {
    level.cup.contains(ball.pos) && ball.speed() < tuning.capture_speed_epsilon
}

/// Advance the ball one frame against the level
///
/// Order: integrate and decay (if moving), walls, obstacles in list order,
/// then the cup. Capture wins over `Stopped` when both happen on one frame.
pub fn step_frame(ball: &Ball, level: &Level, tuning: &Tuning) -> (Ball, Option<BallEvent>) {
    let mut ball = *ball;
    if ball.state == BallState::Captured {
        return (ball, None);
    }

    let mut event = None;

    if ball.is_moving() {
        ball.pos += ball.vel;
        ball.vel *= tuning.friction;
        if ball.speed() < tuning.stop_epsilon {
            ball.vel = Vec2::ZERO;
            ball.state = BallState::Aiming;
            event = Some(BallEvent::Stopped);
        }
    }

    ball.vel = ball_boundary_collision(
        ball.pos,
        ball.vel,
        ball.radius,
        tuning.field_width,
        tuning.field_height,
    );
    ball.vel = collide_obstacles(ball.pos, ball.vel, ball.radius, &level.obstacles);

    if is_captured(&ball, level, tuning) {
        ball.vel = Vec2::ZERO;
        ball.state = BallState::Captured;
        event = Some(BallEvent::Captured);
    }

    (ball, event)
}

/// Advance the round by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        log::info!("Round restarted");
        events.push(GameEvent::Restarted);
    }

    if state.phase == GamePhase::CourseComplete {
        return events;
    }

    // A drag can only begin while the ball is at rest
    if input.pointer_pressed && state.ball.state == BallState::Aiming {
        state.aiming = true;
    }

    if let Some(pointer) = input.pointer_released {
        if state.aiming {
            state.aiming = false;
            let drag = state.ball.pos - pointer;
            let launched = apply_shot(
                &state.ball,
                drag,
                state.tuning.power_scale,
                state.tuning.max_power,
            );
            if let Some(ball) = launched {
                state.ball = ball;
                state.strokes += 1;
                log::debug!(
                    "Hole {} stroke {}: velocity {:?}",
                    state.hole_index + 1,
                    state.strokes,
                    ball.vel
                );
                events.push(GameEvent::ShotFired {
                    hole: state.hole_index,
                    stroke: state.strokes,
                    velocity: ball.vel,
                });
            }
        }
    }

    state.time_ticks += 1;

    let (ball, event) = step_frame(&state.ball, state.level(), &state.tuning);
    state.ball = ball;

    match event {
        Some(BallEvent::Stopped) => {
            log::trace!("Ball at rest at {:?}", state.ball.pos);
            events.push(GameEvent::BallStopped {
                hole: state.hole_index,
            });
        }
        Some(BallEvent::Captured) => {
            let hole = state.hole_index;
            let strokes = state.strokes;
            let total = state.scorecard.record_hole(hole, strokes);
            log::info!("Hole {} complete in {} strokes (total {})", hole + 1, strokes, total);
            events.push(GameEvent::HoleCaptured { hole, strokes });

            if hole + 1 < state.course.len() {
                state.enter_hole(hole + 1);
            } else {
                state.strokes = 0;
                state.aiming = false;
                state.phase = GamePhase::CourseComplete;
                log::info!("Course complete: {} strokes", total);
                events.push(GameEvent::CourseComplete { total });
            }
        }
        None => {}
    }

    events
}
