//! Game state and core simulation types
//!
//! Everything a frame step reads or writes lives in these values; there is
//! no global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::RectShape;
use super::tick::load_level;
use crate::consts::AIM_ARROW_SCALE;
use crate::course::Course;
use crate::scorecard::Scorecard;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Holes remain to be played
    Playing,
    /// Last hole sunk; waiting for restart
    CourseComplete,
}

/// Ball state machine: Aiming -> Moving -> Aiming, or Moving -> Captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// At rest, a shot may be fired
    Aiming,
    /// Rolling under friction
    Moving,
    /// Dropped into the cup
    Captured,
}

/// The golf ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// A ball at rest at `pos`
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            state: BallState::Aiming,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state == BallState::Moving
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A static obstacle on a hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    /// Axis-aligned block
    Rect(RectShape),
    /// Simple polygon, vertices in order (convexity is not checked)
    Polygon { points: Vec<Vec2> },
}

/// The hole cup (capture target)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cup {
    pub pos: Vec2,
    /// Ball center must be strictly inside this distance to drop
    pub radius: f32,
}

impl Cup {
    pub fn contains(&self, p: Vec2) -> bool {
        (p - self.pos).length() < self.radius
    }
}

/// One hole's layout; immutable while it is being played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub start: Vec2,
    pub cup: Cup,
    /// Resolved in this order every frame
    pub obstacles: Vec<Obstacle>,
}

/// A shot derived from a released drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// `ball.pos - pointer`: pulling back shoots forward
    pub drag: Vec2,
    /// Unit launch direction
    pub direction: Vec2,
    /// Launch speed (pixels per frame)
    pub power: f32,
}

impl Shot {
    /// Build a shot from a drag vector; `None` if the drag has no length
    pub fn from_drag(drag: Vec2, power_scale: f32, max_power: f32) -> Option<Self> {
        let direction = drag.try_normalize()?;
        let power = (drag.length() * power_scale).min(max_power);
        Some(Self {
            drag,
            direction,
            power,
        })
    }

    /// Build a shot from the pointer position relative to the ball
    pub fn from_pointer(ball_pos: Vec2, pointer: Vec2, tuning: &Tuning) -> Option<Self> {
        Self::from_drag(ball_pos - pointer, tuning.power_scale, tuning.max_power)
    }

    /// Launch velocity
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction * self.power
    }

    /// End point of the aim arrow drawn from the ball
    pub fn preview_tip(&self, ball_pos: Vec2) -> Vec2 {
        ball_pos + self.direction * self.power * AIM_ARROW_SCALE
    }
}

/// Per-frame outcome for the ball alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Came to rest outside the cup
    Stopped,
    /// Dropped into the cup
    Captured,
}

/// Round-level events emitted by `tick`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ShotFired { hole: usize, stroke: u32, velocity: Vec2 },
    BallStopped { hole: usize },
    HoleCaptured { hole: usize, strokes: u32 },
    CourseComplete { total: u32 },
    Restarted,
}

/// Complete round state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    pub course: Course,
    pub tuning: Tuning,
    /// Index of the hole being played (0-based)
    pub hole_index: usize,
    pub ball: Ball,
    /// Strokes on the current hole
    pub strokes: u32,
    pub scorecard: Scorecard,
    pub phase: GamePhase,
    /// Pointer is held down for a drag
    pub aiming: bool,
    /// Simulated frames while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Start a round on the first hole of `course`
    pub fn new(course: Course, tuning: Tuning) -> Self {
        let ball = load_level(course.hole(0), &tuning);
        Self {
            course,
            tuning,
            hole_index: 0,
            ball,
            strokes: 0,
            scorecard: Scorecard::new(),
            phase: GamePhase::Playing,
            aiming: false,
            time_ticks: 0,
        }
    }

    /// Layout of the hole being played
    pub fn level(&self) -> &Level {
        self.course.hole(self.hole_index)
    }

    /// Running total including strokes on the current hole
    pub fn total_with_current(&self) -> u32 {
        self.scorecard.total() + self.strokes
    }

    /// Aim preview for a pointer held at `pointer`, if a shot could be fired
    pub fn aim_preview(&self, pointer: Vec2) -> Option<Shot> {
        if !self.aiming || self.ball.state != BallState::Aiming {
            return None;
        }
        Shot::from_pointer(self.ball.pos, pointer, &self.tuning)
    }

    /// Move to the given hole, resetting the ball and stroke counter
    pub fn enter_hole(&mut self, index: usize) {
        self.hole_index = index;
        self.ball = load_level(self.course.hole(index), &self.tuning);
        self.strokes = 0;
        self.aiming = false;
    }

    /// Back to hole 1 with an empty scorecard
    pub fn restart(&mut self) {
        self.scorecard.clear();
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.enter_hole(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_state() -> GameState {
        let tuning = Tuning::default();
        GameState::new(Course::classic(&tuning).unwrap(), tuning)
    }

    #[test]
    fn test_shot_slingshot_convention() {
        // Pointer to the right of the ball shoots left
        let tuning = Tuning::default();
        let ball = Vec2::new(100.0, 100.0);
        let shot = Shot::from_pointer(ball, Vec2::new(150.0, 100.0), &tuning).unwrap();
        assert_eq!(shot.drag, Vec2::new(-50.0, 0.0));
        assert!((shot.velocity() - Vec2::new(-5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_shot_power_capped() {
        let shot = Shot::from_drag(Vec2::new(0.0, 1000.0), 0.1, 15.0).unwrap();
        assert_eq!(shot.power, 15.0);
        assert!((shot.velocity() - Vec2::new(0.0, 15.0)).length() < 1e-5);
    }

    #[test]
    fn test_shot_zero_drag() {
        assert!(Shot::from_drag(Vec2::ZERO, 0.1, 15.0).is_none());
        let tuning = Tuning::default();
        let p = Vec2::new(42.0, 42.0);
        assert!(Shot::from_pointer(p, p, &tuning).is_none());
    }

    #[test]
    fn test_shot_preview_tip() {
        let shot = Shot::from_drag(Vec2::new(30.0, 0.0), 0.1, 15.0).unwrap();
        // power 3, arrow 60px long
        let tip = shot.preview_tip(Vec2::new(100.0, 100.0));
        assert!((tip - Vec2::new(160.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_cup_contains_is_strict() {
        let cup = Cup {
            pos: Vec2::new(700.0, 500.0),
            radius: 15.0,
        };
        assert!(cup.contains(Vec2::new(714.9, 500.0)));
        assert!(!cup.contains(Vec2::new(715.0, 500.0)));
    }

    #[test]
    fn test_new_game_starts_on_first_hole() {
        let state = classic_state();
        assert_eq!(state.hole_index, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, state.level().start);
        assert_eq!(state.ball.state, BallState::Aiming);
        assert_eq!(state.ball.radius, Tuning::default().ball_radius);
    }

    #[test]
    fn test_obstacle_json_shape() {
        let json = r#"[
            {"type": "rect", "x": 1, "y": 2, "width": 3, "height": 4},
            {"type": "polygon", "points": [[0, 0], [10, 0], [5, 8]]}
        ]"#;
        let obstacles: Vec<Obstacle> = serde_json::from_str(json).unwrap();
        assert_eq!(obstacles[0], Obstacle::Rect(RectShape::new(1.0, 2.0, 3.0, 4.0)));
        match &obstacles[1] {
            Obstacle::Polygon { points } => assert_eq!(points.len(), 3),
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
