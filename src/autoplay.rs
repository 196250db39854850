//! Seeded aim bot and headless course runner
//!
//! The bot aims at the cup with a little random error in angle and power,
//! then drives the same press/release input a player would. Runs are fully
//! reproducible for a given seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::scorecard::Scorecard;
use crate::sim::{BallState, GameEvent, GamePhase, GameState, TickInput, tick};

/// A simple shot-picking bot
#[derive(Debug, Clone)]
pub struct AimBot {
    rng: Pcg32,
    /// Max aim error either side (radians)
    pub aim_jitter: f32,
    /// Max relative power error
    pub power_jitter: f32,
    /// Aim this far past the cup, as a fraction of the distance
    pub overshoot: f32,
    /// Pointer position to release at once a drag is in progress
    pending_release: Option<Vec2>,
}

impl AimBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_jitter: 0.25,
            power_jitter: 0.2,
            overshoot: 1.03,
            pending_release: None,
        }
    }

    /// Where to release the pointer for a shot from the current position
    ///
    /// Returns `None` unless the ball is at rest on a live hole.
    pub fn plan_shot(&mut self, state: &GameState) -> Option<Vec2> {
        if state.phase != GamePhase::Playing || state.ball.state != BallState::Aiming {
            return None;
        }

        let ball = state.ball.pos;
        let to_cup = state.level().cup.pos - ball;
        let direction = to_cup.try_normalize()?;

        let angle = self.rng.random_range(-self.aim_jitter..=self.aim_jitter);
        let direction = Vec2::from_angle(angle).rotate(direction);

        let error = self.rng.random_range(-self.power_jitter..=self.power_jitter);
        let distance = to_cup.length() * self.overshoot;
        let speed = state.tuning.speed_for_distance(distance) * (1.0 + error);
        // Tuning built in code may skip validation, so min can exceed max
        let speed = speed.max(state.tuning.stop_epsilon).min(state.tuning.max_power);

        // Slingshot: pull back opposite the shot direction
        let drag_len = speed / state.tuning.power_scale;
        Some(ball - direction * drag_len)
    }

    /// Input for the next frame: press, then release on the following frame
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        if state.aiming {
            if let Some(pointer) = self.pending_release.take() {
                return TickInput {
                    pointer_released: Some(pointer),
                    ..Default::default()
                };
            }
        }

        match self.plan_shot(state) {
            Some(pointer) => {
                self.pending_release = Some(pointer);
                TickInput {
                    pointer_pressed: true,
                    ..Default::default()
                }
            }
            None => TickInput::default(),
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub course: String,
    pub seed: u64,
    pub frames: u64,
    pub completed: bool,
    /// Hole being played when the run ended (0-based)
    pub hole_reached: usize,
    /// Strokes on an unfinished hole
    pub pending_strokes: u32,
    pub scorecard: Scorecard,
}

impl RunSummary {
    pub fn total_strokes(&self) -> u32 {
        self.scorecard.total() + self.pending_strokes
    }
}

/// Play `state` with `bot` until the course is complete or `max_frames` pass
pub fn run_course(
    state: &mut GameState,
    bot: &mut AimBot,
    seed: u64,
    max_frames: u64,
) -> RunSummary {
    let mut frames = 0;
    while frames < max_frames && state.phase == GamePhase::Playing {
        let input = bot.next_input(state);
        for event in tick(state, &input) {
            if let GameEvent::HoleCaptured { hole, strokes } = event {
                log::debug!("Bot sank hole {} in {} strokes", hole + 1, strokes);
            }
        }
        frames += 1;
    }

    let completed = state.phase == GamePhase::CourseComplete;
    if !completed {
        log::warn!(
            "Run stopped after {} frames on hole {} ({} strokes)",
            frames,
            state.hole_index + 1,
            state.strokes
        );
    }

    RunSummary {
        course: state.course.name.clone(),
        seed,
        frames,
        completed,
        hole_reached: state.hole_index,
        pending_strokes: state.strokes,
        scorecard: state.scorecard.clone(),
    }
}
