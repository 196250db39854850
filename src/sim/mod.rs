//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Obstacles resolved in list order
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{
    EdgeContact, ball_boundary_collision, ball_polygon_collision, ball_polygon_contact,
    ball_rect_collision, collide_obstacle, collide_obstacles, reflect_off_edge, reflect_velocity,
};
pub use geometry::{RectShape, closest_point_on_segment, edge_normal};
pub use state::{
    Ball, BallEvent, BallState, Cup, GameEvent, GamePhase, GameState, Level, Obstacle, Shot,
};
pub use tick::{TickInput, apply_shot, is_captured, load_level, step_frame, tick};
