//! Collision detection and response
//!
//! Every function here is a pure velocity transform: given where the ball is
//! and how it is moving, return the velocity it should have afterwards.
//! Positions are never corrected, so a ball may sit slightly inside a wall or
//! shape for a frame. Fast balls can tunnel through thin shapes because the
//! step is discrete.

use glam::Vec2;

use super::geometry::{RectShape, closest_point_on_segment, edge_normal, polygon_edges};
use super::state::Obstacle;

/// First polygon edge the ball is touching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Index of the edge's first vertex
    pub edge: usize,
    /// Closest point on the edge to the ball center
    pub point: Vec2,
    /// Unit edge normal (winding-dependent sense)
    pub normal: Vec2,
}

/// Reflect velocity off a surface
///
/// The normal is flipped to face against the velocity first, since an edge
/// normal's sense depends on vertex order. `normal` must be unit length.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    let normal = if velocity.dot(normal) > 0.0 {
        -normal
    } else {
        normal
    };
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect velocity off the line through `a` and `b`
///
/// A zero-length edge has no normal and leaves the velocity unchanged.
pub fn reflect_off_edge(velocity: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    match edge_normal(a, b) {
        Some(normal) => reflect_velocity(velocity, normal),
        None => velocity,
    }
}

/// Ball vs axis-aligned rectangle
///
/// Probes the point one frame ahead along each axis separately and flips
/// that axis if the probe lands inside. Both axes can flip in the same frame.
/// The probe is the ball center only; radius is ignored.
pub fn ball_rect_collision(ball_pos: Vec2, ball_vel: Vec2, rect: &RectShape) -> Vec2 {
    let mut vel = ball_vel;
    if rect.contains_point(Vec2::new(ball_pos.x + ball_vel.x, ball_pos.y)) {
        vel.x = -vel.x;
    }
    if rect.contains_point(Vec2::new(ball_pos.x, ball_pos.y + ball_vel.y)) {
        vel.y = -vel.y;
    }
    vel
}

/// Find the first edge (in vertex order) within `ball_radius` of the ball
///
/// Not the nearest edge: iteration stops at the first match. Zero-length
/// edges are skipped, and polygons with fewer than 3 vertices never touch.
pub fn ball_polygon_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    points: &[Vec2],
) -> Option<EdgeContact> {
    if points.len() < 3 {
        return None;
    }

    for (edge, (a, b)) in polygon_edges(points).enumerate() {
        let Some(normal) = edge_normal(a, b) else {
            continue;
        };
        let closest = closest_point_on_segment(ball_pos, a, b);
        if (ball_pos - closest).length() <= ball_radius {
            return Some(EdgeContact {
                edge,
                point: closest,
                normal,
            });
        }
    }

    None
}

/// Ball vs polygon: at most one edge reflection per polygon per frame
pub fn ball_polygon_collision(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    points: &[Vec2],
) -> Vec2 {
    match ball_polygon_contact(ball_pos, ball_radius, points) {
        Some(contact) => {
            log::trace!("polygon edge {} hit at {:?}", contact.edge, contact.point);
            reflect_velocity(ball_vel, contact.normal)
        }
        None => ball_vel,
    }
}

/// Resolve a single obstacle
pub fn collide_obstacle(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    obstacle: &Obstacle,
) -> Vec2 {
    match obstacle {
        Obstacle::Rect(rect) => ball_rect_collision(ball_pos, ball_vel, rect),
        Obstacle::Polygon { points } => {
            ball_polygon_collision(ball_pos, ball_vel, ball_radius, points)
        }
    }
}

/// Resolve obstacles in list order; each sees the previous one's result
pub fn collide_obstacles(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    obstacles: &[Obstacle],
) -> Vec2 {
    obstacles.iter().fold(ball_vel, |vel, obstacle| {
        collide_obstacle(ball_pos, vel, ball_radius, obstacle)
    })
}

/// Check collision with the playfield edges
///
/// Each axis flips independently when the ball center is within one radius
/// of (or past) either wall on that axis.
pub fn ball_boundary_collision(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    field_width: f32,
    field_height: f32,
) -> Vec2 {
    let mut vel = ball_vel;
    if ball_pos.x <= ball_radius || ball_pos.x >= field_width - ball_radius {
        vel.x = -vel.x;
    }
    if ball_pos.y <= ball_radius || ball_pos.y >= field_height - ball_radius {
        vel.y = -vel.y;
    }
    vel
}
