//! Hole layouts and the course loader
//!
//! A course is an ordered, non-empty list of levels. Course files are JSON:
//!
//! ```json
//! { "name": "Classic", "holes": [
//!     { "start": [100, 100], "cup": [700, 500],
//!       "obstacles": [ { "type": "rect", "x": 300, "y": 250, "width": 200, "height": 20 } ] } ] }
//! ```
//!
//! Loading validates every hole and rejects the whole course on the first
//! problem, so the engine never sees malformed shapes from a file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_SEGMENT_LENGTH_SQ;
use crate::error::LevelError;
use crate::sim::geometry::polygon_edges;
use crate::sim::state::{Cup, Level, Obstacle};
use crate::tuning::Tuning;

const CLASSIC_JSON: &str = include_str!("../courses/classic.json");

/// One hole as written in a course file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleDef {
    pub start: Vec2,
    pub cup: Vec2,
    /// Falls back to `Tuning::cup_radius`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cup_radius: Option<f32>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

/// A course file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDef {
    #[serde(default)]
    pub name: String,
    pub holes: Vec<HoleDef>,
}

/// A validated, playable course
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    holes: Vec<Level>,
}

impl Course {
    /// Build a course from levels, validating each against the playfield
    pub fn new(
        name: impl Into<String>,
        holes: Vec<Level>,
        tuning: &Tuning,
    ) -> Result<Self, LevelError> {
        if holes.is_empty() {
            return Err(LevelError::EmptyCourse);
        }
        for (index, level) in holes.iter().enumerate() {
            validate_level(index, level, tuning)?;
        }
        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    /// Resolve a parsed course file into levels
    pub fn from_def(def: CourseDef, tuning: &Tuning) -> Result<Self, LevelError> {
        let holes = def
            .holes
            .into_iter()
            .map(|hole| Level {
                start: hole.start,
                cup: Cup {
                    pos: hole.cup,
                    radius: hole.cup_radius.unwrap_or(tuning.cup_radius),
                },
                obstacles: hole.obstacles,
            })
            .collect();
        Self::new(def.name, holes, tuning)
    }

    /// Parse and validate a JSON course
    pub fn from_json(json: &str, tuning: &Tuning) -> Result<Self, LevelError> {
        let def: CourseDef = serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejected course: {}", e);
            LevelError::Parse(e.to_string())
        })?;
        let course =
            Self::from_def(def, tuning).inspect_err(|e| log::warn!("Rejected course: {}", e))?;
        log::info!("Loaded course '{}' with {} holes", course.name, course.len());
        Ok(course)
    }

    /// Convert back to the file representation
    pub fn to_def(&self) -> CourseDef {
        CourseDef {
            name: self.name.clone(),
            holes: self
                .holes
                .iter()
                .map(|level| HoleDef {
                    start: level.start,
                    cup: level.cup.pos,
                    cup_radius: Some(level.cup.radius),
                    obstacles: level.obstacles.clone(),
                })
                .collect(),
        }
    }

    /// The built-in four-hole course
    ///
    /// Holes take their cup radius from `tuning` and are checked against its
    /// playfield, so a shrunken field can reject the layout.
    pub fn classic(tuning: &Tuning) -> Result<Self, LevelError> {
        Self::from_json(CLASSIC_JSON, tuning)
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Always false for a constructed course
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Level for hole `index`
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn hole(&self, index: usize) -> &Level {
        &self.holes[index]
    }

    pub fn holes(&self) -> &[Level] {
        &self.holes
    }
}

fn finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn in_field(p: Vec2, tuning: &Tuning) -> bool {
    p.x >= 0.0 && p.x <= tuning.field_width && p.y >= 0.0 && p.y <= tuning.field_height
}

/// Check one hole; `hole` is only used for error reporting
pub fn validate_level(hole: usize, level: &Level, tuning: &Tuning) -> Result<(), LevelError> {
    if !finite(level.start) || !finite(level.cup.pos) {
        return Err(LevelError::NonFiniteCoordinate { hole });
    }
    if !in_field(level.start, tuning) {
        return Err(LevelError::OutOfBounds { hole, what: "start" });
    }
    if !in_field(level.cup.pos, tuning) {
        return Err(LevelError::OutOfBounds { hole, what: "cup" });
    }
    if !(level.cup.radius.is_finite() && level.cup.radius > 0.0) {
        return Err(LevelError::InvalidCupRadius { hole });
    }

    for (obstacle, shape) in level.obstacles.iter().enumerate() {
        match shape {
            Obstacle::Rect(rect) => {
                let corner = Vec2::new(rect.x, rect.y);
                let size = Vec2::new(rect.width, rect.height);
                if !finite(corner) || !finite(size) {
                    return Err(LevelError::NonFiniteCoordinate { hole });
                }
                if rect.width <= 0.0 || rect.height <= 0.0 {
                    return Err(LevelError::InvalidRect { hole, obstacle });
                }
            }
            Obstacle::Polygon { points } => {
                if !points.iter().all(|&p| finite(p)) {
                    return Err(LevelError::NonFiniteCoordinate { hole });
                }
                if points.len() < 3 {
                    return Err(LevelError::TooFewVertices {
                        hole,
                        obstacle,
                        count: points.len(),
                    });
                }
                if let Some(edge) = polygon_edges(points)
                    .position(|(a, b)| (b - a).length_squared() < MIN_SEGMENT_LENGTH_SQ)
                {
                    return Err(LevelError::DegenerateEdge {
                        hole,
                        obstacle,
                        edge,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(json: &str) -> Result<Course, LevelError> {
        Course::from_json(json, &Tuning::default())
    }

    fn classic() -> Course {
        Course::classic(&Tuning::default()).unwrap()
    }

    #[test]
    fn test_classic_is_valid() {
        let course = classic();
        assert_eq!(course.name, "Classic");
        assert_eq!(course.len(), 4);
        let tuning = Tuning::default();
        for (i, level) in course.holes().iter().enumerate() {
            assert_eq!(validate_level(i, level, &tuning), Ok(()));
        }
        assert_eq!(course.hole(3).obstacles.len(), 3);
        assert_eq!(course.hole(1).start, Vec2::new(150.0, 300.0));
    }

    #[test]
    fn test_classic_takes_cup_radius_from_tuning() {
        let tuning = Tuning {
            cup_radius: 40.0,
            ..Tuning::default()
        };
        let course = Course::classic(&tuning).unwrap();
        assert!(course.holes().iter().all(|level| level.cup.radius == 40.0));
    }

    #[test]
    fn test_classic_rejected_on_small_field() {
        let tuning = Tuning {
            field_width: 300.0,
            field_height: 200.0,
            ..Tuning::default()
        };
        assert_eq!(
            Course::classic(&tuning),
            Err(LevelError::OutOfBounds { hole: 0, what: "cup" })
        );
    }

    #[test]
    fn test_def_round_trip_through_json() {
        let json = serde_json::to_string(&classic().to_def()).unwrap();
        assert_eq!(load(&json).unwrap(), classic());
    }

    #[test]
    fn test_cup_radius_override_and_default() {
        let course = load(
            r#"{ "holes": [
                { "start": [10, 10], "cup": [50, 50] },
                { "start": [10, 10], "cup": [50, 50], "cup_radius": 30 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(course.hole(0).cup.radius, crate::consts::CUP_RADIUS);
        assert_eq!(course.hole(1).cup.radius, 30.0);
        assert!(course.hole(0).obstacles.is_empty());
    }

    #[test]
    fn test_rejects_empty_course() {
        assert_eq!(load(r#"{ "holes": [] }"#), Err(LevelError::EmptyCourse));
    }

    #[test]
    fn test_rejects_parse_error() {
        let truncated = r#"{ "holes": [ { "start": [1] } ] }"#;
        assert!(matches!(load(truncated), Err(LevelError::Parse(_))));

        let unknown_shape = r#"{ "holes": [ { "start": [1, 1], "cup": [2, 2],
            "obstacles": [ { "type": "circle" } ] } ] }"#;
        assert!(matches!(load(unknown_shape), Err(LevelError::Parse(_))));
    }

    #[test]
    fn test_rejects_negative_rect() {
        let err = load(
            r#"{ "holes": [ { "start": [10, 10], "cup": [50, 50], "obstacles": [
                { "type": "rect", "x": 0, "y": 0, "width": 10, "height": 10 },
                { "type": "rect", "x": 0, "y": 0, "width": -5, "height": 10 }
            ] } ] }"#,
        );
        assert_eq!(err, Err(LevelError::InvalidRect { hole: 0, obstacle: 1 }));
    }

    #[test]
    fn test_rejects_short_polygon() {
        let err = load(
            r#"{ "holes": [ { "start": [10, 10], "cup": [50, 50], "obstacles": [
                { "type": "polygon", "points": [[0, 0], [10, 0]] }
            ] } ] }"#,
        );
        assert_eq!(
            err,
            Err(LevelError::TooFewVertices {
                hole: 0,
                obstacle: 0,
                count: 2
            })
        );
    }

    #[test]
    fn test_rejects_degenerate_edge() {
        let err = load(
            r#"{ "holes": [ { "start": [10, 10], "cup": [50, 50], "obstacles": [
                { "type": "polygon", "points": [[0, 0], [10, 0], [10, 0], [5, 8]] }
            ] } ] }"#,
        );
        assert_eq!(
            err,
            Err(LevelError::DegenerateEdge {
                hole: 0,
                obstacle: 0,
                edge: 1
            })
        );
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let err = load(
            r#"{ "holes": [
                { "start": [10, 10], "cup": [50, 50] },
                { "start": [900, 10], "cup": [50, 50] }
            ] }"#,
        );
        assert_eq!(err, Err(LevelError::OutOfBounds { hole: 1, what: "start" }));

        let err = load(r#"{ "holes": [ { "start": [10, 10], "cup": [50, -1] } ] }"#);
        assert_eq!(err, Err(LevelError::OutOfBounds { hole: 0, what: "cup" }));
    }

    #[test]
    fn test_rejects_bad_cup_radius() {
        let err =
            load(r#"{ "holes": [ { "start": [10, 10], "cup": [50, 50], "cup_radius": 0 } ] }"#);
        assert_eq!(err, Err(LevelError::InvalidCupRadius { hole: 0 }));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let level = Level {
            start: Vec2::new(f32::NAN, 10.0),
            cup: Cup {
                pos: Vec2::new(50.0, 50.0),
                radius: 15.0,
            },
            obstacles: Vec::new(),
        };
        assert_eq!(
            Course::new("nan", vec![level], &Tuning::default()),
            Err(LevelError::NonFiniteCoordinate { hole: 0 })
        );
    }
}
