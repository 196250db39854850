//! Error types for loading course and tuning data.
//!
//! The engine itself never fails; these are raised before a level becomes
//! active so malformed data is rejected up front.

use core::fmt;

/// Errors that reject a course at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// The JSON could not be parsed into a course.
    Parse(String),
    /// A course needs at least one hole.
    EmptyCourse,
    /// A coordinate or dimension was NaN or infinite.
    NonFiniteCoordinate { hole: usize },
    /// Rectangle width and height must be positive.
    InvalidRect { hole: usize, obstacle: usize },
    /// Polygons need at least 3 vertices.
    TooFewVertices { hole: usize, obstacle: usize, count: usize },
    /// Two consecutive polygon vertices coincide.
    DegenerateEdge { hole: usize, obstacle: usize, edge: usize },
    /// Start or cup lies outside the playfield.
    OutOfBounds { hole: usize, what: &'static str },
    /// Cup radius must be positive.
    InvalidCupRadius { hole: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Holes and obstacles are reported 1-based, like the scorecard
        match self {
            LevelError::Parse(msg) => write!(f, "invalid course data: {}", msg),
            LevelError::EmptyCourse => write!(f, "course has no holes"),
            LevelError::NonFiniteCoordinate { hole } => {
                write!(f, "hole {}: coordinates must be finite", hole + 1)
            }
            LevelError::InvalidRect { hole, obstacle } => write!(
                f,
                "hole {} obstacle {}: rectangle width and height must be positive",
                hole + 1,
                obstacle + 1
            ),
            LevelError::TooFewVertices {
                hole,
                obstacle,
                count,
            } => write!(
                f,
                "hole {} obstacle {}: polygon needs at least 3 vertices (got {})",
                hole + 1,
                obstacle + 1,
                count
            ),
            LevelError::DegenerateEdge {
                hole,
                obstacle,
                edge,
            } => write!(
                f,
                "hole {} obstacle {}: edge {} has zero length",
                hole + 1,
                obstacle + 1,
                edge + 1
            ),
            LevelError::OutOfBounds { hole, what } => {
                write!(f, "hole {}: {} is outside the playfield", hole + 1, what)
            }
            LevelError::InvalidCupRadius { hole } => {
                write!(f, "hole {}: cup radius must be positive", hole + 1)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Errors from out-of-range physics parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// The JSON could not be parsed.
    Parse(String),
    /// Friction must be in (0, 1) so a rolling ball always slows down.
    InvalidFriction(f32),
    /// A parameter that must be positive and finite was not.
    NotPositive { field: &'static str, value: f32 },
    /// The strongest shot would stop on the frame it was hit.
    StopAboveMaxPower { stop_epsilon: f32, max_power: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(msg) => write!(f, "invalid tuning data: {}", msg),
            TuningError::InvalidFriction(value) => {
                write!(f, "friction must be in (0, 1), got {}", value)
            }
            TuningError::NotPositive { field, value } => {
                write!(f, "{} must be positive and finite, got {}", field, value)
            }
            TuningError::StopAboveMaxPower {
                stop_epsilon,
                max_power,
            } => write!(
                f,
                "stop_epsilon ({}) must be below max_power ({})",
                stop_epsilon, max_power
            ),
        }
    }
}

impl std::error::Error for TuningError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_error_messages_are_one_based() {
        let err = LevelError::TooFewVertices {
            hole: 0,
            obstacle: 2,
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "hole 1 obstacle 3: polygon needs at least 3 vertices (got 2)"
        );
    }

    #[test]
    fn test_tuning_error_message() {
        let err = TuningError::NotPositive {
            field: "max_power",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "max_power must be positive and finite, got -1");
    }

    #[test]
    fn test_stop_above_max_power_message() {
        let err = TuningError::StopAboveMaxPower {
            stop_epsilon: 20.0,
            max_power: 15.0,
        };
        assert_eq!(err.to_string(), "stop_epsilon (20) must be below max_power (15)");
    }
}
