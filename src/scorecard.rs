//! In-session scorecard
//!
//! Tracks strokes per completed hole and the running total. Nothing is
//! persisted; a restart clears it.

use serde::{Deserialize, Serialize};

/// Strokes taken on one completed hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    /// Hole index (0-based)
    pub hole: usize,
    pub strokes: u32,
}

/// Per-hole stroke tally for the current round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub holes: Vec<HoleResult>,
}

impl Scorecard {
    /// Create an empty scorecard
    pub fn new() -> Self {
        Self { holes: Vec::new() }
    }

    /// Record a completed hole and return the new running total
    pub fn record_hole(&mut self, hole: usize, strokes: u32) -> u32 {
        self.holes.push(HoleResult { hole, strokes });
        self.total()
    }

    /// Sum of strokes over completed holes
    pub fn total(&self) -> u32 {
        self.holes.iter().map(|h| h.strokes).sum()
    }

    /// Strokes recorded for a hole, if it was completed
    pub fn strokes_for(&self, hole: usize) -> Option<u32> {
        self.holes.iter().find(|h| h.hole == hole).map(|h| h.strokes)
    }

    pub fn holes_played(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Best (fewest strokes) completed hole; earliest wins ties
    pub fn best_hole(&self) -> Option<HoleResult> {
        self.holes
            .iter()
            .copied()
            .reduce(|best, h| if h.strokes < best.strokes { h } else { best })
    }

    pub fn clear(&mut self) {
        self.holes.clear();
    }

    /// One line per hole plus a total, for terminal output
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for h in &self.holes {
            out.push_str(&format!("Hole {:>2}: {:>3} strokes\n", h.hole + 1, h.strokes));
        }
        out.push_str(&format!("Total:   {:>3} strokes", self.total()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut card = Scorecard::new();
        assert!(card.is_empty());
        assert_eq!(card.record_hole(0, 3), 3);
        assert_eq!(card.record_hole(1, 5), 8);
        assert_eq!(card.total(), 8);
        assert_eq!(card.holes_played(), 2);
        assert_eq!(card.strokes_for(1), Some(5));
        assert_eq!(card.strokes_for(2), None);
    }

    #[test]
    fn test_best_hole_prefers_earliest_tie() {
        let mut card = Scorecard::new();
        assert_eq!(card.best_hole(), None);
        card.record_hole(0, 4);
        card.record_hole(1, 2);
        card.record_hole(2, 2);
        assert_eq!(card.best_hole(), Some(HoleResult { hole: 1, strokes: 2 }));
    }

    #[test]
    fn test_clear() {
        let mut card = Scorecard::new();
        card.record_hole(0, 7);
        card.clear();
        assert_eq!(card.total(), 0);
        assert!(card.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut card = Scorecard::new();
        card.record_hole(0, 3);
        card.record_hole(1, 12);
        assert_eq!(
            card.summary(),
            "Hole  1:   3 strokes\nHole  2:  12 strokes\nTotal:    15 strokes"
        );
    }
}
