//! Closed-form coordinate planning.
//!
//! Every reference coordinate a net builder needs is a linear combination of
//! the input dimensions; there is no trigonometry and no iteration.

use crate::geometry::{pt, Point};
use crate::params::BoxSpec;

/// The outer envelope of a box: item dimensions inflated by padding on every
/// planar side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Envelope {
    pub fn from_spec(spec: &BoxSpec) -> Self {
        Self {
            length: spec.length + 2.0 * spec.padding,
            width: spec.width + 2.0 * spec.padding,
            height: spec.height + 2.0 * spec.padding,
        }
    }

    /// Corner points of the base panel, counter-clockwise from the origin.
    /// Every box style hinges its walls on this loop.
    pub fn base_loop(&self) -> Vec<Point> {
        vec![
            pt(0.0, 0.0),
            pt(self.length, 0.0),
            pt(self.length, self.width),
            pt(0.0, self.width),
        ]
    }

    /// Depth of the One-Piece lid: half a material thickness past the base
    /// width so the closed lid clears the front wall.
    pub fn lid_depth(&self, thickness: f64) -> f64 {
        self.width + thickness * 0.5
    }
}
