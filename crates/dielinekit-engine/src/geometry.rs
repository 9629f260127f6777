//! Geometry primitives shared by every net builder.
//!
//! A dieline is an ordered sequence of straight-edge primitives, each tagged
//! with the layer that gives it meaning on the cutter: `CUT` separates
//! material, `FOLD` marks a crease where two panels stay joined.

use serde::{Deserialize, Serialize};

/// A 2D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shorthand constructor used by the builders.
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Function tag carried by every primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Material is fully separated along this edge.
    Cut,
    /// Two panels remain joined and are creased during assembly.
    Fold,
}

impl Layer {
    /// DXF layer name.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Cut => "CUT",
            Layer::Fold => "FOLD",
        }
    }

    /// Conventional AutoCAD color index for the layer (1 = red, 5 = blue).
    pub fn color_index(&self) -> u8 {
        match self {
            Layer::Cut => 1,
            Layer::Fold => 5,
        }
    }
}

/// A single drawable shape. Everything the engine emits is representable as
/// straight segments and polylines, so cutter software can load the output
/// without curve flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Segment {
        p1: Point,
        p2: Point,
        layer: Layer,
    },
    Polyline {
        points: Vec<Point>,
        closed: bool,
        layer: Layer,
    },
}

impl Primitive {
    pub fn layer(&self) -> Layer {
        match self {
            Primitive::Segment { layer, .. } => *layer,
            Primitive::Polyline { layer, .. } => *layer,
        }
    }
}

/// An ordered, append-only sequence of primitives describing one flat
/// pattern. Constructed once per generation request and handed immutably to
/// the drawing sink; emission order is preserved for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    primitives: Vec<Primitive>,
}

impl Design {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a straight segment between two points on a layer.
    pub fn add_line(&mut self, p1: Point, p2: Point, layer: Layer) {
        self.primitives.push(Primitive::Segment { p1, p2, layer });
    }

    /// Add a polyline through an ordered point list, optionally closed.
    pub fn add_poly(&mut self, points: Vec<Point>, layer: Layer, closed: bool) {
        self.primitives.push(Primitive::Polyline {
            points,
            closed,
            layer,
        });
    }

    pub fn add_primitive(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Axis-aligned bounding box over every vertex, or `None` for an empty
    /// design.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut seen = false;

        let mut visit = |p: &Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            seen = true;
        };

        for primitive in &self.primitives {
            match primitive {
                Primitive::Segment { p1, p2, .. } => {
                    visit(p1);
                    visit(p2);
                }
                Primitive::Polyline { points, .. } => {
                    for p in points {
                        visit(p);
                    }
                }
            }
        }

        seen.then_some((min, max))
    }
}
