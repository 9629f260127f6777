//! DXF drawing sink.
//!
//! Serializes a [`Design`] into a millimeter-unit DXF drawing with the two
//! conventional layers (`CUT` red, `FOLD` blue). Only straight segments and
//! lightweight polylines are emitted, so the output loads directly into
//! typical laser/vinyl-cutter software without curve flattening. The engine
//! performs no retry on sink failure; generation is cheap to redo.

use std::path::Path;

use dxf::entities::{Entity, EntityType, Line, LwPolyline};
use dxf::enums::{AcadVersion, Units};
use dxf::tables::Layer as DxfLayer;
use dxf::{Color, Drawing, LwPolylineVertex, Point as DxfPoint};
use tracing::debug;

use crate::error::DielineResult;
use crate::geometry::{Design, Layer, Point, Primitive};

fn dxf_point(p: &Point) -> DxfPoint {
    DxfPoint::new(p.x, p.y, 0.0)
}

/// Convert a design into a DXF drawing, preserving emission order.
pub fn to_drawing(design: &Design) -> Drawing {
    let mut drawing = Drawing::new();
    // $INSUNITS is only serialized for R2000+; without this the units set
    // below are dropped on save.
    drawing.header.version = AcadVersion::R2000;
    drawing.header.default_drawing_units = Units::Millimeters;

    for layer in [Layer::Cut, Layer::Fold] {
        drawing.add_layer(DxfLayer {
            name: layer.name().to_string(),
            color: Color::from_index(layer.color_index()),
            ..Default::default()
        });
    }

    for primitive in design.primitives() {
        let entity = match primitive {
            Primitive::Segment { p1, p2, layer } => {
                let mut e = Entity::new(EntityType::Line(Line::new(dxf_point(p1), dxf_point(p2))));
                e.common.layer = layer.name().to_string();
                e
            }
            Primitive::Polyline {
                points,
                closed,
                layer,
            } => {
                let mut poly = LwPolyline::default();
                for p in points {
                    poly.vertices.push(LwPolylineVertex {
                        x: p.x,
                        y: p.y,
                        ..Default::default()
                    });
                }
                if *closed {
                    // Bit 0 marks a closed polyline.
                    poly.flags |= 1;
                }
                let mut e = Entity::new(EntityType::LwPolyline(poly));
                e.common.layer = layer.name().to_string();
                e
            }
        };
        drawing.add_entity(entity);
    }

    drawing
}

/// Persist a design to a DXF file at `path`.
pub fn save_design(design: &Design, path: &Path) -> DielineResult<()> {
    let drawing = to_drawing(design);
    drawing.save_file(&*path.to_string_lossy())?;
    debug!(path = %path.display(), primitives = design.len(), "saved dieline");
    Ok(())
}
