//! One-Piece box builder.
//!
//! Classic "pizza box" style: a single blank with a hinged lid, assembled by
//! gluing the four corner tabs. The rule driving every CUT/FOLD choice here
//! (and in the shoebox builder) is that an edge is `FOLD` exactly when a tab
//! or an adjacent panel stays permanently attached along it in the folded
//! state; otherwise it is `CUT`.

use tracing::debug;

use crate::error::DielineResult;
use crate::geometry::{pt, Design, Layer};
use crate::params::{BoxSpec, BoxStyle};
use crate::planner::Envelope;
use crate::tabs::{self, clamped_flap_height};

const TAB_REACH: f64 = 15.0;
const TAB_INSET: f64 = 3.0;
const FLAP_CAP: f64 = 30.0;
const FLAP_FACTOR: f64 = 0.6;
const FLAP_INSET: f64 = 3.0;

pub fn generate(spec: &BoxSpec) -> DielineResult<Design> {
    spec.validate_for(BoxStyle::OnePiece)?;

    let env = Envelope::from_spec(spec);
    let (l, w, h) = (env.length, env.width, env.height);
    debug!(length = l, width = w, height = h, "generating one-piece dieline");

    let mut design = Design::new();

    // Base: the only panel hinged on all four sides, so its whole boundary
    // is one closed fold loop.
    design.add_poly(env.base_loop(), Layer::Fold, true);

    // Front wall: shares its top edge with the base fold loop, which is
    // never re-emitted; the remaining three sides separate.
    design.add_poly(
        vec![pt(0.0, 0.0), pt(0.0, -h), pt(l, -h), pt(l, 0.0)],
        Layer::Cut,
        false,
    );

    // Back wall: hinged to the base below and the lid above, so only its
    // side edges are cut.
    design.add_line(pt(0.0, w), pt(0.0, w + h), Layer::Cut);
    design.add_line(pt(l, w), pt(l, w + h), Layer::Cut);
    design.add_line(pt(0.0, w + h), pt(l, w + h), Layer::Fold);

    // Side walls: the corner tabs hinge on their top and bottom edges, so
    // only the outer vertical edge is cut.
    design.add_line(pt(-h, 0.0), pt(-h, w), Layer::Cut);
    design.add_line(pt(l + h, 0.0), pt(l + h, w), Layer::Cut);

    // Corner glue tabs: top-left, bottom-left, top-right, bottom-right.
    tabs::corner_tab(-h, 0.0, w, TAB_REACH, TAB_INSET)?.emit(&mut design);
    tabs::corner_tab(-h, 0.0, 0.0, -TAB_REACH, TAB_INSET)?.emit(&mut design);
    tabs::corner_tab(l, l + h, w, TAB_REACH, TAB_INSET)?.emit(&mut design);
    tabs::corner_tab(l, l + h, 0.0, -TAB_REACH, TAB_INSET)?.emit(&mut design);

    // Lid: two cut sides and a fold hinge at the top.
    let lid_top = w + h + env.lid_depth(spec.thickness);
    design.add_line(pt(0.0, w + h), pt(0.0, lid_top), Layer::Cut);
    design.add_line(pt(l, w + h), pt(l, lid_top), Layer::Cut);
    design.add_line(pt(0.0, lid_top), pt(l, lid_top), Layer::Fold);

    // Closing flap, hinged on the lid's top fold.
    let flap_h = clamped_flap_height(h, FLAP_CAP, FLAP_FACTOR);
    design.add_primitive(tabs::closing_flap(0.0, l, lid_top, flap_h, FLAP_INSET)?);

    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;

    fn scenario_spec() -> BoxSpec {
        BoxSpec {
            length: 100.0,
            width: 50.0,
            height: 30.0,
            padding: 5.0,
            thickness: 3.0,
            ..BoxSpec::default()
        }
    }

    #[test]
    fn test_base_loop_corners() {
        let design = generate(&scenario_spec()).unwrap();
        match &design.primitives()[0] {
            Primitive::Polyline { points, closed, layer } => {
                assert!(*closed);
                assert_eq!(*layer, Layer::Fold);
                let xy: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
                assert_eq!(xy, vec![(0.0, 0.0), (110.0, 0.0), (110.0, 60.0), (0.0, 60.0)]);
            }
            other => panic!("expected base fold loop first, got {other:?}"),
        }
    }

    #[test]
    fn test_front_wall_u_cut_span() {
        let design = generate(&scenario_spec()).unwrap();
        match &design.primitives()[1] {
            Primitive::Polyline { points, closed, layer } => {
                assert!(!*closed);
                assert_eq!(*layer, Layer::Cut);
                let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
                assert_eq!(ys, vec![0.0, -40.0, -40.0, 0.0]);
            }
            other => panic!("expected front wall polyline, got {other:?}"),
        }
    }

    #[test]
    fn test_left_wall_outer_edge() {
        let design = generate(&scenario_spec()).unwrap();
        let found = design.primitives().iter().any(|p| {
            matches!(
                p,
                Primitive::Segment { p1, p2, layer: Layer::Cut }
                    if (p1.x, p1.y) == (-40.0, 0.0) && (p2.x, p2.y) == (-40.0, 60.0)
            )
        });
        assert!(found, "left wall outer edge (-40,0)-(-40,60) missing");
    }

    #[test]
    fn test_flap_height_clamped_for_short_walls() {
        // H = 40 -> flap would be min(30, 24) = 24.
        let design = generate(&scenario_spec()).unwrap();
        let flap = design.primitives().last().unwrap();
        match flap {
            Primitive::Polyline { points, .. } => {
                let hinge_y = points[0].y;
                let tip_y = points[1].y;
                assert!((tip_y - hinge_y - 24.0).abs() < 1e-9);
            }
            other => panic!("expected flap polyline, got {other:?}"),
        }

        // Tall box: the 30mm cap wins.
        let tall = BoxSpec {
            height: 200.0,
            ..scenario_spec()
        };
        let design = generate(&tall).unwrap();
        match design.primitives().last().unwrap() {
            Primitive::Polyline { points, .. } => {
                assert!((points[1].y - points[0].y - 30.0).abs() < 1e-9);
            }
            other => panic!("expected flap polyline, got {other:?}"),
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(&scenario_spec()).unwrap();
        let b = generate(&scenario_spec()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_spec_produces_no_design() {
        let spec = BoxSpec {
            length: -5.0,
            ..scenario_spec()
        };
        assert!(generate(&spec).is_err());
    }
}
