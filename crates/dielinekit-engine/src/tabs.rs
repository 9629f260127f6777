//! Locking/glue tab, slot, and flap construction.
//!
//! Tab polylines are always open: one edge of the tab boundary is the `FOLD`
//! hinge that attaches it to the parent panel, and closing the polyline
//! would double-cut that shared edge.

use crate::error::{DielineError, DielineResult};
use crate::geometry::{pt, Design, Layer, Primitive};

/// A tab's open cut outline paired with the fold hinge that attaches it to
/// its parent panel.
#[derive(Debug, Clone)]
pub struct TabPair {
    pub cut: Primitive,
    pub fold: Primitive,
}

impl TabPair {
    pub fn emit(self, design: &mut Design) {
        design.add_primitive(self.cut);
        design.add_primitive(self.fold);
    }
}

/// Build a trapezoidal glue tab hinged on the horizontal span `x1..x2` at
/// height `y`, reaching `reach` away from the hinge (signed: positive is up)
/// with its base inset by `inset` on both sides.
pub fn corner_tab(x1: f64, x2: f64, y: f64, reach: f64, inset: f64) -> DielineResult<TabPair> {
    let span = x2 - x1;
    if span <= 2.0 * inset {
        return Err(DielineError::Geometry(format!(
            "tab hinge span {span:.2}mm cannot accommodate a {inset:.2}mm base inset on both sides"
        )));
    }
    if reach == 0.0 || !reach.is_finite() {
        return Err(DielineError::Geometry(format!(
            "tab reach must be a non-zero distance, got {reach}"
        )));
    }

    let cut = Primitive::Polyline {
        points: vec![
            pt(x1, y),
            pt(x1 + inset, y + reach),
            pt(x2 - inset, y + reach),
            pt(x2, y),
        ],
        closed: false,
        layer: Layer::Cut,
    };
    let fold = Primitive::Segment {
        p1: pt(x1, y),
        p2: pt(x2, y),
        layer: Layer::Fold,
    };

    Ok(TabPair { cut, fold })
}

/// Build a closing-flap trapezoid over `x1..x2` at height `y`. The flap has
/// no hinge of its own: the parent panel's top `FOLD` edge is the hinge.
pub fn closing_flap(
    x1: f64,
    x2: f64,
    y: f64,
    height: f64,
    inset: f64,
) -> DielineResult<Primitive> {
    let span = x2 - x1;
    if span <= 2.0 * inset {
        return Err(DielineError::Geometry(format!(
            "flap span {span:.2}mm cannot accommodate a {inset:.2}mm inset on both sides"
        )));
    }
    if height <= 0.0 || !height.is_finite() {
        return Err(DielineError::Geometry(format!(
            "flap height must be strictly positive, got {height}"
        )));
    }

    Ok(Primitive::Polyline {
        points: vec![
            pt(x1, y),
            pt(x1 + inset, y + height),
            pt(x2 - inset, y + height),
            pt(x2, y),
        ],
        closed: false,
        layer: Layer::Cut,
    })
}

/// Clamp a flap or tab reach to a fraction of the wall it departs from.
/// This is a hard invariant, not a tunable default: the tab must never
/// exceed its parent panel's span.
pub fn clamped_flap_height(wall: f64, cap: f64, factor: f64) -> f64 {
    (wall * factor).min(cap)
}

/// Drawn width of a female (slot/hole) feature: the cutting tool widens a
/// hole by one kerf, so the hole is drawn one kerf under nominal.
pub fn female_width(nominal: f64, kerf: f64) -> f64 {
    nominal - kerf
}

/// Drawn width of a male (tab/protrusion) feature: the cutting tool narrows
/// a protrusion by one kerf, so it is drawn one kerf over nominal.
pub fn male_width(nominal: f64, kerf: f64) -> f64 {
    nominal + kerf
}

/// Build a closed rectangular locking slot anchored at `x`, centered
/// vertically on `center_y`. `width` is the drawn (already kerf-compensated)
/// slot width, signed so the slot can extend left or right of its anchor.
pub fn locking_slot(x: f64, center_y: f64, width: f64, length: f64) -> Primitive {
    let half = length / 2.0;
    Primitive::Polyline {
        points: vec![
            pt(x, center_y - half),
            pt(x, center_y + half),
            pt(x + width, center_y + half),
            pt(x + width, center_y - half),
        ],
        closed: true,
        layer: Layer::Cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn poly_points(primitive: &Primitive) -> &[Point] {
        match primitive {
            Primitive::Polyline { points, .. } => points,
            other => panic!("expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn test_corner_tab_is_open_with_matching_hinge() {
        let tab = corner_tab(-40.0, 0.0, 60.0, 15.0, 3.0).unwrap();

        match &tab.cut {
            Primitive::Polyline { points, closed, layer } => {
                assert!(!closed, "tab outline must stay open; the hinge closes it");
                assert_eq!(*layer, Layer::Cut);
                assert_eq!(points.len(), 4);
                assert_eq!((points[0].x, points[0].y), (-40.0, 60.0));
                assert_eq!((points[1].x, points[1].y), (-37.0, 75.0));
                assert_eq!((points[2].x, points[2].y), (-3.0, 75.0));
                assert_eq!((points[3].x, points[3].y), (0.0, 60.0));
            }
            other => panic!("expected polyline, got {other:?}"),
        }

        match &tab.fold {
            Primitive::Segment { p1, p2, layer } => {
                assert_eq!(*layer, Layer::Fold);
                assert_eq!((p1.x, p1.y), (-40.0, 60.0));
                assert_eq!((p2.x, p2.y), (0.0, 60.0));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_corner_tab_rejects_narrow_span() {
        assert!(matches!(
            corner_tab(0.0, 5.0, 0.0, 15.0, 3.0),
            Err(DielineError::Geometry(_))
        ));
        assert!(matches!(
            corner_tab(0.0, 40.0, 0.0, 0.0, 3.0),
            Err(DielineError::Geometry(_))
        ));
    }

    #[test]
    fn test_negative_reach_extends_downward() {
        let tab = corner_tab(0.0, 40.0, 0.0, -15.0, 3.0).unwrap();
        let points = poly_points(&tab.cut);
        assert_eq!(points[1].y, -15.0);
        assert_eq!(points[2].y, -15.0);
    }

    #[test]
    fn test_flap_height_clamp() {
        // Tall wall: the cap wins.
        assert_eq!(clamped_flap_height(100.0, 30.0, 0.6), 30.0);
        // Short wall: the fraction wins, keeping the flap inside the wall.
        assert_eq!(clamped_flap_height(20.0, 30.0, 0.6), 12.0);
        for wall in [1.0, 10.0, 50.0, 500.0] {
            assert!(clamped_flap_height(wall, 30.0, 0.6) <= (wall * 0.6).min(30.0));
        }
    }

    #[test]
    fn test_kerf_compensation_is_one_kerf_per_side() {
        let kerf = 0.1;
        assert_eq!(female_width(3.5, kerf), 3.4);
        assert_eq!(male_width(18.0, kerf), 18.1);
        // Drawn widths differ from nominal by exactly one kerf each.
        assert!((male_width(18.0, kerf) - 18.0 - kerf).abs() < 1e-12);
        assert!((18.0 - female_width(18.0, kerf) - kerf).abs() < 1e-12);
    }

    #[test]
    fn test_locking_slot_is_closed_cut() {
        let slot = locking_slot(2.0, 30.0, 3.4, 20.0);
        match slot {
            Primitive::Polyline { points, closed, layer } => {
                assert!(closed);
                assert_eq!(layer, Layer::Cut);
                assert_eq!((points[0].x, points[0].y), (2.0, 20.0));
                assert_eq!((points[2].x, points[2].y), (5.4, 40.0));
            }
            other => panic!("expected polyline, got {other:?}"),
        }
    }
}
