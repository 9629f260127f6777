//! Mailer builder: self-locking, kerf-compensated, no glue.
//!
//! The most intricate style. Front and back are double-wall assemblies whose
//! tucked inner walls give the box its strength; the left/right rims carry
//! long locking tabs that seat into kerf-compensated slots in the base.
//! Every pressure-fit pair is drawn so the male and female features differ
//! from nominal by exactly one kerf each, in opposite directions, so the
//! tool's material loss is never double-counted.

use tracing::debug;

use crate::error::{DielineError, DielineResult};
use crate::geometry::{pt, Design, Layer};
use crate::params::{BoxSpec, BoxStyle};
use crate::planner::Envelope;
use crate::tabs::{self, clamped_flap_height};

/// Distance from the base edge to the slot.
const SLOT_MARGIN: f64 = 2.0;
const SLOT_LEN: f64 = 20.0;
/// Clearance added over the material thickness before kerf compensation so
/// the tab slides rather than jams.
const SLOT_EXTRA: f64 = 0.5;
/// How far past the slot margin the locking tab reaches.
const TAB_OVERREACH: f64 = 15.0;
/// Nominal width of the locking tab where it meets the slot.
const TAB_BASE_NOMINAL: f64 = 18.0;
/// Taper from the tab base to its tip.
const TAB_TIP_TAPER: f64 = 2.0;
/// The inner wall stops one millimeter short of the full wall height so it
/// tucks without bottoming out.
const INNER_WALL_RELIEF: f64 = 1.0;
/// Vertical inset at both ends of a lid wing.
const WING_END_INSET: f64 = 5.0;
const TUCK_CAP: f64 = 40.0;
const TUCK_FACTOR: f64 = 0.7;
const TUCK_INSET: f64 = 5.0;

pub fn generate(spec: &BoxSpec) -> DielineResult<Design> {
    spec.validate_for(BoxStyle::Mailer)?;

    let env = Envelope::from_spec(spec);
    let (l, w, h) = (env.length, env.width, env.height);
    let t = spec.thickness;
    let kerf = spec.kerf;
    debug!(length = l, width = w, height = h, kerf, "generating mailer dieline");

    // Fail fast on dimensions that would emit degenerate or
    // self-intersecting geometry.
    let wing_clearance = 2.0 * t + 1.0;
    let wing_w = h - wing_clearance;
    if wing_w <= 0.0 {
        return Err(DielineError::Geometry(format!(
            "lid wings need wall height above {wing_clearance:.2}mm, envelope height is {h:.2}mm"
        )));
    }
    let inner_wall_len = h - INNER_WALL_RELIEF;
    if inner_wall_len <= 0.0 {
        return Err(DielineError::Geometry(format!(
            "inner walls need envelope height above {INNER_WALL_RELIEF}mm, got {h:.2}mm"
        )));
    }
    let tab_base_w = tabs::male_width(TAB_BASE_NOMINAL, kerf);
    if tab_base_w >= w {
        return Err(DielineError::Geometry(format!(
            "locking tab base ({tab_base_w:.2}mm) must stay narrower than the box width ({w:.2}mm)"
        )));
    }
    if SLOT_LEN >= w {
        return Err(DielineError::Geometry(format!(
            "locking slots ({SLOT_LEN}mm) must fit inside the box width ({w:.2}mm)"
        )));
    }

    let mut design = Design::new();

    // Base fold loop.
    design.add_poly(env.base_loop(), Layer::Fold, true);

    // Locking slots, centered on the left/right base edges. Female side of
    // the fit: drawn one kerf under nominal.
    let slot_w = tabs::female_width(t + SLOT_EXTRA, kerf);
    design.add_primitive(tabs::locking_slot(SLOT_MARGIN, w / 2.0, slot_w, SLOT_LEN));
    design.add_primitive(tabs::locking_slot(l - SLOT_MARGIN, w / 2.0, -slot_w, SLOT_LEN));

    // Front double wall: outer edge, then the two trapezoidal ears that
    // become the tucked inner walls, offset inward by one thickness.
    design.add_line(pt(0.0, -h), pt(l, -h), Layer::Cut);
    design.add_poly(
        vec![pt(0.0, -h), pt(-h + t, -h), pt(-h + t, -t), pt(0.0, -t)],
        Layer::Cut,
        false,
    );
    design.add_poly(
        vec![pt(l, -h), pt(l + h - t, -h), pt(l + h - t, -t), pt(l, -t)],
        Layer::Cut,
        false,
    );
    design.add_line(pt(0.0, 0.0), pt(0.0, -h), Layer::Fold);
    design.add_line(pt(l, 0.0), pt(l, -h), Layer::Fold);

    // Back double wall, mirrored across the base, plus the lid hinge.
    design.add_line(pt(0.0, w + h), pt(l, w + h), Layer::Fold);
    design.add_poly(
        vec![
            pt(0.0, w + h),
            pt(-h + t, w + h),
            pt(-h + t, w + t),
            pt(0.0, w + t),
        ],
        Layer::Cut,
        false,
    );
    design.add_line(pt(0.0, w), pt(0.0, w + h), Layer::Fold);
    design.add_poly(
        vec![
            pt(l, w + h),
            pt(l + h - t, w + h),
            pt(l + h - t, w + t),
            pt(l, w + t),
        ],
        Layer::Cut,
        false,
    );
    design.add_line(pt(l, w), pt(l, w + h), Layer::Fold);

    // Left rim: fold hinge at the rim crest, cut top/bottom edges, then the
    // inward-reaching locking tab profile. Male side of the fit: drawn one
    // kerf over nominal.
    let rim_x = -h;
    design.add_line(pt(rim_x, 0.0), pt(rim_x, w), Layer::Fold);
    design.add_line(pt(0.0, w), pt(rim_x, w), Layer::Cut);
    design.add_line(pt(0.0, 0.0), pt(rim_x, 0.0), Layer::Cut);

    let inner_end_x = rim_x - inner_wall_len;
    let tab_reach = SLOT_MARGIN + TAB_OVERREACH;
    design.add_poly(
        vec![
            pt(rim_x, w),
            pt(inner_end_x, w),
            pt(inner_end_x, w / 2.0 + tab_base_w / 2.0),
            pt(inner_end_x - tab_reach, w / 2.0 + tab_base_w / 2.0 - TAB_TIP_TAPER),
            pt(inner_end_x - tab_reach, w / 2.0 - tab_base_w / 2.0 + TAB_TIP_TAPER),
            pt(inner_end_x, w / 2.0 - tab_base_w / 2.0),
            pt(inner_end_x, 0.0),
            pt(rim_x, 0.0),
        ],
        Layer::Cut,
        false,
    );

    // Right rim, mirrored.
    let rim_xr = l + h;
    design.add_line(pt(rim_xr, 0.0), pt(rim_xr, w), Layer::Fold);
    design.add_line(pt(l, w), pt(rim_xr, w), Layer::Cut);
    design.add_line(pt(l, 0.0), pt(rim_xr, 0.0), Layer::Cut);

    let inner_end_xr = rim_xr + inner_wall_len;
    design.add_poly(
        vec![
            pt(rim_xr, w),
            pt(inner_end_xr, w),
            pt(inner_end_xr, w / 2.0 + tab_base_w / 2.0),
            pt(inner_end_xr + tab_reach, w / 2.0 + tab_base_w / 2.0 - TAB_TIP_TAPER),
            pt(inner_end_xr + tab_reach, w / 2.0 - tab_base_w / 2.0 + TAB_TIP_TAPER),
            pt(inner_end_xr, w / 2.0 - tab_base_w / 2.0),
            pt(inner_end_xr, 0.0),
            pt(rim_xr, 0.0),
        ],
        Layer::Cut,
        false,
    );

    // Lid: panel height equals the box width, with triangular wings cut
    // back by the clearance so the lid folds down between the double walls
    // without fouling them.
    let lid_h = w;
    design.add_line(pt(0.0, w + h), pt(0.0, w + h + lid_h), Layer::Fold);
    design.add_poly(
        vec![
            pt(0.0, w + h),
            pt(-wing_w, w + h + WING_END_INSET),
            pt(-wing_w, w + h + lid_h - WING_END_INSET),
            pt(0.0, w + h + lid_h),
        ],
        Layer::Cut,
        false,
    );
    design.add_line(pt(l, w + h), pt(l, w + h + lid_h), Layer::Fold);
    design.add_poly(
        vec![
            pt(l, w + h),
            pt(l + wing_w, w + h + WING_END_INSET),
            pt(l + wing_w, w + h + lid_h - WING_END_INSET),
            pt(l, w + h + lid_h),
        ],
        Layer::Cut,
        false,
    );

    // Tuck flap at the lid top.
    let tuck_h = clamped_flap_height(h, TUCK_CAP, TUCK_FACTOR);
    design.add_line(pt(0.0, w + h + lid_h), pt(l, w + h + lid_h), Layer::Fold);
    design.add_primitive(tabs::closing_flap(0.0, l, w + h + lid_h, tuck_h, TUCK_INSET)?);

    Ok(design)
}
