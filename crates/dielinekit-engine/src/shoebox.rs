//! Shoebox builder: two telescoping trays on one sheet.
//!
//! The base tray and the lid tray are structurally identical, so both come
//! out of one shared tray routine. The lid tray's planar envelope is
//! inflated by two material thicknesses plus a fixed clearance gap so it
//! telescopes over the base without binding; its wall height is an
//! independent input, not derived from the item height.

use tracing::debug;

use crate::error::DielineResult;
use crate::geometry::{pt, Design, Layer};
use crate::params::{BoxSpec, BoxStyle};
use crate::planner::Envelope;
use crate::tabs::{self, clamped_flap_height};

const TAB_CAP: f64 = 20.0;
const TAB_FACTOR: f64 = 0.8;
const TAB_INSET: f64 = 3.0;
/// Telescoping clearance between the base walls and the lid walls.
const TRAY_GAP: f64 = 2.0;
/// Horizontal sheet distance between the two trays.
const TRAY_SPACING: f64 = 50.0;

pub fn generate(spec: &BoxSpec) -> DielineResult<Design> {
    spec.validate_for(BoxStyle::Shoebox)?;

    let env = Envelope::from_spec(spec);
    debug!(
        length = env.length,
        width = env.width,
        height = env.height,
        lid_depth = spec.lid_depth,
        "generating shoebox dieline"
    );

    let mut design = Design::new();

    draw_tray(&mut design, 0.0, 0.0, env.width, env.length, env.height)?;

    let lid_length = env.length + 2.0 * spec.thickness + TRAY_GAP;
    let lid_width = env.width + 2.0 * spec.thickness + TRAY_GAP;
    let lid_origin_x = env.length + env.height * 2.0 + spec.lid_depth * 2.0 + TRAY_SPACING;
    draw_tray(
        &mut design,
        lid_origin_x,
        0.0,
        lid_width,
        lid_length,
        spec.lid_depth,
    )?;

    Ok(design)
}

/// Draw one open-top tray with its floor at `(sx, sy)`, `bl` long, `bw`
/// wide, with `bh` walls.
fn draw_tray(
    design: &mut Design,
    sx: f64,
    sy: f64,
    bw: f64,
    bl: f64,
    bh: f64,
) -> DielineResult<()> {
    // Floor: hinged on all four sides, one closed fold loop.
    design.add_poly(
        vec![
            pt(sx, sy),
            pt(sx + bl, sy),
            pt(sx + bl, sy + bw),
            pt(sx, sy + bw),
        ],
        Layer::Fold,
        true,
    );

    // Top and bottom walls: nothing attaches to them, so all three free
    // edges are cut.
    design.add_poly(
        vec![
            pt(sx, sy + bw),
            pt(sx, sy + bw + bh),
            pt(sx + bl, sy + bw + bh),
            pt(sx + bl, sy + bw),
        ],
        Layer::Cut,
        false,
    );
    design.add_poly(
        vec![
            pt(sx, sy),
            pt(sx, sy - bh),
            pt(sx + bl, sy - bh),
            pt(sx + bl, sy),
        ],
        Layer::Cut,
        false,
    );

    // Left and right walls: tabs hinge on their top and bottom edges, so
    // only the outer vertical edge is cut.
    design.add_line(pt(sx - bh, sy), pt(sx - bh, sy + bw), Layer::Cut);
    design.add_line(pt(sx + bl + bh, sy), pt(sx + bl + bh, sy + bw), Layer::Cut);

    // Corner glue tabs, clamped so they never overrun the wall they fold
    // from.
    let tab_d = clamped_flap_height(bh, TAB_CAP, TAB_FACTOR);
    tabs::corner_tab(sx - bh, sx, sy + bw, tab_d, TAB_INSET)?.emit(design);
    tabs::corner_tab(sx - bh, sx, sy, -tab_d, TAB_INSET)?.emit(design);
    tabs::corner_tab(sx + bl, sx + bl + bh, sy + bw, tab_d, TAB_INSET)?.emit(design);
    tabs::corner_tab(sx + bl, sx + bl + bh, sy, -tab_d, TAB_INSET)?.emit(design);

    Ok(())
}
