//! # DielineKit Engine
//!
//! Parametric net-generation engine for flat, foldable cardboard dielines.
//! Given box dimensions and a construction style, the engine derives every
//! panel, hinge, tab, notch, and slot as 2D primitives tagged by function
//! (`CUT` vs `FOLD`) so the flat pattern folds into a structurally valid
//! container with correctly mating tabs.
//!
//! ## Builders included
//!
//! - **One-Piece**: classic glued box with a single hinged lid
//! - **Shoebox**: two telescoping trays (base plus lid) on one sheet
//! - **Mailer**: self-locking double-wall box with kerf-compensated
//!   slot/tab pairs, assembled without glue
//! - **Eco-Shred Grid**: a uniform cut grid turning scrap sheet into
//!   packing strips
//!
//! ## Supporting infrastructure
//!
//! - **Coordinate Planner**: closed-form envelope arithmetic shared by the
//!   box styles
//! - **Tab/Notch Generator**: trapezoidal glue tabs, closing flaps, and
//!   kerf-compensated locking slots
//! - **DXF Sink**: serializes a design to a millimeter-unit DXF drawing
//!   with `CUT`/`FOLD` layers
//!
//! Generation is a pure function of its request: no state is held across
//! invocations, and the emitted primitive order is deterministic.

pub mod dxf_writer;
pub mod eco_shreds;
pub mod error;
pub mod geometry;
pub mod mailer;
pub mod one_piece;
pub mod params;
pub mod planner;
pub mod shoebox;
pub mod tabs;

pub use error::{DielineError, DielineResult, ParameterError, ParameterResult};
pub use geometry::{Design, Layer, Point, Primitive};
pub use params::{BoxSpec, BoxStyle, DielineRequest, SheetSpec};
pub use planner::Envelope;

/// Generate the flat pattern for a request.
///
/// Dispatch is an exhaustive match over the closed style enumeration, so
/// adding or removing a style is a compile-time-checked change. Validation
/// runs before any geometry is computed; on error no partial design exists.
pub fn generate(request: &DielineRequest) -> DielineResult<Design> {
    match request {
        DielineRequest::OnePiece(spec) => one_piece::generate(spec),
        DielineRequest::Shoebox(spec) => shoebox::generate(spec),
        DielineRequest::Mailer(spec) => mailer::generate(spec),
        DielineRequest::EcoShreds(sheet) => eco_shreds::generate(sheet),
    }
}
