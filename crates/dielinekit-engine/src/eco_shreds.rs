//! Eco-shred grid builder.
//!
//! Not a foldable container: cuts a uniform grid of 1" x 0.25" strips over a
//! rectangular sheet, turning scrap cardboard into packing material. The
//! sheet is given in inches and converted to millimeters before emission, so
//! the output shares the millimeter contract of every other builder. No
//! `FOLD` output, no tabs.

use tracing::debug;

use crate::error::DielineResult;
use crate::geometry::{pt, Design, Layer};
use crate::params::SheetSpec;

const INCH_TO_MM: f64 = 25.4;
/// Strip length: one column per inch.
const SHRED_LENGTH_IN: f64 = 1.0;
/// Strip width: four rows per inch.
const SHRED_WIDTH_IN: f64 = 0.25;

pub fn generate(sheet: &SheetSpec) -> DielineResult<Design> {
    sheet.validate()?;

    let total_w = sheet.width_in * INCH_TO_MM;
    let total_h = sheet.height_in * INCH_TO_MM;
    let col_spacing = SHRED_LENGTH_IN * INCH_TO_MM;
    let row_spacing = SHRED_WIDTH_IN * INCH_TO_MM;

    let cols = (sheet.width_in / SHRED_LENGTH_IN).floor() as usize;
    let rows = (sheet.height_in / SHRED_WIDTH_IN).floor() as usize;
    debug!(cols, rows, total_w, total_h, "generating eco-shred grid");

    let mut design = Design::new();

    for i in 0..=cols {
        let x = i as f64 * col_spacing;
        if x <= total_w {
            design.add_line(pt(x, 0.0), pt(x, total_h), Layer::Cut);
        }
    }

    for j in 0..=rows {
        let y = j as f64 * row_spacing;
        if y <= total_h {
            design.add_line(pt(0.0, y), pt(total_w, y), Layer::Cut);
        }
    }

    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;

    fn lines(design: &Design) -> Vec<(f64, f64, f64, f64)> {
        design
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::Segment { p1, p2, .. } => (p1.x, p1.y, p2.x, p2.y),
                other => panic!("eco grid must contain only segments, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_two_by_one_inch_scenario() {
        let design = generate(&SheetSpec {
            width_in: 2.0,
            height_in: 1.0,
        })
        .unwrap();

        let all = lines(&design);
        let verticals: Vec<f64> = all
            .iter()
            .filter(|(x1, _, x2, _)| x1 == x2)
            .map(|(x1, _, _, _)| *x1)
            .collect();
        let horizontals: Vec<f64> = all
            .iter()
            .filter(|(_, y1, _, y2)| y1 == y2)
            .map(|(_, y1, _, _)| *y1)
            .collect();

        assert_eq!(verticals, vec![0.0, 25.4, 50.8]);
        assert_eq!(horizontals, vec![0.0, 6.35, 12.7, 19.05, 25.4]);
    }

    #[test]
    fn test_no_line_beyond_sheet_bound() {
        let sheet = SheetSpec {
            width_in: 2.5,
            height_in: 1.1,
        };
        let design = generate(&sheet).unwrap();
        let total_w = 2.5 * 25.4;
        let total_h = 1.1 * 25.4;

        for (x1, y1, x2, y2) in lines(&design) {
            assert!(x1 <= total_w && x2 <= total_w);
            assert!(y1 <= total_h && y2 <= total_h);
        }

        // floor(2.5) + 1 columns, floor(1.1 / 0.25) + 1 rows.
        let all = lines(&design);
        let verticals = all.iter().filter(|(x1, _, x2, _)| x1 == x2).count();
        let horizontals = all.iter().filter(|(_, y1, _, y2)| y1 == y2).count();
        assert_eq!(verticals, 3);
        assert_eq!(horizontals, 5);
    }

    #[test]
    fn test_grid_is_cut_only() {
        let design = generate(&SheetSpec::default()).unwrap();
        assert!(design
            .primitives()
            .iter()
            .all(|p| p.layer() == Layer::Cut));
    }

    #[test]
    fn test_rejects_non_positive_sheet() {
        assert!(generate(&SheetSpec {
            width_in: 0.0,
            height_in: 1.0,
        })
        .is_err());
    }
}
