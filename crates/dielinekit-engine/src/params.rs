//! Parameter records forming the engine's input boundary.
//!
//! The UI collaborator gathers raw numbers and hands the engine one
//! [`DielineRequest`]; everything past that boundary is a pure function of
//! the request. Validation runs before any geometry is computed so no
//! partial design is ever produced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};

/// The supported construction styles, dispatched by exhaustive match so
/// adding or removing a style is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    OnePiece,
    Shoebox,
    Mailer,
    EcoShreds,
}

impl BoxStyle {
    pub const ALL: [BoxStyle; 4] = [
        BoxStyle::OnePiece,
        BoxStyle::Shoebox,
        BoxStyle::Mailer,
        BoxStyle::EcoShreds,
    ];

    /// Wire tag used in requests and file names.
    pub fn tag(&self) -> &'static str {
        match self {
            BoxStyle::OnePiece => "one_piece",
            BoxStyle::Shoebox => "shoebox",
            BoxStyle::Mailer => "mailer",
            BoxStyle::EcoShreds => "eco_shreds",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.tag() == tag)
    }

    /// Default output file name convention. A UI convenience, not part of
    /// the engine's contract.
    pub fn default_filename(&self) -> String {
        match self {
            BoxStyle::EcoShreds => "eco_shreds.dxf".to_string(),
            style => format!("box_{}.dxf", style.tag()),
        }
    }

    /// Short human description of the style.
    pub fn description(&self) -> &'static str {
        match self {
            BoxStyle::OnePiece => {
                "Classic 'pizza box' style with a hinged lid. \
                 Assembly requires glue on the four corner tabs."
            }
            BoxStyle::Shoebox => {
                "Two separate pieces: base plus telescoping lid tray. \
                 Assembly requires glue on all tabs."
            }
            BoxStyle::Mailer => {
                "Self-locking 'subscription box' style with strong double \
                 walls. No glue required; tabs snap into kerf-compensated slots."
            }
            BoxStyle::EcoShreds => {
                "Turns scrap cardboard into packing material: cuts a grid of \
                 1\" x 0.25\" strips over a rectangular sheet."
            }
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BoxStyle {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParameterError::UnknownStyle(s.to_string()))
    }
}

fn default_padding() -> f64 {
    5.0
}

fn default_thickness() -> f64 {
    3.0
}

fn default_lid_depth() -> f64 {
    40.0
}

fn default_kerf() -> f64 {
    0.1
}

/// Immutable input bundle for the container styles.
///
/// `length`, `width` and `height` are the item dimensions in millimeters;
/// `padding` is added to every planar dimension to form the outer envelope.
/// `thickness` drives kerf and slot sizing, not the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Wall height of the telescoping lid tray (Shoebox only). An
    /// independent input, not derived from item height.
    #[serde(default = "default_lid_depth")]
    pub lid_depth: f64,
    /// Width of material removed by the cutting tool, subtracted from
    /// male-fitting features (Mailer only).
    #[serde(default = "default_kerf")]
    pub kerf: f64,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 100.0,
            height: 100.0,
            padding: default_padding(),
            thickness: default_thickness(),
            lid_depth: default_lid_depth(),
            kerf: default_kerf(),
        }
    }
}

impl BoxSpec {
    /// Validate the fields every container style shares.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be a strictly positive number".to_string(),
                });
            }
        }

        for (name, value) in [
            ("padding", self.padding),
            ("thickness", self.thickness),
            ("kerf", self.kerf),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        }

        // The envelope dimensions bound how thick the stock can be: a wall
        // cannot be thicker than the panel it folds from.
        let envelope_min = (self.length + 2.0 * self.padding)
            .min(self.width + 2.0 * self.padding)
            .min(self.height + 2.0 * self.padding);
        if self.thickness >= envelope_min {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: self.thickness,
                min: 0.0,
                max: envelope_min,
            });
        }

        Ok(())
    }

    /// Validate for a specific style, adding the style's own constraints.
    pub fn validate_for(&self, style: BoxStyle) -> ParameterResult<()> {
        self.validate()?;

        match style {
            BoxStyle::Shoebox => {
                if !self.lid_depth.is_finite() || self.lid_depth <= 0.0 {
                    return Err(ParameterError::InvalidValue {
                        name: "lid_depth".to_string(),
                        reason: "must be a strictly positive number".to_string(),
                    });
                }
            }
            BoxStyle::Mailer => {
                // The kerf law only holds while the compensation stays
                // smaller than the material being compensated for.
                if self.kerf >= self.thickness {
                    return Err(ParameterError::OutOfRange {
                        name: "kerf".to_string(),
                        value: self.kerf,
                        min: 0.0,
                        max: self.thickness,
                    });
                }
            }
            BoxStyle::OnePiece | BoxStyle::EcoShreds => {}
        }

        Ok(())
    }
}

/// Sheet dimensions for the eco-shred grid, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            width_in: 8.0,
            height_in: 10.0,
        }
    }
}

impl SheetSpec {
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be a strictly positive number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A style tag paired with the parameter record that style consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum DielineRequest {
    OnePiece(BoxSpec),
    Shoebox(BoxSpec),
    Mailer(BoxSpec),
    EcoShreds(SheetSpec),
}

impl DielineRequest {
    pub fn style(&self) -> BoxStyle {
        match self {
            DielineRequest::OnePiece(_) => BoxStyle::OnePiece,
            DielineRequest::Shoebox(_) => BoxStyle::Shoebox,
            DielineRequest::Mailer(_) => BoxStyle::Mailer,
            DielineRequest::EcoShreds(_) => BoxStyle::EcoShreds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tags_round_trip() {
        for style in BoxStyle::ALL {
            assert_eq!(BoxStyle::from_tag(style.tag()), Some(style));
            assert_eq!(style.tag().parse::<BoxStyle>().unwrap(), style);
        }
        assert!(matches!(
            "pizza".parse::<BoxStyle>(),
            Err(ParameterError::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(BoxStyle::OnePiece.default_filename(), "box_one_piece.dxf");
        assert_eq!(BoxStyle::Mailer.default_filename(), "box_mailer.dxf");
        assert_eq!(BoxStyle::EcoShreds.default_filename(), "eco_shreds.dxf");
    }

    #[test]
    fn test_unspecified_fields_take_defaults() {
        let spec: BoxSpec =
            serde_json::from_str(r#"{"length": 100.0, "width": 50.0, "height": 30.0}"#).unwrap();
        assert_eq!(spec.padding, 5.0);
        assert_eq!(spec.thickness, 3.0);
        assert_eq!(spec.lid_depth, 40.0);
        assert_eq!(spec.kerf, 0.1);
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        let mut spec = BoxSpec::default();
        spec.width = 0.0;
        assert!(matches!(
            spec.validate(),
            Err(ParameterError::InvalidValue { name, .. }) if name == "width"
        ));

        let mut spec = BoxSpec::default();
        spec.height = f64::NAN;
        assert!(spec.validate().is_err());

        let mut spec = BoxSpec::default();
        spec.padding = -1.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_thickness_exceeding_envelope() {
        let spec = BoxSpec {
            length: 20.0,
            width: 20.0,
            height: 20.0,
            padding: 0.0,
            thickness: 25.0,
            ..BoxSpec::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(ParameterError::OutOfRange { name, .. }) if name == "thickness"
        ));
    }

    #[test]
    fn test_mailer_requires_kerf_below_thickness() {
        let spec = BoxSpec {
            kerf: 3.0,
            thickness: 3.0,
            ..BoxSpec::default()
        };
        assert!(spec.validate_for(BoxStyle::OnePiece).is_ok());
        assert!(spec.validate_for(BoxStyle::Mailer).is_err());
    }

    #[test]
    fn test_request_json_is_style_tagged() {
        let request: DielineRequest = serde_json::from_str(
            r#"{"style": "mailer", "length": 100.0, "width": 50.0, "height": 30.0}"#,
        )
        .unwrap();
        assert_eq!(request.style(), BoxStyle::Mailer);

        let request: DielineRequest = serde_json::from_str(
            r#"{"style": "eco_shreds", "width_in": 2.0, "height_in": 1.0}"#,
        )
        .unwrap();
        assert_eq!(request.style(), BoxStyle::EcoShreds);
    }
}
