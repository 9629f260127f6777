//! Error types for the dieline engine.
//!
//! This module provides structured error types for parameter validation,
//! geometry generation, and drawing persistence.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating or persisting a dieline.
#[derive(Error, Debug)]
pub enum DielineError {
    /// A parameter failed validation; no geometry was computed.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// The requested dimensions produce degenerate or self-intersecting
    /// geometry (e.g. a tab wider than its parent panel).
    #[error("Infeasible geometry: {0}")]
    Geometry(String),

    /// The drawing sink failed to serialize the design.
    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),

    /// I/O error while persisting the drawing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to dieline parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Dimensions are invalid (zero, negative, or mutually incompatible).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The style tag does not name a known box style.
    #[error("Unknown box style: {0}")]
    UnknownStyle(String),
}

/// Result type alias for engine operations.
pub type DielineResult<T> = Result<T, DielineError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
