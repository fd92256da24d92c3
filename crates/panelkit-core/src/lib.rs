//! # PanelKit Core
//!
//! Core types and utilities for the PanelKit Eurorack panel designer.
//! Provides the physical constants of the Eurorack format, unit conversion
//! between centimeters, millimeters, and HP, panel dimensioning, and the
//! shared geometry primitives and error types used by the designer crate.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use constants::{
    DEFAULT_PANEL_WIDTH_CM, MIN_PANEL_WIDTH_CM, MM_PER_CM, MM_PER_HP, THREE_U_HEIGHT_MM,
};
pub use error::{Error, Result, SerializationError};
pub use geometry::Vector2;
pub use units::{
    cm_to_mm, compute_panel_width, create_panel_dimensions, create_panel_dimensions_scaled,
    hp_to_mm, hp_to_mm_scaled, mm_to_cm, mm_to_hp, sanitize_width_cm, PanelDimensions, PanelWidth,
};
