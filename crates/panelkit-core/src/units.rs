//! Unit conversion and panel dimensioning.
//!
//! Handles conversion between centimeters, millimeters, and HP (the Eurorack
//! "horizontal pitch" width unit, 5.08 mm) and derives full panel dimension
//! records from a single user-supplied width. Invalid numeric input is
//! clamped, never rejected: the editor favors a non-blocking experience over
//! strict validation.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_PANEL_WIDTH_CM, MM_PER_CM, MM_PER_HP, THREE_U_HEIGHT_MM};

/// Full dimension record for a panel. Derived from a single width value;
/// the height is always the fixed 3U constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDimensions {
    pub width_cm: f64,
    pub width_mm: f64,
    pub width_hp: u32,
    pub height_mm: f64,
}

/// Result of quantizing a panel width against the HP grid.
///
/// `width_mm` is the user's literal input converted to millimeters;
/// `normalized_width_mm` is the width of the nearest standard rack panel
/// (the whole-HP count converted back to millimeters). Both are retained
/// so editing fields can show the literal value while exports can snap to
/// a manufacturable width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidth {
    pub width_cm: f64,
    pub width_mm: f64,
    pub width_hp: u32,
    pub normalized_width_mm: f64,
}

/// Convert centimeters to millimeters.
pub fn cm_to_mm(cm: f64) -> f64 {
    cm * MM_PER_CM
}

/// Convert millimeters to centimeters.
pub fn mm_to_cm(mm: f64) -> f64 {
    mm / MM_PER_CM
}

/// Convert millimeters to HP using the canonical 5.08 mm/HP constant.
pub fn mm_to_hp(mm: f64) -> f64 {
    mm / MM_PER_HP
}

/// Convert HP to millimeters using the canonical 5.08 mm/HP constant.
pub fn hp_to_mm(hp: f64) -> f64 {
    hp_to_mm_scaled(hp, MM_PER_HP)
}

/// Convert HP to millimeters with a caller-supplied mm-per-HP ratio.
///
/// Used when the user edits width through the HP field of an existing panel:
/// reusing the panel's current ratio keeps repeated small HP edits from
/// drifting the physical width.
pub fn hp_to_mm_scaled(hp: f64, mm_per_hp: f64) -> f64 {
    hp * mm_per_hp
}

/// Clamp a width input to the supported range. Non-finite values and values
/// below the 1 cm floor both collapse to the floor.
pub fn sanitize_width_cm(value: f64) -> f64 {
    if value.is_finite() && value >= MIN_PANEL_WIDTH_CM {
        value
    } else {
        MIN_PANEL_WIDTH_CM
    }
}

/// Sanitize a width and quantize it against the HP grid.
pub fn compute_panel_width(width_cm: f64) -> PanelWidth {
    compute_panel_width_scaled(width_cm, MM_PER_HP)
}

fn compute_panel_width_scaled(width_cm: f64, mm_per_hp: f64) -> PanelWidth {
    let width_cm = sanitize_width_cm(width_cm);
    let width_mm = cm_to_mm(width_cm);
    // Snap up to the next whole HP so the quantized width is always
    // manufacturable, never narrower than the requested panel. The epsilon
    // keeps a width already on an HP boundary from ceiling to the next HP.
    let width_hp = ((width_mm / mm_per_hp) - 1e-9).ceil().max(1.0) as u32;
    PanelWidth {
        width_cm,
        width_mm,
        width_hp,
        normalized_width_mm: width_hp as f64 * mm_per_hp,
    }
}

/// Derive a full dimension record from a width in centimeters.
pub fn create_panel_dimensions(width_cm: f64) -> PanelDimensions {
    create_panel_dimensions_scaled(width_cm, MM_PER_HP)
}

/// Derive a full dimension record using a caller-supplied mm-per-HP ratio.
/// See [`hp_to_mm_scaled`] for when the ratio differs from the canonical
/// constant.
pub fn create_panel_dimensions_scaled(width_cm: f64, mm_per_hp: f64) -> PanelDimensions {
    let width = compute_panel_width_scaled(width_cm, mm_per_hp);
    PanelDimensions {
        width_cm: width.width_cm,
        width_mm: width.width_mm,
        width_hp: width.width_hp,
        height_mm: THREE_U_HEIGHT_MM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_mm() {
        assert!((cm_to_mm(4.2) - 42.0).abs() < 1e-9);
        assert_eq!(cm_to_mm(1.0), 10.0);
    }

    #[test]
    fn test_mm_hp_inverse() {
        assert!((mm_to_hp(10.16) - 2.0).abs() < 1e-9);
        assert!((hp_to_mm(2.0) - 10.16).abs() < 1e-9);
        assert!((hp_to_mm(mm_to_hp(37.3)) - 37.3).abs() < 1e-9);
    }

    #[test]
    fn test_hp_to_mm_scaled() {
        assert_eq!(hp_to_mm_scaled(4.0, 5.0), 20.0);
    }

    #[test]
    fn test_sanitize_width() {
        assert_eq!(sanitize_width_cm(0.5), 1.0);
        assert_eq!(sanitize_width_cm(f64::NAN), 1.0);
        assert_eq!(sanitize_width_cm(f64::INFINITY), 1.0);
        assert_eq!(sanitize_width_cm(12.0), 12.0);
    }

    #[test]
    fn test_compute_panel_width() {
        let width = compute_panel_width(3.2);
        assert_eq!(width.width_cm, 3.2);
        assert!((width.width_mm - 32.0).abs() < 1e-9);
        assert_eq!(width.width_hp, 7);
        assert!((width.normalized_width_mm - 35.56).abs() < 1e-9);
    }

    #[test]
    fn test_dimensions_use_standard_height() {
        let dimensions = create_panel_dimensions(3.2);
        assert_eq!(dimensions.height_mm, THREE_U_HEIGHT_MM);
        assert!(dimensions.width_hp > 0);
    }

    #[test]
    fn test_dimensions_sanitize_invalid_width() {
        let dimensions = create_panel_dimensions(f64::NAN);
        assert_eq!(dimensions.width_cm, MIN_PANEL_WIDTH_CM);
        assert_eq!(dimensions.width_mm, 10.0);
        assert_eq!(dimensions.width_hp, 2);
    }

    #[test]
    fn test_scaled_dimensions_preserve_ratio() {
        // A panel whose mm-per-HP ratio drifted from the canonical constant
        // keeps its own ratio when re-dimensioned.
        let dimensions = create_panel_dimensions_scaled(2.0, 5.0);
        assert_eq!(dimensions.width_hp, 4);
    }
}
