//! Property-based tests for unit conversion and dimensioning invariants.

use proptest::prelude::*;

use panelkit_core::{
    cm_to_mm, compute_panel_width, create_panel_dimensions, hp_to_mm, mm_to_hp, sanitize_width_cm,
    MIN_PANEL_WIDTH_CM, THREE_U_HEIGHT_MM,
};

proptest! {
    #[test]
    fn height_is_fixed_for_any_width(width_cm in 1.0f64..200.0) {
        let dimensions = create_panel_dimensions(width_cm);
        prop_assert_eq!(dimensions.height_mm, THREE_U_HEIGHT_MM);
    }

    #[test]
    fn cm_to_mm_is_exact_decimal_shift(value in -1.0e6f64..1.0e6) {
        prop_assert_eq!(cm_to_mm(value), value * 10.0);
    }

    #[test]
    fn hp_conversions_are_inverse(mm in 0.1f64..2000.0) {
        let round_tripped = hp_to_mm(mm_to_hp(mm));
        prop_assert!((round_tripped - mm).abs() < 1e-9);
    }

    #[test]
    fn sanitized_width_is_always_usable(value in prop::num::f64::ANY) {
        let width = sanitize_width_cm(value);
        prop_assert!(width.is_finite());
        prop_assert!(width >= MIN_PANEL_WIDTH_CM);
    }

    #[test]
    fn quantized_width_never_narrows_the_panel(width_cm in 1.0f64..200.0) {
        let width = compute_panel_width(width_cm);
        prop_assert!(width.width_hp >= 1);
        // The HP-snapped width is at least the requested width, modulo the
        // fp tolerance used at exact HP boundaries.
        prop_assert!(width.normalized_width_mm >= width.width_mm - 1e-6);
    }
}
