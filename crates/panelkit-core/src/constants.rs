//! Physical constants of the Eurorack format.

/// Millimeters per HP ("horizontal pitch", 0.2 inch).
pub const MM_PER_HP: f64 = 5.08;

/// Millimeters per centimeter.
pub const MM_PER_CM: f64 = 10.0;

/// Height of a 3U Eurorack panel in millimeters. The only height this
/// system supports.
pub const THREE_U_HEIGHT_MM: f64 = 128.5;

/// Narrowest panel width accepted, in centimeters. Width inputs below
/// this floor (or non-finite) are clamped rather than rejected.
pub const MIN_PANEL_WIDTH_CM: f64 = 1.0;

/// Width of a freshly created panel, in centimeters.
pub const DEFAULT_PANEL_WIDTH_CM: f64 = 10.0;
