//! Rack mounting hole layout.
//!
//! Eurorack panels are screwed to the rack rails through a pair of holes at
//! the top and bottom of the panel, with additional pairs at regular HP
//! intervals for wide panels. Holes are derived data: they are recomputed
//! from the current [`PanelDimensions`] whenever the width changes and are
//! never persisted with the model.

use panelkit_core::PanelDimensions;
use panelkit_core::Vector2;

/// Spacing and sizing rules for mounting holes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingHoleConfig {
    /// Drill diameter for an M3 rack screw with clearance.
    pub diameter_mm: f64,
    /// Width of one hole column segment, in HP.
    pub spacing_hp: u32,
    /// Distance from a segment edge to its hole column.
    pub horizontal_offset_mm: f64,
    /// Distance from the panel's top/bottom edge to the hole centers.
    pub vertical_offset_mm: f64,
}

impl Default for MountingHoleConfig {
    fn default() -> Self {
        Self {
            diameter_mm: 3.2,
            spacing_hp: 20,
            horizontal_offset_mm: 7.5,
            vertical_offset_mm: 3.0,
        }
    }
}

/// A single rack-mounting hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingHole {
    pub center: Vector2,
    pub diameter_mm: f64,
}

/// Generates mounting holes with the default Eurorack configuration.
pub fn generate_default_mounting_holes(dimensions: &PanelDimensions) -> Vec<MountingHole> {
    generate_mounting_holes(dimensions, &MountingHoleConfig::default())
}

/// Generates the full mounting hole set for a panel.
///
/// The panel is split into `ceil(width_hp / spacing_hp)` horizontal segments
/// (at least one). Each segment contributes a left and a right hole column,
/// inset by the horizontal offset from the segment edges, with one hole per
/// column at the top and at the bottom of the panel: `segments * 4` holes in
/// total. A segment too narrow for both columns collapses them onto its
/// midpoint, so narrow panels still yield four holes rather than failing.
pub fn generate_mounting_holes(
    dimensions: &PanelDimensions,
    config: &MountingHoleConfig,
) -> Vec<MountingHole> {
    let spacing_hp = config.spacing_hp.max(1);
    let segments = dimensions.width_hp.div_ceil(spacing_hp).max(1);
    let segment_width = dimensions.width_mm / segments as f64;

    let top_y = config.vertical_offset_mm;
    let bottom_y = dimensions.height_mm - config.vertical_offset_mm;

    let mut holes = Vec::with_capacity(segments as usize * 4);
    for segment in 0..segments {
        let start = segment as f64 * segment_width;
        let end = start + segment_width;

        let mut left_x = start + config.horizontal_offset_mm;
        let mut right_x = end - config.horizontal_offset_mm;
        if right_x < left_x {
            // Columns would cross: pin both to the segment midpoint.
            let mid = (start + end) / 2.0;
            left_x = mid;
            right_x = mid;
        }

        for y in [top_y, bottom_y] {
            holes.push(MountingHole {
                center: Vector2::new(left_x, y),
                diameter_mm: config.diameter_mm,
            });
            holes.push(MountingHole {
                center: Vector2::new(right_x, y),
                diameter_mm: config.diameter_mm,
            });
        }
    }

    holes
}
