//! Grid snapping for interactive placement.

use panelkit_core::Vector2;

/// Snaps a point to a grid anchored at the panel center.
///
/// Anchoring at the center rather than the corner keeps the grid visually
/// symmetric for any panel width. A non-finite or non-positive grid size
/// means "no snapping" and returns the point unchanged.
pub fn snap_point_to_grid(point: Vector2, grid_size_mm: f64, panel_size_mm: Vector2) -> Vector2 {
    if !grid_size_mm.is_finite() || grid_size_mm <= 0.0 {
        return point;
    }

    let center = Vector2::new(panel_size_mm.x / 2.0, panel_size_mm.y / 2.0);
    let relative = Vector2::new(point.x - center.x, point.y - center.y);

    Vector2::new(
        center.x + (relative.x / grid_size_mm).round() * grid_size_mm,
        center.y + (relative.y / grid_size_mm).round() * grid_size_mm,
    )
}
