//! Panel model: element taxonomy, per-type properties, display options,
//! and the top-level [`PanelModel`] that serialization and history operate on.

use serde::{Deserialize, Serialize};

use panelkit_core::{PanelDimensions, Vector2};

/// The closed set of element kinds that can be placed on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelElementType {
    Jack,
    Potentiometer,
    Switch,
    Led,
    Label,
}

impl PanelElementType {
    /// All element kinds, in palette order.
    pub const ALL: [PanelElementType; 5] = [
        PanelElementType::Jack,
        PanelElementType::Potentiometer,
        PanelElementType::Switch,
        PanelElementType::Led,
        PanelElementType::Label,
    ];
}

/// Per-type element properties.
///
/// Serialized untagged with camelCase field names so payloads carry a plain
/// `properties` object whose shape is keyed by the element type, matching
/// the historical project format. The required fields of the three shapes
/// are disjoint, so deserialization is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementProperties {
    /// Round cutout: jacks, potentiometers, LEDs.
    #[serde(rename_all = "camelCase")]
    Circular { diameter_mm: f64, label: String },
    /// Rectangular cutout: switches.
    #[serde(rename_all = "camelCase")]
    Rectangular {
        width_mm: f64,
        height_mm: f64,
        label: String,
    },
    /// Printed text, no cutout.
    #[serde(rename_all = "camelCase")]
    Label {
        text: String,
        font_size_pt: f64,
        label: String,
    },
}

/// A single placed element. Identity is the `id`, generated at creation and
/// used for selection, movement, and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: PanelElementType,
    pub position_mm: Vector2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    pub properties: ElementProperties,
}

/// Display and interaction options, independent of geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions {
    pub show_grid: bool,
    pub show_mounting_holes: bool,
    pub snap_to_grid: bool,
    pub grid_size_mm: f64,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_mounting_holes: true,
            snap_to_grid: true,
            grid_size_mm: 5.0,
        }
    }
}

/// The single source of truth for a panel design. Element order is z-order
/// (insertion order). Serialized as a whole; snapshotted as a whole by the
/// undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelModel {
    pub dimensions: PanelDimensions,
    pub elements: Vec<PanelElement>,
    pub options: PanelOptions,
}

impl PanelModel {
    /// Creates an empty model with the given dimensions and default options.
    pub fn new(dimensions: PanelDimensions) -> Self {
        Self {
            dimensions,
            elements: Vec::new(),
            options: PanelOptions::default(),
        }
    }

    /// Looks up an element by id.
    pub fn element(&self, id: &str) -> Option<&PanelElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Looks up an element by id, mutably.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut PanelElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }
}
