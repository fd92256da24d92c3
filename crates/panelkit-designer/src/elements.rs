//! Element factory and property sanitation.

use uuid::Uuid;

use panelkit_core::Vector2;

use crate::model::{ElementProperties, PanelElement, PanelElementType};

fn default_properties(element_type: PanelElementType) -> ElementProperties {
    match element_type {
        PanelElementType::Jack => ElementProperties::Circular {
            diameter_mm: 8.0,
            label: String::new(),
        },
        PanelElementType::Potentiometer => ElementProperties::Circular {
            diameter_mm: 10.0,
            label: String::new(),
        },
        PanelElementType::Switch => ElementProperties::Rectangular {
            width_mm: 8.0,
            height_mm: 16.0,
            label: String::new(),
        },
        PanelElementType::Led => ElementProperties::Circular {
            diameter_mm: 3.0,
            label: String::new(),
        },
        PanelElementType::Label => ElementProperties::Label {
            text: "Label".to_string(),
            font_size_pt: 10.0,
            label: String::new(),
        },
    }
}

/// Creates a new element of the given type at the given position, with a
/// fresh unique id and the type's default properties.
pub fn create_panel_element(element_type: PanelElementType, position_mm: Vector2) -> PanelElement {
    PanelElement {
        id: Uuid::new_v4().to_string(),
        element_type,
        position_mm,
        rotation_deg: None,
        properties: default_properties(element_type),
    }
}

/// Replaces an element's properties when `properties` is `Some`, otherwise
/// returns the element unchanged. Pairs with [`sanitize_properties_for_type`],
/// whose `None` result means "discard the draft, keep the defaults".
pub fn with_element_properties(
    mut element: PanelElement,
    properties: Option<ElementProperties>,
) -> PanelElement {
    if let Some(properties) = properties {
        element.properties = properties;
    }
    element
}

/// Validates that a properties value has the shape the element type expects
/// and that its numeric fields are finite and positive. Returns `None` on any
/// mismatch; callers must treat that as "use defaults", never as a failure.
pub fn sanitize_properties_for_type(
    element_type: PanelElementType,
    properties: &ElementProperties,
) -> Option<ElementProperties> {
    let valid = match (element_type, properties) {
        (
            PanelElementType::Jack | PanelElementType::Potentiometer | PanelElementType::Led,
            ElementProperties::Circular { diameter_mm, .. },
        ) => diameter_mm.is_finite() && *diameter_mm > 0.0,
        (
            PanelElementType::Switch,
            ElementProperties::Rectangular {
                width_mm,
                height_mm,
                ..
            },
        ) => width_mm.is_finite() && *width_mm > 0.0 && height_mm.is_finite() && *height_mm > 0.0,
        (PanelElementType::Label, ElementProperties::Label { font_size_pt, .. }) => {
            font_size_pt.is_finite() && *font_size_pt > 0.0
        }
        _ => false,
    };

    valid.then(|| properties.clone())
}
