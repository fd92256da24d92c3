//! SVG cutout artwork builder.
//!
//! Renders a panel model plus its mounting holes into a single SVG document
//! sized in physical millimeters. The plate is one compound even-odd path:
//! the panel outline rectangle followed by one sub-path per hole and per
//! cutout-bearing element, so every sub-path subtracts from the plate and the
//! result is a solid panel with holes punched through. Stroked outlines and
//! label text are drawn on top purely for preview purposes.
//!
//! `build_panel_svg` is pure: identical inputs produce byte-identical output,
//! which keeps snapshot tests stable.

use crate::model::{ElementProperties, PanelElement, PanelElementType, PanelModel};
use crate::mounting_holes::MountingHole;

const DEFAULT_STROKE: &str = "#e5e7eb";
const DEFAULT_PANEL_FILL: &str = "#0f172a";

/// Points-to-pixels factor for label text (1 pt = 1/72 in, 96 px/in).
const PT_TO_PX: f64 = 1.333;

/// Stroke and fill overrides for the generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Outline color for mounting holes.
    pub stroke: String,
    /// Outline width for mounting holes and the panel plate.
    pub stroke_width: f64,
    /// Plate outline color; falls back to `stroke` when `None`.
    pub panel_stroke: Option<String>,
    /// Flat background rectangle behind the plate; omitted when `None`.
    pub background: Option<String>,
    /// Fill color of the plate.
    pub panel_fill: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: 0.8,
            panel_stroke: None,
            background: None,
            panel_fill: DEFAULT_PANEL_FILL.to_string(),
        }
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn rect_path(x: f64, y: f64, width: f64, height: f64) -> String {
    format!("M {} {} H {} V {} H {} Z", x, y, x + width, y + height, x)
}

/// A full circle as two 180-degree arcs; the path mini-language has no
/// native circle command.
fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    let start_x = cx - r;
    format!(
        "M {start_x} {cy} A {r} {r} 0 1 0 {} {cy} A {r} {r} 0 1 0 {start_x} {cy} Z",
        cx + r
    )
}

/// Cutout sub-path for an element, `None` for labels (text is printed, not
/// cut).
fn element_cutout(element: &PanelElement) -> Option<String> {
    match &element.properties {
        ElementProperties::Circular { diameter_mm, .. } => Some(circle_path(
            element.position_mm.x,
            element.position_mm.y,
            diameter_mm / 2.0,
        )),
        ElementProperties::Rectangular {
            width_mm,
            height_mm,
            ..
        } => Some(rect_path(
            element.position_mm.x - width_mm / 2.0,
            element.position_mm.y - height_mm / 2.0,
            *width_mm,
            *height_mm,
        )),
        ElementProperties::Label { .. } => None,
    }
}

/// Visible preview markup for an element: a thin outline of its silhouette,
/// or the label text itself.
fn element_to_svg(element: &PanelElement) -> String {
    let stroke = DEFAULT_STROKE;
    let stroke_width = 0.6;

    match &element.properties {
        ElementProperties::Circular { diameter_mm, .. } => {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" fill=\"none\" />",
                element.position_mm.x,
                element.position_mm.y,
                diameter_mm / 2.0
            )
        }
        ElementProperties::Rectangular {
            width_mm,
            height_mm,
            ..
        } => {
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{width_mm}\" height=\"{height_mm}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" fill=\"none\" />",
                element.position_mm.x - width_mm / 2.0,
                element.position_mm.y - height_mm / 2.0
            )
        }
        ElementProperties::Label { text, font_size_pt, .. } => {
            format!(
                "<text x=\"{}\" y=\"{}\" fill=\"{stroke}\" font-size=\"{}\" font-family=\"Arial, sans-serif\" dominant-baseline=\"middle\" text-anchor=\"middle\">{}</text>",
                element.position_mm.x,
                element.position_mm.y,
                font_size_pt * PT_TO_PX,
                escape_xml(text)
            )
        }
    }
}

/// Builds the complete SVG document for a panel.
pub fn build_panel_svg(
    model: &PanelModel,
    mounting_holes: &[MountingHole],
    options: &SvgOptions,
) -> String {
    let stroke = options.stroke.as_str();
    let stroke_width = options.stroke_width;
    let panel_stroke = options.panel_stroke.as_deref().unwrap_or(stroke);
    let panel_fill = options.panel_fill.as_str();

    let width = model.dimensions.width_mm;
    let height = model.dimensions.height_mm;

    let elements_svg = model
        .elements
        .iter()
        .map(element_to_svg)
        .collect::<Vec<_>>()
        .join("\n    ");

    let hole_outlines = mounting_holes
        .iter()
        .map(|hole| {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" fill=\"none\" />",
                hole.center.x,
                hole.center.y,
                hole.diameter_mm / 2.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    let mut cutout_paths = Vec::with_capacity(1 + mounting_holes.len() + model.elements.len());
    cutout_paths.push(rect_path(0.0, 0.0, width, height));
    cutout_paths.extend(
        mounting_holes
            .iter()
            .map(|hole| circle_path(hole.center.x, hole.center.y, hole.diameter_mm / 2.0)),
    );
    cutout_paths.extend(model.elements.iter().filter_map(element_cutout));
    let cutout_paths = cutout_paths.join(" ");

    let background_rect = match &options.background {
        None => String::new(),
        Some(color) => {
            format!("  <rect width=\"{width}\" height=\"{height}\" fill=\"{color}\" />")
        }
    };

    let hole_block = if hole_outlines.is_empty() {
        String::new()
    } else {
        format!("    {hole_outlines}")
    };
    let element_block = if elements_svg.is_empty() {
        String::new()
    } else {
        format!("    {elements_svg}")
    };

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" width=\"{width}mm\" height=\"{height}mm\">\n\
         {background_rect}\n\
         \x20 <path d=\"{cutout_paths}\" fill=\"{panel_fill}\" fill-rule=\"evenodd\" stroke=\"{panel_stroke}\" stroke-width=\"{stroke_width}\" />\n\
         \x20 {hole_block}\n\
         \x20 {element_block}\n\
         </svg>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::create_panel_element;
    use crate::model::PanelModel;
    use crate::mounting_holes::generate_default_mounting_holes;
    use panelkit_core::{create_panel_dimensions, Vector2};

    fn sample() -> (PanelModel, Vec<MountingHole>) {
        let mut model = PanelModel::new(create_panel_dimensions(10.0));
        model.elements.push(create_panel_element(
            PanelElementType::Jack,
            Vector2::new(20.0, 40.0),
        ));
        model.elements.push(create_panel_element(
            PanelElementType::Switch,
            Vector2::new(60.0, 80.0),
        ));
        let holes = generate_default_mounting_holes(&model.dimensions);
        (model, holes)
    }

    #[test]
    fn test_output_is_deterministic() {
        let (model, holes) = sample();
        let options = SvgOptions::default();
        let first = build_panel_svg(&model, &holes, &options);
        let second = build_panel_svg(&model, &holes, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_frame() {
        let (model, holes) = sample();
        let svg = build_panel_svg(&model, &holes, &SvgOptions::default());
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 128.5\" width=\"100mm\" height=\"128.5mm\">"
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("fill-rule=\"evenodd\""));
    }

    #[test]
    fn test_switch_cutout_is_centered_rect() {
        let (model, holes) = sample();
        let svg = build_panel_svg(&model, &holes, &SvgOptions::default());
        // 8x16 switch at (60, 80) -> rect from (56, 72) to (64, 88).
        assert!(svg.contains("M 56 72 H 64 V 88 H 56 Z"));
    }

    #[test]
    fn test_label_has_text_but_no_cutout() {
        let mut model = PanelModel::new(create_panel_dimensions(10.0));
        let mut label = create_panel_element(PanelElementType::Label, Vector2::new(50.0, 10.0));
        if let ElementProperties::Label { text, .. } = &mut label.properties {
            *text = "Mix <&> \"out\"".to_string();
        }
        model.elements.push(label);

        let svg = build_panel_svg(&model, &[], &SvgOptions::default());
        let path_start = svg.find("<path d=\"").unwrap();
        let path_end = svg[path_start..].find("/>").unwrap() + path_start;
        let cutout = &svg[path_start..path_end];

        // The compound path holds only the panel outline.
        assert_eq!(cutout.matches('M').count(), 1);
        assert!(svg.contains("<text"));
        assert!(svg.contains("Mix &lt;&amp;&gt; &quot;out&quot;"));
        assert!(svg.contains(&format!("font-size=\"{}\"", 10.0 * PT_TO_PX)));
    }

    #[test]
    fn test_background_rect_only_when_requested() {
        let (model, holes) = sample();
        let plain = build_panel_svg(&model, &holes, &SvgOptions::default());
        assert!(!plain.contains("<rect width="));

        let options = SvgOptions {
            background: Some("#111827".to_string()),
            ..Default::default()
        };
        let with_background = build_panel_svg(&model, &holes, &options);
        assert!(with_background.contains("<rect width=\"100\" height=\"128.5\" fill=\"#111827\" />"));
    }

    #[test]
    fn test_panel_stroke_falls_back_to_stroke() {
        let (model, holes) = sample();
        let options = SvgOptions {
            stroke: "#f5f3f0".to_string(),
            panel_stroke: None,
            ..Default::default()
        };
        let svg = build_panel_svg(&model, &holes, &options);
        assert!(svg.contains("stroke=\"#f5f3f0\" stroke-width=\"0.8\""));
    }
}
