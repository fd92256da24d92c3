//! # PanelKit Designer
//!
//! Design tools for Eurorack front panels: place jacks, potentiometers,
//! switches, LEDs, and labels on a 3U panel in millimeter coordinates, then
//! export manufacturable SVG cutout artwork or re-loadable JSON projects.
//!
//! ## Core Components
//!
//! - **Model**: the element taxonomy, per-type properties, and the
//!   [`PanelModel`] that is the single source of truth for a design
//! - **Elements**: factory with per-type defaults and property sanitation
//! - **Mounting holes**: rack-hole layout derived from the panel dimensions
//! - **Grid**: center-anchored snapping for interactive placement
//! - **Serialization**: versioned, schema-validated JSON project payloads
//! - **SVG export**: a single compound even-odd cutout path plus preview
//!   outlines and label text
//! - **Storage**: named projects over an injected key-value store
//! - **State**: the live editor state with bounded undo/redo history
//!
//! ## Architecture
//!
//! ```text
//! PanelState (live model + selection + history)
//!   ├── PanelModel (dimensions, elements, options)
//!   │     └── panelkit-core (units, dimensioning, geometry)
//!   ├── mounting_holes (derived, recomputed on width change)
//!   └── svg_export / serialization / storage (pure consumers)
//! ```
//!
//! All geometry and serialization functions are pure and synchronous;
//! callers own every piece of I/O and recompute mounting holes after any
//! dimension change.

pub mod elements;
pub mod grid;
pub mod history;
pub mod model;
pub mod mounting_holes;
pub mod panel_state;
pub mod serialization;
pub mod storage;
pub mod svg_export;

pub use elements::{create_panel_element, sanitize_properties_for_type, with_element_properties};
pub use grid::snap_point_to_grid;
pub use history::{PanelHistory, DEFAULT_HISTORY_LIMIT};
pub use model::{ElementProperties, PanelElement, PanelElementType, PanelModel, PanelOptions};
pub use mounting_holes::{
    generate_default_mounting_holes, generate_mounting_holes, MountingHole, MountingHoleConfig,
};
pub use panel_state::PanelState;
pub use serialization::{
    deserialize_panel_model, parse_serialized_panel, read_panel_file, serialize_panel_model,
    validate_serialized_panel, write_panel_file, SerializedPanel, SERIALIZATION_VERSION,
};
pub use storage::{
    delete_project, list_projects, load_project, save_project, MemoryStore, NullStore,
    ProjectStore, StoredProject, STORAGE_KEY,
};
pub use svg_export::{build_panel_svg, SvgOptions};
