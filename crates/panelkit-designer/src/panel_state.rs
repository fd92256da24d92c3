//! Application state for UI integration.
//!
//! Holds the live panel model together with selection, placement mode, draft
//! properties, and the undo/redo history. All geometry and serialization
//! work is delegated to the pure modules; this type is the single mutable
//! object a front end drives.

use std::collections::HashMap;

use panelkit_core::{
    create_panel_dimensions, create_panel_dimensions_scaled, hp_to_mm_scaled, mm_to_cm, Vector2,
    DEFAULT_PANEL_WIDTH_CM,
};

use crate::elements::{create_panel_element, sanitize_properties_for_type, with_element_properties};
use crate::history::PanelHistory;
use crate::model::{ElementProperties, PanelElement, PanelElementType, PanelModel};

/// Live editor state: the model plus everything the UI needs around it.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub model: PanelModel,
    pub selected_element_id: Option<String>,
    pub placement_type: Option<PanelElementType>,
    draft_properties: HashMap<PanelElementType, ElementProperties>,
    history: PanelHistory,
    move_recorded: bool,
}

impl PanelState {
    /// Creates a state holding a fresh default-width panel.
    pub fn new() -> Self {
        Self {
            model: PanelModel::new(create_panel_dimensions(DEFAULT_PANEL_WIDTH_CM)),
            selected_element_id: None,
            placement_type: None,
            draft_properties: HashMap::new(),
            history: PanelHistory::default(),
            move_recorded: false,
        }
    }

    fn record_snapshot(&mut self) {
        self.history.record(self.model.clone());
    }

    /// Replaces the whole model, e.g. after loading a project. Clears the
    /// history and any stale selection.
    pub fn set_model(&mut self, model: PanelModel) {
        self.model = model;
        self.selected_element_id = None;
        self.placement_type = None;
        self.history.clear();
    }

    pub fn set_placement_type(&mut self, placement_type: Option<PanelElementType>) {
        self.placement_type = placement_type;
    }

    pub fn set_selected_element(&mut self, id: Option<String>) {
        self.selected_element_id = id;
    }

    /// Stores draft properties for a type after sanitation. A draft that
    /// fails the type's shape check is discarded so element creation falls
    /// back to defaults instead of crashing.
    pub fn set_draft_properties(
        &mut self,
        element_type: PanelElementType,
        properties: ElementProperties,
    ) {
        match sanitize_properties_for_type(element_type, &properties) {
            Some(sanitized) => {
                self.draft_properties.insert(element_type, sanitized);
            }
            None => {
                tracing::warn!(?element_type, "Discarding draft properties with invalid shape");
                self.draft_properties.remove(&element_type);
            }
        }
    }

    pub fn draft_properties(&self, element_type: PanelElementType) -> Option<&ElementProperties> {
        self.draft_properties.get(&element_type)
    }

    /// Places a new element, applying any draft properties for its type.
    /// The new element becomes the selection. Returns its id.
    pub fn add_element(&mut self, element_type: PanelElementType, position_mm: Vector2) -> String {
        self.record_snapshot();
        let element = with_element_properties(
            create_panel_element(element_type, position_mm),
            self.draft_properties.get(&element_type).cloned(),
        );
        let id = element.id.clone();
        self.model.elements.push(element);
        self.selected_element_id = Some(id.clone());
        tracing::debug!(?element_type, id = %id, "Added element");
        id
    }

    /// Marks the start of an interactive drag. Only the first
    /// [`move_element`](Self::move_element) of the drag records history, so
    /// undo steps back over the whole drag at once.
    pub fn begin_move(&mut self) {
        self.move_recorded = false;
    }

    pub fn end_move(&mut self) {
        self.move_recorded = false;
    }

    /// Moves an element. No-op for unknown ids.
    pub fn move_element(&mut self, id: &str, position_mm: Vector2) {
        if self.model.element(id).is_none() {
            return;
        }
        if !self.move_recorded {
            self.record_snapshot();
            self.move_recorded = true;
        }
        if let Some(element) = self.model.element_mut(id) {
            element.position_mm = position_mm;
        }
    }

    /// Applies an arbitrary edit to an element. No-op for unknown ids.
    pub fn update_element(&mut self, id: &str, updater: impl FnOnce(&mut PanelElement)) {
        if self.model.element(id).is_none() {
            return;
        }
        self.record_snapshot();
        if let Some(element) = self.model.element_mut(id) {
            updater(element);
        }
    }

    /// Removes an element, clearing the selection if it pointed at it.
    pub fn remove_element(&mut self, id: &str) {
        if self.model.element(id).is_none() {
            return;
        }
        self.record_snapshot();
        self.model.elements.retain(|element| element.id != id);
        if self.selected_element_id.as_deref() == Some(id) {
            self.selected_element_id = None;
        }
    }

    /// Re-dimensions the panel from a width in millimeters. Mounting holes
    /// must be regenerated by the caller afterwards.
    pub fn set_width_from_mm(&mut self, width_mm: f64) {
        self.record_snapshot();
        self.model.dimensions = create_panel_dimensions(mm_to_cm(width_mm));
        self.selected_element_id = None;
    }

    /// Re-dimensions the panel from a width in HP, preserving the panel's
    /// current mm-per-HP ratio so repeated HP edits do not drift the
    /// physical width.
    pub fn set_width_from_hp(&mut self, width_hp: f64) {
        let dimensions = self.model.dimensions;
        let mm_per_hp = dimensions.width_mm / dimensions.width_hp as f64;
        self.record_snapshot();
        let width_mm = hp_to_mm_scaled(width_hp, mm_per_hp);
        self.model.dimensions = create_panel_dimensions_scaled(mm_to_cm(width_mm), mm_per_hp);
        self.selected_element_id = None;
    }

    /// Edits display options in place, without a history entry: toggling the
    /// grid is not an undoable design change.
    pub fn update_options(&mut self, updater: impl FnOnce(&mut crate::model::PanelOptions)) {
        updater(&mut self.model.options);
    }

    /// Restores the initial empty panel.
    pub fn reset(&mut self) {
        self.model = PanelModel::new(create_panel_dimensions(DEFAULT_PANEL_WIDTH_CM));
        self.selected_element_id = None;
        self.placement_type = None;
        self.history.clear();
        tracing::debug!("Reset panel state");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Steps the model back one snapshot. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.model.clone()) {
            Some(previous) => {
                self.model = previous;
                self.selected_element_id = None;
                true
            }
            None => false,
        }
    }

    /// Steps the model forward one snapshot. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.model.clone()) {
            Some(next) => {
                self.model = next;
                self.selected_element_id = None;
                true
            }
            None => false,
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
