//! Undo/redo history for panel models.
//!
//! A bounded stack of whole-model snapshots. Snapshots are plain value
//! clones, never serialization round-trips. Recording a new snapshot clears
//! the redo stack; exceeding the cap discards the oldest entry.

use crate::model::PanelModel;

/// Default maximum number of undo steps retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded undo/redo manager over [`PanelModel`] snapshots.
#[derive(Debug, Clone)]
pub struct PanelHistory {
    undo_stack: Vec<PanelModel>,
    redo_stack: Vec<PanelModel>,
    limit: usize,
}

impl PanelHistory {
    /// Creates a history with the given snapshot cap (at least 1).
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records the state of the model before a mutation.
    pub fn record(&mut self, snapshot: PanelModel) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Steps back one snapshot. `current` is pushed onto the redo stack.
    pub fn undo(&mut self, current: PanelModel) -> Option<PanelModel> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Steps forward one snapshot. `current` is pushed onto the undo stack.
    pub fn redo(&mut self, current: PanelModel) -> Option<PanelModel> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops all recorded snapshots, e.g. after loading a project.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for PanelHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::create_panel_dimensions;

    fn model_with_width(width_cm: f64) -> PanelModel {
        PanelModel::new(create_panel_dimensions(width_cm))
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = PanelHistory::new(50);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_restores_snapshot() {
        let mut history = PanelHistory::new(50);
        history.record(model_with_width(10.0));

        let restored = history.undo(model_with_width(12.0)).unwrap();
        assert_eq!(restored.dimensions.width_cm, 10.0);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = PanelHistory::new(50);
        history.record(model_with_width(10.0));

        let old = history.undo(model_with_width(12.0)).unwrap();
        let redone = history.redo(old).unwrap();
        assert_eq!(redone.dimensions.width_cm, 12.0);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo_stack() {
        let mut history = PanelHistory::new(50);
        history.record(model_with_width(10.0));
        history.undo(model_with_width(12.0));
        assert!(history.can_redo());

        history.record(model_with_width(14.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_overflow_discards_oldest() {
        let mut history = PanelHistory::new(3);
        for width in [10.0, 11.0, 12.0, 13.0] {
            history.record(model_with_width(width));
        }
        assert_eq!(history.undo_depth(), 3);

        // Oldest snapshot (10cm) was discarded; deepest undo lands on 11cm.
        let mut current = model_with_width(14.0);
        while let Some(previous) = history.undo(current.clone()) {
            current = previous;
        }
        assert_eq!(current.dimensions.width_cm, 11.0);
    }
}
