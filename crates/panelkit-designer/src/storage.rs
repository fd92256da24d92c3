//! Project storage over an injected key-value store.
//!
//! Saved projects live under a single fixed key as a JSON list of named,
//! timestamped payloads, newest first. The backing store is a collaborator
//! the caller injects; its absence (or corrupt contents) degrades to "no
//! projects available" rather than an error, so every function here returns
//! values or no-ops and never fails.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::PanelModel;
use crate::serialization::{
    parse_serialized_panel, serialize_panel_model, validate_serialized_panel, SerializedPanel,
};

/// The single key all projects are stored under.
pub const STORAGE_KEY: &str = "eurorack-panel-projects";

/// Backing key-value store. Implementations own all I/O.
pub trait ProjectStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory store, used in tests and as the fallback when no persistent
/// backend is wired up.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// A store that holds nothing and accepts nothing: the "no backing store"
/// degradation path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ProjectStore for NullStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&mut self, _key: &str, _value: &str) {}
}

/// One saved project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProject {
    pub name: String,
    pub payload: SerializedPanel,
    pub updated_at: DateTime<Utc>,
}

fn hydrate_projects(raw: &str) -> Vec<StoredProject> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "Stored project list is not valid JSON, treating as empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let project: StoredProject = match serde_json::from_value(entry) {
                Ok(project) => project,
                Err(error) => {
                    tracing::warn!(%error, "Dropping stored project entry with invalid shape");
                    return None;
                }
            };
            if validate_serialized_panel(&project.payload).is_err() {
                tracing::warn!(name = %project.name, "Dropping stored project with unsupported payload");
                return None;
            }
            Some(project)
        })
        .collect()
}

fn read_projects(store: &impl ProjectStore) -> Vec<StoredProject> {
    let Some(raw) = store.read(STORAGE_KEY) else {
        return Vec::new();
    };
    let mut projects = hydrate_projects(&raw);
    projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    projects
}

fn persist(store: &mut impl ProjectStore, projects: &[StoredProject]) {
    match serde_json::to_string(projects) {
        Ok(json) => store.write(STORAGE_KEY, &json),
        Err(error) => tracing::warn!(%error, "Failed to encode project list, nothing persisted"),
    }
}

/// Lists saved projects, newest first. Corrupt entries are dropped.
pub fn list_projects(store: &impl ProjectStore) -> Vec<StoredProject> {
    read_projects(store)
}

/// Saves a project under `name`, overwriting any existing project whose name
/// matches case-insensitively. New projects are prepended. Returns the
/// updated list.
pub fn save_project(
    store: &mut impl ProjectStore,
    name: &str,
    model: &PanelModel,
) -> Vec<StoredProject> {
    let payload = match serialize_panel_model(model).and_then(|json| parse_serialized_panel(&json))
    {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(%error, "Failed to serialize project, nothing saved");
            return read_projects(store);
        }
    };

    let mut projects = read_projects(store);
    let entry = StoredProject {
        name: name.to_string(),
        payload,
        updated_at: Utc::now(),
    };

    let lowered = name.to_lowercase();
    match projects
        .iter()
        .position(|project| project.name.to_lowercase() == lowered)
    {
        Some(index) => projects[index] = entry,
        None => projects.insert(0, entry),
    }

    persist(store, &projects);
    projects
}

/// Loads a project by name, case-insensitively. `None` when absent.
pub fn load_project(store: &impl ProjectStore, name: &str) -> Option<PanelModel> {
    let lowered = name.to_lowercase();
    read_projects(store)
        .into_iter()
        .find(|project| project.name.to_lowercase() == lowered)
        .map(|project| project.payload.model)
}

/// Deletes a project by name, case-insensitively. Returns the updated list.
pub fn delete_project(store: &mut impl ProjectStore, name: &str) -> Vec<StoredProject> {
    let lowered = name.to_lowercase();
    let mut projects = read_projects(store);
    projects.retain(|project| project.name.to_lowercase() != lowered);
    persist(store, &projects);
    projects
}
