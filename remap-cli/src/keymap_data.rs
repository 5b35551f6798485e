//! Saved keymap documents.
//!
//! A saved keymap stores one `{position: keycode}` map per layer, next to the
//! keyboard it was made for and the layout options chosen at the time.
use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use remap_types::keymap::{KeymapEntry, KeymapLookup};
use remap_types::{Composition, decode};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum KeymapDataError {
    #[error("Failed to read keymap file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed keymap document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A layout option as selected in the keyboard definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOption {
    pub option: u32,
    pub option_choice: u32,
}

/// Keycodes of one layer, by key position (`"row,col"`).
pub type LayerKeycodes = BTreeMap<String, u16>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedKeymapData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub author_uid: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub label_lang: String,
    #[serde(default)]
    pub layout_options: Vec<LayoutOption>,
    pub keycodes: Vec<LayerKeycodes>,
    /// Set when the keyboard has a registered definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,
    #[serde(default)]
    pub vendor_id: u16,
    #[serde(default)]
    pub product_id: u16,
    #[serde(default)]
    pub product_name: String,
}

/// Collect the raw keycodes of resolved layers, the inverse of
/// [`SavedKeymapData::decode_layers`].
///
/// Library API for tools that write documents; the `remap` binary only reads them.
pub fn build_keycodes(layers: &[BTreeMap<String, KeymapEntry>]) -> Vec<LayerKeycodes> {
    layers
        .iter()
        .map(|layer| layer.iter().map(|(pos, entry)| (pos.clone(), entry.code)).collect())
        .collect()
}

impl SavedKeymapData {
    pub fn from_json(json: &str) -> Result<Self, KeymapDataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, KeymapDataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, KeymapDataError> {
        let content = std::fs::read_to_string(path).map_err(|source| KeymapDataError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let data = Self::from_json(&content)?;
        debug!("Loaded keymap '{}' with {} layers", data.title, data.keycodes.len());
        Ok(data)
    }

    pub fn layer_count(&self) -> usize {
        self.keycodes.len()
    }

    /// Decode every key of every layer. Unassigned keycodes are `None`.
    pub fn decode_layers<L: KeymapLookup + ?Sized>(&self, lookup: &L) -> Vec<BTreeMap<String, Option<Composition>>> {
        self.keycodes
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|(pos, code)| (pos.clone(), decode(*code, lookup)))
                    .collect()
            })
            .collect()
    }
}
