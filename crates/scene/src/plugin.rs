//! Annotations written onto nodes by the editor-side plugin.

use serde::{Deserialize, Serialize};

/// Per-node data authored in the design tool, carried through the export.
///
/// The exporter collapses the per-plugin namespace, so this arrives as a
/// plain object on the node. All fields are optional and blank strings
/// count as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl PluginData {
    /// Parses plugin data from a raw JSON string, for hosts that still
    /// carry the un-collapsed blob.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn binding_key(&self) -> Option<&str> {
        present(&self.binding_key)
    }

    pub fn localization_key(&self) -> Option<&str> {
        present(&self.localization_key)
    }

    pub fn component_type(&self) -> Option<&str> {
        present(&self.component_type)
    }

    /// Tags as authored: a comma-separated list.
    pub fn tags(&self) -> Option<&str> {
        present(&self.tags)
    }

    pub fn has_binding_key(&self) -> bool {
        self.binding_key().is_some()
    }
}
