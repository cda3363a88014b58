//! Shared mutable state for one import run.

use std::collections::HashMap;

use graft_traits::{ResourceProvider, SpriteGenerator};
use graft_types::{AssetHandle, AssetKind, NodeId};
use log::{error, info, warn};

/// Severity of one diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One message produced while importing, tied to the node that caused
/// it when one is known.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub node_id: Option<NodeId>,
    pub message: String,
}

/// Diagnostics gathered during a run, in emission order.
///
/// Entries are forwarded to the `log` facade as they are recorded, so
/// hosts get live output as well as an enumerable report afterwards.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn info(&mut self, node_id: Option<&NodeId>, message: impl Into<String>) {
        self.push(Severity::Info, node_id, message.into());
    }

    pub fn warn(&mut self, node_id: Option<&NodeId>, message: impl Into<String>) {
        self.push(Severity::Warning, node_id, message.into());
    }

    pub fn error(&mut self, node_id: Option<&NodeId>, message: impl Into<String>) {
        self.push(Severity::Error, node_id, message.into());
    }

    fn push(&mut self, severity: Severity, node_id: Option<&NodeId>, message: String) {
        match (severity, node_id) {
            (Severity::Info, Some(id)) => info!("{message} [node {id}]"),
            (Severity::Info, None) => info!("{message}"),
            (Severity::Warning, Some(id)) => warn!("{message} [node {id}]"),
            (Severity::Warning, None) => warn!("{message}"),
            (Severity::Error, Some(id)) => error!("{message} [node {id}]"),
            (Severity::Error, None) => error!("{message}"),
        }
        self.entries.push(Diagnostic {
            severity,
            node_id: node_id.cloned(),
            message,
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything converters share across one document import: the host
/// collaborators, the generated-asset cache, the component registry
/// used for instance resolution, and the diagnostics sink.
///
/// A context is built per run and discarded afterwards. Nothing in it
/// is shared between runs, which keeps reimports independent.
#[derive(Debug)]
pub struct ConvertContext<'a> {
    sprites: &'a dyn SpriteGenerator,
    resources: &'a dyn ResourceProvider,
    assets: HashMap<(NodeId, AssetKind), AssetHandle>,
    component_sets: Vec<NodeId>,
    components: HashMap<NodeId, Option<NodeId>>,
    pub diagnostics: Diagnostics,
}

impl<'a> ConvertContext<'a> {
    pub fn new(sprites: &'a dyn SpriteGenerator, resources: &'a dyn ResourceProvider) -> Self {
        Self {
            sprites,
            resources,
            assets: HashMap::new(),
            component_sets: Vec::new(),
            components: HashMap::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn sprites(&self) -> &'a dyn SpriteGenerator {
        self.sprites
    }

    pub fn resources(&self) -> &'a dyn ResourceProvider {
        self.resources
    }

    /// Looks up an asset generated earlier in this run.
    pub fn try_get_asset(&self, node_id: &NodeId, kind: AssetKind) -> Option<AssetHandle> {
        self.assets.get(&(node_id.clone(), kind)).cloned()
    }

    pub fn add_asset(&mut self, node_id: NodeId, kind: AssetKind, handle: AssetHandle) {
        self.assets.insert((node_id, kind), handle);
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Records that a component set has been converted. Ids registered
    /// here let later instances resolve their variant linkage.
    pub fn register_component_set(&mut self, set_id: &NodeId) {
        if !self.component_sets.contains(set_id) {
            self.component_sets.push(set_id.clone());
        }
    }

    /// Records a component definition and, when it is a variant, the
    /// set it belongs to. The first registration wins so that a set
    /// registering its variants is not undone when the variants
    /// convert on their own.
    pub fn register_component(&mut self, component_id: &NodeId, set_id: Option<&NodeId>) {
        self.components
            .entry(component_id.clone())
            .or_insert_with(|| set_id.cloned());
    }

    pub fn is_component_registered(&self, component_id: &NodeId) -> bool {
        self.components.contains_key(component_id)
    }

    /// The set a registered variant belongs to, if any.
    pub fn component_set_of(&self, component_id: &NodeId) -> Option<&NodeId> {
        self.components.get(component_id)?.as_ref()
    }

    pub fn visited_component_sets(&self) -> &[NodeId] {
        &self.component_sets
    }
}
