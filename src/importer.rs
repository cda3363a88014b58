//! Document-level import orchestration.
//!
//! Ties the pieces together: one importer walks every page of a
//! [`SceneDocument`] through the converter dispatcher and hands back
//! the produced trees plus the diagnostics of the run.

use graft_convert::{ConvertContext, ConverterRegistry, Diagnostics, Dispatcher, ProducedNode};
use graft_scene::SceneDocument;
use graft_traits::{ResourceProvider, SpriteGenerator};
use graft_types::NodeId;
use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("document parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One imported page: identity plus the produced trees of its
/// top-level children. Pages only carry their children, so there is no
/// element for the page itself and nothing positions the trees.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedPage {
    pub id: NodeId,
    pub name: String,
    pub visible: bool,
    pub children: Vec<ProducedNode>,
}

impl ImportedPage {
    /// First node matching `key` across the page's trees, depth-first.
    pub fn find_by_binding_key(&self, key: &str) -> Option<&ProducedNode> {
        self.children
            .iter()
            .find_map(|child| child.find_by_binding_key(key))
    }

    /// Total produced node count on this page.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(ProducedNode::count).sum()
    }
}

/// Result of one import run: every page of the document plus the
/// diagnostics gathered while converting them.
#[derive(Debug)]
pub struct ImportedDocument {
    pub id: NodeId,
    pub name: String,
    pub pages: Vec<ImportedPage>,
    pub diagnostics: Diagnostics,
}

impl ImportedDocument {
    pub fn page(&self, name: &str) -> Option<&ImportedPage> {
        self.pages.iter().find(|page| page.name == name)
    }

    pub fn node_count(&self) -> usize {
        self.pages.iter().map(ImportedPage::node_count).sum()
    }
}

/// Imports whole documents through a converter set.
///
/// The importer borrows the host collaborators and builds a fresh
/// [`ConvertContext`] per run, so asset caches and component
/// registries never leak between imports.
pub struct DocumentImporter<'a> {
    dispatcher: Dispatcher,
    sprites: &'a dyn SpriteGenerator,
    resources: &'a dyn ResourceProvider,
}

impl<'a> DocumentImporter<'a> {
    /// An importer over the standard converter set.
    pub fn new(sprites: &'a dyn SpriteGenerator, resources: &'a dyn ResourceProvider) -> Self {
        Self {
            dispatcher: Dispatcher::standard(),
            sprites,
            resources,
        }
    }

    /// Replaces the converter set, for hosts that add or remove node
    /// kinds.
    pub fn with_registry(mut self, registry: ConverterRegistry) -> Self {
        self.dispatcher = Dispatcher::new(registry);
        self
    }

    /// Converts every page of `document`. The run always completes;
    /// per-node failures end up in the result's diagnostics.
    ///
    /// One context spans all pages, so components defined on one page
    /// resolve for instances on another.
    pub fn import(&self, document: &SceneDocument) -> ImportedDocument {
        let mut ctx = ConvertContext::new(self.sprites, self.resources);

        let pages = document
            .pages
            .iter()
            .map(|page| ImportedPage {
                id: page.id.clone(),
                name: page.name.clone(),
                visible: page.visible,
                children: page
                    .children
                    .iter()
                    .filter_map(|node| self.dispatcher.convert(None, node, &mut ctx))
                    .collect(),
            })
            .collect::<Vec<_>>();

        let imported = ImportedDocument {
            id: document.id.clone(),
            name: document.name.clone(),
            pages,
            diagnostics: ctx.diagnostics,
        };
        info!(
            "imported document '{}': {} pages, {} nodes, {} diagnostics",
            imported.name,
            imported.pages.len(),
            imported.node_count(),
            imported.diagnostics.len()
        );
        imported
    }

    /// Parses a JSON export and imports it.
    pub fn import_json(&self, json: &str) -> Result<ImportedDocument, ImportError> {
        Ok(self.import(&SceneDocument::from_json(json)?))
    }
}
