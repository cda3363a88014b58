pub mod fixtures;
pub mod tree_assertions;

use graft::traits::IdSpriteGenerator;
use graft::{DocumentImporter, ImportError, ImportedDocument, InMemoryResourceProvider};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Imports a JSON document through the standard converter set, with
/// deterministic id-derived sprites and an empty resource store.
pub fn import_value(document: &Value) -> Result<ImportedDocument, ImportError> {
    let resources = InMemoryResourceProvider::new();
    import_value_with_resources(document, &resources)
}

/// Same import, against a caller-prepared resource store.
pub fn import_value_with_resources(
    document: &Value,
    resources: &InMemoryResourceProvider,
) -> Result<ImportedDocument, ImportError> {
    let sprites = IdSpriteGenerator;
    let importer = DocumentImporter::new(&sprites, resources);
    importer.import_json(&document.to_string())
}
