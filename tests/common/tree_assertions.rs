//! Assertion helpers over produced trees and import diagnostics.

use graft::{Diagnostics, ProducedNode, Severity};

/// Every node name in the tree, in document order.
pub fn node_names(root: &ProducedNode) -> Vec<String> {
    let mut names = Vec::new();
    root.visit(&mut |node| names.push(node.node_name.clone()));
    names
}

/// Renders all diagnostics one per line, for failure messages.
pub fn render_diagnostics(diagnostics: &Diagnostics) -> String {
    diagnostics
        .iter()
        .map(|entry| format!("{:?}: {}", entry.severity, entry.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when a diagnostic of the given severity mentions `needle`.
pub fn has_diagnostic(diagnostics: &Diagnostics, severity: Severity, needle: &str) -> bool {
    diagnostics
        .iter()
        .any(|entry| entry.severity == severity && entry.message.contains(needle))
}

// ==================== Assertion macros ====================

/// Asserts that the import raised a diagnostic of the given severity
/// whose message contains the needle.
#[macro_export]
macro_rules! assert_diagnostic {
    ($imported:expr, $severity:expr, $needle:expr) => {
        assert!(
            $crate::common::tree_assertions::has_diagnostic(
                &$imported.diagnostics,
                $severity,
                $needle
            ),
            "expected a {:?} diagnostic containing '{}', got:\n{}",
            $severity,
            $needle,
            $crate::common::tree_assertions::render_diagnostics(&$imported.diagnostics)
        );
    };
}

/// Asserts that the import raised no warnings and no errors.
#[macro_export]
macro_rules! assert_clean_import {
    ($imported:expr) => {
        assert!(
            !$imported.diagnostics.has_warnings() && !$imported.diagnostics.has_errors(),
            "expected a clean import, got:\n{}",
            $crate::common::tree_assertions::render_diagnostics(&$imported.diagnostics)
        );
    };
}
