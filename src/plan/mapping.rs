#![forbid(unsafe_code)]

//! Function-mapping records and the registry-snapshot transform.

use serde::{Deserialize, Serialize};

/// Binds one function's symbolic name to its anchor within a document.
///
/// The anchor stands in for the name everywhere the function is invoked in
/// the relation tree, so a receiver resolves each name exactly once. Names
/// and anchors are unique within one document; the producing registry
/// guarantees this before they reach the assembler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMapping {
    /// Symbolic function name, non-empty.
    pub name: String,
    /// Stable integer the relation tree uses in place of the name.
    pub anchor: u64,
}

impl FunctionMapping {
    /// Creates a mapping record.
    pub fn new(name: impl Into<String>, anchor: u64) -> Self {
        Self {
            name: name.into(),
            anchor,
        }
    }
}

/// Converts a registry snapshot into the document's mapping table.
///
/// Pure and order-preserving: one record per registration, in registration
/// order, with no deduplication or sorting. Receivers must not assume
/// numeric or lexical ordering — position carries the registration history,
/// which downstream log correlation relies on.
///
/// Uniqueness of names and anchors is the registry's contract and is not
/// re-checked in release builds; debug builds assert it.
pub fn assemble_mappings(registrations: impl IntoIterator<Item = (String, u64)>) -> Vec<FunctionMapping> {
    let mappings: Vec<FunctionMapping> = registrations
        .into_iter()
        .map(|(name, anchor)| FunctionMapping::new(name, anchor))
        .collect();
    debug_assert!(
        duplicate_mapping(&mappings).is_none(),
        "registry snapshot produced a duplicate function name or anchor"
    );
    mappings
}

/// Returns the first mapping that reuses a name or anchor, if any.
pub(crate) fn duplicate_mapping(mappings: &[FunctionMapping]) -> Option<&FunctionMapping> {
    use rustc_hash::FxHashSet;
    let mut names = FxHashSet::default();
    let mut anchors = FxHashSet::default();
    mappings
        .iter()
        .find(|m| !names.insert(m.name.as_str()) || !anchors.insert(m.anchor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_preserves_registration_order() {
        let mappings = assemble_mappings(vec![
            ("add_int".to_owned(), 3),
            ("substr".to_owned(), 7),
        ]);
        assert_eq!(
            mappings,
            vec![
                FunctionMapping::new("add_int", 3),
                FunctionMapping::new("substr", 7),
            ]
        );
    }

    #[test]
    fn assembly_of_empty_snapshot_is_empty() {
        assert!(assemble_mappings(Vec::new()).is_empty());
    }

    #[test]
    fn insertion_order_survives_unsorted_anchors() {
        // Registration order, not anchor order, dictates position.
        let mappings = assemble_mappings(vec![
            ("z_last".to_owned(), 9),
            ("a_first".to_owned(), 1),
        ]);
        assert_eq!(mappings[0].name, "z_last");
        assert_eq!(mappings[1].anchor, 1);
    }

    #[test]
    fn duplicate_detection_flags_shared_anchor() {
        let mappings = vec![
            FunctionMapping::new("add_int", 3),
            FunctionMapping::new("substr", 3),
        ];
        let dup = duplicate_mapping(&mappings).expect("duplicate should be found");
        assert_eq!(dup.name, "substr");
    }

    #[test]
    fn duplicate_detection_flags_shared_name() {
        let mappings = vec![
            FunctionMapping::new("substr", 3),
            FunctionMapping::new("substr", 7),
        ];
        assert!(duplicate_mapping(&mappings).is_some());
    }
}
