//! Marker-root reachability — decides whether a declaration belongs to the
//! documented configuration schema.

use crate::index::DeclarationIndex;
use crate::model::{DeclarationUnit, MARKER_ROOTS};
use std::collections::HashSet;

/// True if `unit` directly implements a marker root, or any `extends`
/// ancestor found in the index does.
///
/// Supertypes missing from the index are external library types and count as
/// "does not apply". The visited set bounds the walk on cyclic `extends`
/// chains, which the upstream object model does not forbid.
pub fn reachable_from_root(index: &DeclarationIndex, unit: &DeclarationUnit) -> bool {
    let mut visited = HashSet::new();
    walk(index, unit, &mut visited)
}

fn walk<'a>(
    index: &'a DeclarationIndex,
    unit: &'a DeclarationUnit,
    visited: &mut HashSet<&'a str>,
) -> bool {
    if !visited.insert(&unit.name) {
        return false;
    }
    if unit
        .implements
        .iter()
        .any(|t| MARKER_ROOTS.contains(&t.name()))
    {
        return true;
    }
    unit.extends.iter().any(|supertype| {
        index
            .get(supertype.name())
            .is_some_and(|parent| walk(index, parent, visited))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index(value: serde_json::Value) -> DeclarationIndex {
        DeclarationIndex::from_units(serde_json::from_value(value).unwrap())
    }

    fn check(index: &DeclarationIndex, name: &str) -> bool {
        reachable_from_root(index, index.get(name).unwrap())
    }

    #[test]
    fn direct_implements_applies() {
        let idx = index(json!([{"name": "Base", "implements": ["ConfigTemplate"]}]));
        assert!(check(&idx, "Base"));
    }

    #[test]
    fn each_marker_root_applies() {
        for root in MARKER_ROOTS {
            let idx = index(json!([{"name": "X", "implements": [root]}]));
            assert!(check(&idx, "X"), "{} should apply", root);
        }
    }

    #[test]
    fn transitive_extends_applies() {
        let idx = index(json!([
            {"name": "Root", "implements": ["ObjectTemplate"]},
            {"name": "Mid", "extends": ["Root"]},
            {"name": "Leaf", "extends": ["Mid"]}
        ]));
        assert!(check(&idx, "Leaf"));
    }

    #[test]
    fn unrelated_declaration_does_not_apply() {
        let idx = index(json!([{"name": "Loose", "implements": ["Serializable"]}]));
        assert!(!check(&idx, "Loose"));
    }

    #[test]
    fn missing_supertype_is_not_applicable() {
        let idx = index(json!([{"name": "Orphan", "extends": ["LibraryType"]}]));
        assert!(!check(&idx, "Orphan"));
    }

    #[test]
    fn extending_a_marker_name_directly_does_not_apply() {
        // Marker roots are matched on implements; an extends of the bare name
        // only counts when the named declaration is in the index and applies.
        let idx = index(json!([{"name": "Odd", "extends": ["ConfigTemplate"]}]));
        assert!(!check(&idx, "Odd"));
    }

    #[test]
    fn cyclic_inheritance_terminates_false() {
        let idx = index(json!([
            {"name": "A", "extends": ["B"]},
            {"name": "B", "extends": ["A"]}
        ]));
        assert!(!check(&idx, "A"));
        assert!(!check(&idx, "B"));
    }

    #[test]
    fn cycle_above_a_marker_still_applies() {
        let idx = index(json!([
            {"name": "A", "extends": ["B"]},
            {"name": "B", "extends": ["A"], "implements": ["ConfigTemplate"]}
        ]));
        assert!(check(&idx, "A"));
    }
}
