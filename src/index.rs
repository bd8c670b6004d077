//! Name-keyed declaration index and the one-level inheritance index.

use crate::alias::AliasTable;
use crate::model::DeclarationUnit;
use std::collections::HashMap;

/// All loaded declarations, keyed by declared name.
///
/// Load order is preserved so page emission and children lists stay
/// deterministic across runs. Two sources declaring the same name is a
/// caller error; the later one wins.
pub struct DeclarationIndex {
    map: HashMap<String, DeclarationUnit>,
    order: Vec<String>,
}

impl DeclarationIndex {
    pub fn from_units(units: Vec<DeclarationUnit>) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for unit in units {
            if !map.contains_key(&unit.name) {
                order.push(unit.name.clone());
            }
            map.insert(unit.name.clone(), unit);
        }
        Self { map, order }
    }

    pub fn get(&self, name: &str) -> Option<&DeclarationUnit> {
        self.map.get(name)
    }

    /// Declarations in load order.
    pub fn iter(&self) -> impl Iterator<Item = &DeclarationUnit> {
        self.order.iter().filter_map(|name| self.map.get(name))
    }
}

/// Raw (pre-alias) parent name → names of declarations that `extends` it
/// directly.
///
/// One level only, not transitively closed. Shadowed declarations never
/// contribute as children, though they remain valid link targets for the
/// declarations that extend them.
pub struct HierarchyIndex {
    children: HashMap<String, Vec<String>>,
}

impl HierarchyIndex {
    pub fn build(index: &DeclarationIndex, aliases: &AliasTable) -> Self {
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for unit in index.iter() {
            if aliases.is_shadowed(&unit.name) {
                continue;
            }
            for supertype in &unit.extends {
                children
                    .entry(supertype.name().to_string())
                    .or_default()
                    .push(unit.name.clone());
            }
        }
        Self { children }
    }

    /// Direct children of the named declaration, in load order.
    pub fn children_of(&self, raw_name: &str) -> &[String] {
        self.children
            .get(raw_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn units(value: serde_json::Value) -> Vec<DeclarationUnit> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let index = DeclarationIndex::from_units(units(json!([
            {"name": "A", "doc": "first"},
            {"name": "A", "doc": "second"}
        ])));
        assert_eq!(index.iter().count(), 1);
        assert_eq!(index.get("A").unwrap().doc.as_deref(), Some("second"));
    }

    #[test]
    fn iteration_preserves_load_order() {
        let index = DeclarationIndex::from_units(units(json!([
            {"name": "Zed"}, {"name": "Alpha"}, {"name": "Mid"}
        ])));
        let names: Vec<_> = index.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn hierarchy_collects_direct_children() {
        let index = DeclarationIndex::from_units(units(json!([
            {"name": "Base"},
            {"name": "First", "extends": ["Base"]},
            {"name": "Second", "extends": ["Base"]}
        ])));
        let aliases = AliasTable::build(&index).unwrap();
        let hierarchy = HierarchyIndex::build(&index, &aliases);
        assert_eq!(hierarchy.children_of("Base"), ["First", "Second"]);
        assert!(hierarchy.children_of("First").is_empty());
    }

    #[test]
    fn shadowed_declarations_contribute_no_children() {
        let index = DeclarationIndex::from_units(units(json!([
            {"name": "Base"},
            {
                "name": "Hidden",
                "extends": ["Base"],
                "annotations": [{"name": "AutoDocShadow", "value": "Concealed"}]
            },
            {"name": "Visible", "extends": ["Hidden"]}
        ])));
        let aliases = AliasTable::build(&index).unwrap();
        let hierarchy = HierarchyIndex::build(&index, &aliases);
        // Hidden's own extends-link is not recorded...
        assert!(hierarchy.children_of("Base").is_empty());
        // ...but Hidden is still a valid parent key for others.
        assert_eq!(hierarchy.children_of("Hidden"), ["Visible"]);
    }

    #[test]
    fn generic_supertype_keys_by_outer_name() {
        let index = DeclarationIndex::from_units(units(json!([
            {"name": "Holder", "extends": [{"name": "Container", "args": ["Item"]}]}
        ])));
        let aliases = AliasTable::build(&index).unwrap();
        let hierarchy = HierarchyIndex::build(&index, &aliases);
        assert_eq!(hierarchy.children_of("Container"), ["Holder"]);
    }
}
