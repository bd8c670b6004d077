//! Alias resolution — maps declared names to the display names used for page
//! filenames, titles, and link targets.

use crate::index::DeclarationIndex;
use crate::model::{DeclarationUnit, ALIAS_MARKER, SHADOW_MARKER};
use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};

/// Immutable rename table built once per run and threaded by reference into
/// every downstream component.
#[derive(Debug)]
pub struct AliasTable {
    renames: HashMap<String, String>,
    shadowed: HashSet<String>,
}

impl AliasTable {
    /// Scan all declarations for alias/shadow markers.
    ///
    /// Rejects a declaration carrying both markers, a marker with no display
    /// name argument, and any two declarations whose pages would resolve to
    /// the same display name — shadow targets included. The filename key
    /// space must be collision-free; last-write-wins overwrites are not
    /// acceptable here.
    pub fn build(index: &DeclarationIndex) -> Result<Self> {
        let mut renames = HashMap::new();
        let mut shadowed = HashSet::new();

        for unit in index.iter() {
            if unit.has_annotation(ALIAS_MARKER) && unit.has_annotation(SHADOW_MARKER) {
                bail!(
                    "declaration \"{}\" carries both {} and {}",
                    unit.name,
                    ALIAS_MARKER,
                    SHADOW_MARKER
                );
            }
            if let Some(display) = marker_argument(unit, ALIAS_MARKER)? {
                println!("Aliasing {} to {}.", unit.name, display);
                renames.insert(unit.name.clone(), display.to_string());
            } else if let Some(display) = marker_argument(unit, SHADOW_MARKER)? {
                println!("Shadowing {} to {}.", unit.name, display);
                renames.insert(unit.name.clone(), display.to_string());
                shadowed.insert(unit.name.clone());
            }
        }

        // Every declaration claims exactly one page filename; shadowed ones
        // claim their fold target. Duplicates are a named conflict.
        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for unit in index.iter() {
            let display = renames
                .get(&unit.name)
                .map(String::as_str)
                .unwrap_or(&unit.name);
            if let Some(prev) = claimed.insert(display, &unit.name) {
                bail!(
                    "declarations \"{}\" and \"{}\" both resolve to display name \"{}\"",
                    prev,
                    unit.name,
                    display
                );
            }
        }

        Ok(Self { renames, shadowed })
    }

    /// Display name for a declared name; identity if unmapped.
    pub fn display<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map(String::as_str).unwrap_or(name)
    }

    /// True if the declaration's identity is folded into another display
    /// name: its page emits under that name and its own `extends` links
    /// contribute no hierarchy entries.
    pub fn is_shadowed(&self, name: &str) -> bool {
        self.shadowed.contains(name)
    }
}

fn marker_argument<'a>(unit: &'a DeclarationUnit, marker: &str) -> Result<Option<&'a str>> {
    if !unit.has_annotation(marker) {
        return Ok(None);
    }
    match unit.annotation_value(marker) {
        Some(display) => Ok(Some(display)),
        None => bail!(
            "declaration \"{}\": {} is missing its display name argument",
            unit.name,
            marker
        ),
    }
}
