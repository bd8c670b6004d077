//! Per-declaration page assembly.

use crate::alias::AliasTable;
use crate::applicable::reachable_from_root;
use crate::index::{DeclarationIndex, HierarchyIndex};
use crate::model::{DeclarationUnit, DEFAULT_MARKER, SUPPRESSED_SUPERTYPE, VALUE_MARKER};
use crate::typelink;
use std::collections::BTreeSet;

/// One rendered documentation page.
pub struct GeneratedPage {
    /// Post-alias display name; filename stem and link target.
    pub key: String,
    pub body: String,
    /// Display names this page links to, for dead-link validation.
    pub links: BTreeSet<String>,
}

/// Render the page for one declaration.
///
/// Shadowed declarations render like any other, but under their fold
/// target's name — their fields stay documented, only the identity-derived
/// page name disappears. Returns None for declarations that neither descend
/// from a marker root nor expose a documentable field.
pub fn assemble(
    unit: &DeclarationUnit,
    index: &DeclarationIndex,
    hierarchy: &HierarchyIndex,
    aliases: &AliasTable,
) -> Option<GeneratedPage> {
    let key = typelink::display_name(&unit.name, aliases).to_string();
    let mut links = BTreeSet::new();
    let mut body = String::new();

    body.push_str(&format!("# {}\n", key));

    let reachable = reachable_from_root(index, unit);

    if let Some(ref doc) = unit.doc {
        body.push_str(&format!("{}    \n", sanitize_doc(doc)));
    }
    for supertype in &unit.extends {
        if supertype.name() != SUPPRESSED_SUPERTYPE {
            let link = typelink::bare_link(supertype, aliases, &mut links);
            body.push_str(&format!("Inherits from {}    \n    \n", link));
        }
    }
    // Children are keyed by the raw (pre-alias) name but link to display names.
    let children = hierarchy.children_of(&unit.name);
    if !children.is_empty() {
        body.push_str("Children:\n");
        for child in children {
            let name = typelink::display_name(child, aliases);
            links.insert(name.to_string());
            body.push_str(&format!("* [{}](./{})\n", name, name));
        }
        body.push_str("    \n\n");
    }
    body.push('\n');

    let mut has_documentable_field = false;
    for field in &unit.fields {
        let Some(label) = field.annotation_value(VALUE_MARKER) else {
            continue;
        };
        has_documentable_field = true;
        body.push_str(&format!("## {}\n", label));
        if field.has_annotation(DEFAULT_MARKER) {
            if let Some(ref default) = field.default {
                body.push_str(&format!("* Default value: {}    \n", default));
            }
        }
        let link = typelink::type_link(&field.ty, aliases, &mut links);
        body.push_str(&format!("* Type: {}    \n", link));
        body.push('\n');
        if let Some(ref doc) = field.doc {
            body.push_str(&sanitize_doc(doc));
        }
        body.push_str("\n\n");
    }

    // Fields alone establish applicability: a field-bearing declaration is
    // documented even without marker-root ancestry.
    if body.is_empty() || !(reachable || has_documentable_field) {
        return None;
    }
    Some(GeneratedPage { key, body, links })
}

/// Strip paragraph-open tags, the only markup upstream doc comments carry.
fn sanitize_doc(doc: &str) -> String {
    doc.replace("<p>", "")
}
