//! Markdown link rendering for type references.

use crate::alias::AliasTable;
use crate::model::TypeRef;
use std::collections::BTreeSet;

/// Fixed display names for primitive tags; unrecognized tags render raw.
/// Primitives never pass through the alias table.
fn primitive_name(tag: &str) -> &str {
    match tag {
        "boolean" => "Boolean",
        "byte" => "Byte",
        "double" => "Double",
        "int" => "Integer",
        "char" => "Char",
        "float" => "Float",
        "short" => "Short",
        "long" => "Long",
        other => other,
    }
}

/// Normalize concrete container names to their abstract shape, then apply
/// alias/shadow renaming. Name-based, not import-qualified.
pub fn display_name<'a>(name: &'a str, aliases: &'a AliasTable) -> &'a str {
    match name {
        "HashMap" | "LinkedHashMap" => "Map",
        "ArrayList" | "LinkedList" | "GlueList" => "List",
        "HashSet" => "Set",
        other => aliases.display(other),
    }
}

/// Render a type reference as a Markdown link, recording every referenced
/// display name into `links` for dead-link validation.
///
/// Generic arguments recurse, comma-joined inside escaped angle brackets so
/// the text survives Markdown rendering.
pub fn type_link(ty: &TypeRef, aliases: &AliasTable, links: &mut BTreeSet<String>) -> String {
    if let Some(tag) = ty.primitive() {
        let name = primitive_name(tag);
        links.insert(name.to_string());
        return format!("[{}](./{})", name, name);
    }
    let outer = display_name(ty.name(), aliases);
    links.insert(outer.to_string());
    let args = ty.args();
    if args.is_empty() {
        return format!("[{}](./{})", outer, outer);
    }
    let inner = args
        .iter()
        .map(|arg| type_link(arg, aliases, links))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}](./{})\\<{}\\>", outer, outer, inner)
}

/// Bare mode for supertype mentions: links the (aliased) outer name only,
/// with no generic-argument expansion.
pub fn bare_link(ty: &TypeRef, aliases: &AliasTable, links: &mut BTreeSet<String>) -> String {
    let name = match ty.primitive() {
        Some(tag) => primitive_name(tag),
        None => display_name(ty.name(), aliases),
    };
    links.insert(name.to_string());
    format!("[{}](./{})", name, name)
}
