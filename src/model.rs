//! Data model for declaration units — the shape the upstream parser emits.

use serde::Deserialize;

/// Annotation renaming a declaration's own page.
pub const ALIAS_MARKER: &str = "AutoDocAlias";
/// Annotation folding a declaration's identity into another display name.
pub const SHADOW_MARKER: &str = "AutoDocShadow";
/// Annotation marking a field for inclusion in generated documentation.
/// Its string argument is the field's documented display label.
pub const VALUE_MARKER: &str = "Value";
/// Annotation marking that a field's default value should be documented.
pub const DEFAULT_MARKER: &str = "Default";

/// Marker root interfaces: a declaration reachable from one of these through
/// its `extends` chain belongs in the documented configuration schema.
pub const MARKER_ROOTS: &[&str] = &["ConfigTemplate", "ValidatedConfigTemplate", "ObjectTemplate"];

/// Implementation-detail supertype suppressed from "Inherits from" lines.
pub const SUPPRESSED_SUPERTYPE: &str = "AbstractableTemplate";

/// One parsed class/interface declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclarationUnit {
    /// Declared name; unique key within the index.
    pub name: String,
    /// Direct `extends` supertypes, in declaration order.
    #[serde(default)]
    pub extends: Vec<TypeRef>,
    /// Direct `implements` supertypes, in declaration order.
    #[serde(default)]
    pub implements: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    /// Documentation comment as plain text.
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl DeclarationUnit {
    pub fn annotation(&self, marker: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == marker)
    }

    /// First string argument of the named annotation, if both are present.
    pub fn annotation_value(&self, marker: &str) -> Option<&str> {
        self.annotation(marker).and_then(|a| a.value.as_deref())
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotation(marker).is_some()
    }
}

/// One field declaration inside a declaration unit.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    /// Source identifier. Pages title field sections by the value marker's
    /// label argument, never by this.
    #[allow(dead_code)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Literal source text of the field's initializer, if any.
    #[serde(default)]
    pub default: Option<String>,
}

impl FieldDecl {
    pub fn annotation(&self, marker: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == marker)
    }

    pub fn annotation_value(&self, marker: &str) -> Option<&str> {
        self.annotation(marker).and_then(|a| a.value.as_deref())
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotation(marker).is_some()
    }
}

/// An annotation with an optional string argument.
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A type reference as written in source.
///
/// Equality is structural; consumers compare rendered names, never identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// Bare name shorthand: `"Base"`.
    Name(String),
    /// Primitive tag: `{"primitive": "int"}`.
    Primitive { primitive: String },
    /// Named type with generic arguments: `{"name": "HashMap", "args": [...]}`.
    Generic {
        name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// The primitive tag, if this is a primitive reference.
    pub fn primitive(&self) -> Option<&str> {
        match self {
            TypeRef::Primitive { primitive } => Some(primitive),
            _ => None,
        }
    }

    /// Raw outer name as written in source. Primitives spell their tag.
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Name(name) => name,
            TypeRef::Primitive { primitive } => primitive,
            TypeRef::Generic { name, .. } => name,
        }
    }

    /// Generic type arguments; empty for non-generic references.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Generic { args, .. } => args,
            _ => &[],
        }
    }
}
