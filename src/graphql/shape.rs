//! Static shape descriptors and the selection-set walker.
//!
//! A shape is any type that describes, field by field, the GraphQL selection
//! it wants back. The description is a `&'static [Field]` built from `const fn`
//! constructors, so nested shapes simply reference each other's field lists.
//!
//! # Example
//!
//! ```rust
//! use gitlab_graphql::graphql::{Field, Shape};
//!
//! struct Node;
//!
//! impl Shape for Node {
//!     const FIELDS: &'static [Field] = &[Field::scalar("Name")];
//! }
//!
//! struct Projects;
//!
//! impl Shape for Projects {
//!     const FIELDS: &'static [Field] = &[Field::object(
//!         "Projects",
//!         &[Field::object_list("Nodes", Node::FIELDS)],
//!     )
//!     .arguments("(membership: true)")];
//! }
//!
//! assert_eq!(Projects::selection(), "projects(membership: true){nodes{name,}}");
//! ```

use std::borrow::Cow;

/// How a field contributes to the selection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A leaf value (`String`, `Int`, ...).
    Scalar,
    /// A list of leaf values.
    ScalarList,
    /// A single nested object with its own selection.
    Object(&'static [Field]),
    /// A list of nested objects sharing one selection.
    ObjectList(&'static [Field]),
    /// Another shape whose fields are spliced into the parent.
    Embedded(&'static [Field]),
}

/// Declarative description of one field of a shape.
///
/// The wire name defaults to `name` with its first character lower-cased,
/// so `"MergeRequest"` is requested as `mergeRequest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
    rename: Option<&'static str>,
    arguments: Option<&'static str>,
    skip: bool,
}

impl Field {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            rename: None,
            arguments: None,
            skip: false,
        }
    }

    /// A scalar field.
    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar)
    }

    /// A list-of-scalars field.
    #[must_use]
    pub const fn scalar_list(name: &'static str) -> Self {
        Self::new(name, FieldKind::ScalarList)
    }

    /// A nested object field selecting `fields`.
    #[must_use]
    pub const fn object(name: &'static str, fields: &'static [Self]) -> Self {
        Self::new(name, FieldKind::Object(fields))
    }

    /// A list-of-objects field whose elements select `fields`.
    #[must_use]
    pub const fn object_list(name: &'static str, fields: &'static [Self]) -> Self {
        Self::new(name, FieldKind::ObjectList(fields))
    }

    /// Flattens `fields` into the enclosing selection.
    ///
    /// `name` only identifies the embedded group in debug output; it is
    /// never sent over the wire.
    #[must_use]
    pub const fn embedded(name: &'static str, fields: &'static [Self]) -> Self {
        Self::new(name, FieldKind::Embedded(fields))
    }

    /// Overrides the wire name.
    #[must_use]
    pub const fn rename(mut self, wire_name: &'static str) -> Self {
        self.rename = Some(wire_name);
        self
    }

    /// Appends a raw argument suffix such as `(first: 10, after: $after)`.
    ///
    /// The suffix is emitted verbatim and is not validated.
    #[must_use]
    pub const fn arguments(mut self, arguments: &'static str) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Excludes the field from the selection.
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Returns the declared field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` if the field is excluded from selections.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Returns the name this field is requested under.
    #[must_use]
    pub fn wire_name(&self) -> Cow<'static, str> {
        self.rename
            .map_or_else(|| Cow::Owned(lower_first(self.name)), Cow::Borrowed)
    }
}

/// A type with a statically declared GraphQL selection.
///
/// Implementors usually also derive `serde::Deserialize` with
/// `rename_all = "camelCase"` so the response binds back into the same type.
pub trait Shape {
    /// The fields of this shape, in the order they are requested.
    const FIELDS: &'static [Field];

    /// Renders this shape's selection set without the outer braces.
    #[must_use]
    fn selection() -> String {
        selection_set(Self::FIELDS)
    }
}

/// Renders `fields` as a selection set without the outer braces.
#[must_use]
pub fn selection_set(fields: &[Field]) -> String {
    let mut out = String::new();
    write_fields(&mut out, fields);
    out
}

fn write_fields(out: &mut String, fields: &[Field]) {
    for field in fields.iter().filter(|field| !field.skip) {
        if let FieldKind::Embedded(inner) = field.kind {
            write_fields(out, inner);
            continue;
        }

        out.push_str(&field.wire_name());
        if let Some(arguments) = field.arguments {
            out.push_str(arguments);
        }

        match field.kind {
            FieldKind::Object(inner) | FieldKind::ObjectList(inner) => {
                out.push('{');
                write_fields(out, inner);
                out.push('}');
            }
            FieldKind::Scalar | FieldKind::ScalarList | FieldKind::Embedded(_) => out.push(','),
        }
    }
}

/// Lower-cases the first character of `name`, leaving the rest untouched.
pub(crate) fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
