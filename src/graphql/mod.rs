//! Declarative GraphQL document building and response binding.
//!
//! A caller declares the data it wants as a Rust type implementing [`Shape`].
//! From that one declaration the crate derives:
//!
//! - the selection set ([`selection_set`])
//! - the request envelope, including the variable block ([`build_query`],
//!   [`build_mutation`])
//! - the binding of the response `data` back into the same type
//!   ([`bind_response`])
//!
//! # Example
//!
//! ```rust
//! use gitlab_graphql::graphql::{build_query, Field, Shape, Variables};
//!
//! struct ProjectName;
//!
//! impl Shape for ProjectName {
//!     const FIELDS: &'static [Field] = &[Field::object("Project", &[Field::scalar("Name")])
//!         .arguments("(fullPath:$path)")];
//! }
//!
//! let variables = Variables::new().with_type("Path", "group/project", "ID!");
//! assert_eq!(
//!     build_query::<ProjectName>(&variables),
//!     r#"{"query":"query($path:ID!,){project(fullPath:$path){name,}}","variables":{"path":"group/project"}}"#
//! );
//! ```

mod document;
mod pagination;
mod response;
mod shape;
mod variables;

pub use document::{build_mutation, build_query, mutation_document, query_document};
pub use pagination::{PageInfo, Pages};
pub use response::{bind_response, ResponseError};
pub use shape::{selection_set, Field, FieldKind, Shape};
pub use variables::{InputType, Variable, Variables};
