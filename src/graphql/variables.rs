//! Typed GraphQL variables and their wire rendering.
//!
//! Every value passed to [`Variables`] implements [`InputType`], which infers
//! its GraphQL type from the Rust type and renders its JSON literal. When the
//! inferred type is not precise enough (non-null `ID!`, `[String!]!`, enums),
//! use [`Variables::with_type`] to declare it explicitly.
//!
//! # Known Limitation
//!
//! String values are written between quotes verbatim. A value containing a
//! quote, backslash, or newline produces a malformed request body.
//!
//! # Example
//!
//! ```rust
//! use gitlab_graphql::graphql::Variables;
//!
//! let variables = Variables::new()
//!     .with_type("Title", "asd", "String!")
//!     .with_type("Path", "asd", "String!")
//!     .with("First", 10);
//!
//! assert_eq!(variables.declarations(), "$title:String!,$path:String!,$first:Int,");
//! assert_eq!(variables.values(), r#""title":"asd","path":"asd","first":10"#);
//! ```

use crate::graphql::shape::lower_first;

/// A Rust value that can be sent as a GraphQL variable.
pub trait InputType {
    /// The GraphQL type inferred for this Rust type.
    fn graphql_type() -> String;

    /// The JSON literal for this value.
    fn render(&self) -> String;
}

macro_rules! impl_input_type {
    ($graphql_type:literal => $($ty:ty),+) => {
        $(
            impl InputType for $ty {
                fn graphql_type() -> String {
                    $graphql_type.to_string()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_input_type!("Int" => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_input_type!("Float" => f32, f64);
impl_input_type!("Boolean" => bool);

impl InputType for str {
    fn graphql_type() -> String {
        "String".to_string()
    }

    fn render(&self) -> String {
        format!("\"{self}\"")
    }
}

impl InputType for String {
    fn graphql_type() -> String {
        str::graphql_type()
    }

    fn render(&self) -> String {
        self.as_str().render()
    }
}

impl<T: InputType + ?Sized> InputType for &T {
    fn graphql_type() -> String {
        T::graphql_type()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: InputType> InputType for [T] {
    fn graphql_type() -> String {
        format!("[{}]", T::graphql_type())
    }

    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(InputType::render).collect();
        format!("[{}]", items.join(","))
    }
}

impl<T: InputType, const N: usize> InputType for [T; N] {
    fn graphql_type() -> String {
        <[T]>::graphql_type()
    }

    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: InputType> InputType for Vec<T> {
    fn graphql_type() -> String {
        <[T]>::graphql_type()
    }

    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: InputType> InputType for Option<T> {
    fn graphql_type() -> String {
        T::graphql_type()
    }

    fn render(&self) -> String {
        self.as_ref().map_or_else(|| "null".to_string(), InputType::render)
    }
}

/// A single declared variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    graphql_type: String,
    value: String,
    explicit_type: bool,
}

impl Variable {
    /// The wire name, without the leading `$`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared GraphQL type.
    #[must_use]
    pub fn graphql_type(&self) -> &str {
        &self.graphql_type
    }

    /// The rendered JSON value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An ordered set of GraphQL variables.
///
/// Declaration order is preserved in both the declaration and the value
/// fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<Variable>,
}

impl Variables {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable whose type is inferred from `value`.
    #[must_use]
    pub fn with<T: InputType>(mut self, name: &str, value: T) -> Self {
        self.push(name, &value, None);
        self
    }

    /// Adds a variable with an explicit GraphQL type.
    #[must_use]
    pub fn with_type<T: InputType>(mut self, name: &str, value: T, graphql_type: &str) -> Self {
        self.push(name, &value, Some(graphql_type));
        self
    }

    /// Replaces the value of an existing variable, or appends a new one.
    ///
    /// An explicitly declared type is kept; an inferred type is re-inferred
    /// from the new value.
    pub fn set<T: InputType>(&mut self, name: &str, value: T) {
        let wire_name = lower_first(name);
        match self.entries.iter_mut().find(|entry| entry.name == wire_name) {
            Some(entry) => {
                entry.value = value.render();
                if !entry.explicit_type {
                    entry.graphql_type = T::graphql_type();
                }
            }
            None => self.push(name, &value, None),
        }
    }

    fn push<T: InputType>(&mut self, name: &str, value: &T, graphql_type: Option<&str>) {
        self.entries.push(Variable {
            name: lower_first(name),
            graphql_type: graphql_type.map_or_else(T::graphql_type, str::to_string),
            value: value.render(),
            explicit_type: graphql_type.is_some(),
        });
    }

    /// Returns `true` if no variables are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a variable by its wire name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        let wire_name = lower_first(name);
        self.entries.iter().find(|entry| entry.name == wire_name)
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }

    /// Renders the declaration fragment, e.g. `$path:ID!,$after:String,`.
    #[must_use]
    pub fn declarations(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("${}:{},", entry.name, entry.graphql_type))
            .collect()
    }

    /// Renders the value fragment, e.g. `"path":"group/project","after":null`.
    #[must_use]
    pub fn values(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("\"{}\":{}", entry.name, entry.value))
            .collect::<Vec<_>>()
            .join(",")
    }
}
