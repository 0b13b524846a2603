//! Assembly of the JSON request envelope for queries and mutations.
//!
//! The envelope is written as a single line, exactly as it goes on the wire:
//!
//! ```text
//! {"query":"query($path:ID!,){project(fullPath:$path){name,}}","variables":{"path":"group/project"}}
//! ```
//!
//! Argument suffixes and string variables are spliced in without escaping.

use crate::graphql::shape::{selection_set, Field, Shape};
use crate::graphql::variables::Variables;

/// Builds the request envelope for a query selecting `S`.
///
/// The `query(...)` header is only emitted when `variables` is non-empty.
///
/// # Example
///
/// ```rust
/// use gitlab_graphql::graphql::{build_query, Field, Shape, Variables};
///
/// struct CurrentUser;
///
/// impl Shape for CurrentUser {
///     const FIELDS: &'static [Field] =
///         &[Field::object("CurrentUser", &[Field::scalar("Username")])];
/// }
///
/// assert_eq!(
///     build_query::<CurrentUser>(&Variables::new()),
///     r#"{"query":"{currentUser{username,}}","variables":{}}"#
/// );
/// ```
#[must_use]
pub fn build_query<S: Shape + ?Sized>(variables: &Variables) -> String {
    query_document(S::FIELDS, variables)
}

/// Builds the request envelope for a mutation selecting `S`.
///
/// Mutations always carry a `mutation(...)` header. They are expected to
/// declare at least one variable; an empty set still produces `mutation()`.
#[must_use]
pub fn build_mutation<S: Shape + ?Sized>(variables: &Variables) -> String {
    mutation_document(S::FIELDS, variables)
}

/// Builds a query envelope from a raw field list.
#[must_use]
pub fn query_document(fields: &[Field], variables: &Variables) -> String {
    let header = if variables.is_empty() {
        String::new()
    } else {
        format!("query({})", variables.declarations())
    };
    envelope(&header, fields, variables)
}

/// Builds a mutation envelope from a raw field list.
#[must_use]
pub fn mutation_document(fields: &[Field], variables: &Variables) -> String {
    if variables.is_empty() {
        tracing::warn!("Building a mutation without variables");
    }
    let header = format!("mutation({})", variables.declarations());
    envelope(&header, fields, variables)
}

fn envelope(header: &str, fields: &[Field], variables: &Variables) -> String {
    format!(
        r#"{{"query":"{header}{{{}}}","variables":{{{}}}}}"#,
        selection_set(fields),
        variables.values()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Projects;

    impl Shape for Projects {
        const FIELDS: &'static [Field] = &[Field::object(
            "Projects",
            &[Field::object_list("Nodes", &[Field::scalar("Name")])],
        )
        .arguments("(membership: true)")];
    }

    struct CreateMergeRequest;

    impl Shape for CreateMergeRequest {
        const FIELDS: &'static [Field] = &[Field::object(
            "MergeRequestCreate",
            &[Field::object("MergeRequest", &[Field::scalar("Title")])],
        )
        .arguments("(title:$title,projectPath:$path)")];
    }

    #[test]
    fn test_query_without_variables() {
        assert_eq!(
            build_query::<Projects>(&Variables::new()),
            r#"{"query":"{projects(membership: true){nodes{name,}}}","variables":{}}"#
        );
    }

    #[test]
    fn test_query_with_variables() {
        let variables = Variables::new()
            .with("Field", 123_i32)
            .with("Foo", "asd")
            .with_type("Baz", 123, "ID!");

        assert_eq!(
            build_query::<Projects>(&variables),
            r#"{"query":"query($field:Int,$foo:String,$baz:ID!,){projects(membership: true){nodes{name,}}}","variables":{"field":123,"foo":"asd","baz":123}}"#
        );
    }

    #[test]
    fn test_mutation() {
        let variables = Variables::new()
            .with_type("Title", "asd", "String!")
            .with_type("Path", "asd", "String!");

        assert_eq!(
            build_mutation::<CreateMergeRequest>(&variables),
            r#"{"query":"mutation($title:String!,$path:String!,){mergeRequestCreate(title:$title,projectPath:$path){mergeRequest{title,}}}","variables":{"title":"asd","path":"asd"}}"#
        );
    }

    #[test]
    fn test_mutation_with_list_variable() {
        const FIELDS: &[Field] = &[Field::object(
            "MergeRequestSetAssignees",
            &[Field::object("MergeRequest", &[Field::scalar("Title")])],
        )
        .arguments("(title:$title,usernames:$usernames)")];

        let variables = Variables::new()
            .with_type("Title", "asd", "String!")
            .with_type("Usernames", vec!["asd"], "[String!]!");

        assert_eq!(
            mutation_document(FIELDS, &variables),
            r#"{"query":"mutation($title:String!,$usernames:[String!]!,){mergeRequestSetAssignees(title:$title,usernames:$usernames){mergeRequest{title,}}}","variables":{"title":"asd","usernames":["asd"]}}"#
        );
    }

    #[test]
    fn test_mutation_without_variables_keeps_header() {
        let document = build_mutation::<Projects>(&Variables::new());
        assert!(document.starts_with(r#"{"query":"mutation(){"#));
        assert!(document.ends_with(r#""variables":{}}"#));
    }

    #[test]
    fn test_envelope_is_valid_json() {
        let variables = Variables::new().with("First", 10).with("After", None::<String>);
        let document = build_query::<Projects>(&variables);

        let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(parsed["variables"]["first"], 10);
        assert!(parsed["variables"]["after"].is_null());
        assert!(parsed["query"]
            .as_str()
            .unwrap()
            .starts_with("query($first:Int,$after:String,)"));
    }
}
