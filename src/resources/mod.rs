//! Typed GitLab resources built on the declarative GraphQL layer.
//!
//! Each resource module declares the shapes it reads, implements [`Shape`]
//! for them, and exposes the operations of the command-line client:
//!
//! - [`project`]: listing member projects, viewing one project, members
//! - [`issue`]: listing and viewing issues
//! - [`merge_request`]: listing, viewing, creating, and assigning merge requests
//! - [`user`]: the user shape shared by all of the above
//!
//! # Example
//!
//! ```rust,no_run
//! use gitlab_graphql::clients::GraphqlClient;
//! use gitlab_graphql::resources::project::get_project;
//! use gitlab_graphql::{AccessToken, ProjectPath, Session};
//!
//! let session = Session::bearer(AccessToken::new("glpat-token").unwrap());
//! let client = GraphqlClient::new(&session, None);
//!
//! let path = ProjectPath::new("gitlab-org/gitlab").unwrap();
//! let project = get_project(&client, &path).unwrap();
//! println!("{} ({} stars)", project.summary.name_with_namespace, project.summary.star_count);
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{GraphqlError, RestError};
use crate::graphql::{Field, PageInfo, Shape};

pub mod issue;
pub mod merge_request;
pub mod project;
pub mod user;

/// Number of nodes requested per page by the listing operations.
pub const PAGE_SIZE: u32 = 10;

/// Errors returned by resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested entity does not exist or is not visible to the session.
    #[error("{resource} {id} not found, check the repository path and permissions")]
    NotFound {
        /// The kind of entity (e.g., "Project", "Issue").
        resource: &'static str,
        /// The path or iid that was requested.
        id: String,
    },

    /// A mutation was executed but reported errors in its payload.
    #[error("{mutation} failed: {}", .errors.join("; "))]
    Mutation {
        /// The mutation field name.
        mutation: &'static str,
        /// The payload's `errors` list.
        errors: Vec<String>,
    },

    /// The GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The REST request failed.
    #[error(transparent)]
    Rest(#[from] RestError),
}

/// A `{ nodes { ... } }` wrapper around a list of `T`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Nodes<T> {
    /// The listed nodes.
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T: Shape> Shape for Nodes<T> {
    const FIELDS: &'static [Field] = &[Field::object_list("Nodes", T::FIELDS)];
}

/// One page of a paginated connection of `T`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Pagination state after this page.
    pub page_info: PageInfo,
    /// The nodes on this page.
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T: Shape> Shape for Connection<T> {
    const FIELDS: &'static [Field] = &[
        Field::object("PageInfo", PageInfo::FIELDS),
        Field::object_list("Nodes", T::FIELDS),
    ];
}

static NO_PAGE: PageInfo = PageInfo {
    end_cursor: None,
    has_next_page: false,
};

/// Page info of a connection nested under a parent that may be missing.
///
/// A missing parent reads as a final page, which ends pagination.
pub(crate) fn page_info_of<C>(connection: Option<&Connection<C>>) -> &PageInfo {
    connection.map_or(&NO_PAGE, |connection| &connection.page_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::selection_set;
    use crate::resources::user::User;

    #[test]
    fn test_nodes_selection() {
        assert_eq!(
            selection_set(Nodes::<User>::FIELDS),
            "nodes{name,username,}"
        );
    }

    #[test]
    fn test_connection_selection() {
        assert_eq!(
            selection_set(Connection::<User>::FIELDS),
            "pageInfo{endCursor,hasNextPage,}nodes{name,username,}"
        );
    }

    #[test]
    fn test_resource_error_messages() {
        let error = ResourceError::NotFound {
            resource: "Project",
            id: "group/missing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Project group/missing not found, check the repository path and permissions"
        );

        let error = ResourceError::Mutation {
            mutation: "mergeRequestCreate",
            errors: vec!["Branch missing".to_string(), "Title blank".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "mergeRequestCreate failed: Branch missing; Title blank"
        );
    }

    #[test]
    fn test_connection_tolerates_missing_nodes() {
        let connection: Connection<User> =
            serde_json::from_str(r#"{"pageInfo":{"endCursor":null,"hasNextPage":false}}"#)
                .unwrap();
        assert!(connection.nodes.is_empty());
        assert_eq!(connection.page_info, NO_PAGE);
    }

    #[test]
    fn test_missing_parent_reads_as_last_page() {
        assert!(!page_info_of::<User>(None).has_next_page);
    }
}
