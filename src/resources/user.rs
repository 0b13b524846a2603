//! GitLab user shape.

use serde::{Deserialize, Serialize};

use crate::graphql::{Field, Shape};

/// A GitLab user as shown in author and assignee lists.
///
/// The same type binds the GraphQL `UserCore` selection and the REST
/// `/projects/:id/users` entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Login handle, without the leading `@`.
    pub username: String,
}

impl Shape for User {
    const FIELDS: &'static [Field] = &[Field::scalar("Name"), Field::scalar("Username")];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_selection() {
        assert_eq!(User::selection(), "name,username,");
    }

    #[test]
    fn test_user_ignores_extra_rest_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Ada Lovelace","username":"ada","state":"active","avatar_url":null}"#,
        )
        .unwrap();
        assert_eq!(user.username, "ada");
    }
}
