//! GraphQL client for the GitLab API.
//!
//! This module provides the [`GraphqlClient`] type, which turns a [`Shape`]
//! into a request envelope, posts it to the GraphQL endpoint and binds the
//! response back into the caller's value.

use serde::de::DeserializeOwned;

use crate::auth::Session;
use crate::clients::graphql::GraphqlError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, Transport};
use crate::config::GitlabConfig;
use crate::graphql::{bind_response, build_mutation, build_query, PageInfo, Pages, Shape, Variables};

/// GraphQL API client for GitLab.
///
/// Every call is a single blocking POST; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use gitlab_graphql::clients::GraphqlClient;
/// use gitlab_graphql::graphql::{Field, Shape, Variables};
/// use gitlab_graphql::{AccessToken, Session};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct CurrentUser {
///     current_user: User,
/// }
///
/// #[derive(Debug, Default, Deserialize)]
/// struct User {
///     username: String,
/// }
///
/// impl Shape for CurrentUser {
///     const FIELDS: &'static [Field] =
///         &[Field::object("CurrentUser", &[Field::scalar("Username")])];
/// }
///
/// let session = Session::bearer(AccessToken::new("glpat-token").unwrap());
/// let client = GraphqlClient::new(&session, None);
///
/// let mut me = CurrentUser::default();
/// client.query(&mut me, &Variables::new()).unwrap();
/// println!("{}", me.current_user.username);
/// ```
#[derive(Debug)]
pub struct GraphqlClient<T = HttpClient> {
    transport: T,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a client for the configured GraphQL endpoint.
    ///
    /// Without a configuration the public `gitlab.com` endpoint is used.
    #[must_use]
    pub fn new(session: &Session, config: Option<&GitlabConfig>) -> Self {
        let endpoint = config.map_or_else(
            || GitlabConfig::default().graphql_url().clone(),
            |config| config.graphql_url().clone(),
        );
        tracing::debug!("Creating GraphQL client for {}", endpoint);

        Self::with_transport(HttpClient::new(&endpoint, session, config))
    }
}

impl<T> GraphqlClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> GraphqlClient<T> {
    /// Runs a query selecting `S` and binds the result into `shape`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Transport`] if the request fails or returns non-2xx
    /// - [`GraphqlError::Decode`] if the body does not fit `S`
    /// - [`GraphqlError::Api`] if the server reports errors
    pub fn query<S>(&self, shape: &mut S, variables: &Variables) -> Result<(), GraphqlError>
    where
        S: Shape + DeserializeOwned,
    {
        self.execute(build_query::<S>(variables), shape)
    }

    /// Runs a mutation selecting `S` and binds the result into `shape`.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn mutate<S>(&self, shape: &mut S, variables: &Variables) -> Result<(), GraphqlError>
    where
        S: Shape + DeserializeOwned,
    {
        self.execute(build_mutation::<S>(variables), shape)
    }

    /// Posts an already assembled envelope and binds the response into `shape`.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn execute<D>(&self, document: String, shape: &mut D) -> Result<(), GraphqlError>
    where
        D: DeserializeOwned,
    {
        tracing::debug!("GraphQL request: {}", document);

        let request = HttpRequest::builder(HttpMethod::Post, "")
            .body(document)
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;

        let body = self.transport.send(request)?;
        bind_response(&body, shape)
    }

    /// Iterates over the pages of a connection query.
    ///
    /// `cursor_variable` names the variable carrying the `after` cursor and
    /// `page_info` locates the connection's [`PageInfo`] inside a page. The
    /// first request is sent with `variables` as given.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let variables = Variables::new()
    ///     .with("First", 10)
    ///     .with_type("After", None::<String>, "String");
    ///
    /// for page in client.pages(variables, "After", |page: &ProjectList| &page.projects.page_info) {
    ///     for project in page?.projects.nodes {
    ///         println!("{}", project.full_path);
    ///     }
    /// }
    /// ```
    pub fn pages<S, F>(
        &self,
        variables: Variables,
        cursor_variable: &str,
        page_info: F,
    ) -> Pages<'_, T, S, F>
    where
        S: Shape + DeserializeOwned + Default,
        F: Fn(&S) -> &PageInfo,
    {
        Pages::new(self, variables, cursor_variable, page_info)
    }
}
