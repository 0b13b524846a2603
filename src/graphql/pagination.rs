//! Cursor-based pagination over GraphQL connections.
//!
//! GitLab connections expose `pageInfo { endCursor hasNextPage }`. A shape
//! that lists a connection embeds [`PageInfo`] next to its `nodes`, and
//! [`Pages`] re-issues the query with the cursor variable set to the
//! previous page's `endCursor` until the server reports no further page.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::clients::Transport;
use crate::graphql::shape::{Field, Shape};
use crate::graphql::variables::Variables;

/// The `pageInfo` object of a GraphQL connection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last node on this page; `None` for an empty page.
    #[serde(default)]
    pub end_cursor: Option<String>,
    /// Whether another page follows this one.
    #[serde(default)]
    pub has_next_page: bool,
}

impl Shape for PageInfo {
    const FIELDS: &'static [Field] = &[Field::scalar("EndCursor"), Field::scalar("HasNextPage")];
}

/// Iterator over the pages of a connection query.
///
/// Each call to [`next`](Iterator::next) issues one blocking query. Iteration
/// ends after the page whose `hasNextPage` is false, or right after the first
/// error is yielded.
///
/// Created by [`GraphqlClient::pages`].
pub struct Pages<'c, T, S, F> {
    client: &'c GraphqlClient<T>,
    variables: Variables,
    cursor_variable: String,
    page_info: F,
    page: usize,
    finished: bool,
    _shape: PhantomData<fn() -> S>,
}

impl<'c, T, S, F> Pages<'c, T, S, F> {
    pub(crate) fn new(
        client: &'c GraphqlClient<T>,
        variables: Variables,
        cursor_variable: &str,
        page_info: F,
    ) -> Self {
        Self {
            client,
            variables,
            cursor_variable: cursor_variable.to_string(),
            page_info,
            page: 0,
            finished: false,
            _shape: PhantomData,
        }
    }

    /// The variables the next request will be sent with.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }
}

impl<T, S, F> Iterator for Pages<'_, T, S, F>
where
    T: Transport,
    S: Shape + DeserializeOwned + Default,
    F: Fn(&S) -> &PageInfo,
{
    type Item = Result<S, GraphqlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.page += 1;
        let mut shape = S::default();
        if let Err(error) = self.client.query(&mut shape, &self.variables) {
            self.finished = true;
            return Some(Err(error));
        }

        let info = (self.page_info)(&shape);
        match (&info.end_cursor, info.has_next_page) {
            (Some(cursor), true) => {
                tracing::debug!("Fetched page {}, continuing after cursor {}", self.page, cursor);
                self.variables
                    .set(&self.cursor_variable, Some(cursor.as_str()));
            }
            (None, true) => {
                tracing::warn!(
                    "Page {} reports a next page without an end cursor, stopping",
                    self.page
                );
                self.finished = true;
            }
            (_, false) => {
                tracing::debug!("Fetched last page ({})", self.page);
                self.finished = true;
            }
        }

        Some(Ok(shape))
    }
}
