//! Binding of GraphQL response envelopes into caller shapes.
//!
//! A response body looks like `{"data": {...}, "errors": [{"message": "..."}]}`.
//! Reported errors always win: when `errors` is non-empty the call fails and
//! any partial `data` is discarded.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::graphql::GraphqlError;

/// One entry of the envelope's `errors` list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ResponseError {
    /// The human-readable message.
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<ResponseError>>,
}

/// Decodes `body` and writes its `data` slot into `shape`.
///
/// `shape` is only modified on success. A `null` or missing `data` slot with
/// no reported errors leaves it untouched.
///
/// # Errors
///
/// - [`GraphqlError::Decode`] if the body is not a JSON envelope or the
///   `data` slot does not fit `T`
/// - [`GraphqlError::Api`] if the envelope reports any errors
///
/// # Example
///
/// ```rust
/// use gitlab_graphql::graphql::bind_response;
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Project {
///     name: String,
/// }
///
/// let mut project = Project::default();
/// bind_response(br#"{"data":{"name":"foo"},"errors":[]}"#, &mut project).unwrap();
/// assert_eq!(project.name, "foo");
/// ```
pub fn bind_response<T: DeserializeOwned>(body: &[u8], shape: &mut T) -> Result<(), GraphqlError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    let errors = envelope.errors.unwrap_or_default();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.into_iter().map(|error| error.message).collect();
        tracing::debug!("GraphQL response reported {} error(s)", messages.len());
        return Err(GraphqlError::Api { messages });
    }

    match envelope.data {
        Some(serde_json::Value::Null) | None => {
            tracing::debug!("GraphQL response carried no data");
        }
        Some(data) => *shape = serde_json::from_value(data)?,
    }

    Ok(())
}
