//! Authentication types for the GitLab client.
//!
//! This module provides the [`Session`] type carrying the credentials that
//! every request is signed with.
//!
//! # Session Acquisition
//!
//! Obtaining a token (browser-based OAuth login) and persisting it between
//! runs is the caller's concern. A session can be built directly from a token
//! or deserialized from the OAuth token response:
//!
//! ```rust
//! use gitlab_graphql::{AccessToken, Session};
//!
//! let session = Session::new(AccessToken::new("token").unwrap(), "Bearer");
//! assert_eq!(session.authorization(), "Bearer token");
//!
//! let session: Session =
//!     serde_json::from_str(r#"{"access_token":"token","token_type":"Bearer"}"#).unwrap();
//! assert_eq!(session.token_type, "Bearer");
//! ```

pub mod session;

pub use session::Session;
