//! # GitLab GraphQL Client
//!
//! A declarative GraphQL client for GitLab. Callers describe the data they
//! want as plain Rust types; the crate derives the query text from the type,
//! sends it, and binds the response back into the same type.
//!
//! ## Overview
//!
//! This crate provides:
//! - Static field descriptors for shapes via [`graphql::Shape`] and [`graphql::Field`]
//! - Typed variables with inferred or explicit GraphQL types via [`graphql::Variables`]
//! - Query and mutation envelope assembly via [`graphql::build_query`] and [`graphql::build_mutation`]
//! - Response binding that surfaces server errors via [`graphql::bind_response`]
//! - A blocking GraphQL client with cursor pagination via [`GraphqlClient`]
//! - A REST sibling for endpoints GraphQL lacks via [`RestClient`]
//! - Typed GitLab resources (projects, issues, merge requests) via [`resources`]
//! - Type-safe configuration via [`GitlabConfig`] and [`GitlabConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use gitlab_graphql::graphql::{build_query, Field, Shape, Variables};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Projects {
//!     projects: Nodes,
//! }
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Nodes {
//!     nodes: Vec<Project>,
//! }
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Project {
//!     name: String,
//! }
//!
//! impl Shape for Projects {
//!     const FIELDS: &'static [Field] = &[Field::object(
//!         "Projects",
//!         &[Field::object_list("Nodes", &[Field::scalar("Name")])],
//!     )
//!     .arguments("(membership: true)")];
//! }
//!
//! assert_eq!(
//!     build_query::<Projects>(&Variables::new()),
//!     r#"{"query":"{projects(membership: true){nodes{name,}}}","variables":{}}"#
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use gitlab_graphql::{AccessToken, GitlabConfig, GraphqlClient, Session};
//! use gitlab_graphql::resources::project::list_projects;
//!
//! let config = GitlabConfig::builder()
//!     .graphql_url("https://gitlab.example.com/api/graphql")
//!     .build()
//!     .unwrap();
//! let session = Session::bearer(AccessToken::new("glpat-token").unwrap());
//! let client = GraphqlClient::new(&session, Some(&config));
//!
//! for page in list_projects(&client) {
//!     for project in page.unwrap() {
//!         println!("{}", project.full_path);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Blocking**: One request in flight at a time; no runtime required
//! - **No retries**: Every failure is returned to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod graphql;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{AccessToken, EndpointUrl, GitlabConfig, GitlabConfigBuilder, ProjectPath};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    DataType, GraphqlClient, GraphqlError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
    Transport,
};

pub use resources::ResourceError;
