//! Project resource.
//!
//! # Operations
//!
//! - [`list_projects`]: the session user's member projects, ten per page
//! - [`get_project`]: one project by full path
//! - [`project_members`]: the project's users, via the REST API
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_graphql::resources::project::list_projects;
//!
//! for page in list_projects(&client) {
//!     for project in page? {
//!         println!("{} ({})", project.name_with_namespace, project.visibility);
//!     }
//! }
//! ```

use serde::Deserialize;

use crate::clients::{GraphqlClient, RestClient, Transport};
use crate::config::ProjectPath;
use crate::graphql::{Field, PageInfo, Shape, Variables};
use crate::resources::user::User;
use crate::resources::{Connection, Nodes, ResourceError, PAGE_SIZE};

/// The fields shown for each project in a listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Short name.
    pub name: String,
    /// Free-form description; `None` when the project has none.
    #[serde(default)]
    pub description: Option<String>,
    /// Name prefixed with its namespace, e.g. `GitLab.org / GitLab`.
    pub name_with_namespace: String,
    /// Number of forks.
    #[serde(default)]
    pub forks_count: i64,
    /// Number of stars.
    #[serde(default)]
    pub star_count: i64,
    /// `public`, `internal`, or `private`.
    pub visibility: String,
    /// Full path, e.g. `gitlab-org/gitlab`.
    pub full_path: String,
}

impl Shape for ProjectSummary {
    const FIELDS: &'static [Field] = &[
        Field::scalar("Name"),
        Field::scalar("Description"),
        Field::scalar("NameWithNamespace"),
        Field::scalar("ForksCount"),
        Field::scalar("StarCount"),
        Field::scalar("Visibility"),
        Field::scalar("FullPath"),
    ];
}

/// A release name.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Release {
    /// Release title; may be unset.
    #[serde(default)]
    pub name: Option<String>,
}

impl Shape for Release {
    const FIELDS: &'static [Field] = &[Field::scalar("Name")];
}

/// Status of a pipeline.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    /// Human-readable status.
    pub detailed_status: DetailedStatus,
}

/// The `detailedStatus` of a pipeline.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DetailedStatus {
    /// Status label, e.g. `passed`.
    pub label: String,
}

impl Shape for Pipeline {
    const FIELDS: &'static [Field] =
        &[Field::object("DetailedStatus", &[Field::scalar("Label")])];
}

/// A project with everything shown on its detail view.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The listing fields.
    #[serde(flatten)]
    pub summary: ProjectSummary,
    /// Creation timestamp, ISO 8601.
    pub created_at: String,
    /// Open issue count; `None` when issues are disabled.
    #[serde(default)]
    pub open_issues_count: Option<i64>,
    /// SSH clone URL.
    #[serde(default)]
    pub ssh_url_to_repo: Option<String>,
    /// HTTP clone URL.
    #[serde(default)]
    pub http_url_to_repo: Option<String>,
    /// Web URL.
    pub web_url: String,
    /// The latest release, if any.
    #[serde(default)]
    pub releases: Nodes<Release>,
    /// The latest pipeline, if any.
    #[serde(default)]
    pub pipelines: Nodes<Pipeline>,
}

impl Project {
    /// Name of the latest release.
    #[must_use]
    pub fn latest_release(&self) -> Option<&str> {
        self.releases.nodes.first()?.name.as_deref()
    }

    /// Status label of the latest pipeline.
    #[must_use]
    pub fn pipeline_status(&self) -> Option<&str> {
        self.pipelines
            .nodes
            .first()
            .map(|pipeline| pipeline.detailed_status.label.as_str())
    }
}

impl Shape for Project {
    const FIELDS: &'static [Field] = &[
        Field::embedded("ProjectSummary", ProjectSummary::FIELDS),
        Field::scalar("CreatedAt"),
        Field::scalar("OpenIssuesCount"),
        Field::scalar("SshUrlToRepo"),
        Field::scalar("HttpUrlToRepo"),
        Field::scalar("WebUrl"),
        Field::object("Releases", Nodes::<Release>::FIELDS).arguments("(first: 1)"),
        Field::object("Pipelines", Nodes::<Pipeline>::FIELDS).arguments("(first: 1)"),
    ];
}

#[derive(Debug, Default, Deserialize)]
struct ProjectList {
    projects: Connection<ProjectSummary>,
}

impl Shape for ProjectList {
    const FIELDS: &'static [Field] = &[Field::object(
        "Projects",
        Connection::<ProjectSummary>::FIELDS,
    )
    .arguments("(membership: true, first: $first, after: $after)")];
}

fn project_list_page_info(page: &ProjectList) -> &PageInfo {
    &page.projects.page_info
}

#[derive(Debug, Default, Deserialize)]
struct ProjectQuery {
    project: Option<Project>,
}

impl Shape for ProjectQuery {
    const FIELDS: &'static [Field] =
        &[Field::object("Project", Project::FIELDS).arguments("(fullPath:$path)")];
}

/// Lists the projects the session user is a member of.
///
/// Each item is one page of [`PAGE_SIZE`] projects. Iteration stops after the
/// last page or the first error.
pub fn list_projects<T: Transport>(
    client: &GraphqlClient<T>,
) -> impl Iterator<Item = Result<Vec<ProjectSummary>, ResourceError>> + '_ {
    let variables = Variables::new()
        .with("First", PAGE_SIZE)
        .with_type("After", None::<String>, "String");

    client
        .pages(variables, "After", project_list_page_info)
        .map(|page| {
            page.map(|page| page.projects.nodes)
                .map_err(ResourceError::from)
        })
}

/// Fetches one project by full path.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the project does not exist or is
/// not visible, or [`ResourceError::Graphql`] if the request fails.
pub fn get_project<T: Transport>(
    client: &GraphqlClient<T>,
    path: &ProjectPath,
) -> Result<Project, ResourceError> {
    let variables = Variables::new().with_type("Path", path.to_string(), "ID!");

    let mut query = ProjectQuery::default();
    client.query(&mut query, &variables)?;

    query.project.ok_or_else(|| ResourceError::NotFound {
        resource: "Project",
        id: path.to_string(),
    })
}

/// Lists the users of a project through the REST API.
///
/// # Errors
///
/// Returns [`ResourceError::Rest`] if the request fails or the body is not a
/// list of users.
pub fn project_members<T: Transport>(
    client: &RestClient<T>,
    path: &ProjectPath,
) -> Result<Vec<User>, ResourceError> {
    let mut users = Vec::new();
    client.get(&format!("projects/{}/users", path.url_encoded()), &mut users)?;
    Ok(users)
}
