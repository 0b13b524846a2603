//! Issue resource.
//!
//! - [`list_issues`]: a project's issues, ten per page
//! - [`get_issue`]: one issue by project path and iid

use serde::Deserialize;

use crate::clients::{GraphqlClient, Transport};
use crate::config::ProjectPath;
use crate::graphql::{Field, PageInfo, Shape, Variables};
use crate::resources::user::User;
use crate::resources::{page_info_of, Connection, Nodes, ResourceError, PAGE_SIZE};

/// The fields shown for each issue in a listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IssueSummary {
    /// Project-scoped issue number.
    pub iid: String,
    /// Title.
    pub title: String,
    /// `opened` or `closed`.
    pub state: String,
    /// Assigned users.
    #[serde(default)]
    pub assignees: Nodes<User>,
}

impl Shape for IssueSummary {
    const FIELDS: &'static [Field] = &[
        Field::scalar("Iid"),
        Field::scalar("Title"),
        Field::scalar("State"),
        Field::object("Assignees", Nodes::<User>::FIELDS),
    ];
}

/// An issue with its author.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// The listing fields.
    #[serde(flatten)]
    pub summary: IssueSummary,
    /// The user who opened the issue.
    pub author: User,
}

impl Shape for Issue {
    const FIELDS: &'static [Field] = &[
        Field::embedded("IssueSummary", IssueSummary::FIELDS),
        Field::object("Author", User::FIELDS),
    ];
}

#[derive(Debug, Default, Deserialize)]
struct ProjectIssues {
    issues: Connection<IssueSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct IssueList {
    project: Option<ProjectIssues>,
}

impl Shape for IssueList {
    const FIELDS: &'static [Field] = &[Field::object(
        "Project",
        &[Field::object("Issues", Connection::<IssueSummary>::FIELDS)
            .arguments("(first: $first, after: $after)")],
    )
    .arguments("(fullPath:$path)")];
}

fn issue_list_page_info(page: &IssueList) -> &PageInfo {
    page_info_of(page.project.as_ref().map(|project| &project.issues))
}

#[derive(Debug, Default, Deserialize)]
struct ProjectIssue {
    issue: Option<Issue>,
}

#[derive(Debug, Default, Deserialize)]
struct IssueQuery {
    project: Option<ProjectIssue>,
}

impl Shape for IssueQuery {
    const FIELDS: &'static [Field] = &[Field::object(
        "Project",
        &[Field::object("Issue", Issue::FIELDS).arguments("(iid:$iid)")],
    )
    .arguments("(fullPath:$path)")];
}

/// Lists the issues of a project.
///
/// Each item is one page of [`PAGE_SIZE`] issues. A missing project yields a
/// single [`ResourceError::NotFound`].
pub fn list_issues<'c, T: Transport>(
    client: &'c GraphqlClient<T>,
    path: &ProjectPath,
) -> impl Iterator<Item = Result<Vec<IssueSummary>, ResourceError>> + 'c {
    let variables = Variables::new()
        .with_type("Path", path.to_string(), "ID!")
        .with("First", PAGE_SIZE)
        .with_type("After", None::<String>, "String");
    let id = path.to_string();

    client
        .pages(variables, "After", issue_list_page_info)
        .map(move |page| {
            page.map_err(ResourceError::from).and_then(|page| {
                page.project
                    .map(|project| project.issues.nodes)
                    .ok_or_else(|| ResourceError::NotFound {
                        resource: "Project",
                        id: id.clone(),
                    })
            })
        })
}

/// Fetches one issue by project path and iid.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the project or the issue is missing,
/// or [`ResourceError::Graphql`] if the request fails.
pub fn get_issue<T: Transport>(
    client: &GraphqlClient<T>,
    path: &ProjectPath,
    iid: &str,
) -> Result<Issue, ResourceError> {
    let variables = Variables::new()
        .with_type("Path", path.to_string(), "ID!")
        .with_type("Iid", iid, "String!");

    let mut query = IssueQuery::default();
    client.query(&mut query, &variables)?;

    query
        .project
        .and_then(|project| project.issue)
        .ok_or_else(|| ResourceError::NotFound {
            resource: "Issue",
            id: format!("{path}#{iid}"),
        })
}
