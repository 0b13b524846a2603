//! Merge request resource.
//!
//! # Operations
//!
//! - [`list_merge_requests`]: a project's merge requests, optionally filtered by state
//! - [`get_merge_request`]: one merge request by project path and iid
//! - [`create_merge_request`]: the `mergeRequestCreate` mutation
//! - [`assign_merge_request`]: the `mergeRequestSetAssignees` mutation
//!
//! Both mutations report failures inside their payload rather than as
//! GraphQL errors; those are returned as [`ResourceError::Mutation`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_graphql::resources::merge_request::{create_merge_request, NewMergeRequest};
//!
//! let input = NewMergeRequest::new(path, "Fix login redirect", "fix-login");
//! let iid = create_merge_request(&client, &input)?;
//! println!("Created merge request !{iid}");
//! ```

use std::fmt;

use serde::Deserialize;

use crate::clients::{GraphqlClient, Transport};
use crate::config::ProjectPath;
use crate::graphql::{Field, InputType, PageInfo, Shape, Variables};
use crate::resources::user::User;
use crate::resources::{page_info_of, Connection, Nodes, ResourceError, PAGE_SIZE};

/// Target branch used when none is given.
pub const DEFAULT_TARGET_BRANCH: &str = "master";

/// State filter for merge request listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MergeRequestState {
    /// Open merge requests.
    Opened,
    /// Closed without merging.
    Closed,
    /// Merged.
    Merged,
}

impl MergeRequestState {
    /// The GraphQL enum value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }
}

impl fmt::Display for MergeRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InputType for MergeRequestState {
    fn graphql_type() -> String {
        "MergeRequestState".to_string()
    }

    fn render(&self) -> String {
        self.as_str().render()
    }
}

/// The fields shown for each merge request in a listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MergeRequestSummary {
    /// Project-scoped merge request number.
    pub iid: String,
    /// Title.
    pub title: String,
    /// `opened`, `closed`, `locked`, or `merged`.
    pub state: String,
    /// The user who opened the merge request.
    pub author: User,
}

impl Shape for MergeRequestSummary {
    const FIELDS: &'static [Field] = &[
        Field::scalar("Iid"),
        Field::scalar("Title"),
        Field::scalar("State"),
        Field::object("Author", User::FIELDS),
    ];
}

/// A merge request with branches, description and assignees.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    /// The listing fields.
    #[serde(flatten)]
    pub summary: MergeRequestSummary,
    /// Description in Markdown; `None` when empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Branch with the changes.
    pub source_branch: String,
    /// Branch the changes are merged into.
    pub target_branch: String,
    /// Assigned users.
    #[serde(default)]
    pub assignees: Nodes<User>,
}

impl Shape for MergeRequest {
    const FIELDS: &'static [Field] = &[
        Field::embedded("MergeRequestSummary", MergeRequestSummary::FIELDS),
        Field::scalar("Description"),
        Field::scalar("SourceBranch"),
        Field::scalar("TargetBranch"),
        Field::object("Assignees", Nodes::<User>::FIELDS),
    ];
}

/// Input of [`create_merge_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMergeRequest {
    /// Project the merge request is opened in.
    pub project_path: ProjectPath,
    /// Title.
    pub title: String,
    /// Branch with the changes.
    pub source_branch: String,
    /// Branch the changes are merged into.
    pub target_branch: String,
    /// Optional description.
    pub description: Option<String>,
}

impl NewMergeRequest {
    /// Creates an input targeting [`DEFAULT_TARGET_BRANCH`] without description.
    #[must_use]
    pub fn new(
        project_path: ProjectPath,
        title: impl Into<String>,
        source_branch: impl Into<String>,
    ) -> Self {
        Self {
            project_path,
            title: title.into(),
            source_branch: source_branch.into(),
            target_branch: DEFAULT_TARGET_BRANCH.to_string(),
            description: None,
        }
    }

    /// Sets the target branch.
    #[must_use]
    pub fn target_branch(mut self, branch: impl Into<String>) -> Self {
        self.target_branch = branch.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn variables(&self) -> Variables {
        Variables::new()
            .with_type("Path", self.project_path.to_string(), "ID!")
            .with_type("Title", self.title.as_str(), "String!")
            .with_type("Source", self.source_branch.as_str(), "String!")
            .with_type("Target", self.target_branch.as_str(), "String!")
            .with("Description", self.description.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectMergeRequests {
    merge_requests: Connection<MergeRequestSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct MergeRequestList {
    project: Option<ProjectMergeRequests>,
}

impl Shape for MergeRequestList {
    const FIELDS: &'static [Field] = &[Field::object(
        "Project",
        &[
            Field::object("MergeRequests", Connection::<MergeRequestSummary>::FIELDS)
                .arguments("(first: $first, after: $after, state: $state)"),
        ],
    )
    .arguments("(fullPath:$path)")];
}

fn merge_request_list_page_info(page: &MergeRequestList) -> &PageInfo {
    page_info_of(page.project.as_ref().map(|project| &project.merge_requests))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectMergeRequest {
    merge_request: Option<MergeRequest>,
}

#[derive(Debug, Default, Deserialize)]
struct MergeRequestQuery {
    project: Option<ProjectMergeRequest>,
}

impl Shape for MergeRequestQuery {
    const FIELDS: &'static [Field] = &[Field::object(
        "Project",
        &[Field::object("MergeRequest", MergeRequest::FIELDS).arguments("(iid:$iid)")],
    )
    .arguments("(fullPath:$path)")];
}

#[derive(Debug, Default, Deserialize)]
struct MergeRequestIid {
    iid: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeRequestPayload {
    merge_request: Option<MergeRequestIid>,
    #[serde(default)]
    errors: Vec<String>,
}

/// Reported when a mutation payload carries neither a merge request nor errors.
const NO_MERGE_REQUEST: &str = "no merge request was returned";

impl MergeRequestPayload {
    const FIELDS: &'static [Field] = &[
        Field::object("MergeRequest", &[Field::scalar("Iid")]),
        Field::scalar_list("Errors"),
    ];

    fn into_iid(self, mutation: &'static str) -> Result<String, ResourceError> {
        match self.merge_request {
            Some(merge_request) if self.errors.is_empty() => Ok(merge_request.iid),
            _ if self.errors.is_empty() => Err(ResourceError::Mutation {
                mutation,
                errors: vec![NO_MERGE_REQUEST.to_string()],
            }),
            _ => Err(ResourceError::Mutation {
                mutation,
                errors: self.errors,
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMergeRequest {
    merge_request_create: Option<MergeRequestPayload>,
}

impl Shape for CreateMergeRequest {
    const FIELDS: &'static [Field] = &[Field::object(
        "MergeRequestCreate",
        MergeRequestPayload::FIELDS,
    )
    .arguments(
        "(input:{title:$title,projectPath:$path,sourceBranch:$source,targetBranch:$target,description:$description})",
    )];
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetAssignees {
    merge_request_set_assignees: Option<MergeRequestPayload>,
}

impl Shape for SetAssignees {
    const FIELDS: &'static [Field] = &[Field::object(
        "MergeRequestSetAssignees",
        MergeRequestPayload::FIELDS,
    )
    .arguments("(input:{projectPath:$path,iid:$iid,assigneeUsernames:$usernames})")];
}

/// Lists the merge requests of a project.
///
/// `state` of `None` lists merge requests in every state. Each item is one
/// page of [`PAGE_SIZE`] merge requests.
pub fn list_merge_requests<'c, T: Transport>(
    client: &'c GraphqlClient<T>,
    path: &ProjectPath,
    state: Option<MergeRequestState>,
) -> impl Iterator<Item = Result<Vec<MergeRequestSummary>, ResourceError>> + 'c {
    let variables = Variables::new()
        .with_type("Path", path.to_string(), "ID!")
        .with("First", PAGE_SIZE)
        .with_type("After", None::<String>, "String")
        .with("State", state);
    let id = path.to_string();

    client
        .pages(variables, "After", merge_request_list_page_info)
        .map(move |page| {
            page.map_err(ResourceError::from).and_then(|page| {
                page.project
                    .map(|project| project.merge_requests.nodes)
                    .ok_or_else(|| ResourceError::NotFound {
                        resource: "Project",
                        id: id.clone(),
                    })
            })
        })
}

/// Fetches one merge request by project path and iid.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the project or the merge request is
/// missing, or [`ResourceError::Graphql`] if the request fails.
pub fn get_merge_request<T: Transport>(
    client: &GraphqlClient<T>,
    path: &ProjectPath,
    iid: &str,
) -> Result<MergeRequest, ResourceError> {
    let variables = Variables::new()
        .with_type("Path", path.to_string(), "ID!")
        .with_type("Iid", iid, "String!");

    let mut query = MergeRequestQuery::default();
    client.query(&mut query, &variables)?;

    query
        .project
        .and_then(|project| project.merge_request)
        .ok_or_else(|| ResourceError::NotFound {
            resource: "Merge request",
            id: format!("{path}!{iid}"),
        })
}

/// Opens a merge request and returns its iid.
///
/// # Errors
///
/// Returns [`ResourceError::Mutation`] with the payload's `errors` if GitLab
/// refused the merge request, or [`ResourceError::Graphql`] if the request
/// fails.
pub fn create_merge_request<T: Transport>(
    client: &GraphqlClient<T>,
    input: &NewMergeRequest,
) -> Result<String, ResourceError> {
    let mut mutation = CreateMergeRequest::default();
    client.mutate(&mut mutation, &input.variables())?;

    let iid = mutation
        .merge_request_create
        .unwrap_or_default()
        .into_iid("mergeRequestCreate")?;
    tracing::debug!("Created merge request !{} in {}", iid, input.project_path);
    Ok(iid)
}

/// Replaces the assignees of a merge request.
///
/// # Errors
///
/// Same as [`create_merge_request`].
pub fn assign_merge_request<T: Transport>(
    client: &GraphqlClient<T>,
    path: &ProjectPath,
    iid: &str,
    usernames: &[&str],
) -> Result<(), ResourceError> {
    let variables = Variables::new()
        .with_type("Path", path.to_string(), "ID!")
        .with_type("Iid", iid, "String!")
        .with_type("Usernames", usernames, "[String!]!");

    let mut mutation = SetAssignees::default();
    client.mutate(&mut mutation, &variables)?;

    mutation
        .merge_request_set_assignees
        .unwrap_or_default()
        .into_iid("mergeRequestSetAssignees")?;
    tracing::debug!("Assigned {} to merge request !{}", usernames.join(", "), iid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::RecordingTransport;

    fn path() -> ProjectPath {
        ProjectPath::new("group/project").unwrap()
    }

    #[test]
    fn test_state_variable_rendering() {
        let variables = Variables::new()
            .with("State", Some(MergeRequestState::Merged))
            .with("Other", None::<MergeRequestState>);

        assert_eq!(
            variables.declarations(),
            "$state:MergeRequestState,$other:MergeRequestState,"
        );
        assert_eq!(variables.values(), r#""state":"merged","other":null"#);
    }

    #[test]
    fn test_merge_request_selection() {
        assert_eq!(
            MergeRequest::selection(),
            "iid,title,state,author{name,username,}description,sourceBranch,targetBranch,assignees{nodes{name,username,}}"
        );
    }

    #[test]
    fn test_create_merge_request_document() {
        let transport = RecordingTransport::new();
        transport.respond_with(
            r#"{"data":{"mergeRequestCreate":{"mergeRequest":{"iid":"12"},"errors":[]}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        let input = NewMergeRequest::new(path(), "Fix login", "fix-login").description("Closes #3");
        let iid = create_merge_request(&client, &input).unwrap();

        assert_eq!(iid, "12");
        assert_eq!(
            transport.bodies()[0],
            r#"{"query":"mutation($path:ID!,$title:String!,$source:String!,$target:String!,$description:String,){mergeRequestCreate(input:{title:$title,projectPath:$path,sourceBranch:$source,targetBranch:$target,description:$description}){mergeRequest{iid,}errors,}}","variables":{"path":"group/project","title":"Fix login","source":"fix-login","target":"master","description":"Closes #3"}}"#
        );
    }

    #[test]
    fn test_create_merge_request_payload_errors() {
        let transport = RecordingTransport::new();
        transport.respond_with(
            r#"{"data":{"mergeRequestCreate":{"mergeRequest":null,"errors":["Source branch does not exist"]}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        let input = NewMergeRequest::new(path(), "t", "missing").target_branch("main");
        let result = create_merge_request(&client, &input);

        assert!(matches!(
            result,
            Err(ResourceError::Mutation { mutation: "mergeRequestCreate", ref errors })
                if errors == &["Source branch does not exist"]
        ));
        assert!(transport.bodies()[0].contains(r#""target":"main","description":null"#));
    }

    #[test]
    fn test_empty_mutation_payload_still_explains_failure() {
        let transport = RecordingTransport::new();
        transport.respond_with(r#"{"data":{"mergeRequestCreate":null}}"#);
        transport.respond_with(
            r#"{"data":{"mergeRequestSetAssignees":{"mergeRequest":null,"errors":[]}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        let created = create_merge_request(&client, &NewMergeRequest::new(path(), "t", "feature"));
        let error = created.unwrap_err();
        assert_eq!(
            error.to_string(),
            "mergeRequestCreate failed: no merge request was returned"
        );

        let assigned = assign_merge_request(&client, &path(), "4", &["ada"]);
        assert!(matches!(
            assigned,
            Err(ResourceError::Mutation { mutation: "mergeRequestSetAssignees", ref errors })
                if errors == &[NO_MERGE_REQUEST]
        ));
    }

    #[test]
    fn test_assign_merge_request_sends_username_list() {
        let transport = RecordingTransport::new();
        transport.respond_with(
            r#"{"data":{"mergeRequestSetAssignees":{"mergeRequest":{"iid":"4"},"errors":[]}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        assign_merge_request(&client, &path(), "4", &["ada", "bob"]).unwrap();

        let body = &transport.bodies()[0];
        assert!(body.contains("mutation($path:ID!,$iid:String!,$usernames:[String!]!,)"));
        assert!(body.contains(r#""usernames":["ada","bob"]"#));
    }

    #[test]
    fn test_get_merge_request_not_found() {
        let transport = RecordingTransport::new();
        transport.respond_with(r#"{"data":{"project":{"mergeRequest":null}}}"#);
        let client = GraphqlClient::with_transport(&transport);

        let result = get_merge_request(&client, &path(), "5");

        assert!(matches!(
            result,
            Err(ResourceError::NotFound { resource: "Merge request", .. })
        ));
    }

    #[test]
    fn test_get_merge_request_binds_fields() {
        let transport = RecordingTransport::new();
        transport.respond_with(
            r#"{"data":{"project":{"mergeRequest":{
                "iid":"5","title":"Add docs","state":"merged",
                "author":{"name":"Ada","username":"ada"},
                "description":"","sourceBranch":"docs","targetBranch":"main",
                "assignees":{"nodes":[]}
            }}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        let merge_request = get_merge_request(&client, &path(), "5").unwrap();

        assert_eq!(merge_request.summary.author.username, "ada");
        assert_eq!(merge_request.source_branch, "docs");
        assert!(merge_request.assignees.nodes.is_empty());
    }

    #[test]
    fn test_list_merge_requests_passes_state() {
        let transport = RecordingTransport::new();
        transport.respond_with(
            r#"{"data":{"project":{"mergeRequests":{
                "pageInfo":{"endCursor":null,"hasNextPage":false},
                "nodes":[{"iid":"1","title":"A","state":"opened","author":{"name":"Ada","username":"ada"}}]
            }}}}"#,
        );
        let client = GraphqlClient::with_transport(&transport);

        let pages: Vec<_> = list_merge_requests(&client, &path(), Some(MergeRequestState::Opened))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(pages[0][0].iid, "1");
        let body = &transport.bodies()[0];
        assert!(body.contains("$state:MergeRequestState,"));
        assert!(body.contains(r#""state":"opened""#));
        assert!(body.contains("mergeRequests(first: $first, after: $after, state: $state)"));
    }
}
