#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use taskhub_api::config::ServerConfig;
use taskhub_api::router::build_app_router;
use taskhub_api::state::AppState;
use taskhub_db::models::organization::{CreateOrganization, Organization};
use taskhub_db::repositories::OrganizationRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same builder as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a GraphQL document (with variables) and return the decoded response.
pub async fn graphql(pool: &PgPool, query: &str, variables: Value) -> Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/graphql",
        json!({ "query": query, "variables": variables }),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await
}

/// Assert the response has no `errors` entry and return its `data`.
pub fn data(response: &Value) -> &Value {
    assert!(
        response.get("errors").is_none(),
        "unexpected GraphQL errors: {}",
        response["errors"]
    );
    &response["data"]
}

/// The `extensions.code` of the first GraphQL error.
pub fn first_error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_else(|| panic!("no error code in {response}"))
}

pub async fn create_org(pool: &PgPool, slug: &str) -> Organization {
    OrganizationRepo::create(
        pool,
        &CreateOrganization {
            name: format!("Org {slug}"),
            slug: slug.to_string(),
            contact_email: format!("contact@{slug}.example"),
        },
    )
    .await
    .unwrap()
}

pub const CREATE_PROJECT: &str = r#"
    mutation CreateProject(
        $organizationSlug: String!, $name: String!, $description: String,
        $status: ProjectStatus, $dueDate: NaiveDate
    ) {
        createProject(
            organizationSlug: $organizationSlug, name: $name, description: $description,
            status: $status, dueDate: $dueDate
        ) {
            project { id name description status dueDate taskCount completedTasks }
        }
    }
"#;

pub const CREATE_TASK: &str = r#"
    mutation CreateTask(
        $projectId: ID!, $title: String!, $description: String,
        $status: TaskStatus, $assigneeEmail: String, $dueDate: DateTime
    ) {
        createTask(
            projectId: $projectId, title: $title, description: $description,
            status: $status, assigneeEmail: $assigneeEmail, dueDate: $dueDate
        ) {
            task { id title description status assigneeEmail dueDate }
        }
    }
"#;

pub const CREATE_COMMENT: &str = r#"
    mutation CreateComment($taskId: ID!, $content: String!, $authorEmail: String!) {
        createComment(taskId: $taskId, content: $content, authorEmail: $authorEmail) {
            comment { id content authorEmail createdAt }
        }
    }
"#;

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, org_slug: &str, name: &str, status: &str) -> String {
    let response = graphql(
        pool,
        CREATE_PROJECT,
        json!({ "organizationSlug": org_slug, "name": name, "status": status }),
    )
    .await;
    data(&response)["createProject"]["project"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a task through the API and return its id.
pub async fn create_task(pool: &PgPool, project_id: &str, title: &str, status: &str) -> String {
    let response = graphql(
        pool,
        CREATE_TASK,
        json!({ "projectId": project_id, "title": title, "status": status }),
    )
    .await;
    data(&response)["createTask"]["task"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a comment through the API and return its id.
pub async fn create_comment(pool: &PgPool, task_id: &str, content: &str) -> String {
    let response = graphql(
        pool,
        CREATE_COMMENT,
        json!({ "taskId": task_id, "content": content, "authorEmail": "author@example.com" }),
    )
    .await;
    data(&response)["createComment"]["comment"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}
