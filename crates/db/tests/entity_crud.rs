//! Integration tests for entity CRUD operations.
//!
//! Exercises the full repository layer against a real database:
//! - Create full hierarchy (organization -> project -> task -> comment)
//! - Cascade delete behaviour
//! - Unique constraint and foreign key violations
//! - Partial updates and scoped listing

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use taskhub_db::models::organization::CreateOrganization;
use taskhub_db::models::project::{CreateProject, UpdateProject};
use taskhub_db::models::status::{ProjectStatus, TaskStatus};
use taskhub_db::models::task::{CreateTask, UpdateTask};
use taskhub_db::models::task_comment::CreateTaskComment;
use taskhub_db::repositories::{OrganizationRepo, ProjectRepo, TaskCommentRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_org(slug: &str) -> CreateOrganization {
    CreateOrganization {
        name: format!("Org {slug}"),
        slug: slug.to_string(),
        contact_email: format!("contact@{slug}.example"),
    }
}

fn new_project(organization_id: i64, name: &str) -> CreateProject {
    CreateProject {
        organization_id,
        name: name.to_string(),
        description: None,
        status: None,
        due_date: None,
    }
}

fn new_task(project_id: i64, title: &str, status: Option<TaskStatus>) -> CreateTask {
    CreateTask {
        project_id,
        title: title.to_string(),
        description: None,
        status,
        assignee_email: None,
        due_date: None,
    }
}

fn new_comment(task_id: i64, content: &str) -> CreateTaskComment {
    CreateTaskComment {
        task_id,
        content: content.to_string(),
        author_email: "author@example.com".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation with defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("acme")).await.unwrap();
    assert_eq!(org.slug, "acme");

    let project = ProjectRepo::create(&pool, &new_project(org.id, "P1"))
        .await
        .unwrap();
    assert_eq!(project.organization_id, org.id);
    assert_eq!(project.status, ProjectStatus::Active); // default
    assert_eq!(project.description, ""); // default
    assert!(project.due_date.is_none());

    let task = TaskRepo::create(&pool, &new_task(project.id, "T1", None))
        .await
        .unwrap();
    assert_eq!(task.project_id, project.id);
    assert_eq!(task.status, TaskStatus::Todo); // default
    assert!(task.assignee_email.is_none());

    let comment = TaskCommentRepo::create(&pool, &new_comment(task.id, "First"))
        .await
        .unwrap();
    assert_eq!(comment.task_id, task.id);
    assert_eq!(comment.content, "First");
    assert_eq!(comment.created_at, comment.updated_at);
}

// ---------------------------------------------------------------------------
// Test: Cascade delete organization removes all descendants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_organization(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("cascade")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "Doomed"))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Doomed task", None))
        .await
        .unwrap();
    let comment = TaskCommentRepo::create(&pool, &new_comment(task.id, "Doomed comment"))
        .await
        .unwrap();

    let deleted = OrganizationRepo::hard_delete(&pool, org.id).await.unwrap();
    assert!(deleted);

    assert!(OrganizationRepo::find_by_id(&pool, org.id)
        .await
        .unwrap()
        .is_none());
    assert!(ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .is_none());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
    assert!(TaskCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_leaves_other_tenants_alone(pool: PgPool) {
    let doomed = OrganizationRepo::create(&pool, &new_org("doomed")).await.unwrap();
    let survivor = OrganizationRepo::create(&pool, &new_org("survivor")).await.unwrap();
    ProjectRepo::create(&pool, &new_project(doomed.id, "Gone"))
        .await
        .unwrap();
    let kept = ProjectRepo::create(&pool, &new_project(survivor.id, "Kept"))
        .await
        .unwrap();

    OrganizationRepo::hard_delete(&pool, doomed.id).await.unwrap();

    assert!(ProjectRepo::find_by_id(&pool, kept.id).await.unwrap().is_some());
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    let result = OrganizationRepo::hard_delete(&pool, 999_999).await.unwrap();
    assert!(!result, "Hard-deleting non-existent ID should return false");
}

// ---------------------------------------------------------------------------
// Test: Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_rejected(pool: PgPool) {
    OrganizationRepo::create(&pool, &new_org("unique")).await.unwrap();
    let err = OrganizationRepo::create(&pool, &new_org("unique"))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23505"));
        assert_eq!(db_err.constraint(), Some("uq_organizations_slug"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_project_bad_organization(pool: PgPool) {
    let result = ProjectRepo::create(&pool, &new_project(999_999, "Ghost")).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent organization_id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_constraint_rejects_unknown_status(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("check")).await.unwrap();
    let result = sqlx::query(
        "INSERT INTO projects (organization_id, name, status) VALUES ($1, 'Bad', 'ARCHIVED')",
    )
    .bind(org.id)
    .execute(&pool)
    .await;
    assert!(result.is_err(), "CHECK constraint should reject ARCHIVED");
}

// ---------------------------------------------------------------------------
// Test: Lookups and scoped listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_slug(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("findme")).await.unwrap();

    let found = OrganizationRepo::find_by_slug(&pool, "findme")
        .await
        .unwrap()
        .expect("org should exist");
    assert_eq!(found.id, org.id);

    assert!(OrganizationRepo::find_by_slug(&pool, "missing")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_organizations_newest_first(pool: PgPool) {
    let first = OrganizationRepo::create(&pool, &new_org("first")).await.unwrap();
    let second = OrganizationRepo::create(&pool, &new_org("second")).await.unwrap();

    let orgs = OrganizationRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = orgs.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_scoped_to_organization_slug(pool: PgPool) {
    let o1 = OrganizationRepo::create(&pool, &new_org("org-1")).await.unwrap();
    let o2 = OrganizationRepo::create(&pool, &new_org("org-2")).await.unwrap();

    ProjectRepo::create(&pool, &new_project(o1.id, "A")).await.unwrap();
    ProjectRepo::create(&pool, &new_project(o1.id, "B")).await.unwrap();
    ProjectRepo::create(&pool, &new_project(o2.id, "C")).await.unwrap();

    let o1_projects = ProjectRepo::list_by_organization_slug(&pool, "org-1")
        .await
        .unwrap();
    assert_eq!(o1_projects.len(), 2);
    assert!(o1_projects.iter().all(|p| p.organization_id == o1.id));

    let o2_projects = ProjectRepo::list_by_organization(&pool, o2.id).await.unwrap();
    assert_eq!(o2_projects.len(), 1);
    assert_eq!(o2_projects[0].name, "C");

    let none = ProjectRepo::list_by_organization_slug(&pool, "nope")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tasks_scoped_to_project(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("tasks")).await.unwrap();
    let p1 = ProjectRepo::create(&pool, &new_project(org.id, "P1")).await.unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project(org.id, "P2")).await.unwrap();

    TaskRepo::create(&pool, &new_task(p1.id, "Task for P1", None))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(p2.id, "Task for P2", None))
        .await
        .unwrap();

    let p1_tasks = TaskRepo::list_by_project(&pool, p1.id).await.unwrap();
    assert_eq!(p1_tasks.len(), 1);
    assert_eq!(p1_tasks[0].title, "Task for P1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_ordered_oldest_first(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("comments")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "T", None))
        .await
        .unwrap();

    for content in ["one", "two", "three"] {
        TaskCommentRepo::create(&pool, &new_comment(task.id, content))
            .await
            .unwrap();
    }

    let comments = TaskCommentRepo::list_by_task(&pool, task.id).await.unwrap();
    let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
    assert!(comments
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_comment_by_id(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("lookup")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "T", None))
        .await
        .unwrap();
    let comment = TaskCommentRepo::create(&pool, &new_comment(task.id, "hello"))
        .await
        .unwrap();

    let found = TaskCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .expect("Comment should exist");
    assert_eq!(found.task_id, task.id);
    assert_eq!(found.content, "hello");
    assert_eq!(found.created_at, comment.created_at);

    let missing = TaskCommentRepo::find_by_id(&pool, comment.id + 1000)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_counts(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("counts")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "P")).await.unwrap();

    TaskRepo::create(&pool, &new_task(project.id, "Task 1", Some(TaskStatus::Todo)))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "Task 2", Some(TaskStatus::Done)))
        .await
        .unwrap();
    let third = TaskRepo::create(&pool, &new_task(project.id, "Task 3", Some(TaskStatus::Done)))
        .await
        .unwrap();

    assert_eq!(TaskRepo::count_by_project(&pool, project.id).await.unwrap(), 3);
    assert_eq!(
        TaskRepo::count_by_project_and_status(&pool, project.id, TaskStatus::Done)
            .await
            .unwrap(),
        2
    );

    TaskRepo::update(
        &pool,
        third.id,
        &UpdateTask {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(
        TaskRepo::count_by_project_and_status(&pool, project.id, TaskStatus::Done)
            .await
            .unwrap(),
        1
    );
}

// ---------------------------------------------------------------------------
// Test: Partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project_only_touches_given_fields(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("upd")).await.unwrap();
    let due = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            organization_id: org.id,
            name: "Before Update".to_string(),
            description: Some("Keep me".to_string()),
            status: Some(ProjectStatus::OnHold),
            due_date: Some(due),
        },
    )
    .await
    .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            name: Some("After Update".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "After Update");
    assert_eq!(updated.description, "Keep me");
    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.due_date, Some(due));
    assert!(updated.updated_at > project.updated_at);
    assert_eq!(updated.created_at, project.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_is_noop(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("noop")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "Same"))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Same", None))
        .await
        .unwrap();

    let project_after = ProjectRepo::update(&pool, project.id, &UpdateProject::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project_after.name, project.name);
    assert_eq!(project_after.updated_at, project.updated_at);

    let task_after = TaskRepo::update(&pool, task.id, &UpdateTask::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(task_after.title, task.title);
    assert_eq!(task_after.updated_at, task.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_keeps_assignee_when_omitted(pool: PgPool) {
    let org = OrganizationRepo::create(&pool, &new_org("assignee")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project(org.id, "P")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        &CreateTask {
            assignee_email: Some("user@example.com".to_string()),
            ..new_task(project.id, "T", None)
        },
    )
    .await
    .unwrap();

    let updated = TaskRepo::update(
        &pool,
        task.id,
        &UpdateTask {
            status: Some(TaskStatus::Done),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.assignee_email.as_deref(), Some("user@example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(
        &pool,
        999_999,
        &UpdateProject {
            name: Some("Ghost".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none(), "Updating non-existent ID should return None");

    let result = TaskRepo::update(&pool, 999_999, &UpdateTask::default())
        .await
        .unwrap();
    assert!(result.is_none(), "Empty update on missing ID should return None");
}
