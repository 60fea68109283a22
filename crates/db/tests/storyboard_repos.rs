//! Repository tests against a real PostgreSQL database.
//!
//! Each test gets a fresh database with the migrations applied. They need
//! `DATABASE_URL` pointing at a server the test user can create databases on:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -p inkpanel-db -- --ignored
//! ```

use inkpanel_db::models::page::{CreatePage, UpdatePage};
use inkpanel_db::models::panel::{CreatePanel, UpdatePanel};
use inkpanel_db::models::project::{CreateProject, UpdateProject};
use inkpanel_db::repositories::{PageRepo, PanelRepo, ProjectRepo};
use inkpanel_db::error::FOREIGN_KEY_VIOLATION;
use inkpanel_db::{PgStore, StoreError, StoryboardStore};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(owner: &str, title: &str) -> CreateProject {
    CreateProject {
        owner_user_id: owner.to_string(),
        title: title.to_string(),
        description: None,
        genre: None,
        format: None,
        target_audience: None,
    }
}

fn new_page(project_id: Uuid, page_number: i32) -> CreatePage {
    CreatePage {
        project_id,
        page_number,
        title: None,
        thumbnail_url: None,
        notes: None,
    }
}

fn new_panel(page_id: Uuid, panel_index: i32) -> CreatePanel {
    CreatePanel {
        page_id,
        panel_index,
        layout_json: None,
        description: None,
        dialogue: None,
        caption: None,
        sound_effects: None,
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn project_create_sets_matching_timestamps(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "Issue 1"))
        .await
        .unwrap();

    assert_eq!(project.owner_user_id, "alice");
    assert_eq!(project.created_at, project.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn project_lookup_is_owner_scoped(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "Mine"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("bob", "Theirs"))
        .await
        .unwrap();

    assert!(ProjectRepo::find_for_owner(&pool, project.id, "alice")
        .await
        .unwrap()
        .is_some());
    assert!(ProjectRepo::find_for_owner(&pool, project.id, "bob")
        .await
        .unwrap()
        .is_none());

    let listed = ProjectRepo::list_for_owner(&pool, "alice").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, project.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn project_update_keeps_unset_fields(pool: PgPool) {
    let mut input = new_project("alice", "Draft");
    input.genre = Some("noir".to_string());
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    let update = UpdateProject {
        title: Some("Final".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.genre.as_deref(), Some("noir"));
    assert_eq!(updated.created_at, project.created_at);
    assert!(updated.updated_at >= project.updated_at);

    assert!(ProjectRepo::update(&pool, Uuid::new_v4(), &update)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn empty_title_violates_check_constraint(pool: PgPool) {
    let result = ProjectRepo::create(&pool, &new_project("alice", "")).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn project_delete_cascades(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "Doomed"))
        .await
        .unwrap();
    let page = PageRepo::create(&pool, &new_page(project.id, 1)).await.unwrap();
    PanelRepo::create(&pool, &new_panel(page.id, 0)).await.unwrap();
    PanelRepo::create(&pool, &new_panel(page.id, 1)).await.unwrap();

    assert!(ProjectRepo::delete_cascade(&pool, project.id).await.unwrap());
    assert!(!ProjectRepo::delete_cascade(&pool, project.id).await.unwrap());

    assert_eq!(count(&pool, "projects").await, 0);
    assert_eq!(count(&pool, "pages").await, 0);
    assert_eq!(count(&pool, "panels").await, 0);
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pages_list_by_page_number_and_allow_duplicates(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "A"))
        .await
        .unwrap();
    for n in [2, 1, 2] {
        PageRepo::create(&pool, &new_page(project.id, n)).await.unwrap();
    }

    let pages = PageRepo::list_for_project(&pool, project.id).await.unwrap();
    let numbers: Vec<i32> = pages.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![1, 2, 2]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn page_number_below_one_violates_check_constraint(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "A"))
        .await
        .unwrap();
    assert!(PageRepo::create(&pool, &new_page(project.id, 0)).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn page_update_is_scoped_to_project(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("alice", "A"))
        .await
        .unwrap();
    let b = ProjectRepo::create(&pool, &new_project("alice", "B"))
        .await
        .unwrap();
    let page = PageRepo::create(&pool, &new_page(a.id, 1)).await.unwrap();

    let update = UpdatePage {
        notes: Some("rain".to_string()),
        ..Default::default()
    };
    assert!(PageRepo::update(&pool, page.id, b.id, &update)
        .await
        .unwrap()
        .is_none());

    let updated = PageRepo::update(&pool, page.id, a.id, &update)
        .await
        .unwrap()
        .expect("page should exist under its project");
    assert_eq!(updated.notes.as_deref(), Some("rain"));
    assert_eq!(updated.page_number, 1);

    assert!(PageRepo::find_in_project(&pool, page.id, b.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn page_delete_removes_only_its_panels(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "A"))
        .await
        .unwrap();
    let doomed = PageRepo::create(&pool, &new_page(project.id, 1)).await.unwrap();
    let kept = PageRepo::create(&pool, &new_page(project.id, 2)).await.unwrap();
    for i in 0..3 {
        PanelRepo::create(&pool, &new_panel(doomed.id, i)).await.unwrap();
    }
    PanelRepo::create(&pool, &new_panel(kept.id, 0)).await.unwrap();

    let removed = PageRepo::delete_with_panels(&pool, doomed.id).await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(count(&pool, "pages").await, 1);
    assert_eq!(count(&pool, "panels").await, 1);
    assert!(PanelRepo::list_for_page(&pool, doomed.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn panel_update_and_delete_are_scoped_to_page(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("alice", "A"))
        .await
        .unwrap();
    let page_a = PageRepo::create(&pool, &new_page(project.id, 1)).await.unwrap();
    let page_b = PageRepo::create(&pool, &new_page(project.id, 2)).await.unwrap();
    let mut input = new_panel(page_a.id, -1);
    input.caption = Some("Dawn".to_string());
    let panel = PanelRepo::create(&pool, &input).await.unwrap();
    assert_eq!(panel.panel_index, -1);

    let update = UpdatePanel {
        dialogue: Some("Hello".to_string()),
        ..Default::default()
    };
    assert!(PanelRepo::update(&pool, panel.id, page_b.id, &update)
        .await
        .unwrap()
        .is_none());
    assert!(!PanelRepo::delete(&pool, panel.id, page_b.id).await.unwrap());

    let updated = PanelRepo::update(&pool, panel.id, page_a.id, &update)
        .await
        .unwrap()
        .expect("panel should exist on its page");
    assert_eq!(updated.dialogue.as_deref(), Some("Hello"));
    assert_eq!(updated.caption.as_deref(), Some("Dawn"));

    assert!(PanelRepo::delete(&pool, panel.id, page_a.id).await.unwrap());
    assert!(PanelRepo::find_in_page(&pool, panel.id, page_a.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Store adapter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_delegates_to_repositories(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    store.ping().await.unwrap();

    let project = store
        .create_project(&new_project("alice", "Via store"))
        .await
        .unwrap();
    let page = store.create_page(&new_page(project.id, 1)).await.unwrap();
    store.create_panel(&new_panel(page.id, 0)).await.unwrap();

    assert_eq!(store.list_panels(page.id).await.unwrap().len(), 1);
    assert_eq!(store.delete_page(page.id).await.unwrap(), 1);
    assert!(store.delete_project(project.id).await.unwrap());
    assert_eq!(count(&pool, "projects").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_under_missing_parent_violates_foreign_key(pool: PgPool) {
    let err = PageRepo::create(&pool, &new_page(Uuid::new_v4(), 1))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some(FOREIGN_KEY_VIOLATION));
    assert_eq!(db_err.constraint(), Some("pages_project_id_fkey"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_reports_missing_parent(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let ghost_project = Uuid::new_v4();
    let ghost_page = Uuid::new_v4();

    let err = store
        .create_page(&new_page(ghost_project, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingParent { entity: "Project", id } if id == ghost_project
    ));

    let err = store
        .create_panel(&new_panel(ghost_page, 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingParent { entity: "Page", id } if id == ghost_page
    ));

    assert_eq!(count(&pool, "pages").await, 0);
    assert_eq!(count(&pool, "panels").await, 0);
}
