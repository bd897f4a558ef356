//! Add and edit forms driven through the page.

mod common;

use std::time::Duration;

use common::{TestCtx, user_json};
use portal_business::{Role, UserDraft, UserListState, UserModal};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn edit_draft(ctx: &mut TestCtx<'_>, edit: impl FnOnce(&mut UserDraft)) {
    let draft = ctx
        .harness
        .state_mut()
        .ctx
        .state_mut::<UserListState>()
        .draft_mut()
        .expect("a form should be open");
    edit(draft);
    ctx.harness.step();
}

fn fill_jane(draft: &mut UserDraft) {
    draft.set_name("Jane");
    draft.set_email("jane@x.com");
    draft.set_employee_code("E1");
    draft.set_medical_card_number("M1");
    draft.set_address("A");
    draft.set_balance_input("0");
    draft.set_role(Role::User);
}

fn modal(ctx: &TestCtx<'_>) -> UserModal {
    ctx.harness
        .state()
        .ctx
        .state::<UserListState>()
        .modal()
        .clone()
}

#[tokio::test]
async fn test_add_form_has_password_and_edit_form_does_not() {
    let mut ctx = TestCtx::new(json!([user_json("1", "Alice", "user", 0.0)])).await;

    ctx.click("Add User");
    assert!(ctx.has_label("Add New User"));
    assert!(ctx.has_label("Password"));
    assert!(ctx.has_label("Show"));
    assert!(ctx.has_label("Create User"));

    ctx.click("Cancel");
    assert_eq!(modal(&ctx), UserModal::Closed);

    ctx.click("Edit");
    assert!(ctx.has_label("Edit User"));
    assert!(ctx.has_label("Save Changes"));
    assert!(!ctx.has_label("Password"));
}

#[tokio::test]
async fn test_create_jane_shows_row_and_toast() {
    let mut ctx = TestCtx::new(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/user"))
        .and(body_partial_json(json!({ "name": "Jane", "password": "secret1" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "data": user_json("j1", "Jane", "user", 0.0) })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Add User");
    edit_draft(&mut ctx, |draft| {
        fill_jane(draft);
        draft.set_password("secret1");
    });
    ctx.click("Create User");
    ctx.settle().await;

    assert_eq!(modal(&ctx), UserModal::Closed);
    assert!(ctx.has_label("Jane"));
    assert!(ctx.has_label("Showing 1 of 1 users"));
    assert!(ctx.has_label("User added successfully"));
}

#[tokio::test]
async fn test_short_password_shows_error_and_blocks_submit() {
    let mut ctx = TestCtx::new(json!([])).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Add User");
    edit_draft(&mut ctx, |draft| {
        fill_jane(draft);
        draft.set_password("abc");
    });

    assert!(ctx.has_label("Password must be at least 6 characters"));

    ctx.click("Create User");
    ctx.settle().await;

    assert!(matches!(modal(&ctx), UserModal::Add(_)));
    assert!(!ctx.harness.state().ctx.state::<UserListState>().is_adding());
}

#[tokio::test]
async fn test_empty_password_is_rejected_on_submit() {
    let mut ctx = TestCtx::new(json!([])).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Add User");
    edit_draft(&mut ctx, fill_jane);
    assert!(!ctx.has_label("Password must be at least 6 characters"));

    ctx.click("Create User");
    ctx.settle().await;

    assert!(ctx.has_label("Password must be at least 6 characters"));
    assert!(matches!(modal(&ctx), UserModal::Add(_)));
}

#[tokio::test]
async fn test_password_visibility_toggle() {
    let mut ctx = TestCtx::new(json!([])).await;

    ctx.click("Add User");
    ctx.click("Show");
    assert!(ctx.has_label("Hide"));
    let visible = modal(&ctx).draft().map(UserDraft::password_visible);
    assert_eq!(visible, Some(true));

    ctx.click("Hide");
    assert!(ctx.has_label("Show"));
}

#[tokio::test]
async fn test_create_failure_keeps_form_open() {
    let mut ctx = TestCtx::new(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Add User");
    edit_draft(&mut ctx, |draft| {
        fill_jane(draft);
        draft.set_password("secret1");
    });
    ctx.click("Create User");
    ctx.settle().await;

    assert!(ctx.has_label("Failed to add user"));
    assert!(ctx.has_label("Add New User"));
    assert!(ctx.has_label("Showing 0 of 0 users"));
}

#[tokio::test]
async fn test_update_success_replaces_row() {
    let mut ctx = TestCtx::new(json!([user_json("1", "Alice", "user", 10.0)])).await;
    Mock::given(method("PUT"))
        .and(path("/api/user/1"))
        .and(body_partial_json(json!({ "_id": "1", "name": "Alicia", "role": "admin" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Edit");
    edit_draft(&mut ctx, |draft| {
        draft.set_name("Alicia");
        draft.set_role(Role::Admin);
    });
    ctx.click("Save Changes");
    ctx.settle().await;

    assert_eq!(modal(&ctx), UserModal::Closed);
    assert!(ctx.has_label("Alicia"));
    assert!(!ctx.has_label("Alice"));
    assert!(ctx.has_label("Admin"));
    assert!(ctx.has_label("User updated successfully"));
}

#[tokio::test]
async fn test_update_failure_keeps_edits_and_list() {
    let mut ctx = TestCtx::new(json!([user_json("1", "Alice", "user", 10.0)])).await;
    Mock::given(method("PUT"))
        .and(path("/api/user/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Edit");
    edit_draft(&mut ctx, |draft| draft.set_name("Alicia"));
    ctx.click("Save Changes");
    ctx.settle().await;

    assert!(ctx.has_label("Failed to update user"));
    assert!(ctx.has_label("Edit User"));
    assert!(ctx.has_label("Alice"));
    match modal(&ctx) {
        UserModal::Edit(draft) => assert_eq!(draft.name(), "Alicia"),
        other => panic!("edit form should stay open, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_edit_sends_nothing() {
    let mut ctx = TestCtx::new(json!([user_json("1", "Alice", "user", 10.0)])).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Edit");
    edit_draft(&mut ctx, |draft| draft.set_name("Changed"));
    ctx.click("Cancel");
    ctx.settle().await;

    assert_eq!(modal(&ctx), UserModal::Closed);
    assert!(ctx.has_label("Alice"));
    assert!(!ctx.has_label("Changed"));
}

#[tokio::test]
async fn test_create_in_flight_shows_creating_and_locks_form() {
    let mut ctx = TestCtx::new(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/user"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "data": user_json("j1", "Jane", "user", 0.0) }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Add User");
    edit_draft(&mut ctx, |draft| {
        fill_jane(draft);
        draft.set_password("secret1");
    });
    ctx.click("Create User");

    assert!(ctx.harness.state().ctx.state::<UserListState>().is_adding());
    assert!(ctx.has_label("Creating..."));
    assert!(!ctx.has_label("Create User"));

    ctx.click("Cancel");
    assert!(matches!(modal(&ctx), UserModal::Add(_)));

    ctx.settle().await;

    assert_eq!(modal(&ctx), UserModal::Closed);
    assert!(ctx.has_label("Jane"));
}

#[tokio::test]
async fn test_update_in_flight_shows_saving() {
    let mut ctx = TestCtx::new(json!([user_json("1", "Alice", "user", 10.0)])).await;
    Mock::given(method("PUT"))
        .and(path("/api/user/1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.click("Edit");
    ctx.click("Save Changes");

    assert!(ctx.harness.state().ctx.state::<UserListState>().is_updating());
    assert!(ctx.has_label("Saving..."));
    assert!(!ctx.has_label("Save Changes"));

    ctx.click("Cancel");
    assert!(matches!(modal(&ctx), UserModal::Edit(_)));

    ctx.settle().await;

    assert_eq!(modal(&ctx), UserModal::Closed);
    assert!(ctx.has_label("User updated successfully"));
}
