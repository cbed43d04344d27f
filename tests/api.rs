mod helpers;

use helpers::setup::spawn_app;
use reqwest::StatusCode;
use study_api_sdk::{CreateUserInput, DeletedUser, UpdateUserInput, User, ID};

fn create_input(name: &str, email: &str) -> CreateUserInput {
    CreateUserInput {
        name: Some(name.into()),
        email: Some(email.into()),
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected health check");
    assert_eq!(res.message, "Node.js Study Server is running!");
}

#[actix_web::test]
async fn test_lists_seeded_users() {
    let (_, sdk) = spawn_app().await;
    let users = sdk.user.get_all().await.expect("Expected to list users");
    let users = users
        .into_iter()
        .map(|u| (u.id, u.name, u.email))
        .collect::<Vec<_>>();
    assert_eq!(
        users,
        vec![
            (ID::from(1), "John Doe".to_string(), "john@example.com".to_string()),
            (ID::from(2), "Jane Smith".to_string(), "jane@example.com".to_string()),
        ]
    );
}

#[actix_web::test]
async fn test_create_then_get_user() {
    let (_, sdk) = spawn_app().await;
    let created: User = sdk
        .user
        .create(create_input("X", "x@x.com"))
        .await
        .expect("Expected to create user");
    assert_eq!(created.name, "X");
    assert_eq!(created.email, "x@x.com");
    assert!(created.created_at.is_none());

    let user = sdk
        .user
        .get(created.id)
        .await
        .expect("Expected to get user");
    assert_eq!(user, created);
}

#[actix_web::test]
async fn test_created_ids_are_distinct() {
    let (_, sdk) = spawn_app().await;
    let mut ids = Vec::new();
    for i in 0..5 {
        let user = sdk
            .user
            .create(create_input(&format!("user{}", i), "u@example.com"))
            .await
            .expect("Expected to create user");
        ids.push(user.id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[actix_web::test]
async fn test_create_user_requires_name_and_email() {
    let (_, sdk) = spawn_app().await;
    let res = sdk
        .user
        .create(CreateUserInput {
            name: Some("".into()),
            email: None,
        })
        .await;
    let err = res.expect_err("Expected create to fail");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.message(), Some("Name and email are required"));

    let users = sdk.user.get_all().await.expect("Expected to list users");
    assert_eq!(users.len(), 2);
}

#[actix_web::test]
async fn test_update_keeps_omitted_fields() {
    let (_, sdk) = spawn_app().await;
    let user: User = sdk
        .user
        .update(UpdateUserInput {
            user_id: ID::from(1),
            name: Some("Updated".into()),
            email: None,
        })
        .await
        .expect("Expected to update user");
    assert_eq!(user.id, ID::from(1));
    assert_eq!(user.name, "Updated");
    assert_eq!(user.email, "john@example.com");

    let user = sdk.user.get(ID::from(1)).await.expect("Expected to get user");
    assert_eq!(user.name, "Updated");
}

#[actix_web::test]
async fn test_update_unknown_user() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .user
        .update(UpdateUserInput {
            user_id: ID::from(99),
            name: Some("Updated".into()),
            email: None,
        })
        .await
        .expect_err("Expected update to fail");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message(), Some("User not found"));
}

#[actix_web::test]
async fn test_delete_unknown_user() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .user
        .delete(ID::from(99))
        .await
        .expect_err("Expected delete to fail");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message(), Some("User not found"));
}

#[actix_web::test]
async fn test_crud_user() {
    let (_, sdk) = spawn_app().await;
    let deleted: DeletedUser = sdk
        .user
        .delete(ID::from(1))
        .await
        .expect("Expected to delete user");
    assert_eq!(deleted.message, "User deleted successfully");
    assert_eq!(deleted.user.id, ID::from(1));
    assert_eq!(deleted.user.name, "John Doe");

    // Get after deleted should be error
    let err = sdk.user.get(ID::from(1)).await.expect_err("Expected 404");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    // Deleting twice is not found
    let err = sdk.user.delete(ID::from(1)).await.expect_err("Expected 404");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    // A freed id is not handed out again
    let created = sdk
        .user
        .create(create_input("X", "x@x.com"))
        .await
        .expect("Expected to create user");
    assert_eq!(created.id, ID::from(3));
}

#[actix_web::test]
async fn test_docs_are_served() {
    let (app, _) = spawn_app().await;
    let res = reqwest::get(format!("{}/docs", app.address))
        .await
        .expect("Expected docs response");
    assert_eq!(res.status(), StatusCode::OK);
    let doc: serde_json::Value = res.json().await.expect("Expected json docs");
    assert_eq!(doc["info"]["title"], "Node.js Study API");
    assert!(doc["paths"]["/users/{id}"]["delete"].is_object());
}
