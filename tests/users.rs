mod common;

use axum::http::{Method, StatusCode};
use common::{MemoryDatabase, send, test_app};
use serde_json::json;

#[tokio::test]
async fn users_are_listed_in_id_order_with_boolean_admin_flag() {
    let db = MemoryDatabase::new();
    db.seed_user("admin", "admin1", 1);
    db.seed_user("jan", "secret", 0);
    let app = test_app(db);

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "login": "admin", "admin": true },
            { "id": 2, "login": "jan", "admin": false },
        ])
    );
}

#[tokio::test]
async fn creating_a_user() {
    let db = MemoryDatabase::new();
    let app = test_app(db.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "login": "ola", "password": "zielono", "admin": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "success": true, "message": "User created successfully", "id": 1 })
    );

    let stored = db.stored_password("ola").unwrap();
    assert_ne!(stored, "zielono");
    assert!(stored.starts_with("$2"));

    let (_, users) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(users, json!([{ "id": 1, "login": "ola", "admin": true }]));
}

#[tokio::test]
async fn duplicate_login_conflicts_without_inserting() {
    let db = MemoryDatabase::new();
    db.seed_user("jan", "secret", 0);
    let app = test_app(db.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "login": "jan", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "User already exists" }));
    assert_eq!(db.user_count(), 1);
}

#[tokio::test]
async fn login_and_password_are_required() {
    let db = MemoryDatabase::new();
    let app = test_app(db.clone());

    for body in [
        json!({ "login": "jan" }),
        json!({ "password": "secret" }),
        json!({ "login": "", "password": "secret" }),
    ] {
        let (status, reply) = send(&app, Method::POST, "/api/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, json!({ "error": "Login and password are required" }));
    }
    assert_eq!(db.user_count(), 0);
}

#[tokio::test]
async fn login_reports_admin_flag() {
    let app = test_app(MemoryDatabase::new());
    for (login, admin) in [("boss", true), ("citizen", false)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({ "login": login, "password": "pa55", "admin": admin })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    for (login, admin) in [("boss", true), ("citizen", false)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({ "login": login, "password": "pa55" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "message": "Login successful", "isAdmin": admin })
        );
    }
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let db = MemoryDatabase::new();
    db.seed_user("jan", "secret", 0);
    let app = test_app(db);

    for body in [
        json!({ "login": "jan", "password": "wrong" }),
        json!({ "login": "nobody", "password": "secret" }),
        json!({ "login": "jan" }),
    ] {
        let (status, reply) = send(&app, Method::POST, "/api/login", Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            reply,
            json!({ "success": false, "message": "Invalid credentials" })
        );
    }
}

#[tokio::test]
async fn legacy_plain_text_accounts_can_log_in() {
    let db = MemoryDatabase::new();
    db.seed_user("admin", "admin1", 1);
    let app = test_app(db);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "login": "admin", "password": "admin1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAdmin"], true);
}

#[tokio::test]
async fn plain_text_password_with_hash_like_prefix_is_not_a_hash() {
    let db = MemoryDatabase::new();
    db.seed_user("jan", "$2cool", 0);
    let app = test_app(db);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "login": "jan", "password": "$2cool" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Login successful", "isAdmin": false })
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "login": "jan", "password": "$2warm" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Invalid credentials" })
    );
}

#[tokio::test]
async fn overlong_passwords_are_rejected_instead_of_truncated() {
    let db = MemoryDatabase::new();
    let app = test_app(db.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "login": "ola", "password": "x".repeat(73) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Password must be at most 72 bytes" }));
    assert_eq!(db.user_count(), 0);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "login": "ola", "password": "x".repeat(72) })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(db.user_count(), 1);
}

#[tokio::test]
async fn deleting_users() {
    let db = MemoryDatabase::new();
    let id = db.seed_user("jan", "secret", 0);
    db.seed_user("ola", "secret", 0);
    let app = test_app(db.clone());

    let (status, body) = send(&app, Method::DELETE, "/api/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
    assert_eq!(db.user_count(), 2);

    for uri in ["/api/users/abc", "/api/users/0"] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid user ID" }));
    }

    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "User deleted successfully" })
    );
    assert_eq!(db.user_count(), 1);
}

#[tokio::test]
async fn listing_users_fails_when_store_is_down() {
    let db = MemoryDatabase::new();
    let app = test_app(db.clone());
    db.go_offline();

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
}
