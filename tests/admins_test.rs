mod common;

use axum::http::{Method, StatusCode};
use common::TestPanel;
use serde_json::json;

#[tokio::test]
async fn lists_admins_with_pending() {
    let panel = TestPanel::signed_in().await;
    panel.backend.add_pending_admin("futureadmin");

    let (status, body) = panel.get("/panel/admins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admins"][0]["telegram_username"], "testadmin");
    assert_eq!(body["pending_admins"][0]["telegram_username"], "futureadmin");
}

#[tokio::test]
async fn create_admin_strips_at_sign() {
    let panel = TestPanel::signed_in().await;

    let (status, body) = panel
        .call(
            "POST",
            "/panel/admins",
            Some(json!({ "telegram_username": " @newadmin " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["promoted"].is_null());
    assert_eq!(
        body["notice"]["text"],
        "Пользователь @newadmin будет назначен администратором при первом входе"
    );
    assert_eq!(
        body["admins"]["pending_admins"][0]["telegram_username"],
        "newadmin"
    );

    let sent = panel
        .backend
        .requests_to(Method::POST, "/api/telegram/create-admin");
    assert_eq!(sent[0].body, json!({ "telegram_username": "newadmin" }));
}

#[tokio::test]
async fn promoting_existing_user_names_them() {
    let panel = TestPanel::signed_in().await;

    let (status, body) = panel
        .call(
            "POST",
            "/panel/admins",
            Some(json!({ "telegram_username": "existinguser" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promoted"]["name"], "Existing User");
    assert_eq!(
        body["notice"]["text"],
        "Администратор Existing User (@existinguser) успешно создан"
    );
}

#[tokio::test]
async fn malformed_username_never_reaches_backend() {
    let panel = TestPanel::signed_in().await;

    for raw in ["@", "bad name", ""] {
        let (status, _) = panel
            .call("POST", "/panel/admins", Some(json!({ "telegram_username": raw })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{:?}", raw);
    }
    assert!(panel.backend.requests().is_empty());
}

#[tokio::test]
async fn delete_pending_admin_reports_outcome() {
    let panel = TestPanel::signed_in().await;
    panel.backend.add_pending_admin("futureadmin");

    let (status, body) = panel
        .call("DELETE", "/panel/admins/pending/futureadmin", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"]["text"], "Ожидающий администратор удалён");

    let (status, _) = panel
        .call("DELETE", "/panel/admins/pending/futureadmin", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, notice) = panel.get("/panel/notice").await;
    assert_eq!(
        notice["notice"]["text"],
        "Ошибка удаления ожидающего администратора"
    );
}
