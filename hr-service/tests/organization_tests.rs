mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use hr_service::domain::employee::models::Role;
use reqwest::StatusCode;
use serde_json::json;

fn days_from_today(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

#[tokio::test]
async fn test_department_lifecycle() {
    let app = TestApp::spawn().await;
    let staff = app.token_for("sam", Role::Staff).await;

    let created = app
        .post_authenticated("/api/v1/departments", &staff)
        .json(&json!({ "title": "  Engineering " }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);

    let created: serde_json::Value = created.json().await.unwrap();
    assert_eq!(created["data"]["title"], "Engineering");
    let path = format!("/api/v1/departments/{}", created["data"]["id"]);

    let renamed = app
        .patch_authenticated(&path, &staff)
        .json(&json!({ "title": "Research" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(renamed.status(), StatusCode::OK);
    let renamed: serde_json::Value = renamed.json().await.unwrap();
    assert_eq!(renamed["data"]["title"], "Research");

    let untouched = app
        .patch_authenticated(&path, &staff)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(untouched.status(), StatusCode::OK);
    let untouched: serde_json::Value = untouched.json().await.unwrap();
    assert_eq!(untouched["data"]["title"], "Research");

    let list = app
        .get_authenticated("/api/v1/departments", &staff)
        .send()
        .await
        .expect("Failed to execute request");
    let list: serde_json::Value = list.json().await.unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let deleted = app
        .delete_authenticated(&path, &staff)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app
        .get_authenticated(&path, &staff)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_department_title_rules() {
    let app = TestApp::spawn().await;
    let staff = app.token_for("sam", Role::Staff).await;

    let first = app
        .post_authenticated("/api/v1/departments", &staff)
        .json(&json!({ "title": "Finance" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(first.status(), StatusCode::CREATED);

    let duplicate = app
        .post_authenticated("/api/v1/departments", &staff)
        .json(&json!({ "title": "Finance" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let too_short = app
        .post_authenticated("/api/v1/departments", &staff)
        .json(&json!({ "title": "F" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(too_short.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_position_lifecycle() {
    let app = TestApp::spawn().await;
    let admin = app.token_for("root", Role::Admin).await;

    let created = app
        .post_authenticated("/api/v1/positions", &admin)
        .json(&json!({ "title": "Accountant" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: serde_json::Value = created.json().await.unwrap();
    let path = format!("/api/v1/positions/{}", created["data"]["id"]);

    let too_long = app
        .patch_authenticated(&path, &admin)
        .json(&json!({ "title": "x".repeat(101) }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(too_long.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fetched = app
        .get_authenticated(&path, &admin)
        .send()
        .await
        .expect("Failed to execute request");
    let fetched: serde_json::Value = fetched.json().await.unwrap();
    assert_eq!(fetched["data"]["title"], "Accountant");

    let deleted = app
        .delete_authenticated(&path, &admin)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let deleted_again = app
        .delete_authenticated(&path, &admin)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_salary_lifecycle() {
    let app = TestApp::spawn().await;
    let staff = app.token_for("sam", Role::Staff).await;
    let raise_date = days_from_today(30);

    let created = app
        .post_authenticated("/api/v1/salaries", &staff)
        .json(&json!({ "amount": 20000.98, "raise_date": raise_date }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);

    let created: serde_json::Value = created.json().await.unwrap();
    assert_eq!(created["data"]["amount"], 20000.98);
    assert_eq!(created["data"]["raise_date"], raise_date);
    let path = format!("/api/v1/salaries/{}", created["data"]["id"]);

    let raised = app
        .patch_authenticated(&path, &staff)
        .json(&json!({ "amount": 25000 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(raised.status(), StatusCode::OK);
    let raised: serde_json::Value = raised.json().await.unwrap();
    assert_eq!(raised["data"]["amount"], 25000.0);
    assert_eq!(raised["data"]["raise_date"], raise_date);

    let deleted = app
        .delete_authenticated(&path, &staff)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app
        .get_authenticated(&path, &staff)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_salary_validation() {
    let app = TestApp::spawn().await;
    let staff = app.token_for("sam", Role::Staff).await;

    let invalid = [
        json!({ "amount": 1000.123, "raise_date": days_from_today(30) }),
        json!({ "amount": 0, "raise_date": days_from_today(30) }),
        json!({ "amount": -5.5, "raise_date": days_from_today(30) }),
        json!({ "amount": 10000000.0, "raise_date": days_from_today(30) }),
        json!({ "amount": 1000.0, "raise_date": days_from_today(0) }),
        json!({ "amount": 1000.0, "raise_date": days_from_today(-1) }),
    ];

    for body in invalid {
        let response = app
            .post_authenticated("/api/v1/salaries", &staff)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", body);
    }
}

#[tokio::test]
async fn test_organization_routes_require_staff() {
    let app = TestApp::spawn().await;
    let employee = app.token_for("olga", Role::Employee).await;

    for path in ["/api/v1/departments", "/api/v1/positions", "/api/v1/salaries"] {
        let anonymous = app
            .get(path)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED, "{}", path);

        let forbidden = app
            .get_authenticated(path, &employee)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN, "{}", path);
    }
}
