use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rhub::domain::config::ApiConfig;
use rhub::domain::constants::ADMIN_PASSWORD_HEADER;
use rhub::kernel::server::ApiState;
use rhub_database::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN_PASSWORD: &str = "test-secret";

async fn app() -> Router {
    let mut cfg = ApiConfig::default();
    cfg.security.admin_password = ADMIN_PASSWORD.to_owned();

    let db = Database::builder()
        .url(&cfg.database.url)
        .session(&cfg.database.namespace, &cfg.database.database)
        .init()
        .await
        .unwrap();

    let slices = rhub::init(&cfg, &db).unwrap();

    let state = slices
        .into_iter()
        .fold(ApiState::builder().config(cfg).db(db), |builder, slice| {
            builder.register_slice(slice)
        })
        .build()
        .unwrap();

    rhub_server::router::init(state)
}

fn draft(email: &str, phone: &str) -> Value {
    json!({
        "title": "Brother",
        "firstName": "John",
        "lastName": "Doe",
        "email": email,
        "phone": phone,
        "kingschat": "johnd",
        "zone": "East Region > Alpha",
        "group": "g1",
        "church": "Central",
        "physicalAttendance": true,
    })
}

fn post_register(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = app().await;

    let response =
        app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn register_creates_a_record() {
    let app = app().await;

    let response = app.oneshot(post_register(&draft("John@Example.com", "12345"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "john@example.com");
    assert_eq!(body["data"]["attendanceType"], "physical");
    assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = app().await;

    // A blank field and an entirely absent field both get the 400 envelope.
    let mut blank = draft("a@b.com", "12345");
    blank["church"] = json!("   ");

    let response = app.clone().oneshot(post_register(&blank)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("church"));

    let mut absent = draft("a@b.com", "12345");
    absent.as_object_mut().unwrap().remove("church");

    let response = app.oneshot(post_register(&absent)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("church"));
}

#[tokio::test]
async fn register_rejects_duplicates_with_conflict() {
    let app = app().await;

    let first = app.clone().oneshot(post_register(&draft("a@b.com", "111"))).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same email, different phone
    let second = app.clone().oneshot(post_register(&draft("a@b.com", "222"))).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json_body(second).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "You have already registered with this email or phone number.");

    // Different email, same phone
    let third = app.oneshot(post_register(&draft("c@d.com", "111"))).await.unwrap();
    assert_eq!(third.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn public_listing_returns_all_records() {
    let app = app().await;

    for i in 0..3 {
        let response = app
            .clone()
            .oneshot(post_register(&draft(&format!("user{i}@x.com"), &format!("{i}{i}{i}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/register").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn admin_login_validates_the_secret() {
    let app = app().await;

    let ok = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "password": ADMIN_PASSWORD }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    let body = json_body(ok).await;
    assert_eq!(body["message"], "Login successful");

    let bad = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "password": "nope" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(bad).await;
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
async fn admin_listing_requires_the_header() {
    let app = app().await;

    let missing = app
        .clone()
        .oneshot(Request::builder().uri("/admin/registrations").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin/registrations")
                .header(ADMIN_PASSWORD_HEADER, "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let authorized = app
        .oneshot(
            Request::builder()
                .uri("/admin/registrations")
                .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(authorized.status(), StatusCode::OK);
    let body = json_body(authorized).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn admin_delete_handles_hits_and_misses() {
    let app = app().await;

    let created = app.clone().oneshot(post_register(&draft("a@b.com", "111"))).await.unwrap();
    let created = json_body(created).await;
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let miss = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/registrations/no-such-id")
                .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(miss.status(), StatusCode::NOT_FOUND);
    let body = json_body(miss).await;
    assert_eq!(body["error"], "Registration not found");

    let hit = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/registrations/{id}"))
                .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(hit.status(), StatusCode::OK);
    let body = json_body(hit).await;
    assert_eq!(body["message"], "Registration deleted successfully");

    // A second delete of the same id is a miss
    let again = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/registrations/{id}"))
                .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_delete_all_clears_the_store() {
    let app = app().await;

    for i in 0..2 {
        let response = app
            .clone()
            .oneshot(post_register(&draft(&format!("user{i}@x.com"), &format!("{i}{i}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let cleared = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/registrations")
                .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::OK);
    let body = json_body(cleared).await;
    assert_eq!(body["message"], "All registrations deleted successfully");

    let listing = app
        .oneshot(Request::builder().uri("/register").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(listing).await;
    assert_eq!(body["count"], 0);
}
