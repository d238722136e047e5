use axum::{
  body::Body,
  http::{header, Request, StatusCode},
  Router,
};
use scholar::server::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;

async fn create_test_router() -> (Router, TempDir) {
  let (scholar, dir) = create_test_scholar().await;
  (router(AppState::new(scholar.database)), dir)
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
  let builder = Request::builder().method(method).uri(uri);
  match body {
    Some(body) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(serde_json::to_vec(&body).unwrap()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  (status, body.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
  let (status, body) = send(app, request).await;
  let json = if body.is_empty() { Value::Null } else { serde_json::from_slice(&body).unwrap() };
  (status, json)
}

async fn create(app: &Router, user_id: i64, body: Value) -> Value {
  let (status, json) =
    send_json(app, make_request("POST", &format!("/users/{user_id}/publications"), Some(body)))
      .await;
  assert_eq!(status, StatusCode::CREATED, "{json}");
  json
}

#[traced_test]
#[tokio::test]
async fn test_crud_round_trip() {
  let (app, _dir) = create_test_router().await;

  let created = create(
    &app,
    7,
    json!({"title": "A", "type": "Journal", "year": 2023, "authors": "X", "venue": "V1"}),
  )
  .await;
  let id = created["id"].as_i64().unwrap();
  assert_eq!(created["user_id"], 7);
  assert_eq!(created["doi"], Value::Null);

  let (status, fetched) =
    send_json(&app, make_request("GET", &format!("/publications/{id}"), None)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(fetched, created);

  let (status, updated) = send_json(
    &app,
    make_request("PUT", &format!("/publications/{id}"), Some(json!({"venue": "V9"}))),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["venue"], "V9");
  assert_eq!(updated["title"], "A");

  let (status, _) = send(&app, make_request("DELETE", &format!("/publications/{id}"), None)).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, body) =
    send_json(&app, make_request("GET", &format!("/publications/{id}"), None)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].is_string());

  let (status, _) = send(&app, make_request("DELETE", &format!("/publications/{id}"), None)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[traced_test]
#[tokio::test]
async fn test_list_and_search() {
  let (app, _dir) = create_test_router().await;
  create(&app, 1, json!({"title": "Graph Learning", "type": "Journal", "year": 2020})).await;
  create(&app, 1, json!({"title": "Compilers", "type": "Book", "year": 2022})).await;
  create(&app, 2, json!({"title": "Graph Theory", "type": "Book", "year": 2001})).await;

  let (status, listed) =
    send_json(&app, make_request("GET", "/users/1/publications", None)).await;
  assert_eq!(status, StatusCode::OK);
  let titles = listed.as_array().unwrap().iter().map(|p| p["title"].clone()).collect::<Vec<_>>();
  assert_eq!(titles, vec![json!("Compilers"), json!("Graph Learning")]);

  let (_, found) = send_json(&app, make_request("GET", "/users/1/publications?q=GRAPH", None)).await;
  assert_eq!(found.as_array().unwrap().len(), 1);
  assert_eq!(found[0]["title"], "Graph Learning");
}

#[traced_test]
#[tokio::test]
async fn test_create_rejections() {
  let (app, _dir) = create_test_router().await;

  let (status, body) = send_json(
    &app,
    make_request(
      "POST",
      "/users/1/publications",
      Some(json!({"title": "Bad", "type": "Journal", "year": 99})),
    ),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("99"));

  let publication = json!({"title": "A", "type": "Journal", "year": 2020, "doi": "10.1000/abc"});
  create(&app, 1, publication.clone()).await;
  let (status, _) =
    send_json(&app, make_request("POST", "/users/1/publications", Some(publication))).await;
  assert_eq!(status, StatusCode::CONFLICT);
}

#[traced_test]
#[tokio::test]
async fn test_summary_download() {
  let (app, _dir) = create_test_router().await;
  let b = create(
    &app,
    3,
    json!({"title": "B", "type": "Journal", "year": 2021, "authors": "Y", "venue": "V2", "doi": "10.1/xyz"}),
  )
  .await;
  assert_eq!(b["doi"], "10.1/xyz");
  create(&app, 3, json!({"title": "A", "type": "Journal", "year": 2023, "authors": "X", "venue": "V1"})).await;

  let response = app
    .clone()
    .oneshot(make_request("GET", "/users/3/publications/summary?format=web&filter=year", None))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
  assert_eq!(
    response.headers()[header::CONTENT_DISPOSITION],
    "attachment; filename=\"publications_summary.html\""
  );

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let html = String::from_utf8(body.to_vec()).unwrap();
  let first = html.find("<h2>2023</h2>").unwrap();
  let second = html.find("<h2>2021</h2>").unwrap();
  assert!(first < html.find("<h3>A</h3>").unwrap());
  assert!(html.find("<h3>A</h3>").unwrap() < second);
  assert!(second < html.find("https://doi.org/10.1/xyz").unwrap());
  assert!(html.contains("<a href=\"https://doi.org/10.1/xyz\">10.1/xyz</a>"));
}

#[traced_test]
#[tokio::test]
async fn test_summary_default_filter_and_pdf() {
  let (app, _dir) = create_test_router().await;
  create(&app, 3, json!({"title": "A", "type": "Journal", "year": 2023})).await;

  let response = app
    .clone()
    .oneshot(make_request("GET", "/users/3/publications/summary?format=PDF", None))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  assert!(body.starts_with(b"Publications Summary\n\n2023\n----\n"));
}

#[traced_test]
#[tokio::test]
async fn test_summary_unsupported_format() {
  let (app, _dir) = create_test_router().await;
  create(&app, 3, json!({"title": "A", "type": "Journal", "year": 2023})).await;

  for uri in ["/users/3/publications/summary?format=xml", "/users/3/publications/summary"] {
    let (status, body) = send_json(&app, make_request("GET", uri, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unsupported summary format"));
  }
}

#[traced_test]
#[tokio::test]
async fn test_malformed_requests_answer_json() {
  let (app, _dir) = create_test_router().await;

  for (method, uri) in [("GET", "/publications/abc"), ("GET", "/users/me/publications")] {
    let (status, body) = send_json(&app, make_request(method, uri, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
  }

  let request = Request::builder()
    .method("POST")
    .uri("/users/1/publications")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{\"title\": "))
    .unwrap();
  let (status, body) = send_json(&app, request).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));

  // Well formed JSON with a mistyped year
  let (status, body) = send_json(
    &app,
    make_request("PUT", "/publications/1", Some(json!({"year": "soon"}))),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}
