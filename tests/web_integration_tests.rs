use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use recipe_app::catalog::Catalog;
use recipe_app::matcher::Ranker;
use recipe_app::web::{router, AppState};
use tower::ServiceExt;

fn app() -> axum::Router {
    let state = AppState::new(Ranker::new(Catalog::builtin())).expect("index template compiles");
    router(state)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

#[tokio::test]
async fn test_index_shows_form_without_table() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form action=\"/suggest\" method=\"post\">"));
    assert!(!body.contains("<h2>Suggestions</h2>"));
}

#[tokio::test]
async fn test_form_submission_renders_ranked_table() {
    let request = Request::builder()
        .method("POST")
        .uri("/suggest")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("ingredients=bread%2C+Cheese%2C+butter"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let grilled = body.find("<td>Grilled Cheese Sandwich</td>").expect("grilled cheese row");
    let salad = body.find("<td>Fresh Salad</td>").expect("salad row");
    assert!(grilled < salad);
    assert!(body.contains("<td>Ready</td>"));
    assert!(body.contains("<td>Missing 6</td>"));
    assert!(body.contains("lettuce, tomato, cucumber, olive oil, lemon, salt"));
}

#[tokio::test]
async fn test_form_input_is_escaped() {
    let request = Request::builder()
        .method("POST")
        .uri("/suggest")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("ingredients=%3Cscript%3E"))
        .unwrap();
    let body = body_text(app().oneshot(request).await.unwrap()).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_json_api_returns_suggestions() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/suggestions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"ingredients": ["Pasta", "tomato", "garlic", "olive oil", "salt"]}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    let suggestions = json["suggestions"].as_array().expect("suggestions array");
    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions[0]["recipe"]["name"], "Pasta with Tomato Sauce");
    assert_eq!(suggestions[0]["missing"], serde_json::json!([]));
    // Salad and grilled cheese both miss three; catalog order puts the salad first.
    assert_eq!(suggestions[1]["recipe"]["name"], "Fresh Salad");
    assert_eq!(suggestions[2]["recipe"]["name"], "Grilled Cheese Sandwich");
}
