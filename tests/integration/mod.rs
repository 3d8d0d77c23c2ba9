//! Integration tests for the fruit stand.
//!
//! These drive the full application (method override, routing, handlers and
//! views) in-process with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use fruit_stand::api::{create_app, AppState, FRUITS_PATH};
use fruit_stand::store::{Fruit, FruitStore};

fn single_apple() -> FruitStore {
    FruitStore::new(vec![Fruit::new("apple", "red", false)])
}

async fn send(store: &FruitStore, request: Request<Body>) -> Response {
    create_app(AppState::new(store.clone()), "public")
        .oneshot(request)
        .await
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirects_to_list(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], FRUITS_PATH);
}

#[tokio::test]
async fn create_show_delete_scenario() {
    let store = single_apple();

    let created = send(
        &store,
        form(Method::POST, "/fruits", "name=banana&color=yellow&readyToEat=on"),
    )
    .await;
    assert_redirects_to_list(&created);
    assert_eq!(store.len().await, 2);

    let shown = send(&store, get("/fruits/1")).await;
    assert_eq!(shown.status(), StatusCode::OK);
    let html = text(shown).await;
    assert!(html.contains("banana"));
    assert!(html.contains("yellow"));
    assert!(html.contains("is ready to eat"));

    let deleted = send(&store, form(Method::DELETE, "/fruits/0", "")).await;
    assert_redirects_to_list(&deleted);

    assert_eq!(store.list().await, vec![Fruit::new("banana", "yellow", true)]);
}

#[tokio::test]
async fn create_then_last_index_holds_submitted_fruit() {
    let store = FruitStore::seeded();

    send(
        &store,
        form(Method::POST, "/fruits", "name=Apple&color=Red&readyToEat=on"),
    )
    .await;

    let last = store.len().await - 1;
    assert_eq!(store.get(last).await, Some(Fruit::new("Apple", "Red", true)));
}

#[tokio::test]
async fn create_without_fields_stores_defaults() {
    let store = FruitStore::new(Vec::new());

    let response = send(&store, form(Method::POST, "/fruits", "")).await;

    assert_redirects_to_list(&response);
    assert_eq!(store.list().await, vec![Fruit::default()]);
}

#[tokio::test]
async fn update_via_form_override_replaces_record() {
    let store = FruitStore::seeded();
    let before = store.list().await;

    let response = send(
        &store,
        form(Method::POST, "/fruits/0?_method=PUT", "name=quince&color=gold"),
    )
    .await;
    assert_redirects_to_list(&response);

    let after = store.list().await;
    assert_eq!(after[0], Fruit::new("quince", "gold", false));
    assert_eq!(after[1..].to_vec(), before[1..].to_vec());
}

#[tokio::test]
async fn direct_put_is_routed_too() {
    let store = single_apple();

    let response = send(
        &store,
        form(Method::PUT, "/fruits/0", "name=apple&color=green&readyToEat=on"),
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(store.get(0).await, Some(Fruit::new("apple", "green", true)));
}

#[tokio::test]
async fn destroy_shifts_later_records_down() {
    let store = FruitStore::seeded();
    let before = store.list().await;

    send(&store, form(Method::POST, "/fruits/1?_method=DELETE", "")).await;

    let after = store.list().await;
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
}

#[tokio::test]
async fn out_of_range_mutations_are_not_found() {
    let store = single_apple();

    let update = send(&store, form(Method::PUT, "/fruits/5", "name=x")).await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = send(&store, form(Method::DELETE, "/fruits/5", "")).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let edit = send(&store, get("/fruits/5/edit")).await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);

    assert_eq!(store.list().await, vec![Fruit::new("apple", "red", false)]);
}

#[tokio::test]
async fn list_without_mutations_shows_seed_in_order() {
    let store = FruitStore::seeded();

    let response = send(&store, get("/fruits")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = text(response).await;
    let apple = html.find("apple").unwrap();
    let pear = html.find("pear").unwrap();
    let banana = html.find("banana").unwrap();
    assert!(apple < pear && pear < banana);
}

#[tokio::test]
async fn static_files_are_served() {
    let store = FruitStore::seeded();

    let response = send(&store, get("/style.css")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn repeated_checkbox_is_stored_unready() {
    let store = FruitStore::new(Vec::new());

    let response = send(
        &store,
        form(Method::POST, "/fruits", "name=a&readyToEat=on&readyToEat=on"),
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(store.list().await, vec![Fruit::new("a", "", false)]);
}

#[tokio::test]
async fn create_without_content_type_still_appends() {
    let store = FruitStore::new(Vec::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/fruits")
        .body(Body::from("name=c"))
        .unwrap();

    let response = send(&store, request).await;

    assert_redirects_to_list(&response);
    assert_eq!(store.list().await, vec![Fruit::new("c", "", false)]);
}
