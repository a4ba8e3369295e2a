//! Integration tests for show routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{ConnectionTrait, EntityTrait};
use tower::util::ServiceExt;

use fyyur::db::entities::show;
use fyyur::handlers;
use fyyur::state::AppState;
use fyyur::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::create_router(state.clone())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_shows_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No shows listed yet."));
}

#[tokio::test]
async fn test_list_shows() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(&state.db, venue.id, artist.id, at("2019-05-21 21:30")).await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("2019-05-21 21:30"));
}

#[tokio::test]
async fn test_create_show_form() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/shows/create")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains(r#"action="/shows/create""#));
}

#[tokio::test]
async fn test_create_show() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-04-01+20%3A00",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Show was successfully listed!"));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].start_time, at("2035-04-01 20:00"));
}

#[tokio::test]
async fn test_create_show_missing_artist() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id=99&venue_id={}&start_time=2035-04-01+20%3A00",
                venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Artist with id 99 has not been listed! Please check and input again."));
    assert!(body.contains(r#"value="99""#));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_show_missing_venue() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id=7&start_time=2035-04-01+20%3A00",
                artist.id
            ),
        ))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("Venue with id 7 has not been listed!"));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_show_invalid_fields() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            "artist_id=abc&venue_id=&start_time=tomorrow",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"data-field="artist_id""#));
    assert!(body.contains(r#"data-field="venue_id""#));
    assert!(body.contains(r#"data-field="start_time""#));
}

#[tokio::test]
async fn test_past_show_allowed_by_default() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2019-05-21+21%3A30",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert!(body_text(response)
        .await
        .contains("Show was successfully listed!"));
    assert_eq!(show::Entity::find().all(&state.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_past_show_rejected_when_configured() {
    let state = setup_test_app_state_rejecting_past_shows().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2019-05-21+21%3A30",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Start time must be in the future."));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/nowhere")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404: Page not found"));
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_create_show_store_failure_rerenders_form() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    state
        .db
        .execute_unprepared(
            "CREATE TRIGGER shows_frozen BEFORE INSERT ON shows \
             BEGIN SELECT RAISE(ABORT, 'shows are frozen'); END;",
        )
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-04-01+20%3A00",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.contains("An error occurred. The show could not be listed."));
    assert!(body.contains(r#"value="2035-04-01 20:00""#));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_show_listing_renders_artist_image() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(&state.db, venue.id, artist.id, at("2019-05-21 21:30")).await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/shows")).await.unwrap();

    let body = body_text(response).await;
    assert!(body.contains(r#"src="https://images.example.com/artist.jpg""#));
}
