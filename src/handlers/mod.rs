pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDateTime, Utc};
use maud::Markup;
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tower_sessions::Session;
use tracing::{debug, error, warn};

use crate::{
    db::StoreError,
    error::AppError,
    flash::{self, Flash},
    state::AppState,
    templates::{error_page, search_results_page, ListingLink},
};

pub(crate) const NOT_FOUND_MESSAGE: &str = "The page you requested does not exist.";

/// Full application router: HTML routes, static assets and the session
/// layer that carries flash messages between requests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(html_routes())
        // Static assets (css, js, images)
        .nest_service("/static", ServeDir::new("static"))
        .layer(flash::session_layer())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(pages::health_check))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist),
        )
        .route(
            "/artists/:id",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )

        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show),
        )

        .fallback(pages::not_found)
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

fn render_with_status(status: StatusCode, markup: Markup) -> Response {
    (status, render(markup)).into_response()
}

/// The instant a request classifies shows against, sampled once per request.
fn request_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// An integer id taken from the path. Anything that does not parse as an
/// `i32` is answered with the 404 page, like an id that does not exist.
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                debug!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());
                Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
            }
        }
    }
}

/// Renders a search over one entity kind. `base_path` prefixes each
/// result's id in its link.
async fn render_search(
    session: &Session,
    title: &str,
    base_path: &str,
    term: &str,
    matches: impl IntoIterator<Item = (i32, String)>,
) -> Html<String> {
    let results: Vec<ListingLink> = matches
        .into_iter()
        .map(|(id, name)| ListingLink {
            href: format!("{}/{}", base_path, id),
            name,
        })
        .collect();

    let flashes = flash::take(session).await;
    render(search_results_page(
        title,
        &format!("{}/search", base_path),
        term,
        &results,
        &flashes,
    ))
}

/// Response for a delete the store refused. A missing id is a 404; any
/// other failure is the 500 page with an error flash naming the entity.
async fn delete_failure(session: &Session, entity: &str, id: i32, err: StoreError) -> Response {
    if matches!(err, StoreError::NotFound { .. }) {
        return AppError::from(err).into_response();
    }

    let message = match &err {
        StoreError::ReferentialConstraint { name, .. } => {
            warn!("Refused to delete {} {}: {}", entity, id, err);
            format!(
                "An error occurred. {} {} could not be deleted. Shows are still booked for it.",
                entity, name
            )
        }
        _ => {
            error!("Failed to delete {} {}: {}", entity, id, err);
            format!("An error occurred. {} {} could not be deleted.", entity, id)
        }
    };

    let flashes = flash::take_with(session, Flash::error(message)).await;
    render_with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_page(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string(), &flashes),
    )
}
