use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;
use tracing::{error, info};

use super::{
    delete_failure, render, render_search, render_with_status, request_now, EntityId, SearchForm,
};
use crate::{
    db::StoreError,
    error::Result,
    flash::{self, Flash},
    forms::{FieldErrors, FormData, VenueForm},
    services::read_model,
    state::AppState,
    templates::{edit_venue_page, home_page, new_venue_page, venue_detail_page, venues_page},
};

/// Venues grouped by city and state
pub async fn list_venues(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>> {
    let areas = read_model::venue_areas(&state.db).await?;
    let flashes = flash::take(&session).await;
    Ok(render(venues_page(&areas, &flashes)))
}

pub async fn search_venues(
    State(state): State<AppState>,
    session: Session,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>> {
    let venues = state.venues().search(&search.search_term).await?;
    Ok(render_search(
        &session,
        "Venue Search",
        "/venues",
        &search.search_term,
        venues.into_iter().map(|m| (m.id, m.name)),
    )
    .await)
}

/// Venue detail with its shows split into past and upcoming
pub async fn show_venue(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let venue = state.venues().find_by_id(id).await?;
    let shows = read_model::venue_shows(&state.db, id, request_now()).await?;
    let flashes = flash::take(&session).await;
    Ok(render(venue_detail_page(&venue, &shows, &flashes)))
}

pub async fn create_venue_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    render(new_venue_page(
        &VenueForm::default(),
        &FieldErrors::default(),
        &flashes,
    ))
}

pub async fn create_venue(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_form_data(&FormData::from(pairs));

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let flashes = flash::take(&session).await;
            return render(new_venue_page(&form, &errors, &flashes)).into_response();
        }
    };

    match state.venues().create(&fields).await {
        Ok(venue) => {
            info!(venue_id = venue.id, "Venue created: {}", venue.name);
            let flashes = flash::take_with(
                &session,
                Flash::success(format!("Venue {} was successfully listed!", venue.name)),
            )
            .await;
            render(home_page(&flashes)).into_response()
        }
        Err(e) => {
            error!("Failed to create venue {}: {}", fields.name, e);
            let flashes = flash::take_with(
                &session,
                Flash::error(format!(
                    "An error occurred. Venue {} could not be listed.",
                    fields.name
                )),
            )
            .await;
            render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                new_venue_page(&form, &FieldErrors::default(), &flashes),
            )
        }
    }
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let venue = state.venues().find_by_id(id).await?;
    let flashes = flash::take(&session).await;
    Ok(render(edit_venue_page(
        id,
        &VenueForm::from_model(&venue),
        &FieldErrors::default(),
        &flashes,
    )))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    // 404 before looking at the submission
    state.venues().find_by_id(id).await?;

    let form = VenueForm::from_form_data(&FormData::from(pairs));
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let flashes = flash::take(&session).await;
            return Ok(render(edit_venue_page(id, &form, &errors, &flashes)).into_response());
        }
    };

    match state.venues().update(id, &fields).await {
        Ok(venue) => {
            info!(venue_id = venue.id, "Venue updated: {}", venue.name);
            flash::push(
                &session,
                Flash::success(format!("Venue {} was successfully updated!", venue.name)),
            )
            .await;
            Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
        }
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            let flashes = flash::take_with(
                &session,
                Flash::error(format!(
                    "An error occurred. Venue {} could not be updated.",
                    fields.name
                )),
            )
            .await;
            Ok(render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                edit_venue_page(id, &form, &FieldErrors::default(), &flashes),
            ))
        }
    }
}

pub async fn delete_venue(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Response {
    match state.venues().delete(id).await {
        Ok(venue) => {
            info!(venue_id = id, "Venue deleted: {}", venue.name);
            let flashes = flash::take_with(
                &session,
                Flash::success(format!("Venue {} was successfully deleted!", venue.name)),
            )
            .await;
            render(home_page(&flashes)).into_response()
        }
        Err(e) => delete_failure(&session, "Venue", id, e).await,
    }
}
