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
    forms::{ArtistForm, FieldErrors, FormData},
    services::read_model,
    state::AppState,
    templates::{
        artist_detail_page, artists_page, edit_artist_page, home_page, new_artist_page,
    },
};

pub async fn list_artists(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>> {
    let artists = state.artists().find_all().await?;
    let flashes = flash::take(&session).await;
    Ok(render(artists_page(&artists, &flashes)))
}

pub async fn search_artists(
    State(state): State<AppState>,
    session: Session,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>> {
    let artists = state.artists().search(&search.search_term).await?;
    Ok(render_search(
        &session,
        "Artist Search",
        "/artists",
        &search.search_term,
        artists.into_iter().map(|m| (m.id, m.name)),
    )
    .await)
}

pub async fn show_artist(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let artist = state.artists().find_by_id(id).await?;
    let shows = read_model::artist_shows(&state.db, id, request_now()).await?;
    let flashes = flash::take(&session).await;
    Ok(render(artist_detail_page(&artist, &shows, &flashes)))
}

pub async fn create_artist_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    render(new_artist_page(
        &ArtistForm::default(),
        &FieldErrors::default(),
        &flashes,
    ))
}

pub async fn create_artist(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ArtistForm::from_form_data(&FormData::from(pairs));

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let flashes = flash::take(&session).await;
            return render(new_artist_page(&form, &errors, &flashes)).into_response();
        }
    };

    match state.artists().create(&fields).await {
        Ok(artist) => {
            info!(artist_id = artist.id, "Artist created: {}", artist.name);
            let flashes = flash::take_with(
                &session,
                Flash::success(format!("Artist {} was successfully listed!", artist.name)),
            )
            .await;
            render(home_page(&flashes)).into_response()
        }
        Err(e) => {
            error!("Failed to create artist {}: {}", fields.name, e);
            let flashes = flash::take_with(
                &session,
                Flash::error(format!(
                    "An error occurred. Artist {} could not be listed.",
                    fields.name
                )),
            )
            .await;
            render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                new_artist_page(&form, &FieldErrors::default(), &flashes),
            )
        }
    }
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let artist = state.artists().find_by_id(id).await?;
    let flashes = flash::take(&session).await;
    Ok(render(edit_artist_page(
        id,
        &ArtistForm::from_model(&artist),
        &FieldErrors::default(),
        &flashes,
    )))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    state.artists().find_by_id(id).await?;

    let form = ArtistForm::from_form_data(&FormData::from(pairs));
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let flashes = flash::take(&session).await;
            return Ok(render(edit_artist_page(id, &form, &errors, &flashes)).into_response());
        }
    };

    match state.artists().update(id, &fields).await {
        Ok(artist) => {
            info!(artist_id = artist.id, "Artist updated: {}", artist.name);
            flash::push(
                &session,
                Flash::success(format!("Artist {} was successfully updated!", artist.name)),
            )
            .await;
            Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
        }
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            let flashes = flash::take_with(
                &session,
                Flash::error(format!(
                    "An error occurred. Artist {} could not be updated.",
                    fields.name
                )),
            )
            .await;
            Ok(render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                edit_artist_page(id, &form, &FieldErrors::default(), &flashes),
            ))
        }
    }
}

pub async fn delete_artist(
    State(state): State<AppState>,
    session: Session,
    EntityId(id): EntityId,
) -> Response {
    match state.artists().delete(id).await {
        Ok(artist) => {
            info!(artist_id = id, "Artist deleted: {}", artist.name);
            let flashes = flash::take_with(
                &session,
                Flash::success(format!("Artist {} was successfully deleted!", artist.name)),
            )
            .await;
            render(home_page(&flashes)).into_response()
        }
        Err(e) => delete_failure(&session, "Artist", id, e).await,
    }
}
