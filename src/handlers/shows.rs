use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use tower_sessions::Session;
use tracing::{error, info, warn};

use super::{render, render_with_status, request_now};
use crate::{
    db::StoreError,
    error::Result,
    flash::{self, Flash},
    forms::{FieldErrors, FormData, ShowForm},
    services::read_model,
    state::AppState,
    templates::{home_page, new_show_page, shows_page},
};

pub async fn list_shows(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>> {
    let shows = read_model::show_listing(&state.db).await?;
    let flashes = flash::take(&session).await;
    Ok(render(shows_page(&shows, &flashes)))
}

pub async fn create_show_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    render(new_show_page(
        &ShowForm::default(),
        &FieldErrors::default(),
        &flashes,
    ))
}

/// Lists a new show. The artist and venue must already exist; a missing
/// one sends the user back to the form with the submitted values.
pub async fn create_show(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ShowForm::from_form_data(&FormData::from(pairs));

    let new_show = match form.validate(state.config.past_show_policy, request_now()) {
        Ok(new_show) => new_show,
        Err(errors) => {
            let flashes = flash::take(&session).await;
            return render(new_show_page(&form, &errors, &flashes)).into_response();
        }
    };

    match state.shows().create(&new_show).await {
        Ok(show) => {
            info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show created"
            );
            let flashes =
                flash::take_with(&session, Flash::success("Show was successfully listed!")).await;
            render(home_page(&flashes)).into_response()
        }
        Err(StoreError::MissingReference { entity, id }) => {
            warn!("Show rejected, {} {} does not exist", entity, id);
            let flashes = flash::take_with(
                &session,
                Flash::error(format!(
                    "{} with id {} has not been listed! Please check and input again.",
                    entity, id
                )),
            )
            .await;
            render(new_show_page(&form, &FieldErrors::default(), &flashes)).into_response()
        }
        Err(e) => {
            error!("Failed to create show: {}", e);
            let flashes = flash::take_with(
                &session,
                Flash::error("An error occurred. The show could not be listed."),
            )
            .await;
            render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                new_show_page(&form, &FieldErrors::default(), &flashes),
            )
        }
    }
}
