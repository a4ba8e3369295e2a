use axum::{http::StatusCode, response::{Html, Response}};
use tower_sessions::Session;

use super::{render, render_with_status, NOT_FOUND_MESSAGE};
use crate::{
    flash,
    templates::{error_page, home_page},
};

pub async fn index(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    render(home_page(&flashes))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found() -> Response {
    render_with_status(
        StatusCode::NOT_FOUND,
        error_page(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE, &[]),
    )
}
