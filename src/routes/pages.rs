// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML page routes.
//!
//! A data page is streamed in two chunks: the shell with the loading
//! indicator goes out immediately, the error or ready state follows once the
//! single upstream request settles. The upstream request runs in its own
//! task, so a browser that navigates away does not cancel it; the late
//! result is simply dropped.

use crate::config::LOGO_FILE;
use crate::error::{AppError, Result};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::views::layout::{self, Shell};
use crate::views::{home, render_state, TableView, ViewState, LOADING_ID};
use crate::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use futures_util::{stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;

/// Page routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_page))
        .route(User::RESOURCE.page_path(), get(view_page::<User>))
        .route(Team::RESOURCE.page_path(), get(view_page::<Team>))
        .route(Activity::RESOURCE.page_path(), get(view_page::<Activity>))
        .route(Workout::RESOURCE.page_path(), get(view_page::<Workout>))
        .route(
            LeaderboardEntry::RESOURCE.page_path(),
            get(view_page::<LeaderboardEntry>),
        )
        .route(&format!("/{}", LOGO_FILE), get(logo))
}

async fn home_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(home::render_home(&Shell::new(state.logo_available, None)))
}

/// Fetch-and-render view for one record type.
async fn view_page<T: TableView>(State(state): State<Arc<AppState>>) -> Html<Body> {
    let resource = T::RESOURCE;
    let shell = Shell::new(state.logo_available, Some(resource));

    let mut head = layout::page_start(&shell, resource.title());
    head.push_str(&render_state::<T>(&ViewState::Loading));

    let api = state.api.clone();
    let fetch = tokio::spawn(async move { api.list::<T>(resource).await });

    let settled = async move {
        let view = match fetch.await {
            Ok(Ok(records)) => ViewState::Ready(records),
            Ok(Err(e)) => ViewState::Error(e.to_string()),
            Err(e) => {
                tracing::error!(resource = resource.api_name(), error = %e, "Fetch task failed");
                ViewState::Error(e.to_string())
            }
        };

        let mut tail = format!("<style>#{} {{ display: none; }}</style>\n", LOADING_ID);
        tail.push_str(&render_state(&view));
        tail.push_str(layout::page_end());
        Ok::<_, Infallible>(tail)
    };

    let chunks = stream::once(async move { Ok::<_, Infallible>(head) }).chain(stream::once(settled));
    Html(Body::from_stream(chunks))
}

/// Serve the optional logo from the static directory.
async fn logo(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let path = state.config.logo_path();
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("/{}", LOGO_FILE)))
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("reading {}", path.display()))
            .into()),
    }
}

/// Anything not in the route table.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
