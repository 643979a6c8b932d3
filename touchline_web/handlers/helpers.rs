use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;
use serde::Deserialize;

use touchline_types::errors::{ApplicationError, DbError};

use crate::{
    components::{LayoutData, Notice, PageLayout, wrap_in_html},
    http::AppState,
};

/// Notices carried across a redirect in the `notice` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeCode {
    PlayerAdded,
    PlayerUpdated,
    PlayerDeleted,
}

impl NoticeCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCode::PlayerAdded => "player_added",
            NoticeCode::PlayerUpdated => "player_updated",
            NoticeCode::PlayerDeleted => "player_deleted",
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            NoticeCode::PlayerAdded => Notice::success("Player added successfully"),
            NoticeCode::PlayerUpdated => Notice::success("Player updated successfully"),
            NoticeCode::PlayerDeleted => Notice::success("Player deleted successfully"),
        }
    }
}

pub(crate) fn layout_data(state: &AppState, nav_active: &str, notice: Option<Notice>) -> LayoutData {
    LayoutData {
        club_name: state.config.club_name.clone(),
        nav_active: nav_active.to_string(),
        notice,
    }
}

/// Renders a page inside the layout and the HTML shell.
pub(crate) fn render_page(
    status: StatusCode,
    title: &str,
    layout: LayoutData,
    content: Element,
) -> Response {
    let title = format!("{} | {}", title, layout.club_name);
    let body_content = dioxus_ssr::render_element(rsx! {
        PageLayout { data: layout, {content} }
    });
    (status, Html(wrap_in_html(&title, &body_content))).into_response()
}

/// HTTP status used when a page is rendered for an error.
pub(crate) fn error_status(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Invariant(_) => StatusCode::CONFLICT,
        ApplicationError::Db(DbError::PlayerNotFound(_)) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to the user. Unexpected errors are logged and replaced
/// by `fallback`.
pub(crate) fn error_message(err: &ApplicationError, fallback: &str) -> String {
    match err {
        ApplicationError::Validation(e) => e.to_string(),
        ApplicationError::Invariant(e) => e.to_string(),
        ApplicationError::Db(DbError::PlayerNotFound(_)) => "Player not found.".to_string(),
        _ => {
            tracing::error!("{err}");
            fallback.to_string()
        }
    }
}
