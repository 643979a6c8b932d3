use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use dioxus::prelude::*;
use serde::Deserialize;

use crate::{
    components::{GalleryTab, MatchTab},
    handlers::helpers::{layout_data, render_page},
    http::AppState,
    pages::{FacilitiesPage, GalleryPage, HistoryPage, HomePage, MatchesPage, StandingsPage},
};

#[derive(Debug, Deserialize)]
pub struct TabParams<T> {
    pub tab: Option<T>,
}

pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<TabParams<MatchTab>>,
) -> Response {
    let club_name = state.config.club_name.clone();
    let match_tab = params.tab.unwrap_or_default();
    render_page(
        StatusCode::OK,
        "Home",
        layout_data(&state, "home", None),
        rsx! { HomePage { club_name, match_tab } },
    )
}

pub async fn facilities(State(state): State<AppState>) -> Response {
    render_page(
        StatusCode::OK,
        "Facilities",
        layout_data(&state, "facilities", None),
        rsx! { FacilitiesPage {} },
    )
}

pub async fn history(State(state): State<AppState>) -> Response {
    render_page(
        StatusCode::OK,
        "Club History",
        layout_data(&state, "history", None),
        rsx! { HistoryPage {} },
    )
}

pub async fn standings(State(state): State<AppState>) -> Response {
    render_page(
        StatusCode::OK,
        "League Table",
        layout_data(&state, "standings", None),
        rsx! { StandingsPage {} },
    )
}

pub async fn fixtures(
    State(state): State<AppState>,
    Query(params): Query<TabParams<MatchTab>>,
) -> Response {
    matches_page(&state, "Fixtures", "fixtures", params.tab.unwrap_or(MatchTab::Upcoming))
}

pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<TabParams<MatchTab>>,
) -> Response {
    matches_page(&state, "Results", "results", params.tab.unwrap_or(MatchTab::Results))
}

fn matches_page(state: &AppState, title: &str, page: &str, tab: MatchTab) -> Response {
    let base_path = format!("/{page}");
    let heading = title.to_string();
    render_page(
        StatusCode::OK,
        title,
        layout_data(state, page, None),
        rsx! { MatchesPage { title: heading, tab, base_path } },
    )
}

pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<TabParams<GalleryTab>>,
) -> Response {
    let tab = params.tab.unwrap_or_default();
    render_page(
        StatusCode::OK,
        "Gallery",
        layout_data(&state, "gallery", None),
        rsx! { GalleryPage { tab } },
    )
}
