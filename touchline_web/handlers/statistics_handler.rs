use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;
use serde::Deserialize;

use touchline_app::{
    command_handlers::AdjustStatisticCommandHandler,
    cqrs::{commands::AdjustStatistic, queries::ListPlayersWithStats},
    queries_handlers::ListPlayersWithStatsHandler,
    views::{most_appearances, top_scorers},
};
use touchline_types::{errors::ApplicationError, stats::CompetitionFilter};

use crate::{
    components::Notice,
    handlers::{
        forms::AdjustStatisticForm,
        helpers::{error_message, error_status, layout_data, render_page},
    },
    http::AppState,
    pages::{StatisticsPage, StatisticsSelection},
};

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsParams {
    pub season: Option<String>,
    pub competition: Option<String>,
}

impl StatisticsParams {
    fn selection(&self, state: &AppState) -> StatisticsSelection {
        let season = match self.season.as_deref().map(str::trim) {
            Some(season) if !season.is_empty() => season.to_string(),
            _ => state.config.default_season().to_string(),
        };
        StatisticsSelection {
            season,
            competition: CompetitionFilter::parse(self.competition.as_deref().unwrap_or_default()),
        }
    }
}

/// GET /statistics – leaderboards for one season and competition.
pub async fn statistics(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> Response {
    let selection = params.selection(&state);
    render_statistics(&state, selection, StatusCode::OK, None).await
}

/// POST /statistics/adjust – moves one counter by one, then back to the
/// same selection.
pub async fn adjust_statistic(
    State(state): State<AppState>,
    Form(form): Form<AdjustStatisticForm>,
) -> Response {
    let selection = StatisticsSelection {
        season: form.season.trim().to_string(),
        competition: CompetitionFilter::parse(&form.competition),
    };

    let result = match form.parse() {
        Ok((field, direction)) => {
            let cmd = AdjustStatistic {
                player_id: form.player_id,
                season: form.season.clone(),
                competition: form.competition.clone(),
                field,
                direction,
            };
            state
                .app_bus
                .execute(cmd, AdjustStatisticCommandHandler::new())
                .await
                .map(|_| ())
        }
        Err(e) => Err(ApplicationError::from(e)),
    };

    match result {
        Ok(()) => Redirect::to(&selection.href()).into_response(),
        Err(err) => {
            let notice = Notice::error(error_message(&err, "Failed to update statistics. Please try again."));
            render_statistics(&state, selection, error_status(&err), Some(notice)).await
        }
    }
}

async fn render_statistics(
    state: &AppState,
    selection: StatisticsSelection,
    status: StatusCode,
    notice: Option<Notice>,
) -> Response {
    let query = ListPlayersWithStats {
        season: selection.season.clone(),
        competition: selection.competition.clone(),
    };
    let (entries, status, notice) = match state
        .app_bus
        .query(query, ListPlayersWithStatsHandler::new())
        .await
    {
        Ok(entries) => (entries, status, notice),
        Err(err) => (
            Vec::new(),
            error_status(&err),
            Some(Notice::error(error_message(&err, "Failed to load statistics."))),
        ),
    };

    let top_scorers = top_scorers(&entries);
    let appearances = most_appearances(&entries);
    let seasons = season_options(&state.config.seasons, &selection.season);

    render_page(
        status,
        "Statistics",
        layout_data(state, "statistics", notice),
        rsx! { StatisticsPage { selection, seasons, top_scorers, appearances } },
    )
}

/// Configured seasons, plus the selected one if it isn't configured.
fn season_options(configured: &[String], selected: &str) -> Vec<String> {
    let mut seasons = configured.to_vec();
    if !selected.is_empty() && !seasons.iter().any(|s| s == selected) {
        seasons.push(selected.to_string());
    }
    seasons
}
