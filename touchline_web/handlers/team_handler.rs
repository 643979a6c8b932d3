use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use touchline_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::{GetPlayerById, ListPlayers},
    },
    queries_handlers::{GetPlayerByIdHandler, ListPlayersHandler},
    views::roster_view,
};
use touchline_types::errors::ApplicationError;

use crate::{
    components::{Notice, PlayerFormValues},
    handlers::{
        forms::{DeletePlayerForm, PlayerFormInput},
        helpers::{NoticeCode, error_message, error_status, layout_data, render_page},
    },
    http::AppState,
    pages::{DeletePlayerPage, EditPlayerPage, TeamPage},
};

const ADD_PLAYER_FAILED: &str = "Failed to add player. Please try again.";

#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    #[serde(default)]
    pub q: String,
    pub notice: Option<NoticeCode>,
}

/// GET /team – roster grouped by role, with search and the add form.
pub async fn team(State(state): State<AppState>, Query(params): Query<TeamParams>) -> Response {
    let notice = params.notice.map(|code| code.notice());
    render_team(
        &state,
        params.q,
        StatusCode::OK,
        notice,
        PlayerFormValues::default(),
        None,
    )
    .await
}

/// POST /team/players – add a player, then back to the roster.
pub async fn create_player(
    State(state): State<AppState>,
    Form(form): Form<PlayerFormInput>,
) -> Response {
    let values = PlayerFormValues::from(&form);
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            let err = ApplicationError::from(e);
            return render_team_form_error(&state, values, &err).await;
        }
    };

    match state
        .app_bus
        .execute(CreatePlayer::new(draft), CreatePlayerCommandHandler::new())
        .await
    {
        Ok(_) => redirect_to_team(NoticeCode::PlayerAdded),
        Err(err) => render_team_form_error(&state, values, &err).await,
    }
}

/// GET /team/players/{id}/edit – pre-filled edit form.
pub async fn edit_player_page(State(state): State<AppState>, Path(player_id): Path<Uuid>) -> Response {
    match state
        .app_bus
        .query(GetPlayerById { player_id }, GetPlayerByIdHandler::new())
        .await
    {
        Ok(player) => render_edit(
            &state,
            StatusCode::OK,
            player_id,
            PlayerFormValues::from(&player),
            None,
        ),
        Err(err) => render_error(&state, &err, "Failed to load player."),
    }
}

/// POST /team/players/{id}/edit – save the edit form.
pub async fn edit_player(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Form(form): Form<PlayerFormInput>,
) -> Response {
    let values = PlayerFormValues::from(&form);
    let result = match form.to_patch() {
        Ok(patch) => {
            state
                .app_bus
                .execute(UpdatePlayer { player_id, patch }, UpdatePlayerCommandHandler::new())
                .await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(_) => redirect_to_team(NoticeCode::PlayerUpdated),
        Err(err @ ApplicationError::Validation(_)) => render_edit(
            &state,
            error_status(&err),
            player_id,
            values,
            Some(error_message(&err, "")),
        ),
        Err(err) => render_error(&state, &err, "Failed to update player. Please try again."),
    }
}

/// POST /team/players/{id}/delete – asks for confirmation unless the form
/// carries `confirm=yes`.
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Form(form): Form<DeletePlayerForm>,
) -> Response {
    if !form.is_confirmed() {
        return match state
            .app_bus
            .query(GetPlayerById { player_id }, GetPlayerByIdHandler::new())
            .await
        {
            Ok(player) => render_page(
                StatusCode::OK,
                "Delete Player",
                layout_data(&state, "team", None),
                rsx! { DeletePlayerPage { player } },
            ),
            Err(err) => render_error(&state, &err, "Failed to load player."),
        };
    }

    match state
        .app_bus
        .execute(DeletePlayer { player_id }, DeletePlayerCommandHandler::new())
        .await
    {
        Ok(()) => redirect_to_team(NoticeCode::PlayerDeleted),
        Err(err) => render_error(&state, &err, "Failed to delete player. Please try again."),
    }
}

fn redirect_to_team(code: NoticeCode) -> Response {
    Redirect::to(&format!("/team?notice={}", code.as_str())).into_response()
}

async fn render_team_form_error(
    state: &AppState,
    values: PlayerFormValues,
    err: &ApplicationError,
) -> Response {
    let (notice, form_error) = match err {
        ApplicationError::Validation(_) => (None, Some(error_message(err, ADD_PLAYER_FAILED))),
        _ => (Some(Notice::error(error_message(err, ADD_PLAYER_FAILED))), None),
    };
    render_team(state, String::new(), error_status(err), notice, values, form_error).await
}

async fn render_team(
    state: &AppState,
    query: String,
    status: StatusCode,
    notice: Option<Notice>,
    form_values: PlayerFormValues,
    form_error: Option<String>,
) -> Response {
    let (groups, status, notice) = match state.app_bus.query(ListPlayers, ListPlayersHandler::new()).await {
        Ok(players) => (roster_view(&players, &query), status, notice),
        Err(err) => (
            Vec::new(),
            error_status(&err),
            Some(Notice::error(error_message(&err, "Failed to load players."))),
        ),
    };

    render_page(
        status,
        "Team",
        layout_data(state, "team", notice),
        rsx! { TeamPage { groups, query, form_values, form_error } },
    )
}

fn render_edit(
    state: &AppState,
    status: StatusCode,
    player_id: Uuid,
    values: PlayerFormValues,
    error: Option<String>,
) -> Response {
    render_page(
        status,
        "Edit Player",
        layout_data(state, "team", None),
        rsx! { EditPlayerPage { player_id, values, error } },
    )
}

fn render_error(state: &AppState, err: &ApplicationError, fallback: &str) -> Response {
    let notice = Notice::error(error_message(err, fallback));
    render_page(
        error_status(err),
        "Team",
        layout_data(state, "team", Some(notice)),
        rsx! {
            div { class: "container mx-auto px-4 py-12",
                a { href: "/team", class: "text-blue-700 hover:underline", "Back to team" }
            }
        },
    )
}
