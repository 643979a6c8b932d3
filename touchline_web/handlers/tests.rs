use axum::{
    body::to_bytes,
    extract::{Form, Path, Query, State},
    http::{StatusCode, header::LOCATION},
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use touchline_app::{
    app::AppBus, config::Config, cqrs::queries::ListPlayers, queries_handlers::ListPlayersHandler,
    test_utils::tests::MockUnitOfWorkProvider,
};

use super::*;
use crate::{components::GalleryTab, http::AppState};

fn setup_state() -> AppState {
    let config = Arc::new(Config::default());
    let provider = Arc::new(MockUnitOfWorkProvider::new());
    let app_bus = Arc::new(AppBus::new(config.clone(), provider));
    AppState::new(app_bus, config)
}

async fn body_text(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(res: &Response) -> &str {
    res.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn player_form(name: &str, position: &str, role: &str) -> PlayerFormInput {
    PlayerFormInput {
        name: name.to_string(),
        position: position.to_string(),
        role: role.to_string(),
        gender: "Male".to_string(),
        jersey_number: "9".to_string(),
        image_url: String::new(),
    }
}

async fn add_player(state: &AppState, name: &str, role: &str) -> Uuid {
    let res = create_player(State(state.clone()), Form(player_form(name, "Forward", role))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    state
        .app_bus
        .query(ListPlayers, ListPlayersHandler::new())
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.name == name)
        .map(|p| p.id)
        .unwrap()
}

#[tokio::test]
async fn test_create_player_redirects_with_notice() {
    let state = setup_state();

    let res = create_player(
        State(state.clone()),
        Form(player_form("John Smith", "Forward", "Captain")),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/team?notice=player_added");

    let res = team(
        State(state.clone()),
        Query(TeamParams {
            q: String::new(),
            notice: Some(NoticeCode::PlayerAdded),
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Player added successfully"));
    assert!(body.contains("John Smith"));
    assert!(body.contains("Captain"));
}

#[tokio::test]
async fn test_create_player_with_missing_fields_keeps_values() {
    let state = setup_state();

    let res = create_player(
        State(state.clone()),
        Form(player_form("Asha Otieno", "", "Member")),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(res).await;
    assert!(body.contains("Please fill in all required fields"));
    assert!(body.contains("value=\"Asha Otieno\""));
}

#[tokio::test]
async fn test_team_search_filters_roster() {
    let state = setup_state();
    add_player(&state, "John Smith", "Member").await;
    add_player(&state, "Mike Johnson", "Coach").await;
    add_player(&state, "David Wilson", "Member").await;

    let res = team(State(state.clone()), Query(TeamParams {
            q: "jo".to_string(),
            notice: None,
        })).await;
    let body = body_text(res).await;

    assert!(body.contains("John Smith"));
    assert!(body.contains("Mike Johnson"));
    assert!(!body.contains("David Wilson"));
}

#[tokio::test]
async fn test_edit_unknown_player_is_not_found() {
    let state = setup_state();
    let res = edit_player_page(State(state), Path(Uuid::new_v4())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("Player not found."));
}

#[tokio::test]
async fn test_edit_player_with_blank_name_is_rejected() {
    let state = setup_state();
    let id = add_player(&state, "John Smith", "Member").await;

    let res = edit_player(
        State(state.clone()),
        Path(id),
        Form(player_form("  ", "Forward", "Member")),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = edit_player(
        State(state.clone()),
        Path(id),
        Form(player_form("Johnny Smith", "Defender", "Treasurer")),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/team?notice=player_updated");
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let state = setup_state();
    let id = add_player(&state, "John Smith", "Member").await;

    let res = delete_player(State(state.clone()), Path(id), Form(DeletePlayerForm::default())).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("Are you sure you want to delete John Smith?"));

    let confirmed = DeletePlayerForm {
        confirm: "yes".to_string(),
    };
    let res = delete_player(State(state.clone()), Path(id), Form(confirmed)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let players = state
        .app_bus
        .query(ListPlayers, ListPlayersHandler::new())
        .await
        .unwrap();
    assert!(players.is_empty());
}

#[tokio::test]
async fn test_adjust_statistic_redirects_to_selection() {
    let state = setup_state();
    let id = add_player(&state, "Asha Otieno", "Member").await;

    for _ in 0..2 {
        let res = adjust_statistic(
            State(state.clone()),
            Form(AdjustStatisticForm {
                player_id: id,
                season: "2024-25".to_string(),
                competition: "league".to_string(),
                field: "appearances".to_string(),
                direction: "increment".to_string(),
            }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/statistics?season=2024-25&competition=league");
    }

    let res = statistics(
        State(state.clone()),
        Query(StatisticsParams {
            season: Some("2024-25".to_string()),
            competition: Some("league".to_string()),
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Asha Otieno"));
    assert!(body.contains(">2<"));
}

#[tokio::test]
async fn test_adjust_statistic_below_zero_is_conflict() {
    let state = setup_state();
    let id = add_player(&state, "John Smith", "Member").await;

    let form = |direction: &str| AdjustStatisticForm {
        player_id: id,
        season: "2024-25".to_string(),
        competition: "cup".to_string(),
        field: "goals".to_string(),
        direction: direction.to_string(),
    };

    let res = adjust_statistic(State(state.clone()), Form(form("increment"))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let res = adjust_statistic(State(state.clone()), Form(form("decrement"))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = adjust_statistic(State(state.clone()), Form(form("decrement"))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(body_text(res).await.contains("below zero"));
}

#[tokio::test]
async fn test_adjust_statistic_with_all_competitions_is_rejected() {
    let state = setup_state();
    let id = add_player(&state, "John Smith", "Member").await;

    let res = adjust_statistic(
        State(state),
        Form(AdjustStatisticForm {
            player_id: id,
            season: "2024-25".to_string(),
            competition: "all".to_string(),
            field: "goals".to_string(),
            direction: "increment".to_string(),
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_static_pages_render() {
    let state = setup_state();

    let body = body_text(standings(State(state.clone())).await).await;
    assert!(body.contains("League Table"));
    assert!(body.contains("Royal FC"));

    let body = body_text(history(State(state.clone())).await).await;
    assert!(body.contains("Club Founded"));

    let body = body_text(facilities(State(state.clone())).await).await;
    assert!(body.contains("Youth Academy"));

    let res = results(State(state.clone()), Query(TabParams { tab: None })).await;
    let body = body_text(res).await;
    assert!(body.contains("Royal Athletic"));
    assert!(!body.contains("Visitors United"));

    let res = gallery(
        State(state.clone()),
        Query(TabParams {
            tab: Some(GalleryTab::Videos),
        }),
    )
    .await;
    let body = body_text(res).await;
    assert!(body.contains("Goal of the Month"));
    assert!(!body.contains("Training Session"));
}
