
use touchline_app::{
    app::AppBus,
    command_handlers::{
        AdjustStatisticCommandHandler, CreatePlayerCommandHandler, DeletePlayerCommandHandler,
    },
    cqrs::{
        commands::{AdjustStatistic, CreatePlayer, DeletePlayer},
        queries::ListPlayersWithStats,
    },
    queries_handlers::ListPlayersWithStatsHandler,
};
use touchline_types::{
    errors::{ApplicationError, InvariantError},
    player::{Gender, Player, PlayerDraft, Position, Role},
    stats::{CompetitionFilter, StatAdjustment, StatDirection, StatField},
};

use crate::test_utils::tests::{setup_app, setup_committing_app};

async fn create_player(app: &AppBus, name: &str) -> Result<Player, ApplicationError> {
    let draft = PlayerDraft {
        name: name.to_string(),
        position: Position::Forward,
        role: Role::Member,
        gender: Gender::Male,
        jersey_number: None,
        image_url: None,
    };
    app.execute(CreatePlayer::new(draft), CreatePlayerCommandHandler::new())
        .await
}

async fn adjust(
    app: &AppBus,
    player: &Player,
    competition: &str,
    field: StatField,
    direction: StatDirection,
) -> Result<StatAdjustment, ApplicationError> {
    let cmd = AdjustStatistic {
        player_id: player.id,
        season: "2024-25".to_string(),
        competition: competition.to_string(),
        field,
        direction,
    };
    app.execute(cmd, AdjustStatisticCommandHandler::new()).await
}

async fn stats_for(
    app: &AppBus,
    player: &Player,
    competition: CompetitionFilter,
) -> Result<(u32, u32), ApplicationError> {
    let entries = app
        .query(
            ListPlayersWithStats {
                season: "2024-25".to_string(),
                competition,
            },
            ListPlayersWithStatsHandler::new(),
        )
        .await?;
    let entry = entries
        .into_iter()
        .find(|e| e.player.id == player.id)
        .expect("player should be listed");
    Ok((entry.appearances, entry.goals))
}

#[tokio::test]
async fn test_two_appearances_in_league() -> Result<(), ApplicationError> {
    let (app, _, _) = setup_app().await?;
    let asha = create_player(&app, "Asha Otieno").await?;

    let first = adjust(&app, &asha, "league", StatField::Appearances, StatDirection::Increment).await?;
    assert!(matches!(first, StatAdjustment::Created(_)));
    let second = adjust(&app, &asha, "league", StatField::Appearances, StatDirection::Increment).await?;
    assert!(matches!(second, StatAdjustment::Updated(ref row) if row.appearances == 2));

    let league = CompetitionFilter::Only("league".to_string());
    assert_eq!(stats_for(&app, &asha, league).await?, (2, 0));

    Ok(())
}

#[tokio::test]
async fn test_player_without_rows_reports_zero() -> Result<(), ApplicationError> {
    let (app, _, _) = setup_app().await?;
    let player = create_player(&app, "Mike Johnson").await?;

    assert_eq!(stats_for(&app, &player, CompetitionFilter::All).await?, (0, 0));
    Ok(())
}

#[tokio::test]
async fn test_repeated_increments_keep_one_row() -> Result<(), ApplicationError> {
    let (app, uow_provider, _) = setup_app().await?;
    let player = create_player(&app, "John Smith").await?;

    for _ in 0..4 {
        adjust(&app, &player, "cup", StatField::Goals, StatDirection::Increment).await?;
    }

    let uow = uow_provider.begin().await?;
    let rows = uow
        .stats()
        .list_by_season("2024-25", &CompetitionFilter::Only("cup".to_string()))
        .await?;
    let rows: Vec<_> = rows.into_iter().filter(|r| r.player_id == player.id).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].goals, 4);
    assert_eq!(rows[0].appearances, 0);

    Ok(())
}

#[tokio::test]
async fn test_decrement_at_zero_is_rejected() -> Result<(), ApplicationError> {
    let (app, _, _) = setup_app().await?;
    let player = create_player(&app, "David Wilson").await?;

    adjust(&app, &player, "league", StatField::Appearances, StatDirection::Increment).await?;
    let result = adjust(&app, &player, "league", StatField::Goals, StatDirection::Decrement).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Invariant(InvariantError::CounterBelowZero { field: StatField::Goals, .. }))
    ));

    let league = CompetitionFilter::Only("league".to_string());
    assert_eq!(stats_for(&app, &player, league).await?, (1, 0));

    Ok(())
}

#[tokio::test]
async fn test_all_competitions_sums_rows() -> Result<(), ApplicationError> {
    let (app, _, _) = setup_app().await?;
    let player = create_player(&app, "Asha Otieno").await?;

    adjust(&app, &player, "league", StatField::Goals, StatDirection::Increment).await?;
    adjust(&app, &player, "cup", StatField::Goals, StatDirection::Increment).await?;
    adjust(&app, &player, "cup", StatField::Appearances, StatDirection::Increment).await?;

    assert_eq!(stats_for(&app, &player, CompetitionFilter::All).await?, (1, 2));
    Ok(())
}

#[tokio::test]
async fn test_delete_player_removes_statistics() -> Result<(), ApplicationError> {
    let (app, uow_provider, _) = setup_app().await?;
    let player = create_player(&app, "John Smith").await?;
    adjust(&app, &player, "league", StatField::Goals, StatDirection::Increment).await?;

    app.execute(
        DeletePlayer {
            player_id: player.id,
        },
        DeletePlayerCommandHandler::new(),
    )
    .await?;

    let uow = uow_provider.begin().await?;
    let rows = uow
        .stats()
        .list_by_season("2024-25", &CompetitionFilter::All)
        .await?;
    assert!(rows.iter().all(|r| r.player_id != player.id));

    Ok(())
}

#[tokio::test]
async fn test_concurrent_first_increments_are_both_counted() -> Result<(), ApplicationError> {
    let app = setup_committing_app().await?;
    let player = create_player(&app, "Concurrent Scorer").await?;

    let mut failures = Vec::new();
    for round in 0..10 {
        let competition = format!("friendly-{round}");
        let (a, b) = tokio::join!(
            adjust(&app, &player, &competition, StatField::Goals, StatDirection::Increment),
            adjust(&app, &player, &competition, StatField::Goals, StatDirection::Increment),
        );
        if let Err(e) = a.and(b) {
            failures.push(format!("round {round}: {e}"));
        }
    }

    let entries = app
        .query(
            ListPlayersWithStats {
                season: "2024-25".to_string(),
                competition: CompetitionFilter::All,
            },
            ListPlayersWithStatsHandler::new(),
        )
        .await;

    // Clean up before asserting: these transactions were committed.
    app.execute(
        DeletePlayer {
            player_id: player.id,
        },
        DeletePlayerCommandHandler::new(),
    )
    .await?;

    assert!(failures.is_empty(), "failed adjustments: {failures:?}");
    let entry = entries?
        .into_iter()
        .find(|e| e.player.id == player.id)
        .expect("player should be listed");
    assert_eq!(entry.goals, 20);

    Ok(())
}
