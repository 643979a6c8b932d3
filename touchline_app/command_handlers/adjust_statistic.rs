use std::sync::Arc;

use touchline_types::{
    Result,
    errors::{DbError, ValidationError},
    stats::{ALL_COMPETITIONS, PlayerStatistic, StatAdjustment, StatDirection, StatField},
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AdjustStatistic},
    repository::PlayerStatRepository,
    uow::UnitOfWork,
};

/// Find-or-create-or-update of a statistic row. The lookup locks the row,
/// so the read and the write happen under the same transaction. A first
/// increment that loses the insert to a concurrent one adjusts the row the
/// other one created.
pub struct AdjustStatisticCommandHandler {}

impl Default for AdjustStatisticCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustStatisticCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AdjustStatistic> for AdjustStatisticCommandHandler {
    async fn handle(
        &self,
        command: AdjustStatistic,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<StatAdjustment> {
        let season = command.season.trim();
        let competition = command.competition.trim();
        if season.is_empty() {
            return Err(ValidationError::BlankSeason.into());
        }
        if competition.is_empty() || competition.eq_ignore_ascii_case(ALL_COMPETITIONS) {
            return Err(ValidationError::CompetitionRequired.into());
        }

        uow.players().get_by_id(command.player_id).await?;

        let stats = uow.stats();
        let existing = stats
            .find_for_update(command.player_id, season, competition)
            .await?;

        let outcome = match (existing, command.direction) {
            (Some(row), direction) => {
                StatAdjustment::Updated(apply(stats.as_ref(), row, command.field, direction).await?)
            }
            (None, StatDirection::Decrement) => StatAdjustment::Unchanged,
            (None, StatDirection::Increment) => {
                let row =
                    PlayerStatistic::first_for(command.player_id, season, competition, command.field);
                match stats.insert_if_absent(&row).await? {
                    Some(created) => StatAdjustment::Created(created),
                    None => {
                        // Another adjustment created the row after our lookup.
                        let row = stats
                            .find_for_update(command.player_id, season, competition)
                            .await?
                            .ok_or_else(|| {
                                DbError::Transaction(format!(
                                    "statistic row for player {} vanished during adjustment",
                                    command.player_id
                                ))
                            })?;
                        StatAdjustment::Updated(
                            apply(stats.as_ref(), row, command.field, command.direction).await?,
                        )
                    }
                }
            }
        };

        tracing::debug!(
            player_id = %command.player_id,
            season,
            competition,
            field = %command.field,
            ?outcome,
            "Statistic adjusted"
        );
        Ok(outcome)
    }
}

async fn apply(
    stats: &dyn PlayerStatRepository,
    mut row: PlayerStatistic,
    field: StatField,
    direction: StatDirection,
) -> Result<PlayerStatistic> {
    row.adjust(field, direction)?;
    stats.update(&row).await
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };
    use uuid::Uuid;

    use touchline_types::{
        Result,
        errors::{ApplicationError, DbError, InvariantError, ValidationError},
        player::Role,
        stats::{CompetitionFilter, StatAdjustment, StatDirection, StatField},
    };

    use super::*;
    use crate::{
        config::Config,
        repository::PlayerRepository,
        test_utils::tests::{
            MockPlayerRepository, MockPlayerStatRepository, MockUnitOfWork, player_fixture,
        },
        uow::UnitOfWork,
    };

    /// Stat store where a competing adjustment creates the row right after
    /// the first lookup.
    #[derive(Default)]
    struct LateRowStats {
        inner: MockPlayerStatRepository,
        looked_up: AtomicBool,
    }

    #[async_trait::async_trait]
    impl PlayerStatRepository for LateRowStats {
        async fn list_by_season(
            &self,
            season: &str,
            competition: &CompetitionFilter,
        ) -> Result<Vec<PlayerStatistic>> {
            self.inner.list_by_season(season, competition).await
        }

        async fn find_for_update(
            &self,
            player_id: Uuid,
            season: &str,
            competition: &str,
        ) -> Result<Option<PlayerStatistic>> {
            if !self.looked_up.swap(true, Ordering::SeqCst) {
                let competing =
                    PlayerStatistic::first_for(player_id, season, competition, StatField::Goals);
                self.inner.insert_if_absent(&competing).await?;
                return Ok(None);
            }
            self.inner.find_for_update(player_id, season, competition).await
        }

        async fn insert_if_absent(
            &self,
            stat: &PlayerStatistic,
        ) -> Result<Option<PlayerStatistic>> {
            self.inner.insert_if_absent(stat).await
        }

        async fn update(&self, stat: &PlayerStatistic) -> Result<PlayerStatistic> {
            self.inner.update(stat).await
        }

        async fn delete_by_player(&self, player_id: Uuid) -> Result<u64> {
            self.inner.delete_by_player(player_id).await
        }
    }

    #[derive(Default)]
    struct RacingUnitOfWork {
        players: Arc<MockPlayerRepository>,
        stats: Arc<LateRowStats>,
    }

    #[async_trait::async_trait]
    impl<'a> UnitOfWork<'a> for RacingUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        fn stats(&self) -> Arc<dyn PlayerStatRepository + 'a> {
            self.stats.clone()
        }

        async fn commit(self: Box<Self>) -> Result<()> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<()> {
            Ok(())
        }
    }

    fn adjust(
        player_id: Uuid,
        field: StatField,
        direction: StatDirection,
    ) -> AdjustStatistic {
        AdjustStatistic {
            player_id,
            season: "2024-25".to_string(),
            competition: "league".to_string(),
            field,
            direction,
        }
    }

    async fn setup() -> Result<(Box<dyn UnitOfWork<'static> + 'static>, Uuid)> {
        let mock_uow: Box<dyn UnitOfWork<'static> + 'static> = Box::new(MockUnitOfWork::new());
        let player = player_fixture("John Smith", Role::Member);
        mock_uow.players().insert(&player).await?;
        Ok((mock_uow, player.id))
    }

    #[tokio::test]
    async fn test_increment_creates_missing_row() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());

        let outcome = AdjustStatisticCommandHandler::new()
            .handle(
                adjust(player_id, StatField::Goals, StatDirection::Increment),
                &uow,
                &config,
            )
            .await?;

        let StatAdjustment::Created(row) = outcome else {
            panic!("expected a created row, got {outcome:?}");
        };
        assert_eq!(row.goals, 1);
        assert_eq!(row.appearances, 0);
        assert_eq!(row.season, "2024-25");
        assert_eq!(row.competition, "league");
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_increments_accumulate_on_one_row() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());
        let handler = AdjustStatisticCommandHandler::new();

        for _ in 0..5 {
            handler
                .handle(
                    adjust(player_id, StatField::Goals, StatDirection::Increment),
                    &uow,
                    &config,
                )
                .await?;
        }

        let rows = uow
            .stats()
            .list_by_season("2024-25", &CompetitionFilter::All)
            .await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].goals, 5);
        assert_eq!(rows[0].appearances, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_decrement_without_row_is_a_no_op() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());

        let outcome = AdjustStatisticCommandHandler::new()
            .handle(
                adjust(player_id, StatField::Goals, StatDirection::Decrement),
                &uow,
                &config,
            )
            .await?;

        assert_eq!(outcome, StatAdjustment::Unchanged);
        let rows = uow
            .stats()
            .list_by_season("2024-25", &CompetitionFilter::All)
            .await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_decrement_at_zero_is_rejected() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());
        let handler = AdjustStatisticCommandHandler::new();

        // Row exists with appearances = 1, goals = 0.
        handler
            .handle(
                adjust(player_id, StatField::Appearances, StatDirection::Increment),
                &uow,
                &config,
            )
            .await?;

        let result = handler
            .handle(
                adjust(player_id, StatField::Goals, StatDirection::Decrement),
                &uow,
                &config,
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Invariant(InvariantError::CounterBelowZero {
                field: StatField::Goals,
                ..
            }))
        ));

        let rows = uow
            .stats()
            .list_by_season("2024-25", &CompetitionFilter::All)
            .await?;
        assert_eq!(rows[0].goals, 0);
        assert_eq!(rows[0].appearances, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_decrement_updates_existing_row() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());
        let handler = AdjustStatisticCommandHandler::new();

        for _ in 0..2 {
            handler
                .handle(
                    adjust(player_id, StatField::Appearances, StatDirection::Increment),
                    &uow,
                    &config,
                )
                .await?;
        }
        let outcome = handler
            .handle(
                adjust(player_id, StatField::Appearances, StatDirection::Decrement),
                &uow,
                &config,
            )
            .await?;

        let StatAdjustment::Updated(row) = outcome else {
            panic!("expected an updated row, got {outcome:?}");
        };
        assert_eq!(row.appearances, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_all_competitions_sentinel_is_rejected() -> Result<()> {
        let (uow, player_id) = setup().await?;
        let config = Arc::new(Config::default());

        let mut command = adjust(player_id, StatField::Goals, StatDirection::Increment);
        command.competition = "all".to_string();

        let result = AdjustStatisticCommandHandler::new()
            .handle(command, &uow, &config)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(
                ValidationError::CompetitionRequired
            ))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_player_is_rejected() -> Result<()> {
        let (uow, _) = setup().await?;
        let config = Arc::new(Config::default());

        let result = AdjustStatisticCommandHandler::new()
            .handle(
                adjust(Uuid::new_v4(), StatField::Goals, StatDirection::Increment),
                &uow,
                &config,
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Db(DbError::PlayerNotFound(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_increment_after_concurrent_create_updates_that_row() -> Result<()> {
        let uow: Box<dyn UnitOfWork<'static> + 'static> = Box::new(RacingUnitOfWork::default());
        let player = player_fixture("Asha Otieno", Role::Member);
        uow.players().insert(&player).await?;
        let config = Arc::new(Config::default());

        let outcome = AdjustStatisticCommandHandler::new()
            .handle(
                adjust(player.id, StatField::Goals, StatDirection::Increment),
                &uow,
                &config,
            )
            .await?;

        let StatAdjustment::Updated(row) = outcome else {
            panic!("expected the competing row to be updated, got {outcome:?}");
        };
        assert_eq!(row.goals, 2);

        let rows = uow
            .stats()
            .list_by_season("2024-25", &CompetitionFilter::All)
            .await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].goals, 2);
        Ok(())
    }
}
