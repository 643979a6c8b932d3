use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::PlayerStatRepository;
use touchline_types::{
    errors::{ApplicationError, DbError},
    stats::{CompetitionFilter, PlayerStatistic},
};

use crate::{
    mapping::from_counter,
    models::{self as db_models},
    repository::write_error,
};

const STAT_COLUMNS: &str =
    "id, player_id, season, competition, appearances, goals, created_at, updated_at";

/// Statistic rows read and written through the unit of work's transaction.
#[derive(Clone)]
pub struct PostgresPlayerStatRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerStatRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn into_statistics(
    rows: Vec<db_models::PlayerStat>,
) -> Result<Vec<PlayerStatistic>, ApplicationError> {
    rows.into_iter()
        .map(|row| PlayerStatistic::try_from(row).map_err(ApplicationError::from))
        .collect()
}

#[async_trait::async_trait]
impl<'a> PlayerStatRepository for PostgresPlayerStatRepository<'a> {
    async fn list_by_season(
        &self,
        season: &str,
        competition: &CompetitionFilter,
    ) -> Result<Vec<PlayerStatistic>, ApplicationError> {
        let competition = match competition {
            CompetitionFilter::All => None,
            CompetitionFilter::Only(name) => Some(name.as_str()),
        };
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::PlayerStat>(&format!(
            r#"
            SELECT {STAT_COLUMNS}
            FROM player_stats
            WHERE season = $1 AND ($2::text IS NULL OR competition = $2)
            ORDER BY player_id, competition
            "#
        ))
        .bind(season)
        .bind(competition)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        into_statistics(rows)
    }

    async fn find_for_update(
        &self,
        player_id: Uuid,
        season: &str,
        competition: &str,
    ) -> Result<Option<PlayerStatistic>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::PlayerStat>(&format!(
            r#"
            SELECT {STAT_COLUMNS}
            FROM player_stats
            WHERE player_id = $1 AND season = $2 AND competition = $3
            FOR UPDATE
            "#
        ))
        .bind(player_id)
        .bind(season)
        .bind(competition)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(PlayerStatistic::try_from).transpose()?)
    }

    async fn insert_if_absent(
        &self,
        stat: &PlayerStatistic,
    ) -> Result<Option<PlayerStatistic>, ApplicationError> {
        let appearances = from_counter("appearances", stat.appearances)?;
        let goals = from_counter("goals", stat.goals)?;
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::PlayerStat>(&format!(
            r#"
            INSERT INTO player_stats (
                id, player_id, season, competition, appearances, goals, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (player_id, season, competition) DO NOTHING
            RETURNING {STAT_COLUMNS}
            "#
        ))
        .bind(stat.id)
        .bind(stat.player_id)
        .bind(&stat.season)
        .bind(&stat.competition)
        .bind(appearances)
        .bind(goals)
        .bind(stat.created_at)
        .bind(stat.updated_at)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| write_error("player statistic", e))?;

        Ok(row.map(PlayerStatistic::try_from).transpose()?)
    }

    async fn update(&self, stat: &PlayerStatistic) -> Result<PlayerStatistic, ApplicationError> {
        let appearances = from_counter("appearances", stat.appearances)?;
        let goals = from_counter("goals", stat.goals)?;
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::PlayerStat>(&format!(
            r#"
            UPDATE player_stats
            SET appearances = $2, goals = $3, updated_at = $4
            WHERE id = $1
            RETURNING {STAT_COLUMNS}
            "#
        ))
        .bind(stat.id)
        .bind(appearances)
        .bind(goals)
        .bind(stat.updated_at)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerStatNotFound(stat.id)))?;

        Ok(row.try_into()?)
    }

    async fn delete_by_player(&self, player_id: Uuid) -> Result<u64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query("DELETE FROM player_stats WHERE player_id = $1")
            .bind(player_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected())
    }
}
