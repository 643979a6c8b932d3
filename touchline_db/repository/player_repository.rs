use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::PlayerRepository;
use touchline_types::{
    errors::{ApplicationError, DbError},
    player::Player,
};

use crate::{
    models::{self as db_models},
    repository::write_error,
};

const PLAYER_COLUMNS: &str =
    "id, name, position, role, gender, jersey_number, image_url, created_at";

/// Roster rows read and written through the unit of work's transaction.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn jersey_column(player: &Player) -> Result<Option<i32>, ApplicationError> {
    player
        .jersey_number
        .map(|n| {
            i32::try_from(n).map_err(|_| {
                ApplicationError::Db(DbError::InvalidColumnValue {
                    column: "jersey_number",
                    value: n as i64,
                })
            })
        })
        .transpose()
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY name ASC, created_at ASC"
        ))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        rows.into_iter()
            .map(|row| Player::try_from(row).map_err(ApplicationError::from))
            .collect()
    }

    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(row.try_into()?)
    }

    async fn insert(&self, player: &Player) -> Result<Player, ApplicationError> {
        let position: db_models::Position = player.position.into();
        let role: db_models::PlayerRole = player.role.into();
        let gender: db_models::Gender = player.gender.into();
        let jersey_number = jersey_column(player)?;
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&format!(
            r#"
            INSERT INTO players (id, name, position, role, gender, jersey_number, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player.id)
        .bind(&player.name)
        .bind(position)
        .bind(role)
        .bind(gender)
        .bind(jersey_number)
        .bind(&player.image_url)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| write_error("player", e))?;

        Ok(row.try_into()?)
    }

    async fn update(&self, player: &Player) -> Result<Player, ApplicationError> {
        let position: db_models::Position = player.position.into();
        let role: db_models::PlayerRole = player.role.into();
        let gender: db_models::Gender = player.gender.into();
        let jersey_number = jersey_column(player)?;
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&format!(
            r#"
            UPDATE players
            SET
                name = $2,
                position = $3,
                role = $4,
                gender = $5,
                jersey_number = $6,
                image_url = $7
            WHERE id = $1
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player.id)
        .bind(&player.name)
        .bind(position)
        .bind(role)
        .bind(gender)
        .bind(jersey_number)
        .bind(&player.image_url)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| write_error("player", e))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player.id)))?;

        Ok(row.try_into()?)
    }

    async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player_id)));
        }
        Ok(())
    }
}
