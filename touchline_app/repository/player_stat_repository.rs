use uuid::Uuid;

use touchline_types::errors::ApplicationError;
use touchline_types::stats::{CompetitionFilter, PlayerStatistic};

#[async_trait::async_trait]
pub trait PlayerStatRepository: Send + Sync {
    /// Returns the rows of a season, optionally restricted to one competition.
    async fn list_by_season(
        &self,
        season: &str,
        competition: &CompetitionFilter,
    ) -> Result<Vec<PlayerStatistic>, ApplicationError>;

    /// Finds the unique row of a (player, season, competition) triple and
    /// locks it until the transaction ends.
    async fn find_for_update(
        &self,
        player_id: Uuid,
        season: &str,
        competition: &str,
    ) -> Result<Option<PlayerStatistic>, ApplicationError>;

    /// Inserts the row unless its (player, season, competition) triple is
    /// already taken. Returns `None` when the triple is taken, after waiting
    /// for any concurrent insert of the same triple to finish.
    async fn insert_if_absent(
        &self,
        stat: &PlayerStatistic,
    ) -> Result<Option<PlayerStatistic>, ApplicationError>;

    async fn update(&self, stat: &PlayerStatistic) -> Result<PlayerStatistic, ApplicationError>;

    /// Removes every row of a player, returning how many were removed.
    async fn delete_by_player(&self, player_id: Uuid) -> Result<u64, ApplicationError>;
}
