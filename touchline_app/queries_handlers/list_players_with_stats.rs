use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

use touchline_types::{
    errors::ApplicationError,
    player::Player,
    stats::{PlayerStatistic, PlayerWithStats},
};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayersWithStats},
    uow::UnitOfWork,
};

pub struct ListPlayersWithStatsHandler {}

impl ListPlayersWithStatsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayersWithStats> for ListPlayersWithStatsHandler {
    async fn handle(
        &self,
        query: ListPlayersWithStats,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListPlayersWithStats as Query>::Output, ApplicationError> {
        let players = uow.players().list().await?;
        let rows = uow
            .stats()
            .list_by_season(&query.season, &query.competition)
            .await?;

        Ok(join_stats(players, &rows))
    }
}

/// Left join of players with their rows: every player exactly once, in
/// the given order. Rows of several competitions are summed.
pub(crate) fn join_stats(players: Vec<Player>, rows: &[PlayerStatistic]) -> Vec<PlayerWithStats> {
    let mut totals: HashMap<Uuid, (u32, u32)> = HashMap::new();
    for row in rows {
        let entry = totals.entry(row.player_id).or_default();
        entry.0 = entry.0.saturating_add(row.appearances);
        entry.1 = entry.1.saturating_add(row.goals);
    }

    players
        .into_iter()
        .map(|player| {
            let (appearances, goals) = totals.get(&player.id).copied().unwrap_or_default();
            PlayerWithStats {
                player,
                appearances,
                goals,
            }
        })
        .collect()
}
