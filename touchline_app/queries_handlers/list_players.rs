use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        _query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        uow.players().list().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use touchline_types::{Result, player::Role};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, player_fixture};

    #[tokio::test]
    async fn test_list_players_sorted_by_name() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        for name in ["Mike Johnson", "Asha Otieno", "John Smith"] {
            mock_uow
                .players()
                .insert(&player_fixture(name, Role::Member))
                .await?;
        }

        let players = ListPlayersHandler::new()
            .handle(ListPlayers, &mock_uow, &Arc::new(Config::default()))
            .await?;

        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Otieno", "John Smith", "Mike Johnson"]);
        Ok(())
    }
}
