use std::sync::Arc;

use touchline_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        // Fails with PlayerNotFound before anything is removed.
        uow.players().get_by_id(command.player_id).await?;

        let removed = uow.stats().delete_by_player(command.player_id).await?;
        uow.players().delete(command.player_id).await?;

        tracing::info!(
            player_id = %command.player_id,
            stat_rows = removed,
            "Player removed from roster"
        );
        Ok(())
    }
}
