use std::sync::Arc;

use touchline_types::{Result, player::Player};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let patch = command.patch.validate()?;
        let repo = uow.players();

        let mut player = repo.get_by_id(command.player_id).await?;
        patch.apply(&mut player);

        repo.update(&player).await
    }
}
