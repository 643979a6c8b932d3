use chrono::Utc;
use std::sync::Arc;

use touchline_types::{Result, player::Player};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreatePlayer},
    uow::UnitOfWork,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    async fn handle(
        &self,
        command: CreatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let draft = command.draft.validate()?;
        let player = draft.into_player(command.id, Utc::now());

        let saved = uow.players().insert(&player).await?;
        tracing::info!(player_id = %saved.id, name = %saved.name, "Player added to roster");

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use touchline_types::{
        Result,
        errors::{ApplicationError, ValidationError},
        player::{Gender, PlayerDraft, Position, Role},
    };

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork, uow::UnitOfWork};

    fn asha() -> PlayerDraft {
        PlayerDraft {
            name: "Asha Otieno".to_string(),
            position: Position::Midfielder,
            role: Role::Member,
            gender: Gender::Female,
            jersey_number: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_player_handler_success() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());
        let handler = CreatePlayerCommandHandler::new();

        let command = CreatePlayer::new(asha());
        let created = handler.handle(command.clone(), &mock_uow, &config).await?;

        assert_eq!(created.id, command.id);
        assert_eq!(created.name, "Asha Otieno");
        assert_eq!(created.position, Position::Midfielder);
        assert_eq!(created.role, Role::Member);
        assert_eq!(created.gender, Gender::Female);

        let players = mock_uow.players().list().await?;
        let matching: Vec<_> = players.iter().filter(|p| p.name == "Asha Otieno").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, command.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_player_handler_rejects_blank_name_before_insert() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());
        let handler = CreatePlayerCommandHandler::new();

        let mut draft = asha();
        draft.name = "  ".to_string();

        let result = handler
            .handle(CreatePlayer::new(draft), &mock_uow, &config)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(ValidationError::BlankName))
        ));
        assert!(mock_uow.players().list().await?.is_empty());

        Ok(())
    }
}
