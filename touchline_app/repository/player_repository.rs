use uuid::Uuid;

use touchline_types::errors::ApplicationError;
use touchline_types::player::Player;

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns every player ordered by name.
    async fn list(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Looks a player up, failing with `PlayerNotFound` when absent.
    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError>;

    /// Inserts a new player and returns it as stored. The store assigns
    /// `created_at`; the value carried by `player` is not written.
    async fn insert(&self, player: &Player) -> Result<Player, ApplicationError>;

    /// Overwrites an existing player and returns it as stored.
    async fn update(&self, player: &Player) -> Result<Player, ApplicationError>;

    /// Removes a player.
    async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError>;
}
