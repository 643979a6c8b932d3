use uuid::Uuid;

use touchline_types::{
    player::Player,
    stats::{CompetitionFilter, PlayerWithStats},
};

use crate::cqrs::Query;

/// Every player, ordered by name.
pub struct ListPlayers;

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// Fetch a single player by id.
pub struct GetPlayerById {
    pub player_id: Uuid,
}

impl Query for GetPlayerById {
    type Output = Player;
}

/// Every player joined with the counters of a season and competition.
pub struct ListPlayersWithStats {
    pub season: String,
    pub competition: CompetitionFilter,
}

impl Query for ListPlayersWithStats {
    type Output = Vec<PlayerWithStats>;
}
