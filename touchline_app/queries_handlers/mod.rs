mod get_player_by_id;
mod list_players;
mod list_players_with_stats;

pub use get_player_by_id::GetPlayerByIdHandler;
pub use list_players::ListPlayersHandler;
pub use list_players_with_stats::ListPlayersWithStatsHandler;
