mod player_repository;
mod player_stat_repository;

pub use player_repository::PlayerRepository;
pub use player_stat_repository::PlayerStatRepository;
