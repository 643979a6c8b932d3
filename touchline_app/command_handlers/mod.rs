mod adjust_statistic;
mod create_player;
mod delete_player;
mod update_player;

pub use adjust_statistic::AdjustStatisticCommandHandler;
pub use create_player::CreatePlayerCommandHandler;
pub use delete_player::DeletePlayerCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;
