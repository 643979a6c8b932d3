mod forms;
mod helpers;
mod pages_handler;
mod statistics_handler;
mod team_handler;

#[cfg(test)]
mod tests;

pub use forms::{AdjustStatisticForm, DeletePlayerForm, PlayerFormInput};
pub use helpers::NoticeCode;
pub use pages_handler::{TabParams, facilities, fixtures, gallery, history, home, results, standings};
pub use statistics_handler::{StatisticsParams, adjust_statistic, statistics};
pub use team_handler::{
    TeamParams, create_player, delete_player, edit_player, edit_player_page, team,
};
