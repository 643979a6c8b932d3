mod edit_player;
mod facilities;
mod gallery;
mod history;
mod home;
mod matches;
mod standings;
mod statistics;
mod team;

pub use edit_player::{DeletePlayerPage, EditPlayerPage};
pub use facilities::FacilitiesPage;
pub use gallery::GalleryPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use matches::MatchesPage;
pub use standings::StandingsPage;
pub use statistics::{StatisticsPage, StatisticsSelection};
pub use team::TeamPage;
