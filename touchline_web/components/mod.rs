pub mod gallery;
pub mod layout;
pub mod matches;
pub mod player;

pub use gallery::{GalleryGrid, GalleryTab};
pub use layout::{LayoutData, Notice, NoticeKind, PageLayout, wrap_in_html};
pub use matches::{MatchCard, MatchTab, MatchesOverview};
pub use player::{PlayerCard, PlayerForm, PlayerFormValues};
