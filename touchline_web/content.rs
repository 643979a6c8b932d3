//! Static club content shown on the public pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub logo: &'static str,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub home: Team,
    pub away: Team,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub upcoming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    pub position: u32,
    pub team: &'static str,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryItem {
    pub id: &'static str,
    pub kind: GalleryKind,
    pub url: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facility {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedSection {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub background: &'static str,
    pub subtitle: &'static str,
    pub cta_text: &'static str,
    pub cta_link: &'static str,
    pub announcement: &'static str,
    pub announcement_date: &'static str,
}

const fn team(name: &'static str, logo: &'static str, score: Option<u32>) -> Team {
    Team { name, logo, score }
}

const LOCAL_FC_LOGO: &str = "https://api.dicebear.com/7.x/initials/svg?seed=LFC";

pub const HERO: Hero = Hero {
    background: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?auto=format&fit=crop&q=80",
    subtitle: "Experience the thrill of the beautiful game",
    cta_text: "Buy Tickets",
    cta_link: "#tickets",
    announcement: "Next Home Game vs. City Rivals",
    announcement_date: "Saturday, March 15th, 2024",
};

pub const UPCOMING_MATCHES: [Match; 2] = [
    Match {
        home: team("Local FC", LOCAL_FC_LOGO, None),
        away: team(
            "Visitors United",
            "https://api.dicebear.com/7.x/initials/svg?seed=VU",
            None,
        ),
        date: "2024-03-20",
        time: "20:00",
        venue: "Home Stadium",
        upcoming: true,
    },
    Match {
        home: team(
            "Away City",
            "https://api.dicebear.com/7.x/initials/svg?seed=AC",
            None,
        ),
        away: team("Local FC", LOCAL_FC_LOGO, None),
        date: "2024-03-27",
        time: "19:45",
        venue: "City Arena",
        upcoming: true,
    },
];

pub const RECENT_RESULTS: [Match; 2] = [
    Match {
        home: team("Local FC", LOCAL_FC_LOGO, Some(2)),
        away: team(
            "Royal Athletic",
            "https://api.dicebear.com/7.x/initials/svg?seed=RA",
            Some(1),
        ),
        date: "2024-03-13",
        time: "20:00",
        venue: "Home Stadium",
        upcoming: false,
    },
    Match {
        home: team(
            "United Sports",
            "https://api.dicebear.com/7.x/initials/svg?seed=US",
            Some(0),
        ),
        away: team("Local FC", LOCAL_FC_LOGO, Some(3)),
        date: "2024-03-06",
        time: "19:45",
        venue: "Sports Complex",
        upcoming: false,
    },
];

pub const STANDINGS: [Standing; 4] = [
    Standing { position: 1, team: "Local FC", played: 28, won: 20, drawn: 5, lost: 3, points: 65 },
    Standing { position: 2, team: "City United", played: 28, won: 18, drawn: 6, lost: 4, points: 60 },
    Standing { position: 3, team: "Athletic Club", played: 28, won: 17, drawn: 7, lost: 4, points: 58 },
    Standing { position: 4, team: "Royal FC", played: 28, won: 16, drawn: 6, lost: 6, points: 54 },
];

pub const GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        id: "1",
        kind: GalleryKind::Photo,
        url: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2",
        title: "Match Day Highlights",
        date: "2024-03-10",
    },
    GalleryItem {
        id: "2",
        kind: GalleryKind::Photo,
        url: "https://images.unsplash.com/photo-1522778119026-d647f0596c20",
        title: "Training Session",
        date: "2024-03-09",
    },
    GalleryItem {
        id: "3",
        kind: GalleryKind::Photo,
        url: "https://images.unsplash.com/photo-1517466787929-bc90951d0974",
        title: "Fan Celebration",
        date: "2024-03-08",
    },
    GalleryItem {
        id: "4",
        kind: GalleryKind::Video,
        url: "https://images.unsplash.com/photo-1574629810360-7efbbe195018",
        title: "Goal of the Month",
        date: "2024-03-07",
    },
];

pub const FACILITIES: [Facility; 3] = [
    Facility {
        name: "Main Stadium",
        description: "50,000-seat modern stadium with state-of-the-art facilities",
        image: "https://images.unsplash.com/photo-1577223625816-7546f13df25d",
    },
    Facility {
        name: "Training Complex",
        description: "Professional training grounds with multiple pitches",
        image: "https://images.unsplash.com/photo-1526232761682-d26e03ac148e",
    },
    Facility {
        name: "Youth Academy",
        description: "Dedicated facility for nurturing young talent",
        image: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d",
    },
];

pub const TIMELINE: [TimelineEvent; 4] = [
    TimelineEvent {
        year: "1900",
        title: "Club Founded",
        description: "The club was established by local football enthusiasts",
    },
    TimelineEvent {
        year: "1950",
        title: "First League Title",
        description: "Won the domestic league for the first time",
    },
    TimelineEvent {
        year: "1975",
        title: "Stadium Inauguration",
        description: "Moved to our current home stadium",
    },
    TimelineEvent {
        year: "2000",
        title: "European Success",
        description: "First European trophy won",
    },
];

pub const FEATURED_SECTIONS: [FeaturedSection; 4] = [
    FeaturedSection {
        title: "World-Class Facilities",
        description: "Explore our state-of-the-art training grounds and stadium facilities",
        image: "https://images.unsplash.com/photo-1571056642505-0f3eefad1b1a?w=800&auto=format&fit=crop",
        link: "/facilities",
    },
    FeaturedSection {
        title: "Club Shop",
        description: "Get the latest team merchandise and fan gear",
        image: "https://images.unsplash.com/photo-1519861531473-9200262188bf?w=800&auto=format&fit=crop",
        link: "/shop",
    },
    FeaturedSection {
        title: "Community Programs",
        description: "Join our youth programs and community events",
        image: "https://images.unsplash.com/photo-1526232761682-d26e03ac148e?w=800&auto=format&fit=crop",
        link: "/community",
    },
    FeaturedSection {
        title: "Match Tickets",
        description: "Secure your seats for upcoming matches",
        image: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?w=800&auto=format&fit=crop",
        link: "/tickets",
    },
];

/// Competitions offered by the statistics filter, `all` first.
pub const COMPETITIONS: [(&str, &str); 3] =
    [("all", "All Competitions"), ("league", "League"), ("cup", "Cup")];

pub fn gallery_items(kind: GalleryKind) -> Vec<GalleryItem> {
    GALLERY.into_iter().filter(|item| item.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_items_by_kind() {
        let videos = gallery_items(GalleryKind::Video);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Goal of the Month");
        assert_eq!(gallery_items(GalleryKind::Photo).len(), 3);
    }

    #[test]
    fn test_results_carry_scores_and_fixtures_do_not() {
        assert!(RECENT_RESULTS.iter().all(|m| !m.upcoming && m.home.score.is_some()));
        assert!(UPCOMING_MATCHES.iter().all(|m| m.upcoming && m.away.score.is_none()));
    }
}
