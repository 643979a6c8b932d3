//! Derived views of the roster and of the statistics listing. Everything
//! here works on copies and never touches the store.

use touchline_types::{
    player::{Player, Role},
    stats::PlayerWithStats,
};

/// Players of one role, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleGroup {
    pub role: Role,
    pub players: Vec<Player>,
}

/// Case-insensitive substring match on the player name. A blank query
/// matches everybody.
pub fn filter_by_name(players: &[Player], query: &str) -> Vec<Player> {
    let needle = query.trim().to_lowercase();
    players
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Groups players by role in the fixed order Coach, Captain, Treasurer,
/// Member, names ascending within each group. Empty groups are left out.
pub fn group_by_role(players: &[Player]) -> Vec<RoleGroup> {
    Role::DISPLAY_ORDER
        .iter()
        .filter_map(|role| {
            let mut members: Vec<Player> = players
                .iter()
                .filter(|p| p.role == *role)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            Some(RoleGroup {
                role: *role,
                players: members,
            })
        })
        .collect()
}

/// Search then group, as the roster page shows it.
pub fn roster_view(players: &[Player], query: &str) -> Vec<RoleGroup> {
    group_by_role(&filter_by_name(players, query))
}

/// Goals descending. The sort is stable, so ties keep the listing order.
pub fn top_scorers(entries: &[PlayerWithStats]) -> Vec<PlayerWithStats> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.goals.cmp(&a.goals));
    sorted
}

/// Appearances descending, ties in listing order.
pub fn most_appearances(entries: &[PlayerWithStats]) -> Vec<PlayerWithStats> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.appearances.cmp(&a.appearances));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::player_fixture;

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let players = vec![
            player_fixture("John Smith", Role::Member),
            player_fixture("Mike Johnson", Role::Member),
            player_fixture("David Wilson", Role::Member),
        ];

        let found = filter_by_name(&players, "jo");
        assert_eq!(names(&found), vec!["John Smith", "Mike Johnson"]);

        let found = filter_by_name(&players, "  ");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_groups_follow_display_order_and_skip_empty_ones() {
        let players = vec![
            player_fixture("Zoe Member", Role::Member),
            player_fixture("Carl Captain", Role::Captain),
            player_fixture("Anna Member", Role::Member),
            player_fixture("Cora Coach", Role::Coach),
        ];

        let groups = group_by_role(&players);
        let roles: Vec<Role> = groups.iter().map(|g| g.role).collect();
        assert_eq!(roles, vec![Role::Coach, Role::Captain, Role::Member]);
        assert_eq!(names(&groups[2].players), vec!["Anna Member", "Zoe Member"]);
    }

    #[test]
    fn test_default_role_lands_in_member_group() {
        let mut legacy = player_fixture("Old Timer", Role::Captain);
        legacy.role = Role::default();

        let groups = group_by_role(&[legacy]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].role, Role::Member);
    }

    #[test]
    fn test_roster_view_filters_before_grouping() {
        let players = vec![
            player_fixture("John Smith", Role::Coach),
            player_fixture("Mike Johnson", Role::Member),
            player_fixture("David Wilson", Role::Treasurer),
        ];

        let groups = roster_view(&players, "JOHN");
        let roles: Vec<Role> = groups.iter().map(|g| g.role).collect();
        assert_eq!(roles, vec![Role::Coach, Role::Member]);
    }

    #[test]
    fn test_leaderboards_sort_copies() {
        let entries = vec![
            PlayerWithStats {
                player: player_fixture("Asha Otieno", Role::Member),
                appearances: 5,
                goals: 1,
            },
            PlayerWithStats {
                player: player_fixture("John Smith", Role::Member),
                appearances: 2,
                goals: 4,
            },
            PlayerWithStats {
                player: player_fixture("Mike Johnson", Role::Member),
                appearances: 5,
                goals: 0,
            },
        ];

        let scorers = top_scorers(&entries);
        assert_eq!(scorers[0].player.name, "John Smith");

        let apps = most_appearances(&entries);
        let order: Vec<&str> = apps.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(order, vec!["Asha Otieno", "Mike Johnson", "John Smith"]);

        assert_eq!(entries[0].player.name, "Asha Otieno");
    }
}
