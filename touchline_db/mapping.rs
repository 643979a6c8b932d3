use touchline_types::{
    errors::DbError,
    player::{Gender, Player, Position, Role},
    stats::PlayerStatistic,
};

use crate::models::{self as db_models};

impl From<db_models::Position> for Position {
    fn from(position: db_models::Position) -> Self {
        match position {
            db_models::Position::Forward => Position::Forward,
            db_models::Position::Midfielder => Position::Midfielder,
            db_models::Position::Defender => Position::Defender,
            db_models::Position::Goalkeeper => Position::Goalkeeper,
        }
    }
}

impl From<Position> for db_models::Position {
    fn from(position: Position) -> Self {
        match position {
            Position::Forward => db_models::Position::Forward,
            Position::Midfielder => db_models::Position::Midfielder,
            Position::Defender => db_models::Position::Defender,
            Position::Goalkeeper => db_models::Position::Goalkeeper,
        }
    }
}

impl From<db_models::PlayerRole> for Role {
    fn from(role: db_models::PlayerRole) -> Self {
        match role {
            db_models::PlayerRole::Captain => Role::Captain,
            db_models::PlayerRole::Coach => Role::Coach,
            db_models::PlayerRole::Treasurer => Role::Treasurer,
            db_models::PlayerRole::Member => Role::Member,
        }
    }
}

impl From<Role> for db_models::PlayerRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Captain => db_models::PlayerRole::Captain,
            Role::Coach => db_models::PlayerRole::Coach,
            Role::Treasurer => db_models::PlayerRole::Treasurer,
            Role::Member => db_models::PlayerRole::Member,
        }
    }
}

impl From<db_models::Gender> for Gender {
    fn from(gender: db_models::Gender) -> Self {
        match gender {
            db_models::Gender::Male => Gender::Male,
            db_models::Gender::Female => Gender::Female,
        }
    }
}

impl From<Gender> for db_models::Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => db_models::Gender::Male,
            Gender::Female => db_models::Gender::Female,
        }
    }
}

impl TryFrom<db_models::Player> for Player {
    type Error = DbError;

    fn try_from(player: db_models::Player) -> Result<Self, Self::Error> {
        let jersey_number = player
            .jersey_number
            .map(|n| {
                u32::try_from(n).map_err(|_| DbError::InvalidColumnValue {
                    column: "jersey_number",
                    value: n as i64,
                })
            })
            .transpose()?;

        Ok(Player {
            id: player.id,
            name: player.name,
            position: player.position.into(),
            // Legacy rows may have no role or gender.
            role: player.role.map(Into::into).unwrap_or_default(),
            gender: player.gender.map(Into::into).unwrap_or_default(),
            jersey_number,
            image_url: player.image_url,
            created_at: player.created_at,
        })
    }
}

impl TryFrom<db_models::PlayerStat> for PlayerStatistic {
    type Error = DbError;

    fn try_from(stat: db_models::PlayerStat) -> Result<Self, Self::Error> {
        Ok(PlayerStatistic {
            id: stat.id,
            player_id: stat.player_id,
            season: stat.season,
            competition: stat.competition,
            appearances: to_counter("appearances", stat.appearances)?,
            goals: to_counter("goals", stat.goals)?,
            created_at: stat.created_at,
            updated_at: stat.updated_at,
        })
    }
}

fn to_counter(column: &'static str, value: i32) -> Result<u32, DbError> {
    u32::try_from(value).map_err(|_| DbError::InvalidColumnValue {
        column,
        value: value as i64,
    })
}

/// Counter value as stored in an INTEGER column.
pub(crate) fn from_counter(column: &'static str, value: u32) -> Result<i32, DbError> {
    i32::try_from(value).map_err(|_| DbError::InvalidColumnValue {
        column,
        value: value as i64,
    })
}
