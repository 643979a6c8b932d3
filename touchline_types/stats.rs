use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    errors::{InvariantError, ValidationError},
    player::Player,
};

/// Competition value that disables the competition filter.
pub const ALL_COMPETITIONS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatField {
    Appearances,
    Goals,
}

impl StatField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Appearances => "appearances",
            StatField::Goals => "goals",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "appearances" => Ok(StatField::Appearances),
            "goals" => Ok(StatField::Goals),
            "" => Err(ValidationError::MissingField("field")),
            other => Err(ValidationError::UnknownValue {
                field: "field",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatDirection {
    Increment,
    Decrement,
}

impl FromStr for StatDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "increment" => Ok(StatDirection::Increment),
            "decrement" => Ok(StatDirection::Decrement),
            "" => Err(ValidationError::MissingField("direction")),
            other => Err(ValidationError::UnknownValue {
                field: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Competition selection for statistics listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompetitionFilter {
    All,
    Only(String),
}

impl CompetitionFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_COMPETITIONS) {
            CompetitionFilter::All
        } else {
            CompetitionFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CompetitionFilter::All => ALL_COMPETITIONS,
            CompetitionFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, competition: &str) -> bool {
        match self {
            CompetitionFilter::All => true,
            CompetitionFilter::Only(name) => name == competition,
        }
    }
}

/// One counters row, unique per (player, season, competition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistic {
    pub id: Uuid,
    pub player_id: Uuid,
    pub season: String,
    pub competition: String,
    pub appearances: u32,
    pub goals: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerStatistic {
    /// New row with the given field set to 1 and the other one at 0.
    pub fn first_for(player_id: Uuid, season: &str, competition: &str, field: StatField) -> Self {
        let now = Utc::now();
        let mut stat = Self {
            id: Uuid::new_v4(),
            player_id,
            season: season.to_string(),
            competition: competition.to_string(),
            appearances: 0,
            goals: 0,
            created_at: now,
            updated_at: now,
        };
        *stat.counter_mut(field) = 1;
        stat
    }

    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Appearances => self.appearances,
            StatField::Goals => self.goals,
        }
    }

    fn counter_mut(&mut self, field: StatField) -> &mut u32 {
        match field {
            StatField::Appearances => &mut self.appearances,
            StatField::Goals => &mut self.goals,
        }
    }

    /// Moves a counter by one. Fails without touching the row when a
    /// decrement would go below zero.
    pub fn adjust(
        &mut self,
        field: StatField,
        direction: StatDirection,
    ) -> Result<(), InvariantError> {
        let player_id = self.player_id;
        let counter = self.counter_mut(field);
        match direction {
            StatDirection::Increment => *counter = counter.saturating_add(1),
            StatDirection::Decrement => {
                if *counter == 0 {
                    return Err(InvariantError::CounterBelowZero { player_id, field });
                }
                *counter -= 1;
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Result of a statistic adjustment.
#[derive(Debug, Clone, PartialEq)]
pub enum StatAdjustment {
    Created(PlayerStatistic),
    Updated(PlayerStatistic),
    /// Decrement on a row that doesn't exist.
    Unchanged,
}

/// A roster entry joined with its counters for one season selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWithStats {
    pub player: Player,
    pub appearances: u32,
    pub goals: u32,
}

impl PlayerWithStats {
    pub fn goals_per_game(&self) -> f64 {
        if self.appearances == 0 {
            0.0
        } else {
            self.goals as f64 / self.appearances as f64
        }
    }
}
