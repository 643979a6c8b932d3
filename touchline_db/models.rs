use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(sqlx::Type, Debug, Clone, Copy, Serialize, Deserialize)]
#[sqlx(type_name = "player_position", rename_all = "PascalCase")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

#[derive(sqlx::Type, Debug, Clone, Copy, Serialize, Deserialize)]
#[sqlx(type_name = "player_role", rename_all = "PascalCase")]
pub enum PlayerRole {
    Captain,
    Coach,
    Treasurer,
    Member,
}

#[derive(sqlx::Type, Debug, Clone, Copy, Serialize, Deserialize)]
#[sqlx(type_name = "player_gender", rename_all = "PascalCase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub role: Option<PlayerRole>,
    pub gender: Option<Gender>,
    pub jersey_number: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct PlayerStat {
    pub id: Uuid,
    pub player_id: Uuid,
    pub season: String,
    pub competition: String,
    pub appearances: i32,
    pub goals: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
