use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Highest jersey number accepted by the roster forms.
pub const MAX_JERSEY_NUMBER: u32 = 999;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Generated avatar for players without an image, keyed by name.
pub fn default_avatar_url(name: &str) -> String {
    let seed: String = name.chars().filter(|c| *c != ' ').collect();
    format!("{AVATAR_BASE_URL}{seed}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Forward,
        Position::Midfielder,
        Position::Defender,
        Position::Goalkeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Captain,
    Coach,
    Treasurer,
    #[default]
    Member,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Captain, Role::Coach, Role::Treasurer, Role::Member];

    /// Order in which roster groups are displayed.
    pub const DISPLAY_ORDER: [Role; 4] = [Role::Coach, Role::Captain, Role::Treasurer, Role::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Captain => "Captain",
            Role::Coach => "Coach",
            Role::Treasurer => "Treasurer",
            Role::Member => "Member",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

macro_rules! impl_form_value {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::MissingField($field));
                }
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ValidationError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_form_value!(Position, "position");
impl_form_value!(Role, "role");
impl_form_value!(Gender, "gender");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub role: Role,
    pub gender: Gender,
    pub jersey_number: Option<u32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Image to display: the stored one, or the generated avatar.
    pub fn avatar_url(&self) -> String {
        match &self.image_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => default_avatar_url(&self.name),
        }
    }
}

/// Fields needed to add a player to the roster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerDraft {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub role: Role,
    pub gender: Gender,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PlayerDraft {
    /// Checks the draft and normalizes it: trims the name and fills in
    /// the generated avatar when no image is given.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.name = validate_name(&self.name)?;
        validate_jersey_number(self.jersey_number)?;
        self.image_url = Some(normalize_image_url(self.image_url.as_deref(), &self.name)?);
        Ok(self)
    }

    pub fn into_player(self, id: Uuid, created_at: DateTime<Utc>) -> Player {
        Player {
            id,
            name: self.name,
            position: self.position,
            role: self.role,
            gender: self.gender,
            jersey_number: self.jersey_number,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// Partial update of a player. A missing field is left untouched; for the
/// nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub jersey_number: Option<Option<u32>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub image_url: Option<Option<String>>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.role.is_none()
            && self.gender.is_none()
            && self.jersey_number.is_none()
            && self.image_url.is_none()
    }

    pub fn validate(mut self) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        if let Some(name) = &self.name {
            self.name = Some(validate_name(name)?);
        }
        if let Some(number) = self.jersey_number {
            validate_jersey_number(number)?;
        }
        if let Some(Some(url)) = &self.image_url {
            let url = url.trim();
            if url.is_empty() {
                self.image_url = Some(None);
            } else {
                check_image_url(url)?;
                self.image_url = Some(Some(url.to_string()));
            }
        }
        Ok(self)
    }

    /// Applies the patch. A cleared image falls back to the generated
    /// avatar of the resulting name.
    pub fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(position) = self.position {
            player.position = position;
        }
        if let Some(role) = self.role {
            player.role = role;
        }
        if let Some(gender) = self.gender {
            player.gender = gender;
        }
        if let Some(number) = self.jersey_number {
            player.jersey_number = number;
        }
        if let Some(url) = self.image_url {
            player.image_url = Some(url.unwrap_or_else(|| default_avatar_url(&player.name)));
        }
    }
}

fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(name.to_string())
}

fn validate_jersey_number(number: Option<u32>) -> Result<(), ValidationError> {
    match number {
        Some(n) if n > MAX_JERSEY_NUMBER => Err(ValidationError::JerseyNumberOutOfRange {
            max: MAX_JERSEY_NUMBER,
        }),
        _ => Ok(()),
    }
}

fn check_image_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidImageUrl)
    }
}

fn normalize_image_url(url: Option<&str>, name: &str) -> Result<String, ValidationError> {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => {
            check_image_url(url)?;
            Ok(url.to_string())
        }
        _ => Ok(default_avatar_url(name)),
    }
}
