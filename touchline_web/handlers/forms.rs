use serde::Deserialize;
use uuid::Uuid;

use touchline_types::{
    errors::ValidationError,
    player::{MAX_JERSEY_NUMBER, PlayerDraft, PlayerPatch, Role},
    stats::{StatDirection, StatField},
};

use crate::components::PlayerFormValues;

/// Player form as posted by the browser. Every field is text; parsing
/// into domain values happens here so errors can be shown inline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerFormInput {
    pub name: String,
    pub position: String,
    pub role: String,
    pub gender: String,
    pub jersey_number: String,
    pub image_url: String,
}

impl PlayerFormInput {
    pub fn to_draft(&self) -> Result<PlayerDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        Ok(PlayerDraft {
            name: name.to_string(),
            position: self.position.parse()?,
            role: self.parse_role()?,
            gender: self.gender.parse()?,
            jersey_number: parse_jersey_number(&self.jersey_number)?,
            image_url: non_blank(&self.image_url),
        })
    }

    /// The edit form always submits every field, so the patch sets all of
    /// them. A blank image clears the stored one.
    pub fn to_patch(&self) -> Result<PlayerPatch, ValidationError> {
        Ok(PlayerPatch {
            name: Some(self.name.clone()),
            position: Some(self.position.parse()?),
            role: Some(self.parse_role()?),
            gender: Some(self.gender.parse()?),
            jersey_number: Some(parse_jersey_number(&self.jersey_number)?),
            image_url: Some(Some(self.image_url.trim().to_string())),
        })
    }

    fn parse_role(&self) -> Result<Role, ValidationError> {
        if self.role.trim().is_empty() {
            Ok(Role::default())
        } else {
            self.role.parse()
        }
    }
}

impl From<&PlayerFormInput> for PlayerFormValues {
    fn from(input: &PlayerFormInput) -> Self {
        Self {
            name: input.name.clone(),
            position: input.position.clone(),
            role: input.role.clone(),
            gender: input.gender.clone(),
            jersey_number: input.jersey_number.clone(),
            image_url: input.image_url.clone(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_jersey_number(raw: &str) -> Result<Option<u32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let number: i64 = raw.parse().map_err(|_| ValidationError::UnknownValue {
        field: "jersey_number",
        value: raw.to_string(),
    })?;
    match u32::try_from(number) {
        Ok(n) if n <= MAX_JERSEY_NUMBER => Ok(Some(n)),
        _ => Err(ValidationError::JerseyNumberOutOfRange {
            max: MAX_JERSEY_NUMBER,
        }),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeletePlayerForm {
    pub confirm: String,
}

impl DeletePlayerForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.trim().eq_ignore_ascii_case("yes")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustStatisticForm {
    pub player_id: Uuid,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub competition: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub direction: String,
}

impl AdjustStatisticForm {
    pub fn parse(&self) -> Result<(StatField, StatDirection), ValidationError> {
        Ok((self.field.parse()?, self.direction.parse()?))
    }
}
