use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

use heroes_entity::power;

/// A power, with its own fields only.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct PowerHead {
    /// The ID of the power.
    pub id: i32,

    /// The name of the power.
    pub name: String,

    /// What the power does, at least 20 characters.
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        PowerHead {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }
}

/// Changes to a power. Only the description can be changed, and it must be present.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema, PartialEq, Eq)]
pub struct PowerPatch {
    /// A value which is not a string counts as missing.
    #[serde(default, deserialize_with = "text_or_none")]
    pub description: Option<String>,
}

/// Accept any JSON value, keeping only strings, so that a wrong type is reported once the power
/// is known to exist.
fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}
