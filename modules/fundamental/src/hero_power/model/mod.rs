use crate::validation::{self, Violations, MSG_ALL_FIELDS_REQUIRED};
use heroes_entity::{hero_power, strength::Strength};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

/// The association of a hero and a power, with its own fields only.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroPowerHead {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    /// How strong the hero is in this power.
    pub strength: Strength,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        HeroPowerHead {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
        }
    }
}

/// A request to give a hero a power, as received.
///
/// All fields are optional here, so that missing fields can be reported as such.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema, PartialEq, Eq)]
pub struct NewHeroPower {
    /// One of `Strong`, `Weak`, or `Average`.
    pub strength: Option<String>,
    pub hero_id: Option<i32>,
    pub power_id: Option<i32>,
}

/// A request to give a hero a power, after passing validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedHeroPower {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}

impl NewHeroPower {
    /// Check the request without looking at the database.
    ///
    /// An empty strength counts as missing.
    pub fn validate(&self) -> Result<ValidatedHeroPower, Violations> {
        let (Some(hero_id), Some(power_id), Some(strength)) = (
            self.hero_id,
            self.power_id,
            self.strength.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(Violations::new(MSG_ALL_FIELDS_REQUIRED));
        };

        Ok(ValidatedHeroPower {
            hero_id,
            power_id,
            strength: validation::strength(strength)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"hero_id": 1, "power_id": 2}))]
    #[case(json!({"strength": "Strong", "power_id": 2}))]
    #[case(json!({"strength": "Strong", "hero_id": 1}))]
    #[case(json!({"strength": "", "hero_id": 1, "power_id": 2}))]
    #[case(json!({"strength": null, "hero_id": 1, "power_id": 2}))]
    #[case(json!({"strength": "Mighty", "hero_id": null, "power_id": 2}))]
    fn missing_fields(#[case] request: Value) {
        let request: NewHeroPower = serde_json::from_value(request).unwrap();
        assert_eq!(
            request.validate(),
            Err(Violations::new(MSG_ALL_FIELDS_REQUIRED))
        );
    }

    #[test]
    fn invalid_strength() {
        let request = NewHeroPower {
            strength: Some("Mighty".into()),
            hero_id: Some(1),
            power_id: Some(2),
        };
        assert_eq!(
            request.validate(),
            Err(Violations::new(
                "strength must be one of: Strong, Weak, Average"
            ))
        );
    }

    #[test]
    fn zero_ids_are_present() {
        let request = NewHeroPower {
            strength: Some("Weak".into()),
            hero_id: Some(0),
            power_id: Some(0),
        };
        assert_eq!(
            request.validate(),
            Ok(ValidatedHeroPower {
                hero_id: 0,
                power_id: 0,
                strength: Strength::Weak,
            })
        );
    }
}
