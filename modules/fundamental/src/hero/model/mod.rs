use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

use heroes_entity::hero;

/// A hero, with its own fields only.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroHead {
    /// The ID of the hero.
    pub id: i32,

    /// The civilian name.
    pub name: String,

    /// The name the hero is known by.
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        HeroHead {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }
}
